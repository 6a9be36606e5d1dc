use crate::domain::model::{ItemId, MemberId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Item {id} not found")]
    ItemNotFound { id: ItemId },

    #[error("Member {id} not found")]
    MemberNotFound { id: MemberId },

    #[error("Membership required: {member} is not an active member")]
    MembershipDenied { member: String },

    #[error("Item unavailable: {title}")]
    ItemUnavailable { title: String },

    #[error("{member} has not borrowed {title}")]
    NotBorrowed { member: String, title: String },

    #[error("Duplicate item id: {id}")]
    DuplicateItemId { id: ItemId },

    #[error("Duplicate member id: {id}")]
    DuplicateMemberId { id: MemberId },

    #[error("Unknown search field: {field}")]
    UnknownSearchField { field: String },

    #[error("Failed to write action log {}: {source}", .path.display())]
    ActionLogError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Membership,
    Search,
    ActionLog,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Expected outcome of a user request; the session continues.
    Low,
    Medium,
    High,
    /// The action log can no longer be trusted.
    Critical,
}

impl LibraryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ItemNotFound { .. }
            | Self::ItemUnavailable { .. }
            | Self::NotBorrowed { .. }
            | Self::DuplicateItemId { .. } => ErrorCategory::Catalog,
            Self::MemberNotFound { .. }
            | Self::MembershipDenied { .. }
            | Self::DuplicateMemberId { .. } => ErrorCategory::Membership,
            Self::UnknownSearchField { .. } => ErrorCategory::Search,
            Self::ActionLogError { .. } => ErrorCategory::ActionLog,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound { .. }
            | Self::MemberNotFound { .. }
            | Self::MembershipDenied { .. }
            | Self::ItemUnavailable { .. }
            | Self::NotBorrowed { .. }
            | Self::UnknownSearchField { .. } => ErrorSeverity::Low,
            Self::DuplicateItemId { .. }
            | Self::DuplicateMemberId { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::High,
            Self::ActionLogError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Whether the interactive session has to stop on this error.
    pub fn is_fatal(&self) -> bool {
        self.severity() >= ErrorSeverity::High
    }

    /// Message shown to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ItemNotFound { .. } => "Item not found.".to_string(),
            Self::MemberNotFound { .. } => "Member not found.".to_string(),
            Self::MembershipDenied { .. } => "Action denied. Membership required.".to_string(),
            Self::ItemUnavailable { title } => format!("{} is not available.", title),
            Self::NotBorrowed { member, title } => format!("{} did not borrow {}.", member, title),
            Self::UnknownSearchField { field } => {
                format!("Cannot search by '{}'. Use title or author.", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Catalog => "Use option 1 to list items and their IDs",
            ErrorCategory::Membership => "Check the member ID or renew the membership",
            ErrorCategory::Search => "Search by title or author",
            ErrorCategory::ActionLog => {
                "Check that the action log path is writable, or run with --on-log-failure warn"
            }
            ErrorCategory::Io => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
