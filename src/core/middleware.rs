//! The two steps every borrow/return goes through: the membership gate, then
//! action recording. The gate short-circuits, so a rejected caller is never
//! recorded.

use crate::domain::model::{Action, ActionEntry, Member};
use crate::domain::ports::ActionRecorder;
use crate::utils::error::{LibraryError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// What to do when the action log cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFailurePolicy {
    /// Emit a warning and hand the result back anyway.
    #[default]
    Warn,
    /// Surface the write failure to the caller.
    Fail,
}

impl FromStr for LogFailurePolicy {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            other => Err(LibraryError::InvalidConfigValueError {
                field: "on_log_failure".to_string(),
                value: other.to_string(),
                reason: "expected 'warn' or 'fail'".to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => f.write_str("warn"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

pub fn membership_required(member: &Member) -> Result<()> {
    if member.is_member {
        Ok(())
    } else {
        tracing::debug!("Membership check failed for member {}", member.id);
        Err(LibraryError::MembershipDenied {
            member: member.name.clone(),
        })
    }
}

/// Appends the outcome of `action` to the log and passes it through unchanged.
pub fn record_action<R: ActionRecorder + ?Sized>(
    recorder: &mut R,
    policy: LogFailurePolicy,
    action: Action,
    outcome: Result<String>,
) -> Result<String> {
    let message = match &outcome {
        Ok(message) => message.clone(),
        Err(err) => err.user_friendly_message(),
    };
    let entry = ActionEntry::new(action, message);
    tracing::info!("{}", entry);

    if let Err(err) = recorder.record(&entry) {
        match policy {
            LogFailurePolicy::Warn => {
                tracing::warn!("Action log write failed, continuing without it: {}", err);
            }
            LogFailurePolicy::Fail => return Err(err),
        }
    }

    outcome
}
