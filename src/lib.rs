pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::action_log::{FileActionLog, InMemoryActionLog};
pub use crate::app::Shell;
pub use crate::config::LibraryConfig;
pub use crate::core::{catalog::Catalog, middleware::LogFailurePolicy, search::SearchCriteria};
pub use crate::domain::model::{Action, ActionEntry, Item, ItemId, ItemKind, Member, MemberId};
pub use crate::domain::ports::ActionRecorder;
pub use crate::utils::error::{LibraryError, Result};
