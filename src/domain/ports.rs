use crate::domain::model::ActionEntry;
use crate::utils::error::Result;

/// Sink for the borrow/return audit trail.
pub trait ActionRecorder {
    fn record(&mut self, entry: &ActionEntry) -> Result<()>;
}
