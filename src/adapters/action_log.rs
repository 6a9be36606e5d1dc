use crate::domain::model::ActionEntry;
use crate::domain::ports::ActionRecorder;
use crate::utils::error::{LibraryError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only text log. The file is opened for each entry and closed again
/// before `record` returns, whether or not the write succeeded.
#[derive(Debug, Clone)]
pub struct FileActionLog {
    path: PathBuf,
}

impl FileActionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl ActionRecorder for FileActionLog {
    fn record(&mut self, entry: &ActionEntry) -> Result<()> {
        self.append(&entry.to_string())
            .map_err(|source| LibraryError::ActionLogError {
                path: self.path.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryActionLog {
    entries: Vec<ActionEntry>,
}

impl InMemoryActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// Entries rendered exactly as `FileActionLog` would write them.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl ActionRecorder for InMemoryActionLog {
    fn record(&mut self, entry: &ActionEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
