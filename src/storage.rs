use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use crate::tasks::TaskList;

/// TOML file holding the task list
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the task list, or an empty one if the file does not exist yet
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            tracing::debug!(path = %self.file_path.display(), "task file missing, starting empty");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        let data: TaskList = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.file_path.display()))?;
        tracing::debug!(path = %self.file_path.display(), tasks = data.len(), "loaded task file");
        Ok(data)
    }

    pub fn save(&self, data: &TaskList) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        tracing::debug!(path = %self.file_path.display(), tasks = data.len(), "saved task file");
        Ok(())
    }
}
