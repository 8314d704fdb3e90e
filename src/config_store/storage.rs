use std::{
    fs,
    path::{Path, PathBuf},
};

use super::ConfigError;

/// Durable home of the persisted clock settings.
///
/// A storage holds a single text entry: the JSON-serialized config.
pub trait StateStorage {
    /// Reads the persisted entry. `Ok(None)` means nothing was persisted yet.
    ///
    /// # Errors
    /// Returns `ConfigError::IoError` when the entry exists but cannot be read.
    fn read(&self) -> Result<Option<String>, ConfigError>;

    /// Replaces the persisted entry.
    ///
    /// # Errors
    /// Returns `ConfigError::PersistenceError` when the entry cannot be written.
    fn write(&mut self, contents: &str) -> Result<(), ConfigError>;

    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;
}

/// Persists the config as a JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// state file, so readers never observe a half-written entry.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a storage backed by the file at `path`.
    ///
    /// The file and its parent directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| ConfigError::IoError {
                path: self.path.clone(),
                details: e.to_string(),
            })
    }

    fn write(&mut self, contents: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::PersistenceError {
                location: parent.display().to_string(),
                details: format!("Failed to create state directory: {e}"),
            })?;
        }

        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, contents).map_err(|e| ConfigError::PersistenceError {
            location: temp_path.display().to_string(),
            details: e.to_string(),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| ConfigError::PersistenceError {
            location: self.path.display().to_string(),
            details: e.to_string(),
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the persisted entry in memory.
///
/// Used for throwaway sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), ConfigError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
