use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;

use super::ConfigError;

/// Represents a file system event for the watched state file.
#[derive(Debug, Clone)]
pub struct FileEvent {
    /// The path of the file that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: FileEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum FileEventKind {
    /// File was modified
    Modified,
    /// File was created (including being renamed into place)
    Created,
    /// File was removed
    Removed,
}

/// Watches the persisted state file for edits made by other processes.
///
/// The state file is replaced by rename on every write, so the watch is
/// placed on its directory and events are filtered by file name.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Starts watching `path` and returns the watcher and event receiver.
    ///
    /// Uses an unbounded channel since file events are typically infrequent but bursty.
    /// The watch stops when the returned watcher is dropped.
    ///
    /// # Errors
    /// * `ConfigError::FileWatcherInitError` - If the system watcher cannot be created
    /// * `ConfigError::FileWatchError` - If the directory cannot be watched
    pub fn watch(path: &Path) -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>), ConfigError> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let file_name: Option<OsString> = path.file_name().map(|name| name.to_os_string());

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            let kind = match event.kind {
                EventKind::Create(_) => FileEventKind::Created,
                EventKind::Modify(_) => FileEventKind::Modified,
                EventKind::Remove(_) => FileEventKind::Removed,
                _ => return,
            };

            for path in event.paths {
                if path.file_name() != file_name.as_deref() {
                    continue;
                }

                let _ = event_tx.send(FileEvent {
                    path,
                    kind: kind.clone(),
                });
            }
        })
        .map_err(|e| ConfigError::FileWatcherInitError {
            details: e.to_string(),
        })?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::FileWatchError {
                path: directory.clone(),
                details: e.to_string(),
            })?;

        Ok((Self { _watcher: watcher }, event_rx))
    }
}
