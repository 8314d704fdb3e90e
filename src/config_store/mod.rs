//! Persisted store of the clock settings.
//!
//! Owns the single [`crate::config::ClockConfig`] value, merges partial
//! updates into it, and writes it back to a [`StateStorage`] after every
//! change. A [`FileWatcher`] lets a running display follow edits made by
//! other processes.

mod changes;
mod file_watcher;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use changes::{ConfigChange, ConfigError};
pub use file_watcher::{FileEvent, FileEventKind, FileWatcher};
pub use storage::{FileStorage, MemoryStorage, StateStorage};
pub use store::ConfigStore;
