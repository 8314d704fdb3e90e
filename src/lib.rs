//! Clockface - a customizable terminal clock.
//!
//! Clockface shows the current time and date, restyled live from a settings
//! pane. The main features include:
//!
//! - Time and date formatting (12/24 hour, separators, four date formats)
//! - Visual styles resolved into CSS-like text and container styles
//! - Settings persisted as JSON and followed across processes
//! - CLI interface for reading and changing every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clockface::config_store::ConfigStore;
//! use clockface::config::ClockConfigPatch;
//!
//! // Create a store with defaults, backed by memory
//! let mut store = ConfigStore::with_defaults();
//!
//! // Change one setting
//! let patch = ClockConfigPatch {
//!     font_size: Some(120),
//!     ..ClockConfigPatch::default()
//! };
//! let changes = store.update(patch).unwrap();
//! println!("Changed: {changes:?}, size now {}", store.get().font_size);
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Persisted clock settings with change tracking.
pub mod config_store;

/// Time formatting, style resolution and the one second ticker.
pub mod clock;

/// Settings pane controls, validation and export.
pub mod settings;

/// Terminal rendering and the interactive display loop.
pub mod display;

/// Command-line interface for configuration management.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{ClockfaceError, Result};
