//! Built-in commands, grouped by category.

/// Commands of the `config` category.
pub mod config;
/// Commands of the `display` category.
pub mod display;
