//! Configuration system for the term-shortcuts keyboard dispatcher.
//!
//! This crate provides configuration loading, saving, and default values
//! for the shortcut dispatcher. It includes:
//!
//! - Shortcut binding entries (`key` string -> `action` name)
//! - Primary modifier selection (Cmd vs Ctrl)
//! - Log level configuration
//! - The default shortcut set

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, PrimaryModifier, ShortcutBinding};
