//! Exhibit player crate.
//!
//! This crate contains the UI, widget controllers, and infrastructure adapters
//! for the exhibit page. Multi-platform support is provided via compile-time
//! `cfg` selection.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use config::{ExhibitConfig, MapConfig, ShellKind};
pub use error::ExhibitError;
pub use state::Platform;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::use_platform;
