//! Seatmap Settings Crate
//!
//! Loads, validates and saves the editor and connection configuration, and
//! turns it into the runtime configs of the designer and the session.

pub mod config;
pub mod error;

pub use config::{Config, ConnectionSettings, EditorSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
