//! Configuration and settings management for Seatmap
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into two sections:
//! - Editor settings (grid, zoom limits, placement)
//! - Connection settings (request timeout, status polling)
//!
//! The backend address is not configured here. The host constructs its
//! `SeatRepository` with whatever endpoint it talks to.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use seatmap_communication::SessionConfig;
use seatmap_core::constants::{
    COPY_OFFSET_CELLS, FALLBACK_POSITION_X, FALLBACK_POSITION_Y, GRID_CELL_SIZE,
    HANDLE_TOUCH_RADIUS, MAX_SCALE, MIN_SCALE,
};
use seatmap_designer::{LayoutConfig, Point};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "seatmap";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Layout editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid cell edge in content units
    pub grid_cell_size: f64,
    /// Smallest zoom factor
    pub min_scale: f64,
    /// Largest zoom factor
    pub max_scale: f64,
    /// Placement of items whose stored position is unusable
    pub fallback_x: f64,
    pub fallback_y: f64,
    /// Keep items at or right/below the content origin
    pub clamp_to_origin: bool,
    /// Copy offset in cells
    pub copy_offset_cells: f64,
    /// Resize handle touch radius in screen pixels
    pub handle_touch_radius: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_cell_size: GRID_CELL_SIZE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            fallback_x: FALLBACK_POSITION_X,
            fallback_y: FALLBACK_POSITION_Y,
            clamp_to_origin: true,
            copy_offset_cells: COPY_OFFSET_CELLS,
            handle_touch_radius: HANDLE_TOUCH_RADIUS,
        }
    }
}

impl EditorSettings {
    /// Runtime canvas configuration.
    pub fn to_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            cell_size: self.grid_cell_size,
            fallback_position: Point::new(self.fallback_x, self.fallback_y),
            clamp_to_origin: self.clamp_to_origin,
            copy_offset_cells: self.copy_offset_cells,
            handle_touch_radius: self.handle_touch_radius,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn validate(&self) -> SettingsResult<()> {
        if !(self.grid_cell_size.is_finite() && self.grid_cell_size > 0.0) {
            return Err(SettingsError::invalid(
                "editor.grid_cell_size",
                "must be > 0",
            ));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(SettingsError::invalid("editor.min_scale", "must be > 0"));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.max_scale".to_string(),
                value: self.max_scale.to_string(),
            }
            .into());
        }
        if !(self.fallback_x.is_finite() && self.fallback_y.is_finite()) {
            return Err(SettingsError::invalid(
                "editor.fallback_x",
                "fallback position must be finite",
            ));
        }
        if !(self.copy_offset_cells.is_finite() && self.copy_offset_cells >= 0.0) {
            return Err(SettingsError::invalid(
                "editor.copy_offset_cells",
                "must be >= 0",
            ));
        }
        if !(self.handle_touch_radius.is_finite() && self.handle_touch_radius > 0.0) {
            return Err(SettingsError::invalid(
                "editor.handle_touch_radius",
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Seat backend timing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Seat status polling period in seconds
    pub status_refresh_secs: u64,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            status_refresh_secs: 15,
        }
    }
}

impl ConnectionSettings {
    /// Runtime session configuration.
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            request_timeout: Duration::from_millis(self.timeout_ms),
            status_refresh_interval: Duration::from_secs(self.status_refresh_secs),
        }
    }

    fn validate(&self) -> SettingsResult<()> {
        if self.timeout_ms == 0 {
            return Err(SettingsError::invalid(
                "connection.timeout_ms",
                "must be > 0",
            ));
        }
        if self.status_refresh_secs == 0 {
            return Err(SettingsError::invalid(
                "connection.status_refresh_secs",
                "must be > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor settings
    pub editor: EditorSettings,
    /// Connection settings
    pub connection: ConnectionSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default location, `<config dir>/seatmap/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Loads `path`, or returns the defaults if it does not exist.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.editor.validate()?;
        self.connection.validate()
    }

    pub fn to_layout_config(&self) -> LayoutConfig {
        self.editor.to_layout_config()
    }

    pub fn to_session_config(&self) -> SessionConfig {
        self.connection.to_session_config()
    }
}
