//! Configuration loading and parsing.
//!
//! Parses `tilepos.toml` (or an override path provided by the binary). Every
//! field is optional and unknown fields are ignored so older files keep
//! loading. A missing or unparsable file yields defaults.
//!
//! Raw parsed values are kept as written; `Config::apply_limits` computes the
//! effective values the layout pass uses, logging under target `config`
//! whenever it had to clamp.
//!
//! ```toml
//! [grid]
//! columns = 10
//! rows = 10
//!
//! [list]
//! more_label = "More"
//! more_icon = "pi pi-arrow-right"
//!
//! [render]
//! cell_width = 12
//! ```

use anyhow::Result;
use core_model::Rectangle;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Largest accepted grid dimension in either direction.
pub const MAX_GRID_DIM: u16 = 64;
pub const MIN_CELL_WIDTH: u16 = 3;
pub const MAX_CELL_WIDTH: u16 = 40;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GridConfig {
    #[serde(default = "GridConfig::default_dim")]
    pub columns: u16,
    #[serde(default = "GridConfig::default_dim")]
    pub rows: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: Self::default_dim(),
            rows: Self::default_dim(),
        }
    }
}

impl GridConfig {
    const fn default_dim() -> u16 {
        10
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ListConfig {
    #[serde(default = "ListConfig::default_more_label")]
    pub more_label: String,
    /// An empty string disables the icon.
    #[serde(default = "ListConfig::default_more_icon")]
    pub more_icon: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            more_label: Self::default_more_label(),
            more_icon: Self::default_more_icon(),
        }
    }
}

impl ListConfig {
    fn default_more_label() -> String {
        "More".to_string()
    }

    fn default_more_icon() -> Option<String> {
        Some("pi pi-arrow-right".to_string())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_cell_width")]
    pub cell_width: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: Self::default_cell_width(),
        }
    }
}

impl RenderConfig {
    const fn default_cell_width() -> u16 {
        12
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Values after clamping, ready for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveLimits {
    pub columns: u16,
    pub rows: u16,
    pub cell_width: u16,
}

impl Default for EffectiveLimits {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            columns: file.grid.columns,
            rows: file.grid.rows,
            cell_width: file.render.cell_width,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub effective: EffectiveLimits,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    // Prefer the working directory before the platform config dir.
    let local = PathBuf::from("tilepos.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tilepos").join("tilepos.toml");
    }
    PathBuf::from("tilepos.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            let mut cfg = Config {
                raw: Some(content),
                file,
                effective: EffectiveLimits::default(),
            };
            cfg.apply_limits();
            Ok(cfg)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

fn clamp_logged(field: &'static str, raw: u16, min: u16, max: u16) -> u16 {
    let clamped = raw.clamp(min, max);
    if clamped != raw {
        info!(target: "config", field, raw, clamped, min, max, "config_value_clamped");
    }
    clamped
}

impl Config {
    /// Clamp raw values into their accepted ranges. Returns the effective
    /// limits (also stored on `self`).
    pub fn apply_limits(&mut self) -> EffectiveLimits {
        let grid = &self.file.grid;
        self.effective = EffectiveLimits {
            columns: clamp_logged("grid.columns", grid.columns, 1, MAX_GRID_DIM),
            rows: clamp_logged("grid.rows", grid.rows, 1, MAX_GRID_DIM),
            cell_width: clamp_logged(
                "render.cell_width",
                self.file.render.cell_width,
                MIN_CELL_WIDTH,
                MAX_CELL_WIDTH,
            ),
        };
        self.effective
    }

    /// Screen rectangle the root layout is resolved against.
    pub fn screen_bounds(&self) -> Rectangle {
        Rectangle::new(
            0,
            0,
            i32::from(self.effective.columns),
            i32::from(self.effective.rows),
        )
    }
}
