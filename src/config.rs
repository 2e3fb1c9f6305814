//! Configuration persistence for shapepad settings

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::ShapeKind;
use crate::render::geometry::stroke;

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ShapeColor {
    pub const BLACK: ShapeColor = ShapeColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: ShapeColor = ShapeColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Convert to RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Drawing surface width in pixels
    pub canvas_width: u32,
    /// Drawing surface height in pixels
    pub canvas_height: u32,
    /// Color the surface is cleared to
    pub background: ShapeColor,
    /// Outline color for every shape
    pub stroke_color: ShapeColor,
    /// Outline width in pixels
    pub stroke_width: f32,
    pub anti_alias: bool,
    /// Primitive selected when a session starts
    pub default_kind: ShapeKind,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            background: ShapeColor::WHITE,
            stroke_color: ShapeColor::BLACK,
            stroke_width: stroke::WIDTH,
            anti_alias: true,
            default_kind: ShapeKind::Line,
        }
    }
}

impl PadConfig {
    /// Application directory name under the user config directory
    pub const ID: &'static str = "shapepad";

    const FILE_NAME: &'static str = "config.json";

    /// Default location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join(Self::FILE_NAME))
    }

    /// Load configuration from `path` (or the default location), or return
    /// defaults if unavailable
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    log::warn!("No config directory available, using defaults");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::read(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
