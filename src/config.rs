//! Configuration for the altitude editor.
//!
//! Organised into sub-configs:
//!
//! | Field          | Purpose |
//! |----------------|---------|
//! | `canvas`       | Geometry of the drawing surface (margin, radii, grid) |
//! | `defaults`     | Initial point count and display parameters |
//! | `features`     | Toggle individual canvas decorations on/off |
//! | `color_scheme` | Visual theme |
//!
//! The whole struct is (de)serialised with serde and stored as TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::params::{DEFAULT_GEOID_UNDULATION, DEFAULT_MAX_ALTITUDE};
use crate::data::transform::DEFAULT_MARGIN;
use crate::editor::DEFAULT_HIT_RADIUS;
use crate::error::ConfigError;

/// File name looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "altitude_editor.toml";

// ─────────────────────────────────────────────────────────────────────────────
// Canvas geometry
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Margin around the plot area (px). Default: `30.0`.
    pub margin: f32,
    /// Pointer distance (px) that counts as hitting a point. Default: `10.0`.
    pub hit_radius: f32,
    /// Radius of a drawn control point (px). Default: `5.0`.
    pub point_radius: f32,
    /// Grid spacing in normalized units. Default: `0.1`.
    pub grid_step: f64,
    /// Label font size (px). Default: `10.0`.
    pub font_size: f32,
    /// Canvas size used before the first layout pass.
    pub initial_size: [f32; 2],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            hit_radius: DEFAULT_HIT_RADIUS,
            point_radius: 5.0,
            grid_step: 0.1,
            font_size: 10.0,
            initial_size: [800.0, 400.0],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Initial values
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Number of control points created at start-up. Must be at least 2.
    pub point_count: usize,
    pub max_altitude: f64,
    pub geoid_undulation: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            point_count: 11,
            max_altitude: DEFAULT_MAX_ALTITUDE,
            geoid_undulation: DEFAULT_GEOID_UNDULATION,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle canvas decorations. All default to `true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Draw the max-altitude and geoid-undulation labels.
    pub labels: bool,
    /// Draw the background grid.
    pub grid: bool,
    /// Draw the outline of an in-progress rectangle selection.
    pub selection_rect: bool,
    /// Show the point-count controls in the top bar.
    pub point_count_controls: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            labels: true,
            grid: true,
            selection_rect: true,
            point_count_controls: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the altitude editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Native window title.
    pub title: String,
    pub color_scheme: ColorScheme,
    pub canvas: CanvasConfig,
    pub defaults: DefaultsConfig,
    pub features: FeatureFlags,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "Altitude Editor".to_string(),
            color_scheme: ColorScheme::default(),
            canvas: CanvasConfig::default(),
            defaults: DefaultsConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a config from TOML text. Out-of-range values are replaced by
    /// their defaults, see [`sanitized`](Self::sanitized).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(text)?;
        Ok(cfg.sanitized())
    }

    /// Replace every out-of-range numeric value with its default, logging a
    /// warning for each. The point count is left alone: the editor rejects
    /// fewer than two points itself.
    pub fn sanitized(mut self) -> Self {
        let canvas = CanvasConfig::default();
        let defaults = DefaultsConfig::default();
        let c = &mut self.canvas;
        check("canvas.margin", &mut c.margin, canvas.margin, |v| {
            v.is_finite() && v >= 0.0
        });
        check("canvas.hit_radius", &mut c.hit_radius, canvas.hit_radius, positive32);
        check("canvas.point_radius", &mut c.point_radius, canvas.point_radius, |v| {
            v.is_finite() && v >= 0.0
        });
        check("canvas.grid_step", &mut c.grid_step, canvas.grid_step, |v| {
            v.is_finite() && v > 0.0 && v <= 1.0
        });
        check("canvas.font_size", &mut c.font_size, canvas.font_size, positive32);
        check("canvas.initial_size", &mut c.initial_size, canvas.initial_size, |[w, h]| {
            positive32(w) && positive32(h)
        });
        let d = &mut self.defaults;
        check("defaults.max_altitude", &mut d.max_altitude, defaults.max_altitude, |v| {
            v.is_finite() && v > 0.0
        });
        check(
            "defaults.geoid_undulation",
            &mut d.geoid_undulation,
            defaults.geoid_undulation,
            f64::is_finite,
        );
        self
    }

    /// Read and parse a config file.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load a config file, falling back to defaults if it is missing or broken.
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(cfg) => {
                log::info!("loaded config from {}", path.display());
                cfg
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty TOML.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    /// Default config location: next to the executable.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }
}

fn positive32(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn check<T: Copy + std::fmt::Debug>(
    field: &str,
    value: &mut T,
    default: T,
    valid: impl Fn(T) -> bool,
) {
    if !valid(*value) {
        log::warn!("invalid {field} {value:?} in config, using {default:?}");
        *value = default;
    }
}
