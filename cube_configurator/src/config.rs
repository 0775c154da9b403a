//! Compiled-in configurator constants and window settings from the environment.

use std::num::NonZeroU32;

use bevy::prelude::*;
use thiserror::Error;

/// Width of one full block along the X axis.
pub const UNIT_SIZE: NonZeroU32 = match NonZeroU32::new(60) {
    Some(unit) => unit,
    None => panic!("unit size must be non-zero"),
};
/// Gap between neighbouring blocks. Never added after the last block.
pub const SPACING: u32 = 5;
/// Smallest value any dimension input can take.
pub const MIN_DIMENSION: u32 = 30;
pub const DEFAULT_DIMENSION: u32 = 60;
/// Upper end of the slider range.
pub const SLIDER_MAX: u32 = 300;
pub const ROUGHNESS: f32 = 0.3;

/// Blue, red.
pub const PALETTE: [Color; 2] = [Color::srgb(0.0, 0.0, 1.0), Color::srgb(1.0, 0.0, 0.0)];

const TITLE_ENV: &str = "CONFIGURATOR_WINDOW_TITLE";
const RESOLUTION_ENV: &str = "CONFIGURATOR_RESOLUTION";
const DEFAULT_TITLE: &str = "Cube Configurator";
const DEFAULT_RESOLUTION: (f32, f32) = (1280.0, 720.0);

/// Domain settings shared by the tiler, reconciler and input layer.
#[derive(Resource, Clone, Debug)]
pub struct ConfiguratorSettings {
    pub unit_size: NonZeroU32,
    pub spacing: u32,
    pub palette: [Color; 2],
    pub min_dimension: u32,
    pub default_dimension: u32,
    pub slider_max: u32,
    pub roughness: f32,
}

impl Default for ConfiguratorSettings {
    fn default() -> Self {
        Self {
            unit_size: UNIT_SIZE,
            spacing: SPACING,
            palette: PALETTE,
            min_dimension: MIN_DIMENSION,
            default_dimension: DEFAULT_DIMENSION,
            slider_max: SLIDER_MAX,
            roughness: ROUGHNESS,
        }
    }
}

impl ConfiguratorSettings {
    /// Palette color for the block at `index`; colors alternate along the row.
    pub fn color_for(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    MalformedResolution(String),
    #[error("resolution {width}x{height} must be finite and positive")]
    InvalidResolution { width: f32, height: f32 },
}

/// Native window title and size.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub resolution: (f32, f32),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Parses `1280x720` style resolutions.
pub fn parse_resolution(raw: &str) -> Result<(f32, f32), ConfigError> {
    let malformed = || ConfigError::MalformedResolution(raw.to_string());
    let (w, h) = raw.trim().split_once(['x', 'X']).ok_or_else(malformed)?;
    let width: f32 = w.trim().parse().map_err(|_| malformed())?;
    let height: f32 = h.trim().parse().map_err(|_| malformed())?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(ConfigError::InvalidResolution { width, height });
    }
    Ok((width, height))
}

/// Reads window settings from the environment, falling back to defaults.
pub fn window_config() -> WindowConfig {
    let mut config = WindowConfig::default();
    if let Ok(title) = std::env::var(TITLE_ENV) {
        if !title.trim().is_empty() {
            config.title = title;
        }
    }
    if let Ok(raw) = std::env::var(RESOLUTION_ENV) {
        match parse_resolution(&raw) {
            Ok(resolution) => config.resolution = resolution,
            // Runs before the app and its log plugin exist.
            Err(err) => eprintln!("configurator: invalid {RESOLUTION_ENV}: {err}"),
        }
    }
    config
}
