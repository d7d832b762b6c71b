use floorplan_blocks::Rgb;
use floorplan_camera::DepthMetric;
use floorplan_raster::{Glow, ImageFormat};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Everything about a render except the camera and the scene.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub depth: DepthMetric,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub labels: LabelConfig,
}

impl RenderConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: Self = toml::from_str(toml_str)?;
        if !LABEL_SCALES.contains(&cfg.labels.scale) {
            return Err(format!(
                "labels.scale must be within {}..={}, got {}",
                LABEL_SCALES.start(),
                LABEL_SCALES.end(),
                cfg.labels.scale
            )
            .into());
        }
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: Rgb,
    /// Grid pitch in pixels; 0 disables the grid.
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: u32,
    #[serde(default = "default_grid_color")]
    pub grid_color: Rgb,
    #[serde(default = "default_grid_alpha")]
    pub grid_alpha: f32,
}

fn default_width() -> u32 {
    1024
}
fn default_height() -> u32 {
    768
}
fn default_background() -> Rgb {
    Rgb::from_u32(0xf3efe6)
}
fn default_grid_spacing() -> u32 {
    32
}
fn default_grid_color() -> Rgb {
    Rgb::from_u32(0x8a8172)
}
fn default_grid_alpha() -> f32 {
    0.12
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            grid_spacing: default_grid_spacing(),
            grid_color: default_grid_color(),
            grid_alpha: default_grid_alpha(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ImageFormat,
    /// JPEG quality, 1..=100.
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_quality() -> u8 {
    90
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::Jpeg,
            quality: default_quality(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_stroke_alpha")]
    pub stroke_alpha: f32,
    #[serde(default = "default_band_stroke_alpha")]
    pub band_stroke_alpha: f32,
    #[serde(default = "default_light_glow")]
    pub light_glow: Glow,
    #[serde(default = "default_screen_glow")]
    pub screen_glow: Glow,
}

fn default_stroke_alpha() -> f32 {
    0.08
}
fn default_band_stroke_alpha() -> f32 {
    0.22
}
fn default_light_glow() -> Glow {
    Glow {
        radius: 10,
        strength: 0.85,
    }
}
fn default_screen_glow() -> Glow {
    Glow {
        radius: 14,
        strength: 0.55,
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_alpha: default_stroke_alpha(),
            band_stroke_alpha: default_band_stroke_alpha(),
            light_glow: default_light_glow(),
            screen_glow: default_screen_glow(),
        }
    }
}

/// Label scales accepted from config files.
pub const LABEL_SCALES: std::ops::RangeInclusive<u32> = 1..=16;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LabelConfig {
    #[serde(default = "default_label_scale")]
    pub scale: u32,
    #[serde(default = "default_label_color")]
    pub color: Rgb,
    #[serde(default = "default_plate_color")]
    pub plate: Rgb,
    #[serde(default = "default_plate_alpha")]
    pub plate_alpha: f32,
}

fn default_label_scale() -> u32 {
    2
}
fn default_label_color() -> Rgb {
    Rgb::from_u32(0x3d3833)
}
fn default_plate_color() -> Rgb {
    Rgb::WHITE
}
fn default_plate_alpha() -> f32 {
    0.55
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            scale: default_label_scale(),
            color: default_label_color(),
            plate: default_plate_color(),
            plate_alpha: default_plate_alpha(),
        }
    }
}
