use std::path::{Path, PathBuf};

use clap::Parser;
use floorplan_camera::CameraParams;

#[derive(Parser, Debug, Clone)]
#[command(name = "floorplan", version, about = "Software-rendered cutaway floor plans")]
pub struct Cli {
    /// Rotation around the vertical axis, in degrees
    #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
    pub rotation: f32,
    /// Tilt of the camera toward the floor, in degrees
    #[arg(long, default_value_t = 55.0, allow_negative_numbers = true)]
    pub tilt: f32,
    /// World units to pixels
    #[arg(long, default_value_t = 0.8)]
    pub zoom: f32,
    /// Render settings (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Scene layout (TOML) instead of the builtin floor plan
    #[arg(long, value_name = "FILE")]
    pub scene: Option<PathBuf>,
    /// Extra or replacement materials (TOML)
    #[arg(long, value_name = "FILE")]
    pub materials: Option<PathBuf>,
    /// Write the encoded image here
    #[arg(long, short, value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Print the base64 payload to stdout (the default when --out is absent)
    #[arg(long)]
    pub base64: bool,
    /// Render N evenly spaced rotations in parallel
    #[arg(long, value_name = "N")]
    pub turntable: Option<u32>,
    /// Worker threads for --turntable (0 = one per core)
    #[arg(long, default_value_t = 0)]
    pub jobs: usize,
    /// Re-render whenever the scene, config or materials file changes
    #[arg(long)]
    pub watch: bool,
}

impl Cli {
    pub fn camera(&self) -> CameraParams {
        CameraParams {
            rotation_deg: self.rotation,
            tilt_deg: self.tilt,
            zoom: self.zoom,
        }
    }

    pub fn print_base64(&self) -> bool {
        self.base64 || self.out.is_none()
    }

    /// Input files whose changes trigger a re-render.
    pub fn inputs(&self) -> Vec<&Path> {
        [&self.config, &self.scene, &self.materials]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
            .collect()
    }
}
