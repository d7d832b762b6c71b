use std::error::Error;
use std::fs;
use std::path::Path;

use floorplan_blocks::MaterialCatalog;
use floorplan_render::{CameraParams, EncodedImage, RenderConfig, Scene, try_render_scene};
use floorplan_scene::{SceneLayout, floor_plan_with};
use log::{info, warn};

use crate::cli::Cli;

/// Everything one render needs, loaded from the command line's inputs.
pub struct Job {
    pub scene: Scene,
    pub config: RenderConfig,
    pub camera: CameraParams,
}

impl Job {
    pub fn load(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let config = match &cli.config {
            Some(path) => RenderConfig::from_path(path)
                .map_err(|e| format!("config {}: {e}", path.display()))?,
            None => RenderConfig::default(),
        };
        let mut catalog = MaterialCatalog::builtin();
        if let Some(path) = &cli.materials {
            let extra = MaterialCatalog::from_path(path)
                .map_err(|e| format!("materials {}: {e}", path.display()))?;
            catalog.extend_from(&extra)?;
        }
        let scene = match &cli.scene {
            Some(path) => SceneLayout::load(path, &catalog)
                .map_err(|e| format!("scene {}: {e}", path.display()))?,
            None => floor_plan_with(&catalog)?,
        };
        info!(
            "scene has {} elements; canvas {}x{}",
            scene.len(),
            config.canvas.width,
            config.canvas.height
        );
        Ok(Self {
            scene,
            config,
            camera: cli.camera(),
        })
    }

    /// `None` when the render produced no image; the reason is logged.
    pub fn render(&self, camera: &CameraParams) -> Option<EncodedImage> {
        match try_render_scene(&self.scene, camera, &self.config) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!("render failed: {e}");
                None
            }
        }
    }

    /// Renders with the command-line camera and writes the requested outputs.
    pub fn render_and_write(&self, cli: &Cli) -> Result<bool, Box<dyn Error>> {
        let Some(img) = self.render(&self.camera) else {
            return Ok(false);
        };
        if let Some(path) = &cli.out {
            write_image(path, &img)?;
        }
        if cli.print_base64() {
            println!("{}", img.to_base64());
        }
        Ok(true)
    }
}

pub fn write_image(path: &Path, img: &EncodedImage) -> Result<(), Box<dyn Error>> {
    fs::write(path, &img.bytes).map_err(|e| format!("write {}: {e}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), img.bytes.len());
    Ok(())
}
