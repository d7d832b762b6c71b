//! Depth sorter and compositor, and the render entry points.
//!
//! [`render_floor_plan`] and [`render_scene`] never fail: any error is logged
//! and reported as an empty string. [`try_render_scene`] and [`render_canvas`]
//! expose the same work with typed errors.
#![forbid(unsafe_code)]

pub mod compositor;
pub mod config;

pub use compositor::{DrawStats, Layer, Primitive, Shape};
pub use config::{CanvasConfig, LabelConfig, OutputConfig, RenderConfig, StyleConfig};

pub use floorplan_camera::{CameraParams, DepthMetric};
pub use floorplan_raster::{EncodedImage, ImageFormat, RgbaImage};
pub use floorplan_scene::Scene;

use floorplan_blocks::material::UnknownMaterial;
use floorplan_camera::{Camera, FOOTPRINT_TILT_RANGE};
use floorplan_geom::Vec2;
use floorplan_raster::{Canvas, RasterError};
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("scene: {0}")]
    Scene(#[from] UnknownMaterial),
}

/// Renders `scene` onto a fresh surface, before compression.
pub fn render_canvas(
    scene: &Scene,
    params: &CameraParams,
    config: &RenderConfig,
) -> Result<RgbaImage, RenderError> {
    let c = &config.canvas;
    let mut canvas = Canvas::new(c.width, c.height, c.background)?;
    canvas.draw_grid(c.grid_spacing, c.grid_color, c.grid_alpha);

    if config.depth == DepthMetric::Footprint && !params.footprint_depth_valid() {
        warn!(
            "tilt {:.1}° is outside {:?}; footprint depth ordering may be wrong",
            params.tilt_deg, FOOTPRINT_TILT_RANGE
        );
    }
    let center = Vec2::new(c.width as f32 / 2.0, c.height as f32 / 2.0);
    let camera = Camera::from_params(params, center);

    let mut primitives = compositor::collect(scene, &camera, config.depth);
    compositor::sort(&mut primitives);
    let stats = compositor::draw(&mut canvas, &primitives, &config.style, &config.labels);
    debug!(
        "drew {} faces ({} glowing) and {} labels at rotation {:.1}° tilt {:.1}° zoom {:.2}",
        stats.faces, stats.glows, stats.labels, params.rotation_deg, params.tilt_deg, params.zoom
    );
    Ok(canvas.into_image())
}

/// Renders and compresses `scene`.
pub fn try_render_scene(
    scene: &Scene,
    params: &CameraParams,
    config: &RenderConfig,
) -> Result<EncodedImage, RenderError> {
    let img = render_canvas(scene, params, config)?;
    Ok(floorplan_raster::encode(
        &img,
        config.output.format,
        config.output.quality,
    )?)
}

/// Base64 image of `scene`, or an empty string if it could not be produced.
pub fn render_scene(scene: &Scene, params: &CameraParams, config: &RenderConfig) -> String {
    match try_render_scene(scene, params, config) {
        Ok(img) => img.to_base64(),
        Err(e) => {
            warn!("render failed: {e}");
            String::new()
        }
    }
}

/// Base64 JPEG of the canonical floor plan with the default configuration, or
/// an empty string if it could not be produced.
pub fn render_floor_plan(params: &CameraParams) -> String {
    match floorplan_scene::floor_plan() {
        Ok(scene) => render_scene(&scene, params, &RenderConfig::default()),
        Err(e) => {
            warn!("render failed: {}", RenderError::from(e));
            String::new()
        }
    }
}
