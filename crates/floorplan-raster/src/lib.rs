//! Software raster surface: polygon fill and stroke, glow halos, bitmap text,
//! and image encoding.
#![forbid(unsafe_code)]

mod canvas;
mod encode;
pub mod font;
mod glow;
mod polygon;

pub use canvas::{Canvas, MAX_SURFACE_BYTES};
pub use encode::{EncodedImage, ImageFormat, encode};
pub use glow::{Glow, draw_glow};
pub use polygon::{draw_line, fill_polygon, stroke_polygon};

pub use image::RgbaImage;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("cannot acquire a {width}x{height} surface: {reason}")]
    Surface {
        width: u32,
        height: u32,
        reason: &'static str,
    },
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
