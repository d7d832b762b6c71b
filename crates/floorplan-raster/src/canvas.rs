use floorplan_blocks::Rgb;
use image::{Rgba, RgbaImage};

use crate::RasterError;

/// Largest surface [`Canvas::new`] will allocate.
pub const MAX_SURFACE_BYTES: u64 = 64 * 1024 * 1024;

/// Opaque RGBA drawing surface. Every draw call blends source-over.
#[derive(Clone, Debug)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Acquires a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::Surface {
                width,
                height,
                reason: "zero-sized",
            });
        }
        if u64::from(width) * u64::from(height) * 4 > MAX_SURFACE_BYTES {
            return Err(RasterError::Surface {
                width,
                height,
                reason: "larger than 64 MiB",
            });
        }
        let px = Rgba([background.r, background.g, background.b, 255]);
        Ok(Self {
            img: RgbaImage::from_pixel(width, height, px),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Color at `(x, y)`, or `None` off the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.img
            .get_pixel_checked(x, y)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    /// Blends `color` over the pixel at `(x, y)` with coverage `alpha`.
    /// Off-surface coordinates are ignored.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || alpha <= 0.0 {
            return;
        }
        let Some(p) = self.img.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };
        let a = alpha.min(1.0);
        for (dst, src) in p.0.iter_mut().zip([color.r, color.g, color.b]) {
            let d = f32::from(*dst);
            *dst = (d + (f32::from(src) - d) * a).round() as u8;
        }
    }

    /// Blends a horizontal run `x0..=x1` on row `y`, clipped to the surface.
    pub fn span(&mut self, y: i32, x0: i32, x1: i32, color: Rgb, alpha: f32) {
        if y < 0 || y as u32 >= self.height() {
            return;
        }
        let x1 = x1.min(self.width() as i32 - 1);
        for x in x0.max(0)..=x1 {
            self.blend(x, y, color, alpha);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb, alpha: f32) {
        if w == 0 || h == 0 {
            return;
        }
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let x1 = clamp(i64::from(x) + i64::from(w) - 1);
        let rows = i64::from(y).max(0)..(i64::from(y) + i64::from(h)).min(i64::from(self.height()));
        for row in rows {
            self.span(row as i32, x, x1, color, alpha);
        }
    }

    /// Faint reference grid: one-pixel lines every `spacing` pixels.
    pub fn draw_grid(&mut self, spacing: u32, color: Rgb, alpha: f32) {
        if spacing == 0 {
            return;
        }
        let (w, h) = (self.width() as i32, self.height() as i32);
        let step = spacing as usize;
        for x in (0..w).step_by(step) {
            for y in 0..h {
                self.blend(x, y, color, alpha);
            }
        }
        for y in (0..h).step_by(step) {
            for x in 0..w {
                // Crossings were already blended by the vertical pass.
                if x % spacing as i32 != 0 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }
}
