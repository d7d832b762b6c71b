use floorplan_geom::{Aabb, Vec3};

use crate::color::Rgb;
use crate::material::Material;
use crate::types::FaceKind;

/// Axis-aligned rectangular prism standing on `(x, y, z)`.
///
/// `width` runs along +x, `depth` along +z and `height` along +y. All three must
/// be strictly positive; builders rely on it and do not check at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub material: Material,
    /// Replaces the material's top shade when set.
    pub top_color: Option<Rgb>,
    pub top_kind: FaceKind,
}

impl Block {
    pub fn new(x: f32, z: f32, width: f32, depth: f32, height: f32, material: Material) -> Self {
        debug_assert!(
            width > 0.0 && depth > 0.0 && height > 0.0,
            "block dimensions must be positive"
        );
        Self {
            x,
            y: 0.0,
            z,
            width,
            depth,
            height,
            material,
            top_color: None,
            top_kind: FaceKind::Plain,
        }
    }

    /// Raises the block so its bottom sits at `y`.
    pub fn elevated(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_top_color(mut self, color: Rgb) -> Self {
        self.top_color = Some(color);
        self
    }

    pub fn with_top_kind(mut self, kind: FaceKind) -> Self {
        self.top_kind = kind;
        self
    }

    #[inline]
    pub fn has_positive_extent(&self) -> bool {
        self.width > 0.0 && self.depth > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_origin_size(
            Vec3::new(self.x, self.y, self.z),
            Vec3::new(self.width, self.height, self.depth),
        )
    }

    /// Top surface height.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}
