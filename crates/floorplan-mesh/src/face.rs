use floorplan_blocks::{FaceKind, FaceRole, Rgb};
use floorplan_camera::{Camera, DepthMetric};
use floorplan_geom::{Vec2, Vec3};

/// One side of an axis-aligned box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoxFace {
    /// +y
    Top,
    /// +x
    Right,
    /// -x
    Left,
    /// +z
    Front,
    /// -z
    Back,
}

/// Faces a block emits. The camera never looks at undersides.
pub const EMITTED_FACES: [BoxFace; 5] = [
    BoxFace::Top,
    BoxFace::Front,
    BoxFace::Back,
    BoxFace::Left,
    BoxFace::Right,
];

impl BoxFace {
    /// Classifies the face for shade lookup.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            BoxFace::Top => FaceRole::Top,
            BoxFace::Front => FaceRole::Front,
            BoxFace::Back => FaceRole::Back,
            BoxFace::Left | BoxFace::Right => FaceRole::Side,
        }
    }

    /// Aabb corner indices (x = bit 0, y = bit 1, z = bit 2), counter-clockwise
    /// seen from outside the box.
    #[inline]
    pub fn corner_indices(self) -> [usize; 4] {
        match self {
            BoxFace::Top => [2, 6, 7, 3],
            BoxFace::Right => [5, 1, 3, 7],
            BoxFace::Left => [0, 4, 6, 2],
            BoxFace::Front => [4, 5, 7, 6],
            BoxFace::Back => [1, 0, 2, 3],
        }
    }
}

/// World-space quad before projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
    pub color: Rgb,
    pub kind: FaceKind,
}

impl Quad {
    /// Mean of the four corners.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        Vec3::mean(&self.corners)
    }

    /// Unnormalized normal from the winding order.
    pub fn winding_normal(&self) -> Vec3 {
        let [a, b, c, _] = self.corners;
        (b - a).cross(c - a)
    }

    pub fn project(&self, camera: &Camera, metric: DepthMetric) -> Face {
        Face {
            points: self.corners.map(|p| camera.project(p)),
            color: self.color,
            kind: self.kind,
            depth: camera.depth_key(&self.corners, metric),
        }
    }
}

/// Projected quad ready for compositing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    pub points: [Vec2; 4],
    pub color: Rgb,
    pub kind: FaceKind,
    pub depth: f32,
}
