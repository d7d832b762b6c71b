//! Orthographic yaw/pitch camera and painter's-order depth keys.
//!
//! The projector is a pure function: yaw about the vertical axis, then pitch
//! about the horizontal axis, then an orthographic drop of the rotated z.
//! Objects never shrink with distance.
#![forbid(unsafe_code)]

use std::ops::RangeInclusive;

use floorplan_geom::{Vec2, Vec3};
use serde::Deserialize;

/// Tilt range (degrees) over which the footprint depth metric orders this
/// kind of low, wide scene correctly.
pub const FOOTPRINT_TILT_RANGE: RangeInclusive<f32> = 20.0..=80.0;

/// Projects `p` to screen space. Angles in radians.
#[inline]
pub fn project(p: Vec3, yaw: f32, pitch: f32, zoom: f32, center_x: f32, center_y: f32) -> Vec2 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    project_with(
        p,
        Trig {
            sin_yaw,
            cos_yaw,
            sin_pitch,
            cos_pitch,
        },
        zoom,
        Vec2::new(center_x, center_y),
    )
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Trig {
    sin_yaw: f32,
    cos_yaw: f32,
    sin_pitch: f32,
    cos_pitch: f32,
}

#[inline]
fn project_with(p: Vec3, t: Trig, zoom: f32, center: Vec2) -> Vec2 {
    let x1 = p.x * t.cos_yaw - p.z * t.sin_yaw;
    let z1 = p.x * t.sin_yaw + p.z * t.cos_yaw;
    let y1 = p.y;
    let y2 = y1 * t.cos_pitch - z1 * t.sin_pitch;
    let x2 = x1;
    Vec2::new(center.x + x2 * zoom, center.y + y2 * zoom)
}

/// How primitives are keyed for back-to-front ordering.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthMetric {
    /// Mean of `x·sin(yaw) + z·cos(yaw)`; ignores pitch and height.
    #[default]
    Footprint,
    /// Mean distance toward the viewer after both rotations.
    View,
}

/// Caller-facing camera inputs, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub rotation_deg: f32,
    pub tilt_deg: f32,
    pub zoom: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            rotation_deg: 45.0,
            tilt_deg: 55.0,
            zoom: 0.8,
        }
    }
}

impl CameraParams {
    pub fn footprint_depth_valid(&self) -> bool {
        FOOTPRINT_TILT_RANGE.contains(&self.tilt_deg)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub center: Vec2,
    trig: Trig,
}

impl Camera {
    /// Raw projector angles in radians.
    pub fn new(yaw: f32, pitch: f32, zoom: f32, center: Vec2) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        Self {
            yaw,
            pitch,
            zoom,
            center,
            trig: Trig {
                sin_yaw,
                cos_yaw,
                sin_pitch,
                cos_pitch,
            },
        }
    }

    /// Maps caller degrees onto projector angles.
    ///
    /// The raster is y-down, so pitch gets an extra half turn: world-up then
    /// points up on screen and the viewer sits on the side the footprint
    /// depth key grows toward.
    pub fn from_params(params: &CameraParams, center: Vec2) -> Self {
        Self::new(
            params.rotation_deg.to_radians(),
            (params.tilt_deg + 180.0).to_radians(),
            params.zoom,
            center,
        )
    }

    #[inline]
    pub fn project(&self, p: Vec3) -> Vec2 {
        project_with(p, self.trig, self.zoom, self.center)
    }

    /// Yaw-rotated depth of a single point.
    #[inline]
    pub fn footprint_depth(&self, p: Vec3) -> f32 {
        p.x * self.trig.sin_yaw + p.z * self.trig.cos_yaw
    }

    /// Rotated-and-tilted depth of a single point, larger is nearer.
    #[inline]
    pub fn view_depth(&self, p: Vec3) -> f32 {
        let z1 = self.footprint_depth(p);
        let z2 = p.y * self.trig.sin_pitch + z1 * self.trig.cos_pitch;
        -z2
    }

    /// Mean depth of `points`; ascending keys are back-to-front.
    pub fn depth_key(&self, points: &[Vec3], metric: DepthMetric) -> f32 {
        if points.is_empty() {
            return 0.0;
        }
        let sum: f32 = match metric {
            DepthMetric::Footprint => points.iter().map(|&p| self.footprint_depth(p)).sum(),
            DepthMetric::View => points.iter().map(|&p| self.view_depth(p)).sum(),
        };
        sum / points.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_matches_free_function() {
        let cam = Camera::new(0.7, 2.1, 1.3, Vec2::new(10.0, 20.0));
        let p = Vec3::new(3.0, -4.0, 5.5);
        assert_eq!(cam.project(p), project(p, 0.7, 2.1, 1.3, 10.0, 20.0));
    }

    #[test]
    fn default_params() {
        let p = CameraParams::default();
        assert_eq!((p.rotation_deg, p.tilt_deg, p.zoom), (45.0, 55.0, 0.8));
        assert!(p.footprint_depth_valid());
    }

    #[test]
    fn world_up_points_up_on_screen() {
        let cam = Camera::from_params(&CameraParams::default(), Vec2::new(512.0, 384.0));
        let base = cam.project(Vec3::new(0.0, 0.0, 0.0));
        let top = cam.project(Vec3::new(0.0, 100.0, 0.0));
        assert!(top.y < base.y);
        assert!((top.x - base.x).abs() < 1e-3);
    }

    #[test]
    fn nearer_points_sit_lower_on_screen() {
        // Ground points with a larger footprint depth are closer to the viewer.
        let cam = Camera::from_params(&CameraParams::default(), Vec2::ZERO);
        let far = Vec3::new(-100.0, 0.0, -100.0);
        let near = Vec3::new(100.0, 0.0, 100.0);
        assert!(cam.footprint_depth(near) > cam.footprint_depth(far));
        assert!(cam.project(near).y > cam.project(far).y);
    }

    #[test]
    fn view_depth_agrees_with_footprint_on_ground() {
        let cam = Camera::from_params(&CameraParams::default(), Vec2::ZERO);
        let a = Vec3::new(-50.0, 0.0, 20.0);
        let b = Vec3::new(80.0, 0.0, 10.0);
        let fa = cam.footprint_depth(a) < cam.footprint_depth(b);
        let va = cam.view_depth(a) < cam.view_depth(b);
        assert_eq!(fa, va);
    }

    #[test]
    fn view_depth_counts_height() {
        // Raising a point moves it toward a viewer above the scene.
        let cam = Camera::from_params(&CameraParams::default(), Vec2::ZERO);
        let low = Vec3::new(0.0, 0.0, 0.0);
        let high = Vec3::new(0.0, 50.0, 0.0);
        assert!(cam.view_depth(high) > cam.view_depth(low));
        assert_eq!(cam.footprint_depth(high), cam.footprint_depth(low));
    }

    #[test]
    fn depth_key_is_mean() {
        let cam = Camera::new(0.0, 0.0, 1.0, Vec2::ZERO);
        // yaw 0: key is z
        let pts = [Vec3::new(9.0, 0.0, 1.0), Vec3::new(-9.0, 5.0, 3.0)];
        assert!((cam.depth_key(&pts, DepthMetric::Footprint) - 2.0).abs() < 1e-6);
        assert_eq!(cam.depth_key(&[], DepthMetric::View), 0.0);
    }

    #[test]
    fn params_deserialize_with_defaults() {
        #[derive(Deserialize)]
        struct Wrap {
            camera: CameraParams,
            depth: DepthMetric,
        }
        let w: Wrap = toml::from_str("depth = \"view\"\n[camera]\nzoom = 1.5\n").unwrap();
        assert_eq!(w.camera.zoom, 1.5);
        assert_eq!(w.camera.rotation_deg, 45.0);
        assert_eq!(w.depth, DepthMetric::View);
    }
}
