use std::f32::consts::TAU;

use floorplan_camera::{Camera, CameraParams, DepthMetric, project};
use floorplan_geom::{Vec2, Vec3};
use proptest::prelude::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn angle() -> impl Strategy<Value = f32> {
    -TAU..TAU
}

fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

fn arb_point() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

#[test]
fn zero_rotation_is_pure_translation() {
    let s = project(Vec3::new(100.0, 0.0, 0.0), 0.0, 0.0, 1.0, 0.0, 0.0);
    assert_eq!(s, Vec2::new(100.0, 0.0));
}

#[test]
fn default_view_keeps_scene_on_canvas() {
    let cam = Camera::from_params(&CameraParams::default(), Vec2::new(512.0, 384.0));
    for p in [
        Vec3::new(-360.0, 0.0, -270.0),
        Vec3::new(360.0, 0.0, 270.0),
        Vec3::new(-360.0, 110.0, 270.0),
        Vec3::new(360.0, 110.0, -270.0),
    ] {
        let s = cam.project(p);
        assert!(s.x > 0.0 && s.x < 1024.0, "{p:?} -> {s:?}");
        assert!(s.y > 0.0 && s.y < 768.0, "{p:?} -> {s:?}");
    }
}

proptest! {
    // The origin always lands on the screen center
    #[test]
    fn origin_maps_to_center(
        yaw in angle(),
        pitch in angle(),
        zoom in 0.01f32..10.0,
        cx in coord(),
        cy in coord(),
    ) {
        let s = project(Vec3::ZERO, yaw, pitch, zoom, cx, cy);
        prop_assert_eq!(s, Vec2::new(cx, cy));
    }

    // A full turn of yaw changes nothing beyond float noise
    #[test]
    fn yaw_is_periodic(
        p in arb_point(),
        yaw in angle(),
        pitch in angle(),
        zoom in 0.1f32..4.0,
    ) {
        let a = project(p, yaw, pitch, zoom, 512.0, 384.0);
        let b = project(p, yaw + TAU, pitch, zoom, 512.0, 384.0);
        prop_assert!(approx(a.x, b.x, 0.05), "{:?} vs {:?}", a, b);
        prop_assert!(approx(a.y, b.y, 0.05), "{:?} vs {:?}", a, b);
    }

    // Orthographic: screen offset from center scales linearly with zoom
    #[test]
    fn zoom_scales_offset_linearly(
        p in arb_point(),
        yaw in angle(),
        pitch in angle(),
        k in 0.1f32..4.0,
    ) {
        let a = project(p, yaw, pitch, 1.0, 0.0, 0.0);
        let b = project(p, yaw, pitch, k, 0.0, 0.0);
        prop_assert!(approx(b.x, a.x * k, 1e-2 + 1e-4 * a.x.abs() * k));
        prop_assert!(approx(b.y, a.y * k, 1e-2 + 1e-4 * a.y.abs() * k));
    }

    // Orthographic: sliding a point along the viewing direction does not move it on screen
    #[test]
    fn no_foreshortening_along_view_axis(
        p in arb_point(),
        yaw in angle(),
        pitch in angle(),
        t in -500.0f32..500.0,
    ) {
        let cam = Camera::new(yaw, pitch, 1.0, Vec2::ZERO);
        // Unit vector that projects to zero: rotated-and-tilted +z axis.
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let dir = Vec3::new(sy * cp, sp, cy * cp);
        let a = cam.project(p);
        let b = cam.project(p + dir * t);
        prop_assert!(approx(a.x, b.x, 0.05), "{:?} vs {:?}", a, b);
        prop_assert!(approx(a.y, b.y, 0.05), "{:?} vs {:?}", a, b);
    }

    // Identical inputs give identical outputs
    #[test]
    fn projection_is_deterministic(p in arb_point(), yaw in angle(), pitch in angle()) {
        let a = project(p, yaw, pitch, 0.8, 512.0, 384.0);
        let b = project(p, yaw, pitch, 0.8, 512.0, 384.0);
        prop_assert_eq!(a, b);
    }

    // Footprint depth ignores height entirely
    #[test]
    fn footprint_depth_is_height_blind(p in arb_point(), dy in coord(), yaw in angle()) {
        let cam = Camera::new(yaw, 1.0, 1.0, Vec2::ZERO);
        let a = cam.depth_key(&[p], DepthMetric::Footprint);
        let b = cam.depth_key(&[Vec3::new(p.x, p.y + dy, p.z)], DepthMetric::Footprint);
        prop_assert_eq!(a, b);
    }
}
