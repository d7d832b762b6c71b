use floorplan_blocks::Rgb;
use floorplan_geom::Vec2;
use floorplan_raster::{Canvas, fill_polygon, stroke_polygon};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vec2> {
    (-20.0f32..84.0, -20.0f32..84.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    // Filled pixels never leave the polygon's bounding box
    #[test]
    fn fill_stays_inside_bounds(pts in prop::array::uniform4(point())) {
        let mut c = Canvas::new(64, 64, Rgb::WHITE).unwrap();
        fill_polygon(&mut c, &pts, Rgb::BLACK, 1.0);
        let min_x = pts.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let max_x = pts.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let min_y = pts.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = pts.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        for (x, y, p) in c.image().enumerate_pixels() {
            if p[0] == 0 {
                let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                prop_assert!(cx >= min_x && cx <= max_x, "x {x} outside {min_x}..{max_x}");
                prop_assert!(cy >= min_y && cy <= max_y, "y {y} outside {min_y}..{max_y}");
            }
        }
    }

    // An opaque fill hides whatever was drawn before it
    #[test]
    fn later_opaque_fill_wins(pts in prop::array::uniform3(point())) {
        let mut under = Canvas::new(64, 64, Rgb::WHITE).unwrap();
        let mut direct = Canvas::new(64, 64, Rgb::WHITE).unwrap();
        let red = Rgb::new(220, 30, 30);
        let blue = Rgb::new(30, 30, 220);
        let full = [
            Vec2::new(0.0, 0.0),
            Vec2::new(64.0, 0.0),
            Vec2::new(64.0, 64.0),
            Vec2::new(0.0, 64.0),
        ];
        fill_polygon(&mut under, &full, red, 1.0);
        fill_polygon(&mut under, &pts, blue, 1.0);
        fill_polygon(&mut direct, &full, red, 1.0);
        fill_polygon(&mut direct, &pts, blue, 1.0);
        prop_assert_eq!(under.image(), direct.image());
        for p in under.image().pixels() {
            prop_assert!(p.0 == [220, 30, 30, 255] || p.0 == [30, 30, 220, 255]);
        }
    }

    // Strokes are clipped, never panic, and are deterministic
    #[test]
    fn stroke_is_safe_anywhere(pts in prop::array::uniform4(point())) {
        let mut a = Canvas::new(64, 64, Rgb::WHITE).unwrap();
        let mut b = Canvas::new(64, 64, Rgb::WHITE).unwrap();
        stroke_polygon(&mut a, &pts, Rgb::BLACK, 0.08);
        stroke_polygon(&mut b, &pts, Rgb::BLACK, 0.08);
        prop_assert_eq!(a.image(), b.image());
    }
}
