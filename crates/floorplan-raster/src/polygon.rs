use floorplan_blocks::Rgb;
use floorplan_geom::Vec2;

use crate::canvas::Canvas;

/// Pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Clip {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Calls `span(y, x_start, x_end)` (inclusive) for every run of pixels whose
/// centers fall inside `points`, using the even-odd rule.
pub(crate) fn for_each_span(points: &[Vec2], clip: Clip, mut span: impl FnMut(i32, i32, i32)) {
    if points.len() < 3 || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return;
    }
    let (min_y, max_y) = points
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let row_start = (min_y.floor() as i32).max(clip.y0);
    let row_end = (max_y.ceil() as i32).min(clip.y1 - 1);

    let mut xs: Vec<f32> = Vec::with_capacity(points.len());
    for y in row_start..=row_end {
        let yc = y as f32 + 0.5;
        xs.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                xs.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        xs.sort_by(f32::total_cmp);
        for pair in xs.chunks_exact(2) {
            let start = ((pair[0] - 0.5).ceil() as i32).max(clip.x0);
            let end = ((pair[1] - 0.5).ceil() as i32).saturating_sub(1).min(clip.x1 - 1);
            if start <= end {
                span(y, start, end);
            }
        }
    }
}

fn full(canvas: &Canvas) -> Clip {
    Clip {
        x0: 0,
        y0: 0,
        x1: canvas.width() as i32,
        y1: canvas.height() as i32,
    }
}

/// Scanline fill of a simple polygon.
pub fn fill_polygon(canvas: &mut Canvas, points: &[Vec2], color: Rgb, alpha: f32) {
    let clip = full(canvas);
    for_each_span(points, clip, |y, x0, x1| canvas.span(y, x0, x1, color, alpha));
}

/// Parameter range `[t0, t1]` of `a + t * d` that lies inside `[lo, hi]` on
/// both axes (Liang-Barsky).
fn clip_segment(a: Vec2, d: Vec2, lo: Vec2, hi: Vec2) -> Option<(f64, f64)> {
    let (ax, ay, dx, dy) = (f64::from(a.x), f64::from(a.y), f64::from(d.x), f64::from(d.y));
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, ax - f64::from(lo.x)),
        (dx, f64::from(hi.x) - ax),
        (-dy, ay - f64::from(lo.y)),
        (dy, f64::from(hi.y) - ay),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    (t0 <= t1).then_some((t0, t1))
}

/// One-pixel line from `a` to `b`, excluding the end point. Only the steps
/// that can land on the surface are walked.
pub fn draw_line(canvas: &mut Canvas, a: Vec2, b: Vec2, color: Rgb, alpha: f32) {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return;
    }
    let d = b - a;
    let steps = f64::from(d.x.abs().max(d.y.abs())).ceil();
    if steps == 0.0 {
        canvas.blend(a.x.floor() as i32, a.y.floor() as i32, color, alpha);
        return;
    }
    let lo = Vec2::new(-1.0, -1.0);
    let hi = Vec2::new(canvas.width() as f32 + 1.0, canvas.height() as f32 + 1.0);
    let Some((t0, t1)) = clip_segment(a, d, lo, hi) else {
        return;
    };
    let first = (t0 * steps).floor().max(0.0);
    let last = ((t1 * steps).ceil() + 1.0).min(steps);
    // The clipped run never needs more steps than the padded surface is long.
    let limit = f64::from(canvas.width().max(canvas.height())) + 6.0;
    let count = (last - first).clamp(0.0, limit) as u32;
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(d.x) / steps, f64::from(d.y) / steps);
    for i in 0..count {
        let k = first + f64::from(i);
        canvas.blend((ax + dx * k).floor() as i32, (ay + dy * k).floor() as i32, color, alpha);
    }
}

/// Closed outline through `points`.
pub fn stroke_polygon(canvas: &mut Canvas, points: &[Vec2], color: Rgb, alpha: f32) {
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(canvas, a, b, color, alpha);
    }
}
