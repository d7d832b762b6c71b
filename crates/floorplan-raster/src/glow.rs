use floorplan_blocks::Rgb;
use floorplan_geom::Vec2;
use serde::Deserialize;

use crate::canvas::Canvas;
use crate::polygon::{Clip, for_each_span};

/// Soft halo drawn beneath emissive faces.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Glow {
    /// Blur radius in pixels.
    pub radius: u32,
    /// Peak opacity of the halo, `0..=1`.
    pub strength: f32,
}

const PASSES: usize = 2;

/// Rasterizes `points` into a coverage mask, blurs it with two separable box
/// passes, normalizes the peak to one and blends `color` through the result.
pub fn draw_glow(canvas: &mut Canvas, points: &[Vec2], color: Rgb, glow: Glow) {
    if glow.strength <= 0.0 || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return;
    }
    let pad = (glow.radius as usize * PASSES) as f32;
    let (lo, hi) = points.iter().fold(
        (Vec2::new(f32::MAX, f32::MAX), Vec2::new(f32::MIN, f32::MIN)),
        |(lo, hi), p| {
            (
                Vec2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vec2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        },
    );
    let clip = Clip {
        x0: ((lo.x - pad).floor() as i32).max(0),
        y0: ((lo.y - pad).floor() as i32).max(0),
        x1: ((hi.x + pad).ceil() as i32).saturating_add(1).min(canvas.width() as i32),
        y1: ((hi.y + pad).ceil() as i32).saturating_add(1).min(canvas.height() as i32),
    };
    if clip.x0 >= clip.x1 || clip.y0 >= clip.y1 {
        return;
    }
    let w = (clip.x1 - clip.x0) as usize;
    let h = (clip.y1 - clip.y0) as usize;

    let mut mask = vec![0.0f32; w * h];
    for_each_span(points, clip, |y, x0, x1| {
        let row = (y - clip.y0) as usize * w;
        for x in x0..=x1 {
            mask[row + (x - clip.x0) as usize] = 1.0;
        }
    });

    let r = glow.radius as usize;
    if r > 0 {
        let mut tmp = vec![0.0f32; w * h];
        for _ in 0..PASSES {
            blur_pass(&mask, &mut tmp, w, h, r, true);
            blur_pass(&tmp, &mut mask, w, h, r, false);
        }
        // Small shapes would otherwise fade to nothing.
        let peak = mask.iter().copied().fold(0.0f32, f32::max);
        if peak > 0.0 {
            mask.iter_mut().for_each(|m| *m /= peak);
        }
    }

    for (i, &m) in mask.iter().enumerate() {
        if m > 0.0 {
            let x = clip.x0 + (i % w) as i32;
            let y = clip.y0 + (i / w) as i32;
            canvas.blend(x, y, color, m * glow.strength);
        }
    }
}

/// Running-sum box blur along rows (`horizontal`) or columns. Samples outside
/// the mask count as zero.
fn blur_pass(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize, horizontal: bool) {
    let (lines, len) = if horizontal { (h, w) } else { (w, h) };
    let at = |line: usize, i: usize| {
        if horizontal {
            line * w + i
        } else {
            i * w + line
        }
    };
    let norm = 1.0 / (2 * r + 1) as f32;
    for line in 0..lines {
        let mut sum: f32 = (0..=r.min(len - 1)).map(|i| src[at(line, i)]).sum();
        for i in 0..len {
            dst[at(line, i)] = sum * norm;
            if i + r + 1 < len {
                sum += src[at(line, i + r + 1)];
            }
            if i >= r {
                sum -= src[at(line, i - r)];
            }
        }
    }
}
