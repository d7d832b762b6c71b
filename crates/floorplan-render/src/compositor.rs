use std::cmp::Ordering;

use floorplan_blocks::{FaceKind, Rgb};
use floorplan_camera::{Camera, DepthMetric};
use floorplan_geom::Vec2;
use floorplan_mesh::{Face, Quad, emit_block, emit_light_string, emit_screen};
use floorplan_raster::{Canvas, draw_glow, fill_polygon, font, stroke_polygon};
use floorplan_scene::{Element, Scene};

use crate::config::{LabelConfig, StyleConfig};

/// Composited before [`Layer::Standing`] regardless of depth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Layer {
    Ground,
    Standing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape<'a> {
    Face(Face),
    Label { text: &'a str, at: Vec2 },
}

/// One entry of the draw sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive<'a> {
    pub layer: Layer,
    pub depth: f32,
    pub shape: Shape<'a>,
}

impl Primitive<'_> {
    fn draw_order(&self, other: &Self) -> Ordering {
        self.layer
            .cmp(&other.layer)
            .then_with(|| self.depth.total_cmp(&other.depth))
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub faces: usize,
    pub glows: usize,
    pub labels: usize,
}

/// Projects every face and label of `scene` in construction order.
pub fn collect<'a>(scene: &'a Scene, camera: &Camera, metric: DepthMetric) -> Vec<Primitive<'a>> {
    let mut out = Vec::with_capacity(scene.len() * 5);
    let mut quads: Vec<Quad> = Vec::with_capacity(16);
    for element in scene.elements() {
        quads.clear();
        let layer = match element {
            Element::Ground(b) => {
                emit_block(&mut quads, b);
                Layer::Ground
            }
            Element::Block(b) => {
                emit_block(&mut quads, b);
                Layer::Standing
            }
            Element::Screen(s) => {
                emit_screen(&mut quads, s);
                Layer::Standing
            }
            Element::Lights(l) => {
                emit_light_string(&mut quads, l);
                Layer::Standing
            }
            Element::Label(label) => {
                out.push(Primitive {
                    layer: Layer::Standing,
                    depth: camera.depth_key(&[label.anchor], metric),
                    shape: Shape::Label {
                        text: &label.text,
                        at: camera.project(label.anchor),
                    },
                });
                continue;
            }
        };
        out.extend(quads.iter().map(|q| {
            let face = q.project(camera, metric);
            Primitive {
                layer,
                depth: face.depth,
                shape: Shape::Face(face),
            }
        }));
    }
    out
}

/// Back-to-front. Stable, so equal keys keep construction order.
pub fn sort(primitives: &mut [Primitive<'_>]) {
    primitives.sort_by(Primitive::draw_order);
}

/// Painter's pass: draws `primitives` in slice order with no depth buffer.
pub fn draw(
    canvas: &mut Canvas,
    primitives: &[Primitive<'_>],
    style: &StyleConfig,
    labels: &LabelConfig,
) -> DrawStats {
    let mut stats = DrawStats::default();
    for p in primitives {
        match &p.shape {
            Shape::Face(face) => {
                draw_face(canvas, face, style, &mut stats);
                stats.faces += 1;
            }
            Shape::Label { text, at } => {
                draw_label(canvas, text, *at, labels);
                stats.labels += 1;
            }
        }
    }
    stats
}

fn draw_face(canvas: &mut Canvas, face: &Face, style: &StyleConfig, stats: &mut DrawStats) {
    let pts = &face.points;
    match face.kind {
        FaceKind::Plain => {
            fill_polygon(canvas, pts, face.color, 1.0);
            stroke_polygon(canvas, pts, Rgb::BLACK, style.stroke_alpha);
        }
        FaceKind::TopBand => {
            fill_polygon(canvas, pts, face.color, 1.0);
            stroke_polygon(canvas, pts, Rgb::BLACK, style.band_stroke_alpha);
        }
        FaceKind::Light => {
            draw_glow(canvas, pts, face.color, style.light_glow);
            fill_polygon(canvas, pts, face.color, 1.0);
            stats.glows += 1;
        }
        FaceKind::Screen => {
            draw_glow(canvas, pts, face.color, style.screen_glow);
            fill_polygon(canvas, pts, face.color, 1.0);
            stroke_polygon(canvas, pts, Rgb::BLACK, style.stroke_alpha);
            stats.glows += 1;
        }
    }
}

const PLATE_PAD: i32 = 3;

fn draw_label(canvas: &mut Canvas, text: &str, at: Vec2, cfg: &LabelConfig) {
    if text.is_empty() || !(at.x.is_finite() && at.y.is_finite()) {
        return;
    }
    let (w, h) = font::text_size(text, cfg.scale);
    let (x, y) = font::centered_origin(at, text, cfg.scale);
    let pad = 2 * PLATE_PAD as u32;
    canvas.fill_rect(
        x.saturating_sub(PLATE_PAD),
        y.saturating_sub(PLATE_PAD),
        w.saturating_add(pad),
        h.saturating_add(pad),
        cfg.plate,
        cfg.plate_alpha,
    );
    font::draw_text(canvas, x, y, text, cfg.color, cfg.scale);
}
