use std::f32::consts::PI;

use floorplan_blocks::{Block, FaceKind, Material, Rgb};
use floorplan_geom::Vec3;

use crate::face::{BoxFace, EMITTED_FACES, Quad};

/// Destination for emitted quads.
pub trait FaceSink {
    fn push_quad(&mut self, quad: Quad);
}

impl FaceSink for Vec<Quad> {
    #[inline]
    fn push_quad(&mut self, quad: Quad) {
        self.push(quad);
    }
}

/// The five visible faces of `block`: top, front, back, left, right.
pub fn block_quads(block: &Block) -> [Quad; 5] {
    let corners = block.aabb().corners();
    EMITTED_FACES.map(|face| {
        let (color, kind) = match face {
            BoxFace::Top => (
                block
                    .top_color
                    .unwrap_or_else(|| block.material.shade(face.role())),
                block.top_kind,
            ),
            _ => (block.material.shade(face.role()), FaceKind::Plain),
        };
        Quad {
            corners: face.corner_indices().map(|i| corners[i]),
            color,
            kind,
        }
    })
}

/// Emits the five visible faces of a block.
#[inline]
pub fn emit_block(sink: &mut impl FaceSink, block: &Block) {
    for q in block_quads(block) {
        sink.push_quad(q);
    }
}

/// Thin dark box whose top face glows, standing in for a monitor or TV.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Screen {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub body: Material,
    pub glow: Rgb,
}

impl Screen {
    pub fn block(&self) -> Block {
        Block::new(
            self.x,
            self.z,
            self.width,
            self.depth,
            self.height,
            self.body,
        )
        .elevated(self.y)
        .with_top_color(self.glow)
        .with_top_kind(FaceKind::Screen)
    }
}

#[inline]
pub fn emit_screen(sink: &mut impl FaceSink, screen: &Screen) {
    emit_block(sink, &screen.block());
}

/// String of glowing bulbs draped between two anchors.
///
/// Only the bulbs are emitted; the cable is implied by their sag.
#[derive(Clone, Debug, PartialEq)]
pub struct LightString {
    pub start: Vec3,
    pub end: Vec3,
    pub count: usize,
    /// Maximum droop at the middle of the span.
    pub sag: f32,
    /// Half-diagonal of each diamond.
    pub size: f32,
    /// Bulb colors, cycled by index.
    pub colors: Vec<Rgb>,
}

impl LightString {
    /// Center of bulb `i`. A pure function of the index.
    pub fn bulb_center(&self, i: usize) -> Vec3 {
        let t = (i as f32 + 0.5) / self.count.max(1) as f32;
        let along = self.start + (self.end - self.start) * t;
        let droop = self.sag * (PI * t).sin();
        // Alternate bulbs hang a little lower on their leads.
        let lead = if i % 2 == 1 { self.size * 0.6 } else { 0.0 };
        Vec3::new(along.x, along.y - droop - lead, along.z)
    }

    pub fn bulb_color(&self, i: usize) -> Rgb {
        if self.colors.is_empty() {
            Rgb::WHITE
        } else {
            self.colors[i % self.colors.len()]
        }
    }
}

/// Emits one diamond quad per bulb, all `FaceKind::Light`.
pub fn emit_light_string(sink: &mut impl FaceSink, lights: &LightString) {
    let s = lights.size;
    for i in 0..lights.count {
        let c = lights.bulb_center(i);
        sink.push_quad(Quad {
            corners: [
                Vec3::new(c.x, c.y + s, c.z),
                Vec3::new(c.x + s, c.y, c.z),
                Vec3::new(c.x, c.y - s, c.z),
                Vec3::new(c.x - s, c.y, c.z),
            ],
            color: lights.bulb_color(i),
            kind: FaceKind::Light,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> Block {
        Block::new(10.0, 20.0, 30.0, 40.0, 50.0, Material::lit(Rgb::new(200, 150, 100)))
    }

    #[test]
    fn quads_follow_emitted_face_order() {
        let b = sample_block();
        let qs = block_quads(&b);
        // top
        assert!(qs[0].corners.iter().all(|p| p.y == 50.0));
        // front at max z, back at min z
        assert!(qs[1].corners.iter().all(|p| p.z == 60.0));
        assert!(qs[2].corners.iter().all(|p| p.z == 20.0));
        // left at min x, right at max x
        assert!(qs[3].corners.iter().all(|p| p.x == 10.0));
        assert!(qs[4].corners.iter().all(|p| p.x == 40.0));
    }

    #[test]
    fn shades_come_from_material_roles() {
        let b = sample_block();
        let m = b.material;
        let qs = block_quads(&b);
        assert_eq!(qs[0].color, m.top);
        assert_eq!(qs[1].color, m.front);
        assert_eq!(qs[2].color, m.back);
        assert_eq!(qs[3].color, m.side);
        assert_eq!(qs[4].color, m.side);
    }

    #[test]
    fn top_override_only_touches_top() {
        let b = sample_block()
            .with_top_color(Rgb::new(1, 2, 3))
            .with_top_kind(FaceKind::TopBand);
        let qs = block_quads(&b);
        assert_eq!(qs[0].color, Rgb::new(1, 2, 3));
        assert_eq!(qs[0].kind, FaceKind::TopBand);
        for q in &qs[1..] {
            assert_ne!(q.color, Rgb::new(1, 2, 3));
            assert_eq!(q.kind, FaceKind::Plain);
        }
    }

    #[test]
    fn elevated_block_is_shifted() {
        let b = sample_block().elevated(7.0);
        let qs = block_quads(&b);
        assert!(qs[0].corners.iter().all(|p| p.y == 57.0));
        let min_y = qs[1].corners.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert_eq!(min_y, 7.0);
    }

    #[test]
    fn screen_top_glows() {
        let screen = Screen {
            x: 0.0,
            y: 30.0,
            z: 0.0,
            width: 40.0,
            depth: 25.0,
            height: 3.0,
            body: Material::lit(Rgb::new(30, 30, 35)),
            glow: Rgb::new(120, 200, 255),
        };
        let mut out = Vec::new();
        emit_screen(&mut out, &screen);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0].kind, FaceKind::Screen);
        assert_eq!(out[0].color, Rgb::new(120, 200, 255));
        assert!(out[1..].iter().all(|q| q.kind == FaceKind::Plain));
    }

    #[test]
    fn light_string_droops_in_the_middle() {
        let lights = LightString {
            start: Vec3::new(0.0, 100.0, 0.0),
            end: Vec3::new(100.0, 100.0, 0.0),
            count: 9,
            sag: 12.0,
            size: 2.0,
            colors: vec![Rgb::new(255, 220, 140)],
        };
        let mid = lights.bulb_center(4);
        let first = lights.bulb_center(0);
        assert!(mid.y < first.y);
        assert!((mid.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn light_string_emits_diamonds() {
        let lights = LightString {
            start: Vec3::new(0.0, 0.0, 0.0),
            end: Vec3::new(60.0, 0.0, 0.0),
            count: 6,
            sag: 0.0,
            size: 3.0,
            colors: vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)],
        };
        let mut out: Vec<Quad> = Vec::new();
        emit_light_string(&mut out, &lights);
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|q| q.kind == FaceKind::Light));
        assert_eq!(out[0].color, Rgb::new(255, 0, 0));
        assert_eq!(out[1].color, Rgb::new(0, 255, 0));
        let q = out[0];
        let c = q.centroid();
        for p in q.corners {
            let d = (p - c).length();
            assert!((d - 3.0).abs() < 1e-4);
        }
    }
}
