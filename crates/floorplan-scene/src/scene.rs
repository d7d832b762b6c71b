use floorplan_blocks::{Block, FaceKind};
use floorplan_geom::Vec3;
use floorplan_mesh::{LightString, Screen};

/// Longest wall piece [`Scene::wall`] emits. Long walls are cut so each piece
/// sorts near the furniture beside it.
pub const WALL_SEGMENT: f32 = 40.0;

/// Text anchored at a world point, sorted like any face.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Floor slabs and rugs, composited before everything standing on them.
    Ground(Block),
    Block(Block),
    Screen(Screen),
    Lights(LightString),
    Label(Label),
}

/// Ordered scene description. Construction order breaks depth ties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn ground(&mut self, block: Block) {
        self.push(Element::Ground(block));
    }

    pub fn block(&mut self, block: Block) {
        self.push(Element::Block(block));
    }

    /// Adds a wall cut into segments, each capped with a top band.
    pub fn wall(&mut self, block: Block) {
        for piece in split_wall(&block, WALL_SEGMENT) {
            self.block(piece.with_top_kind(FaceKind::TopBand));
        }
    }

    pub fn screen(&mut self, screen: Screen) {
        self.push(Element::Screen(screen));
    }

    pub fn lights(&mut self, lights: LightString) {
        self.push(Element::Lights(lights));
    }

    pub fn label(&mut self, text: impl Into<String>, anchor: Vec3) {
        self.push(Element::Label(Label {
            text: text.into(),
            anchor,
        }));
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every block in the scene, including screen bodies.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Ground(b) | Element::Block(b) => Some(*b),
            Element::Screen(s) => Some(s.block()),
            Element::Lights(_) | Element::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.elements.iter().filter_map(|e| match e {
            Element::Label(l) => Some(l),
            _ => None,
        })
    }
}

/// Cuts `block` along its longer horizontal axis into equal pieces no longer
/// than `max_len`.
pub fn split_wall(block: &Block, max_len: f32) -> Vec<Block> {
    let along_x = block.width >= block.depth;
    let len = if along_x { block.width } else { block.depth };
    if !(max_len > 0.0) || len <= max_len {
        return vec![*block];
    }
    let n = (len / max_len).ceil() as usize;
    let piece = len / n as f32;
    (0..n)
        .map(|i| {
            let mut b = *block;
            let offset = piece * i as f32;
            if along_x {
                b.x += offset;
                b.width = piece;
            } else {
                b.z += offset;
                b.depth = piece;
            }
            b
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_blocks::{Material, Rgb};

    fn wall(w: f32, d: f32) -> Block {
        Block::new(-100.0, 5.0, w, d, 110.0, Material::lit(Rgb::new(240, 236, 228)))
    }

    #[test]
    fn short_wall_is_kept_whole() {
        assert_eq!(split_wall(&wall(30.0, 10.0), 40.0), vec![wall(30.0, 10.0)]);
    }

    #[test]
    fn long_wall_is_cut_along_its_length() {
        let pieces = split_wall(&wall(10.0, 100.0), 40.0);
        assert_eq!(pieces.len(), 3);
        let total: f32 = pieces.iter().map(|b| b.depth).sum();
        assert!((total - 100.0).abs() < 1e-3);
        assert!(pieces.iter().all(|b| b.width == 10.0 && b.x == -100.0));
        assert_eq!(pieces[0].z, 5.0);
        assert!((pieces[2].z + pieces[2].depth - 105.0).abs() < 1e-3);
    }

    #[test]
    fn wall_pieces_get_top_bands() {
        let mut s = Scene::new();
        s.wall(wall(120.0, 10.0));
        assert_eq!(s.len(), 3);
        assert!(s.blocks().all(|b| b.top_kind == FaceKind::TopBand));
    }

    #[test]
    fn blocks_include_screen_bodies_and_skip_labels() {
        let mut s = Scene::new();
        s.block(wall(10.0, 10.0));
        s.label("HALL", Vec3::ZERO);
        s.screen(Screen {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            width: 10.0,
            depth: 5.0,
            height: 1.0,
            body: Material::flat(Rgb::BLACK),
            glow: Rgb::WHITE,
        });
        assert_eq!(s.blocks().count(), 2);
        assert_eq!(s.labels().count(), 1);
        assert_eq!(s.labels().next().map(|l| l.text.as_str()), Some("HALL"));
    }
}
