//! Declarative scene layouts loaded from TOML.
//!
//! ```toml
//! [materials]
//! oak = "#c8a27a"
//!
//! [[blocks]]
//! x = -100.0
//! z = -50.0
//! width = 200.0
//! depth = 10.0
//! height = 110.0
//! material = "wall"
//! role = "wall"
//!
//! [[labels]]
//! text = "STUDIO"
//! at = [0.0, 3.0, 0.0]
//! ```
//!
//! Elements are added in the order: blocks, screens, lights, labels. Inline
//! materials extend (and override) the catalog passed to [`SceneLayout::into_scene`].

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use floorplan_blocks::material::{CatalogFull, MaterialEntry, UnknownMaterial};
use floorplan_blocks::{Block, MaterialCatalog, Rgb};
use floorplan_geom::Vec3;
use floorplan_mesh::{LightString, Screen};
use serde::Deserialize;
use thiserror::Error;

use crate::scene::Scene;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("{kind} #{index} has non-positive dimensions {width} x {depth} x {height}")]
    NonPositive {
        kind: &'static str,
        index: usize,
        width: f32,
        depth: f32,
        height: f32,
    },
    #[error("light string #{index} needs a positive bulb size, got {size}")]
    BulbSize { index: usize, size: f32 },
    #[error(transparent)]
    UnknownMaterial(#[from] UnknownMaterial),
    #[error(transparent)]
    Catalog(#[from] CatalogFull),
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockRole {
    #[default]
    Object,
    Ground,
    Wall,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlockSpec {
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub material: String,
    #[serde(default)]
    pub top: Option<Rgb>,
    #[serde(default)]
    pub role: BlockRole,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScreenSpec {
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub body: String,
    pub glow: Rgb,
}

fn default_bulb_size() -> f32 {
    3.0
}

#[derive(Clone, Debug, Deserialize)]
pub struct LightSpec {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub count: usize,
    #[serde(default)]
    pub sag: f32,
    #[serde(default = "default_bulb_size")]
    pub size: f32,
    #[serde(default)]
    pub colors: Vec<Rgb>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub at: [f32; 3],
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SceneLayout {
    #[serde(default)]
    pub materials: HashMap<String, MaterialEntry>,
    #[serde(default)]
    pub blocks: Vec<BlockSpec>,
    #[serde(default)]
    pub screens: Vec<ScreenSpec>,
    #[serde(default)]
    pub lights: Vec<LightSpec>,
    #[serde(default)]
    pub labels: Vec<LabelSpec>,
}

fn vec3([x, y, z]: [f32; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}

fn check_extent(
    kind: &'static str,
    index: usize,
    width: f32,
    depth: f32,
    height: f32,
) -> Result<(), LayoutError> {
    if width > 0.0 && depth > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::NonPositive {
            kind,
            index,
            width,
            depth,
            height,
        })
    }
}

impl SceneLayout {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Reads and validates a layout file against `base` in one step.
    pub fn load(path: impl AsRef<Path>, base: &MaterialCatalog) -> Result<Scene, Box<dyn Error>> {
        let path = path.as_ref();
        let scene = Self::from_path(path)?.into_scene(base)?;
        log::debug!("loaded {} scene elements from {}", scene.len(), path.display());
        Ok(scene)
    }

    /// Validates the layout and builds the scene.
    pub fn into_scene(self, base: &MaterialCatalog) -> Result<Scene, LayoutError> {
        let mut catalog = base.clone();
        catalog.extend_from(&MaterialCatalog::from_entries(self.materials)?)?;

        let mut scene = Scene::new();
        for (i, spec) in self.blocks.into_iter().enumerate() {
            check_extent("block", i, spec.width, spec.depth, spec.height)?;
            let material = catalog.resolve(&spec.material)?;
            let mut block = Block::new(spec.x, spec.z, spec.width, spec.depth, spec.height, material)
                .elevated(spec.y);
            if let Some(top) = spec.top {
                block = block.with_top_color(top);
            }
            match spec.role {
                BlockRole::Object => scene.block(block),
                BlockRole::Ground => scene.ground(block),
                BlockRole::Wall => scene.wall(block),
            }
        }
        for (i, spec) in self.screens.into_iter().enumerate() {
            check_extent("screen", i, spec.width, spec.depth, spec.height)?;
            scene.screen(Screen {
                x: spec.x,
                y: spec.y,
                z: spec.z,
                width: spec.width,
                depth: spec.depth,
                height: spec.height,
                body: catalog.resolve(&spec.body)?,
                glow: spec.glow,
            });
        }
        for (index, spec) in self.lights.into_iter().enumerate() {
            if !(spec.size > 0.0) {
                return Err(LayoutError::BulbSize {
                    index,
                    size: spec.size,
                });
            }
            scene.lights(LightString {
                start: vec3(spec.start),
                end: vec3(spec.end),
                count: spec.count,
                sag: spec.sag,
                size: spec.size,
                colors: spec.colors,
            });
        }
        for spec in self.labels {
            scene.label(spec.text, vec3(spec.at));
        }
        Ok(scene)
    }
}
