use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::color::Rgb;
use crate::types::FaceRole;

// Brightness factors approximating a light from above and slightly in front.
const TOP_SHADE: f32 = 1.0;
const FRONT_SHADE: f32 = 0.82;
const SIDE_SHADE: f32 = 0.68;
const BACK_SHADE: f32 = 0.58;

/// Per-orientation shades of one surface finish, attached to a block at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Material {
    pub base: Rgb,
    pub top: Rgb,
    pub front: Rgb,
    pub side: Rgb,
    pub back: Rgb,
}

impl Material {
    /// Every face uses `base` unshaded.
    pub const fn flat(base: Rgb) -> Self {
        Self {
            base,
            top: base,
            front: base,
            side: base,
            back: base,
        }
    }

    /// Shades derived from `base` by the fixed directional factors.
    pub fn lit(base: Rgb) -> Self {
        Self {
            base,
            top: base.scale(TOP_SHADE),
            front: base.scale(FRONT_SHADE),
            side: base.scale(SIDE_SHADE),
            back: base.scale(BACK_SHADE),
        }
    }

    #[inline]
    pub fn shade(&self, role: FaceRole) -> Rgb {
        match role {
            FaceRole::Top => self.top,
            FaceRole::Front => self.front,
            FaceRole::Side => self.side,
            FaceRole::Back => self.back,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MaterialId(pub u16);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown material {0:?}")]
pub struct UnknownMaterial(pub String);

/// Ids are `u16`, so a catalog holds at most 65,536 materials.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("material catalog is full ({0} entries); cannot add {1:?}")]
pub struct CatalogFull(pub usize, pub String);

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<(String, Material)>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// Inserts or replaces `key`. Replacing keeps the existing id.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        material: Material,
    ) -> Result<MaterialId, CatalogFull> {
        let key = key.into();
        if let Some(&id) = self.by_key.get(&key) {
            self.materials[id.0 as usize].1 = material;
            return Ok(id);
        }
        let Ok(raw) = u16::try_from(self.materials.len()) else {
            return Err(CatalogFull(self.materials.len(), key));
        };
        let id = MaterialId(raw);
        self.by_key.insert(key.clone(), id);
        self.materials.push((key, material));
        Ok(id)
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize).map(|(_, m)| m)
    }

    /// Looks a material up by name. Unknown names are an error, never an unshaded fallback.
    pub fn resolve(&self, key: &str) -> Result<Material, UnknownMaterial> {
        self.get_id(key)
            .and_then(|id| self.get(id))
            .copied()
            .ok_or_else(|| UnknownMaterial(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Entries of `other` are added, replacing same-named ones.
    pub fn extend_from(&mut self, other: &MaterialCatalog) -> Result<(), CatalogFull> {
        for (key, m) in &other.materials {
            self.insert(key.clone(), *m)?;
        }
        Ok(())
    }

    /// Palette of the canonical floor plan.
    pub fn builtin() -> Self {
        const LIT: &[(&str, u32)] = &[
            ("floor_wood", 0xc9a27e),
            ("floor_tile", 0xdde3e6),
            ("floor_carpet", 0xb8c4a9),
            ("floor_hall", 0xd8c3a5),
            ("sofa", 0x5f7185),
            ("cushion", 0xe9c46a),
            ("rug", 0xd9b99b),
            ("coffee_table", 0x8d6e63),
            ("tv_stand", 0x4e4a47),
            ("counter", 0xb0a89f),
            ("cabinet", 0xe8e2d6),
            ("fridge", 0xdfe4e8),
            ("dining_table", 0xa47551),
            ("chair", 0x6d4c41),
            ("bed_frame", 0x8b6b4a),
            ("mattress", 0xf4f1ec),
            ("blanket", 0x7fa7c9),
            ("pillow", 0xffffff),
            ("wardrobe", 0xa1887f),
            ("desk", 0x9c7b5b),
            ("monitor", 0x2b2d31),
            ("bathtub", 0xf7f9fa),
            ("toilet", 0xfbfbfb),
            ("vanity", 0xcfd8dc),
            ("plant", 0x6a994e),
            ("planter", 0xbc6c25),
            ("shelf", 0x8b5e3c),
            ("doormat", 0x8d7b68),
            ("radiator", 0xe0e0e0),
        ];
        let wall = Material {
            top: Rgb::from_u32(0x5b534b),
            ..Material::lit(Rgb::from_u32(0xf1ece4))
        };
        let fixed = [("wall", wall), ("glass", Material::flat(Rgb::from_u32(0xa9d6e5)))];
        let lit = LIT
            .iter()
            .map(|&(key, hex)| (key, Material::lit(Rgb::from_u32(hex))));

        let mut cat = MaterialCatalog::new();
        for (key, material) in fixed.into_iter().chain(lit) {
            // A few dozen entries, far below the id limit.
            let _ = cat.insert(key, material);
        }
        cat
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        Ok(Self::from_entries(cfg.materials)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_entries(entries: HashMap<String, MaterialEntry>) -> Result<Self, CatalogFull> {
        let mut catalog = MaterialCatalog::new();
        let mut entries: Vec<(String, MaterialEntry)> = entries.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so MaterialId assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            catalog.insert(key, entry.into_material())?;
        }
        Ok(catalog)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum MaterialEntry {
    // Simple: oak = "#c8a27a"
    Base(Rgb),
    // Detailed: oak = { base = "#c8a27a", top = "#d9b38b", flat = false }
    Detail {
        base: Rgb,
        top: Option<Rgb>,
        front: Option<Rgb>,
        side: Option<Rgb>,
        back: Option<Rgb>,
        #[serde(default)]
        flat: bool,
    },
}

impl MaterialEntry {
    pub fn into_material(self) -> Material {
        match self {
            MaterialEntry::Base(base) => Material::lit(base),
            MaterialEntry::Detail {
                base,
                top,
                front,
                side,
                back,
                flat,
            } => {
                let derived = if flat {
                    Material::flat(base)
                } else {
                    Material::lit(base)
                };
                Material {
                    base,
                    top: top.unwrap_or(derived.top),
                    front: front.unwrap_or(derived.front),
                    side: side.unwrap_or(derived.side),
                    back: back.unwrap_or(derived.back),
                }
            }
        }
    }
}
