//! Colors, materials, and block descriptions.
#![forbid(unsafe_code)]

pub mod block;
pub mod color;
pub mod material;
pub mod types;

pub use block::Block;
pub use color::Rgb;
pub use material::{CatalogFull, Material, MaterialCatalog, MaterialId};
pub use types::{FaceKind, FaceRole};
