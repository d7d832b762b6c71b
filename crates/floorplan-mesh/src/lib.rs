//! Block builder: turns block descriptions into shaded, oriented quads.
#![forbid(unsafe_code)]

pub mod emit;
pub mod face;

pub use emit::{FaceSink, LightString, Screen, block_quads, emit_block, emit_light_string, emit_screen};
pub use face::{BoxFace, EMITTED_FACES, Face, Quad};

pub use floorplan_blocks::FaceKind;
