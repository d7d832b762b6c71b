//! Scene model, the canonical floor plan and declarative TOML layouts.
#![forbid(unsafe_code)]

pub mod layout;
mod plan;
mod scene;

pub use layout::{LayoutError, SceneLayout};
pub use plan::{FLOOR_HEIGHT, floor_plan, floor_plan_with};
pub use scene::{Element, Label, Scene, WALL_SEGMENT, split_wall};
