use serde::Deserialize;

/// Orientation class of a block face, used to pick a shade from its material.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FaceRole {
    Top,
    Front,
    Back,
    Side,
}

/// Draw style of a face.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaceKind {
    #[default]
    Plain,
    /// Glowing point light (fairy lights).
    Light,
    /// Emissive display surface.
    Screen,
    /// Cut cap on top of a wall.
    TopBand,
}
