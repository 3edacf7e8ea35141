use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the V texture coordinate is inverted on import.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TexCoordV {
    /// `v' = -v`, for textures sampled with wrapping (DDS-style top-down
    /// images).
    #[default]
    Negate,
    /// `v' = 1 - v`, for clamped top-down images.
    OneMinus,
    /// Leave V untouched.
    Keep,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[schemars(title = "Import", inline)]
#[serde(default)]
/// Model import parameters.
pub struct ImportOptions {
    /// Texture-coordinate V convention.
    #[schemars(title = "Texture V")]
    pub texcoord_v: TexCoordV,
}
