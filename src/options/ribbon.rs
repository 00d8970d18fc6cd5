use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Ribbon shape options.
pub struct RibbonOptions {
    /// Half-width of the ribbon in angstroms, before any per-point
    /// thickness perturbation.
    pub base_pitch: f32,
}

impl Default for RibbonOptions {
    fn default() -> Self {
        Self { base_pitch: 0.75 }
    }
}
