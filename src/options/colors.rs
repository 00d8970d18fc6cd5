use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::pastel::{generate_pastel_colors, repeat_color};

/// How residues are colored.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Each residue gets the next color of the pastel palette.
    #[default]
    PerResidue,
    /// Every residue gets the first pastel color.
    Uniform,
}

/// Residue and outline coloring options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ColorOptions {
    /// Residue coloring scheme.
    pub scheme: ColorScheme,
    /// Alpha applied to generated residue colors.
    pub alpha: f32,
    /// RGBA color of the ribbon outline.
    pub outline_color: [f32; 4],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::PerResidue,
            alpha: 1.0,
            outline_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl ColorOptions {
    /// One RGBA color per residue for `residues` residues.
    #[must_use]
    pub fn residue_colors(&self, residues: usize) -> Vec<[f32; 4]> {
        match self.scheme {
            ColorScheme::PerResidue => {
                generate_pastel_colors(residues, self.alpha)
            }
            ColorScheme::Uniform => generate_pastel_colors(1, self.alpha)
                .first()
                .map_or_else(Vec::new, |&c| repeat_color(c, residues)),
        }
    }
}
