use glam::Vec3;

use crate::error::RibbonError;
use crate::geometry::{refine_curve, Curve, Point3};
use crate::options::Options;
use crate::ribbon::{build_ribbon_mesh, RibbonMesh};

/// One loaded structure: its refined curve, residue colors, and ribbon mesh.
///
/// All three are derived together at build time and never mutated; replacing
/// a structure builds a new view.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureView {
    name: String,
    curve: Curve,
    residue_colors: Vec<[f32; 4]>,
    mesh: RibbonMesh,
}

impl StructureView {
    /// Run the full pipeline on one chain of backbone positions (one per
    /// residue, typically CA atoms).
    ///
    /// `thickness`, when given, holds one additive half-width perturbation
    /// per refined curve point (`2 * positions.len() + 1` values).
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidInput`] for fewer than three positions or
    /// mismatched thickness, [`RibbonError::AllocationFailure`] when a
    /// buffer cannot be reserved. Nothing is kept on failure.
    pub fn build(
        name: impl Into<String>,
        positions: &[Vec3],
        thickness: Option<&[f32]>,
        options: &Options,
    ) -> Result<Self, RibbonError> {
        let name = name.into();
        let points: Vec<Point3> =
            positions.iter().copied().map(Point3::from).collect();
        let curve = refine_curve(&points)?;
        let residue_colors = options.colors.residue_colors(positions.len());
        let mesh = build_ribbon_mesh(
            &curve,
            thickness,
            &residue_colors,
            options.colors.outline_color,
            &options.ribbon,
        )?;

        log::info!(
            "Built view '{name}': {} residues, {} curve points, {} vertices",
            positions.len(),
            curve.len(),
            mesh.vertex_count(),
        );

        Ok(Self {
            name,
            curve,
            residue_colors,
            mesh,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Refined backbone curve.
    #[must_use]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// One RGBA color per residue.
    #[must_use]
    pub fn residue_colors(&self) -> &[[f32; 4]] {
        &self.residue_colors
    }

    /// Ribbon buffers for the renderer.
    #[must_use]
    pub fn mesh(&self) -> &RibbonMesh {
        &self.mesh
    }

    /// Number of residues (input backbone points).
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.residue_colors.len()
    }
}
