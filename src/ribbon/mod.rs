//! Ribbon mesh generation from a refined backbone curve.
//!
//! Every curve point is offset to both sides along its arc normal, giving two
//! vertices per point. Points are grouped into residues of three (sharing one
//! point with the next residue), so each residue owns six vertices and four
//! triangles. A closed outline loop and per-vertex colors are derived from
//! the same vertex layout.

mod color;
mod mesh;
mod outline;

pub use color::expand_residue_colors;
pub use mesh::{residue_count, triangle_indices, vertex_count};
pub use outline::outline_indices;

use crate::error::RibbonError;
use crate::geometry::Curve;
use crate::options::RibbonOptions;

/// Curve points per residue group (the last one shared with the next group).
pub const POINTS_PER_RESIDUE: usize = 3;

/// Vertices emitted per residue group.
pub const VERTICES_PER_RESIDUE: usize = 2 * POINTS_PER_RESIDUE;

/// Local triangle pattern over one residue's six vertices.
pub const RESIDUE_INDEX_PATTERN: [u32; 12] =
    [0, 1, 2, 1, 3, 2, 2, 3, 4, 3, 5, 4];

/// Flat buffers for one ribbon, ready for upload by an external renderer.
///
/// Built once from a [`Curve`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonMesh {
    vertices: Vec<[f32; 3]>,
    indices: Vec<u32>,
    outline_indices: Vec<u32>,
    colors: Vec<[f32; 4]>,
    outline_colors: Vec<[f32; 4]>,
    residue_count: usize,
}

impl RibbonMesh {
    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Vertex positions as a flat `x, y, z, x, y, z, ...` slice.
    #[must_use]
    pub fn vertex_components(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle list indices, 12 per residue.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Closed line-strip indices around the ribbon border.
    #[must_use]
    pub fn outline_indices(&self) -> &[u32] {
        &self.outline_indices
    }

    /// Per-vertex RGBA, index-aligned with [`Self::vertices`].
    #[must_use]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Per-vertex RGBA for the outline pass.
    #[must_use]
    pub fn outline_colors(&self) -> &[[f32; 4]] {
        &self.outline_colors
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of residue groups.
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.residue_count
    }

    /// Vertex buffer bytes.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle index buffer bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Outline index buffer bytes.
    #[must_use]
    pub fn outline_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.outline_indices)
    }

    /// Color buffer bytes.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Outline color buffer bytes.
    #[must_use]
    pub fn outline_color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.outline_colors)
    }

    /// Buffer sizes: `(label, bytes)`.
    #[must_use]
    pub fn buffer_info(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Ribbon Vertex", self.vertex_bytes().len()),
            ("Ribbon Index", self.index_bytes().len()),
            ("Ribbon Outline Index", self.outline_index_bytes().len()),
            ("Ribbon Color", self.color_bytes().len()),
            ("Ribbon Outline Color", self.outline_color_bytes().len()),
        ]
    }
}

/// Build the ribbon mesh for a refined curve.
///
/// `thickness` perturbs the half-width per curve point
/// (`pitch = base_pitch + thickness[i]`); `None` means no perturbation.
/// `residue_colors` holds one RGBA per residue group; `outline_color` is
/// repeated for every outline vertex.
///
/// # Errors
///
/// - [`RibbonError::InvalidInput`] when the curve does not have `2k + 1`
///   points (k ≥ 1), `thickness` is shorter than the curve, or the number
///   of colors differs from the residue count.
/// - [`RibbonError::AllocationFailure`] when a buffer cannot be reserved or
///   the vertex count does not fit in a `u32` index.
pub fn build_ribbon_mesh(
    curve: &Curve,
    thickness: Option<&[f32]>,
    residue_colors: &[[f32; 4]],
    outline_color: [f32; 4],
    options: &RibbonOptions,
) -> Result<RibbonMesh, RibbonError> {
    let point_count = curve.len();
    let residues = residue_count(point_count)?;

    if let Some(t) = thickness {
        if t.len() < point_count {
            return Err(RibbonError::InvalidInput(format!(
                "thickness has {} values for {point_count} curve points",
                t.len()
            )));
        }
    }
    if residue_colors.len() != residues {
        return Err(RibbonError::InvalidInput(format!(
            "{} residue colors for {residues} residues",
            residue_colors.len()
        )));
    }

    let base_pitch = options.base_pitch;
    let pitch = |i: usize| base_pitch + thickness.map_or(0.0, |t| t[i]);

    let vertices = mesh::emit_vertices(curve, residues, pitch)?;
    let indices = triangle_indices(residues)?;
    let outline_indices = outline_indices(vertices.len())?;
    let colors = expand_residue_colors(residue_colors)?;
    let outline_colors = color::expand_uniform_color(outline_color, residues)?;

    log::debug!(
        "ribbon mesh: {} vertices, {} indices, {} outline indices, {residues} residues",
        vertices.len(),
        indices.len(),
        outline_indices.len(),
    );

    Ok(RibbonMesh {
        vertices,
        indices,
        outline_indices,
        colors,
        outline_colors,
        residue_count: residues,
    })
}
