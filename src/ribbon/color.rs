//! Per-residue colors expanded to per-vertex colors.

use super::VERTICES_PER_RESIDUE;
use crate::error::{checked_size, try_vec, RibbonError};

/// Repeat each residue color once per residue vertex, in emission order, so
/// the result is index-aligned with the ribbon vertex buffer.
///
/// # Errors
///
/// [`RibbonError::AllocationFailure`] when the buffer cannot be reserved.
pub fn expand_residue_colors(
    residue_colors: &[[f32; 4]],
) -> Result<Vec<[f32; 4]>, RibbonError> {
    expand(residue_colors.iter().copied(), residue_colors.len())
}

/// Per-vertex buffer with one color for every vertex of `residues` groups.
pub(super) fn expand_uniform_color(
    color: [f32; 4],
    residues: usize,
) -> Result<Vec<[f32; 4]>, RibbonError> {
    expand(std::iter::repeat(color).take(residues), residues)
}

fn expand(
    colors: impl Iterator<Item = [f32; 4]>,
    residues: usize,
) -> Result<Vec<[f32; 4]>, RibbonError> {
    let len = checked_size(residues, VERTICES_PER_RESIDUE, "vertex colors")?;
    let mut out = try_vec(len, "vertex colors")?;
    for color in colors {
        out.extend(std::iter::repeat(color).take(VERTICES_PER_RESIDUE));
    }
    Ok(out)
}
