//! Vertex emission with winding correction, and residue triangulation.

use glam::Vec3;

use super::{POINTS_PER_RESIDUE, RESIDUE_INDEX_PATTERN, VERTICES_PER_RESIDUE};
use crate::error::{checked_size, try_vec, RibbonError};
use crate::geometry::Curve;

/// Residue groups in a curve of `point_count` points.
///
/// # Errors
///
/// [`RibbonError::InvalidInput`] unless `point_count` is `2k + 1` with
/// `k >= 1`.
pub fn residue_count(point_count: usize) -> Result<usize, RibbonError> {
    let stride = POINTS_PER_RESIDUE - 1;
    if point_count < POINTS_PER_RESIDUE || (point_count - 1) % stride != 0 {
        return Err(RibbonError::InvalidInput(format!(
            "ribbon curve needs 2k + 1 points (k >= 1), got {point_count}"
        )));
    }
    Ok((point_count - 1) / stride)
}

/// Vertices for a curve of `point_count` points in `residues` groups: two
/// per point, plus two for each point shared between neighboring residues.
#[must_use]
pub fn vertex_count(point_count: usize, residues: usize) -> usize {
    2 * point_count + 2 * residues.saturating_sub(1)
}

/// Emit two offset vertices per point, residue by residue.
///
/// After the first pair, A and B are swapped whenever B would land farther
/// from the previously emitted vertex than A, so the strip keeps one side
/// as the normal rotates instead of folding into a bow-tie.
pub(super) fn emit_vertices(
    curve: &Curve,
    residues: usize,
    pitch: impl Fn(usize) -> f32,
) -> Result<Vec<[f32; 3]>, RibbonError> {
    let total = vertex_count(curve.len(), residues);
    if u32::try_from(total).is_err() {
        return Err(RibbonError::AllocationFailure(format!(
            "{total} vertices exceed the u32 index range"
        )));
    }
    let mut vertices: Vec<[f32; 3]> = try_vec(total, "ribbon vertices")?;
    let points = curve.points();
    let mut previous: Option<Vec3> = None;

    for start in (0..points.len() - 1).step_by(POINTS_PER_RESIDUE - 1) {
        for idx in start..start + POINTS_PER_RESIDUE {
            let point = &points[idx];
            let offset = point.arc.normal.vec() * pitch(idx);
            let center = point.position.vec();
            let mut a = center + offset;
            let mut b = center - offset;
            if let Some(prev) = previous {
                if b.distance(prev) > a.distance(prev) {
                    std::mem::swap(&mut a, &mut b);
                }
            }
            vertices.push(a.to_array());
            vertices.push(b.to_array());
            previous = Some(b);
        }
    }

    debug_assert_eq!(vertices.len(), total);
    Ok(vertices)
}

/// Triangle-list indices: the residue pattern, offset by six vertices per
/// residue.
///
/// # Errors
///
/// [`RibbonError::AllocationFailure`] when the index buffer cannot be
/// reserved or a vertex index exceeds `u32`.
pub fn triangle_indices(residues: usize) -> Result<Vec<u32>, RibbonError> {
    let len = checked_size(residues, RESIDUE_INDEX_PATTERN.len(), "indices")?;
    let max_vertex =
        checked_size(residues, VERTICES_PER_RESIDUE, "vertex indices")?;
    if u32::try_from(max_vertex).is_err() {
        return Err(RibbonError::AllocationFailure(format!(
            "{max_vertex} vertices exceed the u32 index range"
        )));
    }

    let mut indices = try_vec(len, "ribbon indices")?;
    let stride = (RESIDUE_INDEX_PATTERN.len() / 2) as u32;
    for residue in 0..residues as u32 {
        let offset = stride * residue;
        indices.extend(RESIDUE_INDEX_PATTERN.iter().map(|&k| offset + k));
    }
    Ok(indices)
}
