//! Closed border loop around the ribbon strip.

use crate::error::{try_vec, RibbonError};

/// Line-strip indices tracing the ribbon border: even vertices forward
/// (one edge), odd vertices backward (the other edge), then back to 0.
///
/// The result has `vertex_count + 1` entries and starts and ends at 0.
///
/// # Errors
///
/// - [`RibbonError::InvalidInput`] for an odd or zero vertex count.
/// - [`RibbonError::AllocationFailure`] when the buffer cannot be reserved
///   or an index exceeds `u32`.
pub fn outline_indices(vertex_count: usize) -> Result<Vec<u32>, RibbonError> {
    if vertex_count == 0 || vertex_count % 2 != 0 {
        return Err(RibbonError::InvalidInput(format!(
            "outline needs a positive even vertex count, got {vertex_count}"
        )));
    }
    let Ok(n) = u32::try_from(vertex_count) else {
        return Err(RibbonError::AllocationFailure(format!(
            "{vertex_count} vertices exceed the u32 index range"
        )));
    };

    let mut outline = try_vec(vertex_count + 1, "outline indices")?;
    outline.extend((0..n).step_by(2));
    outline.extend((1..n).step_by(2).rev());
    outline.push(0);
    Ok(outline)
}
