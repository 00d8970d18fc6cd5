//! Shared fixtures for unit tests.

use crate::geometry::Point3;

/// Ideal alpha helix CA trace: 2.3 Å radius, 1.5 Å rise, 100° per residue.
pub(crate) fn helix(n: usize) -> Vec<Point3> {
    (0..n)
        .map(|i| {
            let t = (i as f32 * 100.0).to_radians();
            Point3::new(2.3 * t.cos(), 2.3 * t.sin(), 1.5 * i as f32)
        })
        .collect()
}
