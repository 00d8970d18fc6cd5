//! Arc-based backbone curve refinement.
//!
//! n backbone points become 2n + 1 curve points: each original point, an
//! arc-bisecting midpoint between every adjacent pair, and two tail points
//! extrapolated past the chain terminus.

use super::{bisect_arc, fit_arc, Arc, GeometryError, Point3};
use crate::error::{checked_size, try_vec, RibbonError};

/// Minimum number of backbone points that define a curve.
pub const MIN_BACKBONE_POINTS: usize = 3;

/// One point of a refined curve with its local arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Position on the curve.
    pub position: Point3,
    /// Arc fitted around this point.
    pub arc: Arc,
}

impl CurvePoint {
    /// Point with a zero-radius placeholder arc.
    #[must_use]
    pub fn placeholder(position: Point3) -> Self {
        Self {
            position,
            arc: Arc::placeholder(position),
        }
    }
}

/// Ordered curve points along the chain direction. Never shorter than two.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Wrap an already-built point sequence.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidInput`] for fewer than two points.
    pub fn new(points: Vec<CurvePoint>) -> Result<Self, RibbonError> {
        if points.len() < 2 {
            return Err(RibbonError::InvalidInput(format!(
                "curve needs at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// All curve points in chain order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of curve points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a curve holds at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions only, in chain order.
    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().map(|p| p.position)
    }
}

/// Refine `n >= 3` backbone positions into a curve of exactly `2n + 1`
/// points.
///
/// Degenerate local geometry (duplicate or colinear atoms) never aborts the
/// refinement; it falls back to zero-radius arcs or chord midpoints and is
/// logged.
///
/// # Errors
///
/// - [`RibbonError::InvalidInput`] for fewer than three positions or a
///   non-finite coordinate.
/// - [`RibbonError::AllocationFailure`] when the output cannot be reserved.
pub fn refine_curve(positions: &[Point3]) -> Result<Curve, RibbonError> {
    let n = positions.len();
    if n < MIN_BACKBONE_POINTS {
        return Err(RibbonError::InvalidInput(format!(
            "need at least {MIN_BACKBONE_POINTS} backbone points, got {n}"
        )));
    }
    if let Some(i) = positions.iter().position(|p| !p.is_finite()) {
        return Err(RibbonError::InvalidInput(format!(
            "backbone point {i} is not finite: {:?}",
            positions[i].vec()
        )));
    }

    let arcs = backbone_arcs(positions)?;
    // 2n is even, so the +1 cannot overflow.
    let total = checked_size(n, 2, "curve points")? + 1;
    let mut points = try_vec(total, "curve points")?;

    for i in 0..n - 1 {
        points.push(CurvePoint {
            position: positions[i],
            arc: arcs[i],
        });
        points.push(arc_midpoint(
            positions[i],
            positions[i + 1],
            &arcs[i],
            &arcs[i + 1],
        ));
    }
    points.push(CurvePoint {
        position: positions[n - 1],
        arc: arcs[n - 1],
    });

    extend_tail(&mut points);
    debug_assert_eq!(points.len(), total);
    log::debug!("refined {n} backbone points into {total} curve points");

    Curve::new(points)
}

/// Step 1: fit an arc around every interior point; endpoints get
/// placeholders.
fn backbone_arcs(positions: &[Point3]) -> Result<Vec<Arc>, RibbonError> {
    let n = positions.len();
    let mut arcs = try_vec(n, "backbone arcs")?;
    arcs.push(Arc::placeholder(positions[0]));
    for w in positions.windows(3) {
        arcs.push(fit_or_fallback(w[0], w[1], w[2], log::Level::Warn));
    }
    arcs.push(Arc::placeholder(positions[n - 1]));
    Ok(arcs)
}

/// Step 2: the point bisecting the arc between `a` and `b`, averaged over
/// both endpoints' circles, with an arc refitted through it.
fn arc_midpoint(a: Point3, b: Point3, arc_a: &Arc, arc_b: &Arc) -> CurvePoint {
    let (bisect_a, bisect_b) =
        match (bisect_arc(a, b, arc_a.center), bisect_arc(a, b, arc_b.center))
        {
            (Ok(na), Ok(nb)) => (na, nb),
            (ra, rb) => {
                if let Some(e) = ra.err().or(rb.err()) {
                    log::debug!(
                        "arc bisection fell back to the chord midpoint: {e}"
                    );
                }
                (a, b)
            }
        };
    let position = bisect_a.midpoint(bisect_b);
    CurvePoint {
        position,
        // Chord-midpoint fallbacks are colinear by construction.
        arc: fit_or_fallback(a, position, b, log::Level::Debug),
    }
}

/// Step 3: two more points past the last one, continuing its final
/// displacement.
fn extend_tail(points: &mut Vec<CurvePoint>) {
    let len = points.len();
    let last = points[len - 1].position;
    let step = last - points[len - 2].position;
    let first_ext = last + step;
    points.push(CurvePoint::placeholder(first_ext));
    points.push(CurvePoint::placeholder(first_ext + step));
}

fn fit_or_fallback(
    a: Point3,
    b: Point3,
    c: Point3,
    level: log::Level,
) -> Arc {
    match fit_arc(a, b, c) {
        Ok(arc) => arc,
        Err(GeometryError::DegenerateArc { fallback }) => {
            log::log!(
                level,
                "degenerate arc at {:?}; using zero-radius fallback",
                b.vec()
            );
            fallback
        }
        Err(e) => {
            log::log!(level, "arc fit failed at {:?}: {e}", b.vec());
            Arc::placeholder(b)
        }
    }
}
