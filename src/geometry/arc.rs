//! Circle fitting through point triplets and arc bisection.

use std::fmt;

use glam::Vec2;

use super::{Direction3, PlaneFrame, Point3, DEGENERATE_EPSILON};

/// In-plane determinant below which the perpendicular bisectors are
/// treated as parallel.
const BISECTOR_DETERMINANT_EPSILON: f32 = 1e-8;

/// Allowed deviation of the fitted normal from unit length before warning.
const NORMAL_LENGTH_TOLERANCE: f32 = 0.1;

/// Relative tolerance on the two radii handed to [`bisect_arc`].
const RADIUS_TOLERANCE: f32 = 1e-3;

/// Circle and plane fitted through three consecutive curve points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Circle center.
    pub center: Point3,
    /// Circle radius; 0 marks a placeholder with no defined curvature.
    pub radius: f32,
    /// Unit normal of the circle's plane.
    pub normal: Direction3,
}

impl Arc {
    /// Zero-radius arc centered on `point` with the default up normal.
    ///
    /// Used for chain endpoints, extrapolated tail points, and as the
    /// fallback for degenerate triplets.
    #[must_use]
    pub fn placeholder(point: Point3) -> Self {
        Self {
            center: point,
            radius: 0.0,
            normal: Direction3::UP,
        }
    }
}

/// Local geometry failures. All are recoverable by the refinement pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The three points are (near) colinear or coincident.
    DegenerateArc {
        /// Arc to use in place of the fit: centered on the middle point,
        /// radius 0, default up normal.
        fallback: Arc,
    },
    /// Chord endpoints are not equidistant from the circle center.
    ArcRadiusMismatch {
        /// Distance from the center to the first endpoint.
        distance_a: f32,
        /// Distance from the center to the second endpoint.
        distance_b: f32,
    },
    /// Chord endpoints are colinear with the center (or antipodal).
    DegenerateBisection,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateArc { .. } => {
                write!(f, "points are colinear, no unique arc")
            }
            Self::ArcRadiusMismatch {
                distance_a,
                distance_b,
            } => write!(
                f,
                "chord endpoints not on one circle \
                 ({distance_a:.4} vs {distance_b:.4})"
            ),
            Self::DegenerateBisection => {
                write!(f, "chord is colinear with the circle center")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Fit the circle through `a`, `b`, `c` and the normal of its plane.
///
/// The triplet is expressed in a local 2D basis of its own plane, the
/// perpendicular bisectors of AB and BC are intersected there, and the
/// intersection is mapped back to world space. The intersection uses the
/// determinant form, so axis-aligned bisectors need no special handling.
///
/// # Errors
///
/// [`GeometryError::DegenerateArc`] when the points are (near) colinear or
/// A and B coincide; the error carries the fallback arc callers should use.
pub fn fit_arc(a: Point3, b: Point3, c: Point3) -> Result<Arc, GeometryError> {
    let degenerate = GeometryError::DegenerateArc {
        fallback: Arc::placeholder(b),
    };
    let Some(frame) = PlaneFrame::through(a, b, c) else {
        return Err(degenerate);
    };

    let Some(local_center) =
        bisector_intersection(frame.to_local(b), frame.to_local(c))
    else {
        return Err(degenerate);
    };

    let center = frame.point_to_world(local_center);
    let normal = frame.direction_to_world(Direction3::UP);
    let normal_len = normal.length();
    if (normal_len - 1.0).abs() > NORMAL_LENGTH_TOLERANCE {
        log::warn!(
            "arc normal not unit length ({normal_len:.3}) for {:?}, {:?}, {:?}",
            a.vec(),
            b.vec(),
            c.vec(),
        );
    }

    Ok(Arc {
        center,
        radius: center.distance(a),
        normal,
    })
}

/// Circumcenter of the origin, `b`, and `c` in the plane.
///
/// Solves the two perpendicular-bisector equations `2p·b = |b|²`,
/// `2p·c = |c|²` by Cramer's rule.
fn bisector_intersection(b: Vec2, c: Vec2) -> Option<Vec2> {
    let det = 2.0 * b.perp_dot(c);
    if det.abs() < BISECTOR_DETERMINANT_EPSILON {
        return None;
    }
    let bb = b.length_squared();
    let cc = c.length_squared();
    Some(Vec2::new(
        (bb * c.y - cc * b.y) / det,
        (cc * b.x - bb * c.x) / det,
    ))
}

/// Point on the circle about `center` that bisects the arc from `a` to `b`
/// on the side away from the center.
///
/// The chord midpoint is pushed outward from the center until it lies at
/// the circle's radius.
///
/// # Errors
///
/// - [`GeometryError::ArcRadiusMismatch`] when `a` and `b` are not
///   equidistant from `center`.
/// - [`GeometryError::DegenerateBisection`] when `a`, `b` and `center` are
///   colinear.
pub fn bisect_arc(
    a: Point3,
    b: Point3,
    center: Point3,
) -> Result<Point3, GeometryError> {
    let to_a = center - a;
    let to_b = center - b;
    let radius = to_a.length();
    let radius_b = to_b.length();
    if (radius - radius_b).abs() > RADIUS_TOLERANCE * radius.max(1.0) {
        return Err(GeometryError::ArcRadiusMismatch {
            distance_a: radius,
            distance_b: radius_b,
        });
    }
    if to_a.cross(to_b).length() < DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateBisection);
    }

    let mid = a.midpoint(b);
    let outward = mid - center;
    let Some(dir) = outward.try_normalize() else {
        return Err(GeometryError::DegenerateBisection);
    };
    Ok(mid + dir * (radius - outward.length()))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use proptest::prelude::*;

    use super::*;

    fn p(x: f32, y: f32, z: f32) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn right_angle_triplet() {
        let arc = fit_arc(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0))
            .unwrap();
        assert!(arc.center.distance(p(0.5, 0.5, 0.0)) < 1e-5);
        assert!((arc.radius - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
        assert!((arc.normal.length() - 1.0).abs() < 1e-5);
        assert!(arc.normal.vec().abs().abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn colinear_triplet_is_degenerate() {
        let b = p(1.0, 0.0, 0.0);
        let err = fit_arc(p(0.0, 0.0, 0.0), b, p(2.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::DegenerateArc {
                fallback: Arc {
                    center: b,
                    radius: 0.0,
                    normal: Direction3::UP,
                },
            }
        );
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let a = p(2.0, 2.0, 2.0);
        assert!(matches!(
            fit_arc(a, a, p(3.0, 2.0, 2.0)),
            Err(GeometryError::DegenerateArc { .. })
        ));
    }

    /// Bisectors that are vertical in the local frame must not blow up.
    #[test]
    fn axis_aligned_bisectors() {
        // AB along local x: its bisector is the local vertical line x = 1.
        let arc = fit_arc(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0))
            .unwrap();
        assert!(arc.center.distance(p(1.0, 1.0, 0.0)) < 1e-5);
        // BC also axis-aligned in world space, in a tilted plane.
        let arc = fit_arc(p(0.0, 0.0, 0.0), p(0.0, 0.0, 2.0), p(0.0, 2.0, 2.0))
            .unwrap();
        assert!(arc.center.distance(p(0.0, 1.0, 1.0)) < 1e-5);
        assert!(arc.radius.is_finite());
    }

    #[test]
    fn bisect_quarter_circle() {
        let n = bisect_arc(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), Point3::ORIGIN)
            .unwrap();
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(n.distance(p(h, h, 0.0)) < 1e-5);
    }

    #[test]
    fn bisect_moves_away_from_center() {
        let center = p(5.0, 5.0, 5.0);
        let a = center + Direction3(Vec3::new(3.0, 0.0, 0.0));
        let b = center + Direction3(Vec3::new(0.0, 0.0, 3.0));
        let n = bisect_arc(a, b, center).unwrap();
        assert!((n.distance(center) - 3.0).abs() < 1e-5);
        assert!(n.distance(center) > a.midpoint(b).distance(center));
    }

    #[test]
    fn bisect_rejects_unequal_radii() {
        let err = bisect_arc(p(1.0, 0.0, 0.0), p(0.0, 2.0, 0.0), Point3::ORIGIN)
            .unwrap_err();
        assert!(matches!(err, GeometryError::ArcRadiusMismatch { .. }));
    }

    #[test]
    fn bisect_rejects_antipodal_chord() {
        let err = bisect_arc(p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0), Point3::ORIGIN)
            .unwrap_err();
        assert_eq!(err, GeometryError::DegenerateBisection);
    }

    proptest! {
        #[test]
        fn fitted_center_is_equidistant_and_coplanar(
            a in prop::array::uniform3(-10.0f32..10.0),
            b in prop::array::uniform3(-10.0f32..10.0),
            c in prop::array::uniform3(-10.0f32..10.0),
        ) {
            let (a, b, c) = (Point3::from(a), Point3::from(b), Point3::from(c));
            let ab = b - a;
            let ac = c - a;
            // Keep to well-conditioned triangles; thin slivers have huge,
            // numerically meaningless circles.
            let area = ab.cross(ac).length();
            prop_assume!(area > 1.0);
            prop_assume!(ab.length() > 0.5 && ac.length() > 0.5 && (c - b).length() > 0.5);

            let arc = fit_arc(a, b, c).unwrap();
            prop_assume!(arc.radius < 50.0);
            let tol = 1e-4 * arc.radius.max(1.0) * 10.0;
            prop_assert!((arc.center.distance(a) - arc.radius).abs() < tol);
            prop_assert!((arc.center.distance(b) - arc.radius).abs() < tol);
            prop_assert!((arc.center.distance(c) - arc.radius).abs() < tol);

            let plane_normal = ab.cross(ac).try_normalize().unwrap();
            let off_plane = (arc.center - a).dot(plane_normal).abs();
            prop_assert!(off_plane < tol, "center {off_plane} off plane");
            prop_assert!(arc.normal.dot(plane_normal).abs() > 0.999);
        }
    }
}
