//! Backbone curve geometry: arc fitting, arc bisection, and curve refinement.
//!
//! Pure data in, pure data out. Positions and directions are distinct types
//! so a basis change can never translate a direction.

mod arc;
mod curve;

use std::ops::{Add, Mul, Neg, Sub};

pub use arc::{bisect_arc, fit_arc, Arc, GeometryError};
pub use curve::{refine_curve, Curve, CurvePoint, MIN_BACKBONE_POINTS};
use glam::{Vec2, Vec3};

/// Below this, a basis axis or cross product is treated as zero.
pub(crate) const DEGENERATE_EPSILON: f32 = 1e-4;

// ==================== POINTS & DIRECTIONS ====================

/// An absolute position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(pub Vec3);

/// A free vector (normal, displacement). Never carries a translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction3(pub Vec3);

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Self = Self(Vec3::ZERO);

    /// Position from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Underlying vector.
    #[must_use]
    pub const fn vec(self) -> Vec3 {
        self.0
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.0.distance(other.0)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self(self.0.lerp(other.0, 0.5))
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Components as a flat array.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }
}

impl Direction3 {
    /// Default ribbon orientation (+Z) used whenever no plane is defined.
    pub const UP: Self = Self(Vec3::Z);

    /// Underlying vector.
    #[must_use]
    pub const fn vec(self) -> Vec3 {
        self.0
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.0.length()
    }

    /// Unit-length copy, or `None` for a (near) zero vector.
    #[must_use]
    pub fn try_normalize(self) -> Option<Self> {
        self.0.try_normalize().map(Self)
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self(self.0.cross(other.0))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.0.dot(other.0)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(a: [f32; 3]) -> Self {
        Self(Vec3::from(a))
    }
}

impl From<Vec3> for Direction3 {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl Sub for Point3 {
    type Output = Direction3;

    fn sub(self, rhs: Self) -> Direction3 {
        Direction3(self.0 - rhs.0)
    }
}

impl Add<Direction3> for Point3 {
    type Output = Self;

    fn add(self, rhs: Direction3) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub<Direction3> for Point3 {
    type Output = Self;

    fn sub(self, rhs: Direction3) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Add for Direction3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f32> for Direction3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Neg for Direction3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// ==================== PLANE FRAME ====================

/// Orthonormal basis of the plane through three points, anchored at the
/// first one.
///
/// `e1` runs along A→B, `e3 = e1 × (C − B)` is the plane normal, and
/// `e2 = e1 × e3` completes the basis. Points map to 2D local coordinates
/// along (`e1`, `e2`); directions map through the rotation only.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaneFrame {
    origin: Point3,
    e1: Vec3,
    e2: Vec3,
    e3: Vec3,
}

impl PlaneFrame {
    /// Build the frame through `a`, `b`, `c`, or `None` when A ≡ B or the
    /// triplet is (near) colinear.
    pub(crate) fn through(a: Point3, b: Point3, c: Point3) -> Option<Self> {
        let e1 = (b - a).try_normalize()?;
        let normal = e1.cross(c - b);
        if normal.length() < DEGENERATE_EPSILON {
            return None;
        }
        let e3 = normal.try_normalize()?;
        let e2 = e1.cross(e3);
        Some(Self {
            origin: a,
            e1: e1.vec(),
            e2: e2.vec(),
            e3: e3.vec(),
        })
    }

    /// World position → in-plane coordinates.
    pub(crate) fn to_local(&self, p: Point3) -> Vec2 {
        let d = (p - self.origin).vec();
        Vec2::new(d.dot(self.e1), d.dot(self.e2))
    }

    /// In-plane coordinates → world position.
    pub(crate) fn point_to_world(&self, local: Vec2) -> Point3 {
        self.origin + Direction3(self.e1 * local.x + self.e2 * local.y)
    }

    /// Local direction (x, y, z along e1, e2, e3) → world direction.
    pub(crate) fn direction_to_world(&self, local: Direction3) -> Direction3 {
        let v = local.vec();
        Direction3(self.e1 * v.x + self.e2 * v.y + self.e3 * v.z)
    }
}
