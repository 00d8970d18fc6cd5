//! Crate-level error types.

use std::fmt;

use crate::geometry::GeometryError;

/// Errors produced by the arcribbon crate.
#[derive(Debug)]
pub enum RibbonError {
    /// Input rejected before any geometry was built (too few points,
    /// non-finite coordinates, mismatched buffer lengths).
    InvalidInput(String),
    /// A buffer could not be reserved, or its size overflowed.
    AllocationFailure(String),
    /// Local geometry failure surfaced by the direct arc API.
    Geometry(GeometryError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The view registry holds its maximum number of views.
    SceneFull {
        /// Registry capacity that was reached.
        capacity: usize,
    },
}

impl fmt::Display for RibbonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::AllocationFailure(msg) => {
                write!(f, "allocation failure: {msg}")
            }
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneFull { capacity } => {
                write!(f, "scene is full ({capacity} views)")
            }
        }
    }
}

impl std::error::Error for RibbonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for RibbonError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<std::io::Error> for RibbonError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reserve an empty `Vec` with room for exactly `capacity` elements.
///
/// Reservation failure is reported as [`RibbonError::AllocationFailure`]
/// instead of aborting the process.
pub(crate) fn try_vec<T>(
    capacity: usize,
    what: &str,
) -> Result<Vec<T>, RibbonError> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity).map_err(|e| {
        RibbonError::AllocationFailure(format!(
            "{what}: {capacity} elements: {e}"
        ))
    })?;
    Ok(v)
}

/// `a * b`, or [`RibbonError::AllocationFailure`] on overflow.
pub(crate) fn checked_size(
    a: usize,
    b: usize,
    what: &str,
) -> Result<usize, RibbonError> {
    a.checked_mul(b).ok_or_else(|| {
        RibbonError::AllocationFailure(format!("{what}: {a} x {b} overflows"))
    })
}
