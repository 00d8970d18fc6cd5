//! Shared helpers outside the geometry pipeline.

pub mod pastel;
