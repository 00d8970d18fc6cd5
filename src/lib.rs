// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Arc-fitted protein backbone ribbons.
//!
//! Turns a chain of backbone atom positions into a smooth ribbon: the chain
//! is refined by fitting circular arcs through consecutive atoms, and the
//! refined curve is swept into flat vertex, index, outline, and color
//! buffers for an external renderer.
//!
//! # Key entry points
//!
//! - [`geometry::refine_curve`] - n backbone points into a 2n + 1 point
//!   curve
//! - [`ribbon::build_ribbon_mesh`] - curve into renderer-ready buffers
//! - [`util::pastel::generate_pastel_colors`] - deterministic residue
//!   palettes
//! - [`scene::Scene`] - registry of loaded structure views
//! - [`options::Options`] - ribbon and color configuration, TOML presets
//!
//! # Pipeline
//!
//! ```text
//! positions ──refine_curve──▶ Curve ──build_ribbon_mesh──▶ RibbonMesh
//!                                          ▲
//!                  ColorOptions::residue_colors
//! ```
//!
//! Every stage is a pure function of its inputs, so identical inputs give
//! bit-identical buffers.

pub mod error;
pub mod geometry;
pub mod options;
pub mod ribbon;
pub mod scene;
pub mod util;

#[cfg(test)]
mod test_util;

pub use error::RibbonError;
