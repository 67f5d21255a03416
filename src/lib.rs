// -- Lint policy ---------------------------------------------------------
// Mirrors the [workspace.lints] tables in Cargo.toml so editor diagnostics
// match CI.

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
// String hygiene
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances: casts and float comparisons are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
// Naming / structure allowances
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::too_many_lines)]
// Tests assert with unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Procedural fluted-glass geometry and frame-paced scene animation.
//!
//! Vetro is the simulation core behind a decorative scene: a corrugated
//! glass panel refracting a glowing sphere that drifts (or chases the
//! pointer) behind it. The crate owns everything up to the renderer
//! boundary. Shading stays on the host's side; vetro hands it vertex
//! buffers and material values.
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - per-tick orchestration of panel and sphere
//! - [`geometry::ProfilePath`] / [`geometry::extrude_profile`] - the fluted
//!   cross-section and its extrusion into a [`geometry::PanelMesh`]
//! - [`pacing::FramePacer`] - bounds scene updates to a target rate on top
//!   of a free-running render loop
//! - [`options::Options`] - the tunable parameter surface with TOML presets
//!
//! # Per-frame flow
//!
//! The host forwards every native tick to [`pacing::FramePacer::on_tick`];
//! when the pacer advances, the host calls [`scene::Scene::advance`] once,
//! uploads new panel geometry if the update says it was rebuilt, applies the
//! sphere transform and color values, and reports back with
//! [`pacing::FramePacer::frame_complete`].

pub mod animation;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod pacing;
pub mod scene;

pub use error::VetroError;
