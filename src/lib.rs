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

//! GPU color-ID object picking for interactive 3D scenes.
//!
//! Pickable objects are drawn into an off-screen target with a flat color
//! that encodes a unique integer ID. A click reads the pixel under the
//! cursor back to the CPU and decodes it into the ID of the nearest object,
//! with depth testing and occlusion handled by the rasterizer.
//!
//! # Key entry points
//!
//! - [`picking::Picker`] - owns the picking scene, target and readback buffer
//! - [`picking::PickRenderer`] - the renderer contract the picker draws with
//! - [`gpu::pick_renderer::WgpuPickRenderer`] - the wgpu implementation
//! - [`picking::PickEvents`] - typed pick / per-ID / hover subscriptions
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Everything runs on the host's event thread. Input and world
//! notifications are forwarded to the picker, which re-renders the picking
//! scene lazily: only when a query arrives and something changed since the
//! previous render. The render and readback are a blocking GPU round trip.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod picking;
pub mod world;
