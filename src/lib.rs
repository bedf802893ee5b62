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
// Complexity limits
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

//! Chained, eased property animations for 2D canvas drawables.
//!
//! A [`animation::Drawable`] is a bag of visual properties (position,
//! scale, rotation, colors) plus one [`animation::AnimationManager`] per
//! property group. Each manager runs a chain of steps (eased timed
//! transitions, continuous rotation, delays, callbacks) one after another;
//! every tick advances all of them by the milliseconds elapsed since the
//! last tick and the drawable is drawn onto a [`renderer::Surface`].
//!
//! # Key entry points
//!
//! - [`animation`] - drawables, property groups, steps and chain managers
//! - [`renderer`] - the surface abstraction, shapes and [`renderer::draw_shape`]
//! - [`demo::DemoScene`] - the packaged heart demo shared by the drivers
//! - [`options::Options`] - TOML-backed driver and demo configuration
//! - `web::start` (feature `web`) - browser entry point
//!
//! Timing is supplied by the caller; nothing in the core reads a clock, so
//! identical sequences of elapsed times give identical trajectories.

pub mod animation;
pub mod demo;
pub mod error;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
