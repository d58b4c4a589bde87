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

//! Interactive camera controller for a top-down indoor map viewer.
//!
//! Floorcam turns touch, mouse, keyboard and device-orientation input into
//! a smoothly damped perspective camera hovering over one floor of a
//! building, and keeps that camera centred on the user's reported location
//! when asked to.
//!
//! # Key entry points
//!
//! - [`engine::FloorCamEngine`] - owns everything; feed it input and call
//!   `update` once per frame
//! - [`camera::CameraRig`] - the per-frame damped update loop
//! - [`input::GestureTracker`] - multi-touch gesture classification
//! - [`options::Options`] - runtime configuration (zoom chain, sensitivities,
//!   follow mapping, keybindings)
//! - [`platform`] - the host collaborators the engine drives
//!
//! # Architecture
//!
//! Controllers never write the camera directly. Each one turns events into
//! [`engine::command::CameraIntent`]s, and the engine applies an intent
//! only if the current [`engine::CameraMode`] grants that controller the
//! capability it writes. The rig then damps every current value toward its
//! target: zoom first, then height, pitch and field of view derived from
//! the zoom fraction.

pub mod camera;
pub mod controls;
pub mod engine;
pub mod error;
pub mod input;
pub mod location;
pub mod options;
pub mod platform;
pub mod util;
