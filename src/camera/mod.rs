//! Camera system for the floor viewer.
//!
//! Holds the render camera, the shared target/current state record that
//! controllers write into, and the rig that damps one toward the other each
//! frame.

/// Per-frame update loop driving the render camera from [`state`].
pub mod controller;
/// Render camera and GPU uniform types.
pub mod core;
/// Target/current camera record and the controller-facing snapshot.
pub mod state;

pub use controller::CameraRig;
pub use state::{CameraState, CameraView};
