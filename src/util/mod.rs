//! Shared utilities: damping and angle math, and frame timing.

pub mod damping;
pub mod frame_timing;
