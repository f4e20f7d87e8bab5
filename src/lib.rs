//! Rust3D host crate
//!
//! Wires configuration loading around [`rust3d_math`] for the demo binary.

pub mod config;
pub mod pipeline;

pub use rust3d_math as math;
