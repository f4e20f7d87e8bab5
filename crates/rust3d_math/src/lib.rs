//! 3D Mathematics Library
//!
//! This crate provides the vector and matrix types used to move points and
//! directions through the Rust3D rendering pipeline.
//!
//! ## Core Types
//!
//! - [`Vec2`] - generic 2-component vector (texture coordinates, screen sizes)
//! - [`Vec3`] - 3D float vector with the full algebra (dot, cross, slerp, ...)
//! - [`Vec4`] - generic 4-component vector (homogeneous coordinates, matrix columns)
//! - [`Mat4`] - 4x4 column-major matrix
//!
//! Comparisons on [`Vec3`] and [`Mat4`] are tolerance based, see [`EPSILON`].

mod vec2;
mod vec3;
mod vec4;
pub mod mat4;

pub use vec2::{Vec2, Vec2f, IVec2};
pub use vec3::Vec3;
pub use vec4::{Vec4, Vec4f, IVec4, UIVec4};
pub use mat4::Mat4;

/// Tolerance below which a squared length or a cell difference counts as zero
pub const EPSILON: f32 = 0.000_001;
