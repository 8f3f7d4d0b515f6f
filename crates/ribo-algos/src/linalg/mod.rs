//! Linear algebra utilities
//!
//! Minimal vector and matrix operations used across the crate:
//!
//! - [`vec3`]: point primitives and axis-array conversion
//! - [`mat3`]: 3×3 row-major matrix operations (apply, transpose, multiply)

pub mod mat3;
pub mod vec3;

pub use mat3::{
    determinant_3x3, is_identity_3x3, multiply_3x3, rotation_about_axis, transform_3x3,
    transpose_3x3, RotationMatrix, IDENTITY_3X3,
};
pub use vec3::{distance, from_axes, point, scale, to_axes, zero, Point3};
