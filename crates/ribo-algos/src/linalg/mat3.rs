//! 3×3 row-major matrix utilities
//!
//! Rotations are stored flat as `[f64; 9]` with `m[row * 3 + col]`, the
//! layout the QCP solver produces and the alignment pipeline consumes.

use super::vec3::Point3;

/// 3×3 rotation, row-major
pub type RotationMatrix = [f64; 9];

/// The 3×3 identity
pub const IDENTITY_3X3: RotationMatrix = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Transform a point by a 3×3 row-major matrix: `m · v`
#[inline]
pub fn transform_3x3(m: &RotationMatrix, v: Point3) -> Point3 {
    Point3::new(
        m[0] * v.x + m[1] * v.y + m[2] * v.z,
        m[3] * v.x + m[4] * v.y + m[5] * v.z,
        m[6] * v.x + m[7] * v.y + m[8] * v.z,
    )
}

/// Transpose; for a proper rotation this is also the inverse
pub fn transpose_3x3(m: &RotationMatrix) -> RotationMatrix {
    [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]]
}

/// Multiply: result = left · right
pub fn multiply_3x3(left: &RotationMatrix, right: &RotationMatrix) -> RotationMatrix {
    let mut out = [0.0f64; 9];
    for row in 0..3 {
        for col in 0..3 {
            out[row * 3 + col] = left[row * 3] * right[col]
                + left[row * 3 + 1] * right[3 + col]
                + left[row * 3 + 2] * right[6 + col];
        }
    }
    out
}

pub fn determinant_3x3(m: &RotationMatrix) -> f64 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
        + m[2] * (m[3] * m[7] - m[4] * m[6])
}

/// Check if a 3×3 matrix is identity within `tol` per element
pub fn is_identity_3x3(m: &RotationMatrix, tol: f64) -> bool {
    m.iter()
        .zip(IDENTITY_3X3.iter())
        .all(|(a, b)| (a - b).abs() <= tol)
}

/// Right-handed rotation by `angle` radians about a unit `axis`
/// (Rodrigues' formula)
pub fn rotation_about_axis(axis: Point3, angle: f64) -> RotationMatrix {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);
    [
        t * x * x + c,
        t * x * y - s * z,
        t * x * z + s * y,
        t * x * y + s * z,
        t * y * y + c,
        t * y * z - s * x,
        t * x * z - s * y,
        t * y * z + s * x,
        t * z * z + c,
    ]
}
