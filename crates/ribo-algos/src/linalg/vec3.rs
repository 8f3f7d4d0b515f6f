//! Point primitives
//!
//! Points are `lin_alg` vectors; addition and subtraction use its operator
//! impls directly. Coordinates arrive from loaders as three parallel axis
//! arrays, so conversion both ways lives here too.

pub use lin_alg::f64::Vec3;

use crate::{AlignError, AlignResult};

/// A single atomic position
pub type Point3 = Vec3;

/// Create a point from its components
#[inline]
pub fn point(x: f64, y: f64, z: f64) -> Point3 {
    Vec3::new(x, y, z)
}

/// The origin
#[inline]
pub fn zero() -> Point3 {
    Vec3::new(0.0, 0.0, 0.0)
}

/// Multiply every component by `s`
#[inline]
pub fn scale(v: Point3, s: f64) -> Point3 {
    Vec3::new(v.x * s, v.y * s, v.z * s)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point3, b: Point3) -> f64 {
    (a - b).magnitude()
}

/// Zip three parallel axis arrays into points
pub fn from_axes(x: &[f64], y: &[f64], z: &[f64]) -> AlignResult<Vec<Point3>> {
    if x.len() != y.len() {
        return Err(AlignError::LengthMismatch {
            what: "x vs y",
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() != z.len() {
        return Err(AlignError::LengthMismatch {
            what: "x vs z",
            left: x.len(),
            right: z.len(),
        });
    }
    Ok(x.iter()
        .zip(y)
        .zip(z)
        .map(|((&x, &y), &z)| Vec3::new(x, y, z))
        .collect())
}

/// Split points into three parallel axis arrays
pub fn to_axes(points: &[Point3]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(points.len());
    let mut y = Vec::with_capacity(points.len());
    let mut z = Vec::with_capacity(points.len());
    for p in points {
        x.push(p.x);
        y.push(p.y);
        z.push(p.z);
    }
    (x, y, z)
}
