//! Coordinate transforms
//!
//! [`CoordinateTransformer`] centers a point set once, on construction,
//! and then applies translations and rotations in call order. The free
//! functions apply a rotation to whole point sets or axis arrays and are
//! shared with the alignment pipeline.

use crate::centroid::{centroid_with, Precision};
use crate::decimal::DecimalSum;
use crate::linalg::{from_axes, transform_3x3, Point3, RotationMatrix};
use crate::AlignResult;

/// Centered copy of a point set with chained translate/rotate operations.
///
/// The transformer owns its coordinates; it never refers back to the
/// input slice.
#[derive(Debug, Clone)]
pub struct CoordinateTransformer {
    coords: Vec<Point3>,
}

impl CoordinateTransformer {
    /// Center `points` on their native-precision centroid
    pub fn new(points: &[Point3]) -> AlignResult<Self> {
        Self::with_precision(points, Precision::Native)
    }

    /// Center `points` on a centroid computed in the given regime
    pub fn with_precision(points: &[Point3], precision: Precision) -> AlignResult<Self> {
        let center = centroid_with(points, precision)?;
        let coords = points.iter().map(|&p| p - center).collect();
        Ok(Self { coords })
    }

    /// Add `v` to every point
    pub fn translate(&mut self, v: Point3) -> &mut Self {
        for p in &mut self.coords {
            *p = *p + v;
        }
        self
    }

    /// Replace every point `p` with `m · p`
    pub fn rotate(&mut self, m: &RotationMatrix) -> &mut Self {
        for p in &mut self.coords {
            *p = transform_3x3(m, *p);
        }
        self
    }

    pub fn transformed_coordinates(&self) -> &[Point3] {
        &self.coords
    }

    pub fn into_coordinates(self) -> Vec<Point3> {
        self.coords
    }
}

/// Rotate every point: `m · p`
pub fn rotate_points(m: &RotationMatrix, points: &[Point3]) -> Vec<Point3> {
    points.iter().map(|&p| transform_3x3(m, p)).collect()
}

/// Rotate three parallel axis arrays, returning new arrays.
///
/// With [`Precision::Decimal`] each row of the matrix-vector product is
/// accumulated exactly and rounded once.
pub fn rotate_axes(
    m: &RotationMatrix,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    precision: Precision,
) -> AlignResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let points = from_axes(x, y, z)?;
    let n = points.len();
    let (mut xr, mut yr, mut zr) = (Vec::with_capacity(n), Vec::with_capacity(n), Vec::with_capacity(n));

    match precision {
        Precision::Native => {
            for p in rotate_points(m, &points) {
                xr.push(p.x);
                yr.push(p.y);
                zr.push(p.z);
            }
        }
        Precision::Decimal => {
            for p in &points {
                xr.push(decimal_row(&m[0..3], p)?);
                yr.push(decimal_row(&m[3..6], p)?);
                zr.push(decimal_row(&m[6..9], p)?);
            }
        }
    }

    Ok((xr, yr, zr))
}

fn decimal_row(row: &[f64], p: &Point3) -> AlignResult<f64> {
    let mut sum = DecimalSum::default();
    sum.add_product(row[0], p.x)?;
    sum.add_product(row[1], p.y)?;
    sum.add_product(row[2], p.z)?;
    sum.value()
}
