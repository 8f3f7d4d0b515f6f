//! Centroid computation
//!
//! Two accumulation regimes are offered. [`Precision::Native`] sums with
//! ordinary floating point; [`Precision::Decimal`] sums exactly in decimal
//! and rounds once at the end, which removes the dependence on summation
//! order for large or widely spread point sets. Callers pick one
//! explicitly; neither falls back to the other.

use serde::{Deserialize, Serialize};

use crate::decimal::DecimalSum;
use crate::linalg::Point3;
use crate::{AlignError, AlignResult};

/// Numeric regime used for accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Native `f64` addition
    #[default]
    Native,
    /// Exact decimal accumulation, rounded to `f64` on output
    Decimal,
}

/// Arithmetic mean of a point set using native `f64` sums.
pub fn centroid(points: &[Point3]) -> AlignResult<Point3> {
    if points.is_empty() {
        return Err(AlignError::EmptyInput);
    }
    let mut sum = [0.0f64; 3];
    for p in points {
        sum[0] += p.x;
        sum[1] += p.y;
        sum[2] += p.z;
    }
    let n = points.len() as f64;
    Ok(Point3::new(sum[0] / n, sum[1] / n, sum[2] / n))
}

/// Arithmetic mean of a point set using exact decimal sums.
///
/// Fails with [`AlignError::NotRepresentable`] if a coordinate is not
/// finite or exceeds the decimal range.
pub fn centroid_decimal(points: &[Point3]) -> AlignResult<Point3> {
    if points.is_empty() {
        return Err(AlignError::EmptyInput);
    }
    let mut sx = DecimalSum::default();
    let mut sy = DecimalSum::default();
    let mut sz = DecimalSum::default();
    for p in points {
        sx.add(p.x)?;
        sy.add(p.y)?;
        sz.add(p.z)?;
    }
    let n = points.len();
    Ok(Point3::new(sx.mean(n)?, sy.mean(n)?, sz.mean(n)?))
}

/// Centroid in the requested regime
pub fn centroid_with(points: &[Point3], precision: Precision) -> AlignResult<Point3> {
    match precision {
        Precision::Native => centroid(points),
        Precision::Decimal => centroid_decimal(points),
    }
}
