//! Structure snapshot at the loader boundary
//!
//! A [`StructureFrame`] is one trajectory frame as handed over by a
//! structure loader: per-atom type symbols plus three parallel coordinate
//! arrays. Lengths are validated once, on construction, so the algorithms
//! downstream can index the arrays without re-checking.

use crate::centroid::Precision;
use crate::linalg::{from_axes, to_axes, Point3};
use crate::transform::CoordinateTransformer;
use crate::{AlignError, AlignResult};

/// Atom type labels and coordinates of a single structure frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureFrame {
    labels: Vec<String>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl StructureFrame {
    /// Build a frame from parallel arrays.
    ///
    /// Fails with [`AlignError::LengthMismatch`] unless all four arrays
    /// have the same length.
    pub fn new(labels: Vec<String>, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> AlignResult<Self> {
        check_len("labels vs x", labels.len(), x.len())?;
        check_len("x vs y", x.len(), y.len())?;
        check_len("x vs z", x.len(), z.len())?;
        Ok(Self { labels, x, y, z })
    }

    /// Build a frame from labels and points
    pub fn from_points(labels: Vec<String>, points: &[Point3]) -> AlignResult<Self> {
        let (x, y, z) = to_axes(points);
        Self::new(labels, x, y, z)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Position of atom `i`. Panics if `i` is out of range.
    #[inline]
    pub fn point(&self, i: usize) -> Point3 {
        Point3::new(self.x[i], self.y[i], self.z[i])
    }

    /// All positions as points
    pub fn points(&self) -> Vec<Point3> {
        (0..self.len()).map(|i| self.point(i)).collect()
    }

    /// Positions of the atoms at `indices`, in the order given
    pub fn gather(&self, indices: &[usize]) -> Vec<Point3> {
        indices.iter().map(|&i| self.point(i)).collect()
    }

    /// A copy of this frame with its coordinates replaced.
    ///
    /// This is how aligned or centered coordinates are swapped in: the
    /// original frame is left untouched.
    pub fn with_coordinates(&self, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> AlignResult<Self> {
        Self::new(self.labels.clone(), x, y, z)
    }

    /// A copy of this frame translated so its centroid is the origin
    pub fn centered(&self, precision: Precision) -> AlignResult<Self> {
        let transformer = CoordinateTransformer::with_precision(&self.points(), precision)?;
        Self::from_points(self.labels.clone(), transformer.transformed_coordinates())
    }

    /// Split into owned parts
    pub fn into_parts(self) -> (Vec<String>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.labels, self.x, self.y, self.z)
    }
}

/// Build a frame from borrowed label and axis slices
pub fn frame_from_slices<S: AsRef<str>>(
    labels: &[S],
    x: &[f64],
    y: &[f64],
    z: &[f64],
) -> AlignResult<StructureFrame> {
    let points = from_axes(x, y, z)?;
    let labels = labels.iter().map(|s| s.as_ref().to_string()).collect();
    StructureFrame::from_points(labels, &points)
}

fn check_len(what: &'static str, left: usize, right: usize) -> AlignResult<()> {
    if left != right {
        return Err(AlignError::LengthMismatch { what, left, right });
    }
    Ok(())
}
