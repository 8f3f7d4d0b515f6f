//! Computational core of ribo-align
//!
//! Rigid-body superposition of one molecular structure onto another using
//! a designated anchor atom type as landmarks:
//! - Centroids in native `f64` or exact decimal accumulation
//! - Centering / translation / rotation of point sets
//! - Anchor selection and count reconciliation between structures
//! - Quaternion characteristic polynomial (QCP) rotation fitting
//! - The alignment pipeline tying these together
//!
//! Every operation is a pure transform: inputs are borrowed, outputs are
//! freshly allocated, nothing is retained between calls.

pub mod align;
pub mod anchor;
pub mod centroid;
mod decimal;
pub mod frame;
pub mod linalg;
pub mod qcp;
pub mod transform;

use std::fmt;

pub use align::{align, align_axes, AlignParams, AlignmentResult, DEFAULT_ANCHOR};
pub use anchor::{rank_by_centroid_distance, reduce_anchors, select_anchors, AnchorPairing};
pub use centroid::{centroid, centroid_decimal, centroid_with, Precision};
pub use frame::{frame_from_slices, StructureFrame};
pub use linalg::{Point3, RotationMatrix, IDENTITY_3X3};
pub use qcp::{fit, fit_axes, QcpFit};
pub use transform::{rotate_axes, rotate_points, CoordinateTransformer};

/// Which side of an alignment a structure plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureRole {
    /// The structure being moved
    Incoming,
    /// The structure held fixed
    Reference,
}

impl fmt::Display for StructureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureRole::Incoming => f.write_str("incoming"),
            StructureRole::Reference => f.write_str("reference"),
        }
    }
}

/// Errors from alignment algorithms
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignError {
    #[error("Cannot compute a centroid of zero points")]
    EmptyInput,

    #[error("Parallel arrays have different lengths ({what}): {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Rotation is underdetermined (need at least 3 non-collinear points, got {0})")]
    DegenerateInput(usize),

    #[error("Anchor index {index} is out of range for {len} atoms")]
    AnchorIndexOutOfRange { index: usize, len: usize },

    #[error("No '{anchor}' anchor atoms found in the {role} structure")]
    AnchorNotFound { anchor: String, role: StructureRole },

    #[error("Value {0} cannot be represented with decimal precision")]
    NotRepresentable(f64),

    #[error("Decimal accumulator overflowed")]
    DecimalOverflow,
}

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;
