//! Anchor atom selection
//!
//! Anchors are the atoms whose label equals a designated type (phosphorus
//! by convention) and serve as landmarks for fitting. When the two
//! structures carry different numbers of anchors, the larger set is cut
//! down to the size of the smaller one by keeping the anchors closest to
//! its own centroid; peripheral anchors are the ones most likely to be
//! unmatched extras. This is a heuristic: an insertion in the middle of a
//! chain is not peripheral and will not be the atom dropped.

use crate::centroid::centroid_decimal;
use crate::frame::StructureFrame;
use crate::linalg::{distance, Point3};
use crate::{AlignError, AlignResult, StructureRole};

/// Indices of every label equal to `anchor_type`, in original order
pub fn select_anchors<S: AsRef<str>>(labels: &[S], anchor_type: &str) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.as_ref() == anchor_type)
        .map(|(i, _)| i)
        .collect()
}

/// Order `indices` by distance of `points[i]` to the decimal centroid of
/// the indexed points, nearest first. Equal distances keep their original
/// relative order.
///
/// Fails with [`AlignError::AnchorIndexOutOfRange`] if an index is out of
/// range.
pub fn rank_by_centroid_distance(points: &[Point3], indices: &[usize]) -> AlignResult<Vec<usize>> {
    let anchors = gather(points, indices)?;
    let center = centroid_decimal(&anchors)?;

    let mut ranked: Vec<(usize, f64)> = indices
        .iter()
        .zip(&anchors)
        .map(|(&i, &p)| (i, distance(p, center)))
        .collect();
    // `sort_by` is stable
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(ranked.into_iter().map(|(i, _)| i).collect())
}

/// Keep the `keep` anchors nearest their centroid, nearest first.
///
/// Sets already no larger than `keep` are returned unchanged.
pub fn reduce_anchors(points: &[Point3], indices: &[usize], keep: usize) -> AlignResult<Vec<usize>> {
    if indices.len() <= keep {
        check_indices(points, indices)?;
        return Ok(indices.to_vec());
    }
    let mut ranked = rank_by_centroid_distance(points, indices)?;
    ranked.truncate(keep);
    Ok(ranked)
}

fn check_indices(points: &[Point3], indices: &[usize]) -> AlignResult<()> {
    match indices.iter().find(|&&i| i >= points.len()) {
        Some(&index) => Err(AlignError::AnchorIndexOutOfRange {
            index,
            len: points.len(),
        }),
        None => Ok(()),
    }
}

fn gather(points: &[Point3], indices: &[usize]) -> AlignResult<Vec<Point3>> {
    check_indices(points, indices)?;
    Ok(indices.iter().map(|&i| points[i]).collect())
}

/// Positionally corresponded anchor indices of the two structures.
///
/// `incoming[k]` is matched with `reference[k]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPairing {
    pub incoming: Vec<usize>,
    pub reference: Vec<usize>,
    /// The side whose anchor set was cut down, if counts differed
    pub reduced: Option<StructureRole>,
}

impl AnchorPairing {
    /// Select `anchor_type` anchors on both frames and equalise their counts.
    ///
    /// Fails with [`AlignError::AnchorNotFound`] when either side has none.
    pub fn select(
        incoming: &StructureFrame,
        reference: &StructureFrame,
        anchor_type: &str,
    ) -> AlignResult<Self> {
        let incoming_idx = select_anchors(incoming.labels(), anchor_type);
        if incoming_idx.is_empty() {
            return Err(AlignError::AnchorNotFound {
                anchor: anchor_type.to_string(),
                role: StructureRole::Incoming,
            });
        }
        let reference_idx = select_anchors(reference.labels(), anchor_type);
        if reference_idx.is_empty() {
            return Err(AlignError::AnchorNotFound {
                anchor: anchor_type.to_string(),
                role: StructureRole::Reference,
            });
        }
        Self::reconcile(
            &incoming.points(),
            incoming_idx,
            &reference.points(),
            reference_idx,
        )
    }

    /// Equalise two anchor sets.
    ///
    /// The larger set is reduced with [`reduce_anchors`]; the smaller set is
    /// used as given. Equal-sized sets pass through untouched. Indices
    /// outside their point slice are rejected.
    pub fn reconcile(
        incoming_points: &[Point3],
        incoming: Vec<usize>,
        reference_points: &[Point3],
        reference: Vec<usize>,
    ) -> AlignResult<Self> {
        check_indices(incoming_points, &incoming)?;
        check_indices(reference_points, &reference)?;
        let keep = incoming.len().min(reference.len());
        if incoming.len() > reference.len() {
            Ok(Self {
                incoming: reduce_anchors(incoming_points, &incoming, keep)?,
                reference,
                reduced: Some(StructureRole::Incoming),
            })
        } else if reference.len() > incoming.len() {
            Ok(Self {
                incoming,
                reference: reduce_anchors(reference_points, &reference, keep)?,
                reduced: Some(StructureRole::Reference),
            })
        } else {
            Ok(Self {
                incoming,
                reference,
                reduced: None,
            })
        }
    }

    /// Number of corresponded pairs
    pub fn len(&self) -> usize {
        self.incoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty()
    }
}
