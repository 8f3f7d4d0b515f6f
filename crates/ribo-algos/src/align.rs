//! Anchor-based structure alignment
//!
//! Rotates an incoming structure onto a reference structure:
//! 1. Select anchor atoms (atoms labelled `anchor_type`) on both sides
//! 2. Reconcile the anchor counts, see [`AnchorPairing`]
//! 3. Fit the optimal rotation on the corresponded anchors (QCP)
//! 4. Apply that rotation to every incoming atom
//!
//! No translation is applied. For a full rigid-body superposition both
//! frames are centered first, see [`StructureFrame::centered`].

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorPairing;
use crate::centroid::Precision;
use crate::frame::{frame_from_slices, StructureFrame};
use crate::linalg::RotationMatrix;
use crate::qcp;
use crate::transform::rotate_axes;
use crate::AlignResult;

/// The conventional anchor: backbone phosphorus
pub const DEFAULT_ANCHOR: &str = "P";

/// Parameters for [`align`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignParams {
    /// Label identifying anchor atoms
    pub anchor_type: String,
    /// Arithmetic used when applying the rotation
    pub precision: Precision,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            anchor_type: DEFAULT_ANCHOR.to_string(),
            precision: Precision::Native,
        }
    }
}

impl AlignParams {
    /// Default parameters with a different anchor label
    pub fn with_anchor(anchor_type: impl Into<String>) -> Self {
        Self {
            anchor_type: anchor_type.into(),
            ..Self::default()
        }
    }
}

/// Result of aligning one structure onto another
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    /// Rotated x coordinates of every incoming atom
    pub x: Vec<f64>,
    /// Rotated y coordinates of every incoming atom
    pub y: Vec<f64>,
    /// Rotated z coordinates of every incoming atom
    pub z: Vec<f64>,
    /// Rotation applied to the incoming coordinates
    pub rotation: RotationMatrix,
    /// RMSD over the corresponded anchors after rotation
    pub rmsd: f64,
    /// Anchors used for the fit
    pub anchors: AnchorPairing,
}

impl AlignmentResult {
    /// Number of anchor pairs the rotation was fitted on
    pub fn n_anchors(&self) -> usize {
        self.anchors.len()
    }
}

/// Align `incoming` onto `reference`.
///
/// Returns new coordinate arrays for the whole incoming structure; neither
/// frame is modified.
pub fn align(
    incoming: &StructureFrame,
    reference: &StructureFrame,
    params: &AlignParams,
) -> AlignResult<AlignmentResult> {
    let anchors = AnchorPairing::select(incoming, reference, &params.anchor_type)?;

    let mobile = incoming.gather(&anchors.incoming);
    let target = reference.gather(&anchors.reference);
    let fitted = qcp::fit(&mobile, &target)?;

    let (x, y, z) = rotate_axes(
        &fitted.rotation,
        incoming.x(),
        incoming.y(),
        incoming.z(),
        params.precision,
    )?;

    Ok(AlignmentResult {
        x,
        y,
        z,
        rotation: fitted.rotation,
        rmsd: fitted.rmsd,
        anchors,
    })
}

/// [`align`] over flat label and coordinate arrays
#[allow(clippy::too_many_arguments)]
pub fn align_axes<S: AsRef<str>>(
    incoming_labels: &[S],
    incoming_x: &[f64],
    incoming_y: &[f64],
    incoming_z: &[f64],
    reference_labels: &[S],
    reference_x: &[f64],
    reference_y: &[f64],
    reference_z: &[f64],
    anchor_type: &str,
) -> AlignResult<AlignmentResult> {
    let incoming = frame_from_slices(incoming_labels, incoming_x, incoming_y, incoming_z)?;
    let reference = frame_from_slices(reference_labels, reference_x, reference_y, reference_z)?;
    align(&incoming, &reference, &AlignParams::with_anchor(anchor_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{is_identity_3x3, point, rotation_about_axis, transpose_3x3, Point3};
    use crate::transform::rotate_points;
    use crate::{AlignError, StructureRole};
    use std::f64::consts::FRAC_PI_2;

    fn labels(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn frame(symbols: &[&str], points: &[Point3]) -> StructureFrame {
        StructureFrame::from_points(labels(symbols), points).unwrap()
    }

    fn assert_axes_close(result: &AlignmentResult, expected: &[Point3], tol: f64) {
        assert_eq!(result.x.len(), expected.len());
        for (i, e) in expected.iter().enumerate() {
            assert!(
                (result.x[i] - e.x).abs() < tol
                    && (result.y[i] - e.y).abs() < tol
                    && (result.z[i] - e.z).abs() < tol,
                "atom {i}: ({}, {}, {}) vs {e:?}",
                result.x[i],
                result.y[i],
                result.z[i]
            );
        }
    }

    fn rz() -> RotationMatrix {
        rotation_about_axis(point(0.0, 0.0, 1.0), FRAC_PI_2)
    }

    #[test]
    fn test_align_to_self_is_identity() {
        let points = vec![
            point(1.0, 0.5, -0.2),
            point(3.0, 0.0, 1.0),
            point(-0.4, 2.2, 0.7),
            point(0.1, -1.9, 2.5),
        ];
        let structure = frame(&["P", "C", "P", "P"], &points);

        let result = align(&structure, &structure, &AlignParams::default()).unwrap();
        assert!(is_identity_3x3(&result.rotation, 1e-9), "{:?}", result.rotation);
        assert!(result.rmsd < 1e-6);
        assert_axes_close(&result, &points, 1e-9);
        assert_eq!(result.n_anchors(), 3);
        assert_eq!(result.anchors.reduced, None);
    }

    #[test]
    fn test_quarter_turn_scenario() {
        let reference_points = vec![
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
            point(0.0, 0.0, 1.0),
            point(0.7, 0.7, 0.2),
        ];
        let incoming_points = rotate_points(&rz(), &reference_points);
        let reference = frame(&["P", "P", "P", "C"], &reference_points);
        let incoming = frame(&["P", "P", "P", "C"], &incoming_points);

        let result = align(&incoming, &reference, &AlignParams::default()).unwrap();
        let expected = transpose_3x3(&rz());
        for i in 0..9 {
            assert!((result.rotation[i] - expected[i]).abs() < 1e-9);
        }
        // Anchors and non-anchors alike land back on the reference
        assert_axes_close(&result, &reference_points, 1e-9);
        assert!(result.rmsd < 1e-6);
    }

    #[test]
    fn test_quarter_turn_scenario_at_small_scales() {
        let expected = transpose_3x3(&rz());
        for s in [1.0, 0.1, 0.05, 0.01] {
            let reference_points = vec![point(s, 0.0, 0.0), point(0.0, s, 0.0), point(0.0, 0.0, s)];
            let incoming_points = rotate_points(&rz(), &reference_points);
            let reference = frame(&["P", "P", "P"], &reference_points);
            let incoming = frame(&["P", "P", "P"], &incoming_points);

            let result = align(&incoming, &reference, &AlignParams::default()).unwrap();
            for i in 0..9 {
                assert!(
                    (result.rotation[i] - expected[i]).abs() < 1e-9,
                    "scale {s}: {:?}",
                    result.rotation
                );
            }
            assert_axes_close(&result, &reference_points, 1e-9 * s);
            assert!(result.rmsd < 1e-6 * s);
        }
    }

    #[test]
    fn test_rotation_only_no_translation() {
        let reference_points = vec![
            point(11.0, 10.0, 10.0),
            point(10.0, 12.0, 10.0),
            point(10.0, 10.0, 13.0),
        ];
        let shifted: Vec<Point3> = reference_points.iter().map(|&p| p + point(5.0, 0.0, 0.0)).collect();
        let reference = frame(&["P", "P", "P"], &reference_points);
        let incoming = frame(&["P", "P", "P"], &shifted);

        let result = align(&incoming, &reference, &AlignParams::default()).unwrap();
        // A pure rotation cannot absorb the offset
        assert!(result.rmsd > 1.0);
        let det = crate::linalg::determinant_3x3(&result.rotation);
        assert!((det - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduces_surplus_incoming_anchors() {
        let r = rz();
        let core = [point(1.0, 0.0, 0.0), point(0.0, 2.0, 0.0), point(0.0, 0.0, 3.0)];
        let moved = rotate_points(&r, &core);

        // Peripheral anchors balance the core so the anchor centroid is the origin
        let incoming_points = vec![
            point(30.0, 0.0, 30.0),
            point(1.0, 1.0, 0.0),
            moved[2],
            moved[0],
            point(0.0, 30.0, -30.0),
            moved[1],
            point(0.0, 0.0, -1.0),
            point(-28.0, -31.0, -3.0),
        ];
        let incoming = frame(&["P", "C", "P", "P", "P", "P", "O", "P"], &incoming_points);
        let reference = frame(
            &["P", "C", "P", "P"],
            &[core[0], point(5.0, 5.0, 5.0), core[1], core[2]],
        );

        let result = align(&incoming, &reference, &AlignParams::default()).unwrap();
        assert_eq!(result.anchors.incoming, vec![3, 5, 2]);
        assert_eq!(result.anchors.reference, vec![0, 2, 3]);
        assert_eq!(result.anchors.reduced, Some(StructureRole::Incoming));
        assert!(result.rmsd < 1e-6);

        // Kept anchors coincide with their reference partners
        for (&i, &j) in result.anchors.incoming.iter().zip(&result.anchors.reference) {
            let target = reference.point(j);
            assert!((result.x[i] - target.x).abs() < 1e-9);
            assert!((result.y[i] - target.y).abs() < 1e-9);
            assert!((result.z[i] - target.z).abs() < 1e-9);
        }
        // Every incoming atom is rotated, not just the anchors
        assert_eq!(result.x.len(), incoming.len());
        assert!((result.x[1] - 1.0).abs() < 1e-9);
        assert!((result.y[1] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_surviving_anchors_underdetermine_rotation() {
        let incoming = frame(
            &["P", "P", "C", "P", "P"],
            &[
                point(10.0, 0.0, 0.0),
                point(1.0, 0.0, 0.0),
                point(0.0, 0.0, 0.0),
                point(-1.5, 0.0, 0.0),
                point(-9.0, 0.0, 0.0),
            ],
        );
        let reference = frame(
            &["P", "C", "P"],
            &[point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0)],
        );

        let pairing = AnchorPairing::select(&incoming, &reference, "P").unwrap();
        assert_eq!(pairing.incoming, vec![1, 3]);

        let err = align(&incoming, &reference, &AlignParams::default()).unwrap_err();
        assert_eq!(err, AlignError::DegenerateInput(2));
    }

    #[test]
    fn test_missing_anchors() {
        let with = frame(&["P", "P", "P"], &[point(1.0, 0.0, 0.0), point(0.0, 1.0, 0.0), point(0.0, 0.0, 1.0)]);
        let without = frame(&["C", "N", "O"], &[point(1.0, 0.0, 0.0), point(0.0, 1.0, 0.0), point(0.0, 0.0, 1.0)]);

        let err = align(&without, &with, &AlignParams::default()).unwrap_err();
        assert!(matches!(
            err,
            AlignError::AnchorNotFound { role: StructureRole::Incoming, .. }
        ));
        let err = align(&with, &without, &AlignParams::default()).unwrap_err();
        assert!(matches!(
            err,
            AlignError::AnchorNotFound { role: StructureRole::Reference, .. }
        ));

        // A different anchor label finds the other atoms
        let result = align(&without, &without, &AlignParams::with_anchor("O"));
        assert!(matches!(result, Err(AlignError::DegenerateInput(1))));
    }

    #[test]
    fn test_decimal_precision_matches_native() {
        let reference_points = vec![
            point(1.25, -0.5, 0.0),
            point(0.0, 1.75, 0.5),
            point(-0.5, 0.0, 2.0),
            point(3.0, 3.0, -1.0),
        ];
        let r = rotation_about_axis(point(0.0, 0.6, 0.8), 0.9);
        let incoming_points = rotate_points(&r, &reference_points);
        let reference = frame(&["P", "P", "P", "C"], &reference_points);
        let incoming = frame(&["P", "P", "P", "C"], &incoming_points);

        let native = align(&incoming, &reference, &AlignParams::default()).unwrap();
        let params = AlignParams {
            precision: Precision::Decimal,
            ..AlignParams::default()
        };
        let exact = align(&incoming, &reference, &params).unwrap();

        assert_eq!(native.rotation, exact.rotation);
        for i in 0..reference_points.len() {
            assert!((native.x[i] - exact.x[i]).abs() < 1e-12);
            assert!((native.y[i] - exact.y[i]).abs() < 1e-12);
            assert!((native.z[i] - exact.z[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_align_axes() {
        let result = align_axes(
            &["P", "P", "P"],
            &[0.0, -1.0, 0.0],
            &[1.0, 0.0, 0.0],
            &[0.0, 0.0, 1.0],
            &["P", "P", "P"],
            &[1.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0],
            "P",
        )
        .unwrap();
        let expected = [point(1.0, 0.0, 0.0), point(0.0, 1.0, 0.0), point(0.0, 0.0, 1.0)];
        assert_axes_close(&result, &expected, 1e-9);

        let err = align_axes(
            &["P", "P"],
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 2.0],
            &["P", "P", "P"],
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 2.0],
            "P",
        )
        .unwrap_err();
        assert!(matches!(err, AlignError::LengthMismatch { .. }));
    }
}
