//! Frame preparation
//!
//! Structure loaders hand over a trajectory; before it is displayed or
//! saved, its first frame is either left alone, moved so its centroid is
//! the origin, or rotated onto a reference structure. Later frames are
//! passed through untouched.

use ribo_algos::{align, AlignParams, AlignmentResult, StructureFrame};

use crate::error::CmdResult;

/// What to do with the first frame of a trajectory
#[derive(Debug, Clone, PartialEq)]
pub enum Preparation {
    /// Leave coordinates as loaded
    Keep,
    /// Translate so the centroid is the origin, at the configured precision
    Centralise,
    /// Rotate onto this reference frame
    AlignTo(StructureFrame),
}

/// Prepared frames plus the alignment, when one was performed
#[derive(Debug, Clone)]
pub struct Prepared {
    pub frames: Vec<StructureFrame>,
    pub alignment: Option<AlignmentResult>,
}

/// Apply `preparation` to the first frame of `frames`
pub fn prepare_trajectory(
    mut frames: Vec<StructureFrame>,
    preparation: &Preparation,
    params: &AlignParams,
) -> CmdResult<Prepared> {
    let modifies = !matches!(preparation, Preparation::Keep);
    if frames.is_empty() {
        if modifies {
            log::warn!("Trajectory has no frames; nothing to prepare");
        }
        return Ok(Prepared {
            frames,
            alignment: None,
        });
    }
    if modifies && frames.len() > 1 {
        log::warn!(
            "Trajectory has {} frames; only the first is prepared",
            frames.len()
        );
    }

    let first = &frames[0];
    let (prepared, alignment) = match preparation {
        Preparation::Keep => {
            return Ok(Prepared {
                frames,
                alignment: None,
            })
        }
        Preparation::Centralise => {
            log::info!("Centralising {} atoms", first.len());
            (first.centered(params.precision)?, None)
        }
        Preparation::AlignTo(reference) => {
            let result = align(first, reference, params)?;
            log::info!(
                "Aligned on {} '{}' anchor pairs, RMSD = {:.3}",
                result.n_anchors(),
                params.anchor_type,
                result.rmsd
            );
            if let Some(role) = result.anchors.reduced {
                log::info!("Surplus anchors dropped from the {} structure", role);
            }
            let aligned = first.with_coordinates(result.x.clone(), result.y.clone(), result.z.clone())?;
            (aligned, Some(result))
        }
    };

    log_sampled_coordinates(&prepared);
    frames[0] = prepared;

    Ok(Prepared { frames, alignment })
}

/// Log every `max(n / 10, 1)`-th atom position at debug level
pub fn log_sampled_coordinates(frame: &StructureFrame) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let step = (frame.len() / 10).max(1);
    for i in (0..frame.len()).step_by(step) {
        log::debug!(
            "atom {:>6} {:<4} {:12.4} {:12.4} {:12.4}",
            i,
            frame.labels()[i],
            frame.x()[i],
            frame.y()[i],
            frame.z()[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribo_algos::{centroid, frame_from_slices, AlignError, Precision};

    fn frame() -> StructureFrame {
        frame_from_slices(
            &["P", "C", "P", "P"],
            &[1.0, 3.0, 0.0, 2.0],
            &[0.0, 1.0, 2.0, 5.0],
            &[4.0, 0.0, 1.0, 3.0],
        )
        .unwrap()
    }

    #[test]
    fn test_keep_is_untouched() {
        let frames = vec![frame()];
        let prepared = prepare_trajectory(frames.clone(), &Preparation::Keep, &AlignParams::default()).unwrap();
        assert_eq!(prepared.frames, frames);
        assert!(prepared.alignment.is_none());
    }

    #[test]
    fn test_empty_trajectory() {
        let prepared =
            prepare_trajectory(Vec::new(), &Preparation::Centralise, &AlignParams::default()).unwrap();
        assert!(prepared.frames.is_empty());
    }

    #[test]
    fn test_centralise_first_frame_only() {
        let frames = vec![frame(), frame()];
        let prepared =
            prepare_trajectory(frames, &Preparation::Centralise, &AlignParams::default()).unwrap();

        let c = centroid(&prepared.frames[0].points()).unwrap();
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12 && c.z.abs() < 1e-12);
        assert_eq!(prepared.frames[0].labels(), frame().labels());
        assert_eq!(prepared.frames[1], frame());
    }

    #[test]
    fn test_centralise_honours_decimal_precision() {
        // Native summation loses the small terms next to 1e15
        let wide = frame_from_slices(
            &["P", "P", "P", "C"],
            &[1e15, 0.1, -1e15, 0.2],
            &[0.0, 1.0, 2.0, 3.0],
            &[0.0, 0.0, 1.0, 1.0],
        )
        .unwrap();
        let params = AlignParams {
            precision: Precision::Decimal,
            ..AlignParams::default()
        };

        let prepared = prepare_trajectory(vec![wide.clone()], &Preparation::Centralise, &params).unwrap();
        let decimal = wide.centered(Precision::Decimal).unwrap();
        let native = wide.centered(Precision::Native).unwrap();
        assert_eq!(prepared.frames[0], decimal);
        assert!((decimal.x()[1] - native.x()[1]).abs() > 1e-3);
    }

    #[test]
    fn test_align_to_reference() {
        let reference = frame();
        // Incoming is the reference turned a quarter about z: (x, y) -> (-y, x)
        let incoming = frame_from_slices(
            &["P", "C", "P", "P"],
            &[0.0, -1.0, -2.0, -5.0],
            &[1.0, 3.0, 0.0, 2.0],
            &[4.0, 0.0, 1.0, 3.0],
        )
        .unwrap();

        let prepared = prepare_trajectory(
            vec![incoming],
            &Preparation::AlignTo(reference.clone()),
            &AlignParams::default(),
        )
        .unwrap();

        let aligned = &prepared.frames[0];
        for i in 0..reference.len() {
            assert!((aligned.x()[i] - reference.x()[i]).abs() < 1e-9);
            assert!((aligned.y()[i] - reference.y()[i]).abs() < 1e-9);
            assert!((aligned.z()[i] - reference.z()[i]).abs() < 1e-9);
        }
        let alignment = prepared.alignment.unwrap();
        assert_eq!(alignment.n_anchors(), 3);
        assert!(alignment.rmsd < 1e-6);
    }

    #[test]
    fn test_align_failure_propagates() {
        let reference = frame_from_slices(&["C"], &[0.0], &[0.0], &[0.0]).unwrap();
        let err = prepare_trajectory(
            vec![frame()],
            &Preparation::AlignTo(reference),
            &AlignParams::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CmdError::Align(AlignError::AnchorNotFound { .. })
        ));
    }
}
