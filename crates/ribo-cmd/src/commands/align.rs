//! `align` command: rotate an incoming structure onto a reference
//!
//! Both structures are read from trajectory files and, unless disabled,
//! centered first so the rotation-only fit amounts to a full rigid-body
//! superposition. Only the first incoming frame is moved.

use std::fmt;
use std::path::{Path, PathBuf};

use ribo_algos::{select_anchors, StructureFrame, StructureRole};
use ribo_io::Trajectory;

use crate::error::{CmdError, CmdResult};
use crate::prepare::{prepare_trajectory, Preparation};
use crate::settings::AlignSettings;

/// Outcome of [`align`]
#[derive(Debug, Clone, PartialEq)]
pub struct AlignReport {
    pub rmsd: f64,
    /// Anchor pairs used in the fit
    pub n_pairs: usize,
    pub incoming_anchors: usize,
    pub reference_anchors: usize,
    pub reduced: Option<StructureRole>,
    pub output: PathBuf,
}

impl fmt::Display for AlignReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            " Executive: RMSD = {:8.3}, {} to {} anchors",
            self.rmsd, self.n_pairs, self.n_pairs
        )?;
        writeln!(
            f,
            "   Anchors found:   {} incoming, {} reference",
            self.incoming_anchors, self.reference_anchors
        )?;
        if let Some(role) = self.reduced {
            writeln!(f, "   Reduced:         {} anchors trimmed to {}", role, self.n_pairs)?;
        }
        write!(f, "   Output:          {}", self.output.display())
    }
}

fn first_frame(trajectory: &Trajectory, path: &Path) -> CmdResult<StructureFrame> {
    trajectory
        .first()
        .cloned()
        .ok_or_else(|| CmdError::EmptyTrajectory(path.display().to_string()))
}

/// Align the first frame of `incoming` onto the first frame of `reference`
/// and write the incoming trajectory to `output`
pub fn align(
    incoming: &Path,
    reference: &Path,
    output: &Path,
    settings: &AlignSettings,
) -> CmdResult<AlignReport> {
    let params = settings.to_params();

    let reference_traj = ribo_io::read_file(reference)?;
    log::info!(
        "Loaded reference: {} atoms from {}",
        reference_traj.atom_count(),
        reference.display()
    );
    let mut reference_frame = first_frame(&reference_traj, reference)?;
    if settings.centralise_reference {
        reference_frame = reference_frame.centered(settings.precision)?;
    }

    let incoming_traj = ribo_io::read_file(incoming)?;
    log::info!(
        "Loaded incoming: {} frame(s) of {} atoms from {}",
        incoming_traj.len(),
        incoming_traj.atom_count(),
        incoming.display()
    );
    let incoming_frame = first_frame(&incoming_traj, incoming)?;

    let incoming_anchors = select_anchors(incoming_frame.labels(), &params.anchor_type).len();
    let reference_anchors = select_anchors(reference_frame.labels(), &params.anchor_type).len();
    log::info!(
        "Found {} incoming and {} reference '{}' anchors",
        incoming_anchors,
        reference_anchors,
        params.anchor_type
    );

    let title = incoming_traj.title.clone();
    let mut frames = incoming_traj.into_frames();
    if settings.centralise_incoming {
        frames = prepare_trajectory(frames, &Preparation::Centralise, &params)?.frames;
    }
    let prepared = prepare_trajectory(frames, &Preparation::AlignTo(reference_frame), &params)?;
    let alignment = prepared
        .alignment
        .ok_or_else(|| CmdError::EmptyTrajectory(incoming.display().to_string()))?;

    ribo_io::write_file(output, &Trajectory::new(title, prepared.frames))?;
    log::info!("Wrote {}", output.display());

    Ok(AlignReport {
        rmsd: alignment.rmsd,
        n_pairs: alignment.n_anchors(),
        incoming_anchors,
        reference_anchors,
        reduced: alignment.anchors.reduced,
        output: output.to_path_buf(),
    })
}
