//! `center` command: move a structure's centroid to the origin

use std::fmt;
use std::path::{Path, PathBuf};

use ribo_algos::AlignParams;
use ribo_io::Trajectory;

use crate::error::{CmdError, CmdResult};
use crate::prepare::{prepare_trajectory, Preparation};

/// Outcome of [`center`]
#[derive(Debug, Clone, PartialEq)]
pub struct CenterReport {
    pub n_atoms: usize,
    pub n_frames: usize,
    pub output: PathBuf,
}

impl fmt::Display for CenterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " Executive: centered {} atoms ({} frame{}) -> {}",
            self.n_atoms,
            self.n_frames,
            if self.n_frames == 1 { "" } else { "s" },
            self.output.display()
        )
    }
}

/// Centralise the first frame of `input` and write the trajectory to `output`
pub fn center(input: &Path, output: &Path) -> CmdResult<CenterReport> {
    let trajectory = ribo_io::read_file(input)?;
    log::info!(
        "Loaded {} frame(s) of {} atoms from {}",
        trajectory.len(),
        trajectory.atom_count(),
        input.display()
    );
    if trajectory.is_empty() {
        return Err(CmdError::EmptyTrajectory(input.display().to_string()));
    }

    let title = trajectory.title.clone();
    let prepared = prepare_trajectory(
        trajectory.into_frames(),
        &Preparation::Centralise,
        &AlignParams::default(),
    )?;

    let result = Trajectory::new(title, prepared.frames);
    ribo_io::write_file(output, &result)?;
    log::info!("Wrote {}", output.display());

    Ok(CenterReport {
        n_atoms: result.atom_count(),
        n_frames: result.len(),
        output: output.to_path_buf(),
    })
}
