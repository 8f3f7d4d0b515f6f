//! Reader and writer traits for trajectory formats

use crate::error::IoResult;
use crate::trajectory::Trajectory;

/// Source of structure trajectories
pub trait TrajectoryReader {
    /// Read every frame the source holds
    fn read(&mut self) -> IoResult<Trajectory>;
}

/// Destination for structure trajectories
pub trait TrajectoryWriter {
    /// Write every frame of `trajectory`
    fn write(&mut self, trajectory: &Trajectory) -> IoResult<()>;

    /// Flush buffered output
    fn flush(&mut self) -> IoResult<()>;
}
