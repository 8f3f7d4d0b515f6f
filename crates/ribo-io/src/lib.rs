//! Structure trajectory I/O
//!
//! Loads and saves the coordinate frames consumed by `ribo-algos`:
//!
//! - **XYZ** - multi-frame `label x y z` coordinate files, optionally
//!   gzip-compressed
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let traj = ribo_io::read_file(Path::new("rna.xyz.gz")).unwrap();
//! ribo_io::write_file(Path::new("copy.xyz"), &traj).unwrap();
//! ```

pub mod compress;
pub mod error;
pub mod traits;
pub mod trajectory;
pub mod xyz;

pub use error::{IoError, IoResult};
pub use traits::{TrajectoryReader, TrajectoryWriter};
pub use trajectory::Trajectory;
pub use xyz::{read_xyz, read_xyz_from, read_xyz_str, write_xyz, write_xyz_to, XyzReader, XyzWriter};

use std::path::Path;

use compress::strip_gzip_extension;

/// Trajectory formats recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// XYZ coordinate format
    Xyz,
    /// Unknown format
    Unknown,
}

impl FileFormat {
    /// Get the file format from a path, looking through a `.gz` suffix
    pub fn from_path(path: &Path) -> Self {
        match strip_gzip_extension(path)
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("xyz") => FileFormat::Xyz,
            _ => FileFormat::Unknown,
        }
    }
}

/// Read a trajectory, choosing the format from the file extension
pub fn read_file(path: &Path) -> IoResult<Trajectory> {
    match FileFormat::from_path(path) {
        FileFormat::Xyz => read_xyz(path),
        FileFormat::Unknown => Err(IoError::UnknownFormat(
            path.to_string_lossy().into_owned(),
        )),
    }
}

/// Write a trajectory, choosing the format from the file extension
pub fn write_file(path: &Path, trajectory: &Trajectory) -> IoResult<()> {
    match FileFormat::from_path(path) {
        FileFormat::Xyz => write_xyz(path, trajectory),
        FileFormat::Unknown => Err(IoError::UnknownFormat(
            path.to_string_lossy().into_owned(),
        )),
    }
}
