//! XYZ trajectory format
//!
//! Each frame is an atom count line, a comment line, then one
//! `label x y z` line per atom. Frames follow each other directly.

mod parser;
mod writer;

pub use parser::XyzReader;
pub use writer::XyzWriter;

use std::io::{Read, Write};
use std::path::Path;

use crate::compress::{create_file, open_file};
use crate::error::IoResult;
use crate::traits::{TrajectoryReader, TrajectoryWriter};
use crate::trajectory::Trajectory;

/// Read an XYZ file from a path (gzip if it ends in `.gz`)
pub fn read_xyz(path: &Path) -> IoResult<Trajectory> {
    let file = open_file(path)?;
    let mut reader = XyzReader::new(file);
    reader.read()
}

/// Read an XYZ trajectory from a string
pub fn read_xyz_str(content: &str) -> IoResult<Trajectory> {
    let mut reader = XyzReader::new(content.as_bytes());
    reader.read()
}

/// Read an XYZ trajectory from a reader
pub fn read_xyz_from<R: Read>(reader: R) -> IoResult<Trajectory> {
    let mut reader = XyzReader::new(reader);
    reader.read()
}

/// Write a trajectory to a path (gzip if it ends in `.gz`)
pub fn write_xyz(path: &Path, trajectory: &Trajectory) -> IoResult<()> {
    let mut writer = XyzWriter::new(create_file(path)?);
    writer.write(trajectory)?;
    writer.flush()?;
    writer.into_inner().finish()?.flush()?;
    Ok(())
}

/// Write a trajectory to any writer
pub fn write_xyz_to<W: Write>(writer: W, trajectory: &Trajectory) -> IoResult<()> {
    let mut writer = XyzWriter::new(writer);
    writer.write(trajectory)?;
    writer.flush()
}
