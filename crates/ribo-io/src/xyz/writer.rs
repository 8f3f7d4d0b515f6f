//! XYZ trajectory writer

use std::io::Write;

use ribo_algos::StructureFrame;

use crate::error::IoResult;
use crate::traits::TrajectoryWriter;
use crate::trajectory::Trajectory;

/// XYZ file writer
pub struct XyzWriter<W> {
    writer: W,
}

impl<W: Write> XyzWriter<W> {
    /// Create a new XYZ writer
    pub fn new(writer: W) -> Self {
        XyzWriter { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a single frame
    pub fn write_frame(&mut self, frame: &StructureFrame, comment: &str) -> IoResult<()> {
        writeln!(self.writer, "{}", frame.len())?;
        writeln!(self.writer, "{}", comment)?;

        for (i, label) in frame.labels().iter().enumerate() {
            writeln!(
                self.writer,
                "{:2}  {:14.8}  {:14.8}  {:14.8}",
                label,
                frame.x()[i],
                frame.y()[i],
                frame.z()[i]
            )?;
        }

        Ok(())
    }
}

impl<W: Write> TrajectoryWriter for XyzWriter<W> {
    fn write(&mut self, trajectory: &Trajectory) -> IoResult<()> {
        let comment = if trajectory.title.is_empty() {
            "structure"
        } else {
            trajectory.title.as_str()
        };

        for frame in trajectory.frames() {
            self.write_frame(frame, comment)?;
        }

        Ok(())
    }

    fn flush(&mut self) -> IoResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
