//! XYZ trajectory parser

use std::io::{BufRead, BufReader, Read};

use ribo_algos::StructureFrame;

use crate::error::{IoError, IoResult};
use crate::traits::TrajectoryReader;
use crate::trajectory::Trajectory;

/// XYZ file reader
pub struct XyzReader<R> {
    reader: BufReader<R>,
    line_number: usize,
}

/// One parsed frame with its comment line
struct ParsedFrame {
    comment: String,
    frame: StructureFrame,
}

impl<R: Read> XyzReader<R> {
    /// Create a new XYZ reader
    pub fn new(reader: R) -> Self {
        XyzReader {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Read a single line, without its line terminator
    fn read_line(&mut self) -> IoResult<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(Some(line))
            }
            Err(e) => Err(IoError::Io(e)),
        }
    }

    /// Parse the next frame, or `None` at end of input
    fn parse_frame(&mut self) -> IoResult<Option<ParsedFrame>> {
        // Line 1: atom count; blank lines between frames are tolerated
        let n_atoms_line = loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };

        let n_atoms: usize = n_atoms_line
            .trim()
            .parse()
            .map_err(|_| IoError::parse(self.line_number, "Invalid atom count"))?;

        if n_atoms == 0 {
            return Err(IoError::parse(self.line_number, "Zero atoms in XYZ frame"));
        }

        // Line 2: comment
        let comment = match self.read_line()? {
            Some(line) => line.trim().to_string(),
            None => {
                return Err(IoError::parse(
                    self.line_number,
                    "Expected comment line after atom count",
                ))
            }
        };

        let mut labels = Vec::with_capacity(n_atoms);
        let mut x = Vec::with_capacity(n_atoms);
        let mut y = Vec::with_capacity(n_atoms);
        let mut z = Vec::with_capacity(n_atoms);

        for i in 0..n_atoms {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    return Err(IoError::parse(
                        self.line_number,
                        format!("Expected atom {}, got end of file", i + 1),
                    ))
                }
            };

            let (label, coord) = parse_atom_line(&line, self.line_number)?;
            labels.push(label);
            x.push(coord[0]);
            y.push(coord[1]);
            z.push(coord[2]);
        }

        let frame = StructureFrame::new(labels, x, y, z)?;
        Ok(Some(ParsedFrame { comment, frame }))
    }
}

impl<R: Read> TrajectoryReader for XyzReader<R> {
    fn read(&mut self) -> IoResult<Trajectory> {
        let first = match self.parse_frame()? {
            Some(parsed) => parsed,
            None => return Err(IoError::EmptyFile),
        };
        let n_atoms = first.frame.len();
        let mut frames = vec![first.frame];

        while let Some(parsed) = self.parse_frame()? {
            if parsed.frame.len() != n_atoms {
                log::debug!(
                    "XYZ frame {} has {} atoms, expected {}; ignoring remaining frames",
                    frames.len() + 1,
                    parsed.frame.len(),
                    n_atoms
                );
                break;
            }
            frames.push(parsed.frame);
        }

        Ok(Trajectory::new(first.comment, frames))
    }
}

/// Parse an atom line: `label x y z [extra columns]`
fn parse_atom_line(line: &str, line_number: usize) -> IoResult<(String, [f64; 3])> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() < 4 {
        return Err(IoError::parse(
            line_number,
            format!("Atom line too short: expected 'label x y z', got '{}'", line),
        ));
    }

    let mut coord = [0.0f64; 3];
    for (axis, (value, name)) in parts[1..4].iter().zip(["x", "y", "z"]).enumerate() {
        let parsed: f64 = value
            .parse()
            .map_err(|_| IoError::parse(line_number, format!("Invalid {} coordinate", name)))?;
        if !parsed.is_finite() {
            return Err(IoError::parse(
                line_number,
                format!("Non-finite {} coordinate", name),
            ));
        }
        coord[axis] = parsed;
    }

    Ok((parts[0].to_string(), coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_atom_line() {
        let (label, coord) = parse_atom_line("P  1.5000  -2.2500  0.0000  extra", 1).unwrap();
        assert_eq!(label, "P");
        assert_eq!(coord, [1.5, -2.25, 0.0]);
    }

    #[test]
    fn test_parse_atom_line_errors() {
        let err = parse_atom_line("P 1.0 2.0", 7).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 7, .. }));

        let err = parse_atom_line("P 1.0 abc 2.0", 3).unwrap_err();
        assert!(err.to_string().contains("Invalid y coordinate"));

        assert!(parse_atom_line("P 1.0 NaN 2.0", 3).is_err());
    }

    #[test]
    fn test_read_single_frame() {
        let xyz_data = r#"3
Three phosphates
P     0.0000    0.0000    0.0000
C     0.9572    0.0000    0.0000
P    -0.2400    0.9266    0.0000
"#;

        let mut reader = XyzReader::new(xyz_data.as_bytes());
        let traj = reader.read().unwrap();

        assert_eq!(traj.len(), 1);
        assert_eq!(traj.title, "Three phosphates");
        let frame = traj.first().unwrap();
        assert_eq!(frame.labels(), &["P", "C", "P"]);
        assert_eq!(frame.x(), &[0.0, 0.9572, -0.24]);
        assert_eq!(frame.y()[2], 0.9266);
    }

    #[test]
    fn test_read_trajectory() {
        let xyz_data = r#"2
Frame 1
P  0.0  0.0  0.0
C  1.5  0.0  0.0

2
Frame 2
P  0.1  0.0  0.0
C  1.6  0.0  0.0
"#;

        let mut reader = XyzReader::new(xyz_data.as_bytes());
        let traj = reader.read().unwrap();

        assert_eq!(traj.len(), 2);
        assert_eq!(traj.atom_count(), 2);
        assert_eq!(traj.frames()[1].x(), &[0.1, 1.6]);
    }

    #[test]
    fn test_stops_at_atom_count_change() {
        let xyz_data = "2\nA\nP 0 0 0\nC 1 0 0\n1\nB\nP 0 0 0\n2\nC\nP 0 0 0\nC 1 0 0\n";
        let traj = XyzReader::new(xyz_data.as_bytes()).read().unwrap();
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn test_empty_and_truncated() {
        assert!(matches!(
            XyzReader::new("".as_bytes()).read(),
            Err(IoError::EmptyFile)
        ));
        assert!(matches!(
            XyzReader::new("0\n\n".as_bytes()).read(),
            Err(IoError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            XyzReader::new("3\ncomment\nP 0 0 0\n".as_bytes()).read(),
            Err(IoError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            XyzReader::new("three\n".as_bytes()).read(),
            Err(IoError::Parse { line: 1, .. })
        ));
    }
}
