//! In-memory trajectory
//!
//! A sequence of [`StructureFrame`]s sharing one atom count, as read from
//! a multi-frame coordinate file.

use ribo_algos::StructureFrame;

/// Ordered frames of one structure plus the file's title line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    /// Comment line of the first frame
    pub title: String,
    frames: Vec<StructureFrame>,
}

impl Trajectory {
    pub fn new(title: impl Into<String>, frames: Vec<StructureFrame>) -> Self {
        Self {
            title: title.into(),
            frames,
        }
    }

    /// Single-frame trajectory
    pub fn single(title: impl Into<String>, frame: StructureFrame) -> Self {
        Self::new(title, vec![frame])
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Atom count per frame (0 for an empty trajectory)
    pub fn atom_count(&self) -> usize {
        self.frames.first().map_or(0, StructureFrame::len)
    }

    pub fn first(&self) -> Option<&StructureFrame> {
        self.frames.first()
    }

    pub fn frames(&self) -> &[StructureFrame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<StructureFrame> {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribo_algos::frame_from_slices;

    #[test]
    fn test_atom_count() {
        assert_eq!(Trajectory::default().atom_count(), 0);

        let frame = frame_from_slices(&["P", "C"], &[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0]).unwrap();
        let traj = Trajectory::new("t", vec![frame.clone(), frame]);
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.atom_count(), 2);
        assert_eq!(traj.first().map(|f| f.labels()[0].as_str()), Some("P"));
    }
}
