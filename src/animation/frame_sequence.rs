// Frame plan module: per-frame trail/current decomposition of a projected trajectory

use crate::interfaces::DiskPoint;

/// One animation frame: the trail of every point seen so far, with the
/// newest point highlighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub index: usize,
    pub trail: &'a [DiskPoint],
    pub current: DiskPoint,
}

/// The full frame plan for a projected trajectory.
///
/// Frame k shows points 0..=k with point k highlighted, so the frame count
/// equals the trajectory length and frame 0 is the basepoint alone. The
/// plan is pure data; timing and export belong to the animator consuming it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    points: Vec<DiskPoint>,
}

impl FrameSequence {
    pub fn new(points: Vec<DiskPoint>) -> Self {
        FrameSequence { points }
    }

    pub fn frame_count(&self) -> usize {
        self.points.len()
    }

    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        let current = *self.points.get(index)?;
        Some(Frame {
            index,
            trail: &self.points[..=index],
            current,
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> {
        self.points.iter().enumerate().map(|(index, &current)| Frame {
            index,
            trail: &self.points[..=index],
            current,
        })
    }

    pub fn points(&self) -> &[DiskPoint] {
        &self.points
    }
}
