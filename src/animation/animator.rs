// Animator interface module: the sink side of the pipeline

use crate::animation::frame_sequence::FrameSequence;
use crate::Result;

/// Sink for a finished frame plan.
///
/// Implementations own timing, styling, and export format; the
/// mathematical pipeline only hands them ordered frames. A failing sink
/// must leave no half-written artifact handle behind (assemble first,
/// then one scoped open-write-close).
pub trait TrajectoryAnimator {
    /// Consume the frame plan and produce the output artifact.
    fn animate(&mut self, frames: &FrameSequence) -> Result<()>;
}
