// Animation module: Contains the frame plan and trajectory sink implementations
// This module turns projected disk trajectories into a playable artifact

// ======================== MODULE DECLARATIONS ========================
pub mod animator;
pub mod frame_sequence;
pub mod svg_animator;

mod _tests_svg_animator;

// ======================== FRAME PLAN ========================
pub use frame_sequence::{
    Frame,         // struct - one frame: trail of points 0..=k with point k highlighted
    FrameSequence, // struct - full frame plan of a projected trajectory
};
// FrameSequence impl methods:
//   new(points: Vec<DiskPoint>) -> Self                     - N frames for N trajectory points
//   frame_count(&self) -> usize                             - equals the trajectory length
//   frame(&self, index: usize) -> Option<Frame>             - frame by index
//   frames(&self) -> impl Iterator<Item = Frame>            - frames in display order
//   points(&self) -> &[DiskPoint]                           - underlying trajectory

// ======================== TRAJECTORY SINKS ========================
pub use animator::TrajectoryAnimator; // trait - sink consuming a finished frame plan
// TrajectoryAnimator trait methods:
//   animate(&mut self, frames: &FrameSequence) -> Result<()> - consume the plan, produce the artifact

pub use svg_animator::SvgAnimator; // struct - reference sink writing one animated SVG file
// SvgAnimator impl methods:
//   new(output: impl Into<PathBuf>) -> Self                 - sink writing to the given path
//   render(&self, frames: &FrameSequence) -> String         - the SVG document for a frame plan
//   + TrajectoryAnimator::animate
