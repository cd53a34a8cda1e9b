// Constants

// Tolerances
pub const DET_TOLERANCE: f64 = 1e-9; // Determinant check when the generator table is built
pub const INVERSE_TOLERANCE: f64 = 1e-9; // Generator/inverse product checks
pub const MOBIUS_DENOM_TOLERANCE: f64 = 1e-12; // Below this |cz + d| a Möbius step is degenerate

// Animation output
pub const FRAME_INTERVAL_MS: u64 = 500; // Display time per orbit point
pub const VIEW_SIZE: u32 = 800; // Square viewport edge in SVG user units
pub const DISK_MARGIN: f64 = 0.1; // Padding around the unit disk, in disk units
pub const DEFAULT_OUTPUT: &str = "path_animation.svg"; // Artifact path when none is given
