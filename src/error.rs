// Error module: typed failure conditions of the gamma path pipeline

use thiserror::Error;

/// Errors surfaced by the generator table, path loading, and orbit evaluation.
///
/// Degenerate Möbius steps are deliberately absent here: they are recovered
/// locally with the infinity sentinel and never abort an evaluation.
#[derive(Debug, Error)]
pub enum PathError {
    /// A path element referenced a generator outside the table
    #[error("generator index {index} out of range (expected 0..{count})")]
    InvalidGeneratorIndex { index: usize, count: usize },

    /// A hard-coded generator failed the determinant check at table construction
    #[error("generator {index} has determinant {det}, expected 1")]
    InvalidGenerator { index: usize, det: f64 },

    /// The input document could not be turned into a gamma path
    #[error("malformed gamma input: {0}")]
    MalformedInput(String),
}
