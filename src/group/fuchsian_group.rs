// Fuchsian group module: the fixed genus-5 generator table
// Provides the 20 SL(2, R) generator matrices (10 base generators plus inverses)

use log::debug;
use nalgebra::Matrix2;

use crate::config::DET_TOLERANCE;
use crate::error::PathError;

/// Number of hard-coded base generators (A_i and B_i pairs of a genus-5 surface group)
pub const BASE_GENERATOR_COUNT: usize = 10;

/// Total generator count including inverses
pub const GENERATOR_COUNT: usize = 2 * BASE_GENERATOR_COUNT;

/// Base generators A1, B1, ..., A5, B5, stored row-major as [a, b, c, d]
/// for [[a, b], [c, d]]. All entries are integers and every determinant
/// is exactly 1, so the inverses are integer matrices as well.
const BASE_GENERATORS: [[f64; 4]; BASE_GENERATOR_COUNT] = [
    [2.0, 1.0, 1.0, 1.0],    // A1
    [3.0, 2.0, 1.0, 1.0],    // B1
    [5.0, 3.0, 3.0, 2.0],    // A2
    [7.0, 4.0, 5.0, 3.0],    // B2
    [11.0, 7.0, 3.0, 2.0],   // A3
    [13.0, 8.0, 8.0, 5.0],   // B3
    [17.0, 11.0, 3.0, 2.0],  // A4
    [19.0, 12.0, 11.0, 7.0], // B4
    [23.0, 14.0, 18.0, 11.0], // A5
    [21.0, 13.0, 8.0, 5.0],  // B5
];

/// The fixed generator table of a genus-5 Fuchsian-type group.
///
/// Indices 0-9 are the base generators; index i + 10 holds the inverse of
/// index i. The table is built once and immutable afterwards; evaluators
/// borrow it read-only.
#[derive(Debug, Clone)]
pub struct FuchsianGroup {
    genus: u32,
    generators: [Matrix2<f64>; GENERATOR_COUNT],
}

impl FuchsianGroup {
    /// Build the genus-5 table.
    ///
    /// Every base matrix is checked against determinant 1 before it is
    /// accepted; a failing literal is reported as
    /// `PathError::InvalidGenerator` instead of being trusted.
    pub fn genus_5() -> Result<Self, PathError> {
        let mut generators = [Matrix2::identity(); GENERATOR_COUNT];

        for (index, [a, b, c, d]) in BASE_GENERATORS.into_iter().enumerate() {
            let m = Matrix2::new(a, b, c, d);
            let det = m.determinant();
            if (det - 1.0).abs() > DET_TOLERANCE {
                return Err(PathError::InvalidGenerator { index, det });
            }
            generators[index] = m;
            generators[index + BASE_GENERATOR_COUNT] = unit_inverse(&m);
        }

        debug!("built genus-5 generator table ({} matrices)", GENERATOR_COUNT);

        Ok(FuchsianGroup { genus: 5, generators })
    }

    /// Matrix for a generator index in 0..20, returned by value.
    pub fn generator(&self, index: usize) -> Result<Matrix2<f64>, PathError> {
        self.generators
            .get(index)
            .copied()
            .ok_or(PathError::InvalidGeneratorIndex {
                index,
                count: GENERATOR_COUNT,
            })
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    pub fn genus(&self) -> u32 {
        self.genus
    }
}

/// Inverse of a unit-determinant 2x2 matrix via the adjugate:
/// [[a, b], [c, d]] -> [[d, -b], [-c, a]].
///
/// Exact for det = 1 (no division involved), unlike general inversion.
fn unit_inverse(m: &Matrix2<f64>) -> Matrix2<f64> {
    Matrix2::new(m[(1, 1)], -m[(0, 1)], -m[(1, 0)], m[(0, 0)])
}
