// Group module: Contains the Fuchsian generator table and the Möbius action
// This module provides the matrix-group side of the gamma path pipeline

// ======================== MODULE DECLARATIONS ========================
pub mod fuchsian_group;
pub mod mobius;


// ======================== GENERATOR TABLE ========================
pub use fuchsian_group::{
    FuchsianGroup,        // struct - fixed 20-entry generator table of the genus-5 group
    BASE_GENERATOR_COUNT, // const - number of hard-coded base generators (10)
    GENERATOR_COUNT,      // const - total generator count including inverses (20)
};
// FuchsianGroup impl methods:
//   genus_5() -> Result<Self, PathError>                              - builds the determinant-checked table
//   generator(&self, index: usize) -> Result<Matrix2<f64>, PathError> - matrix for an index in 0..20
//   generator_count(&self) -> usize                                   - table size (20)
//   genus(&self) -> u32                                               - surface genus (5)

// ======================== MÖBIUS ACTION ========================
pub use mobius::{
    apply_mobius,       // fn(m: &Matrix2<f64>, z: Complex64) -> HalfPlanePoint - action on a finite point
    apply_mobius_point, // fn(m: &Matrix2<f64>, p: HalfPlanePoint) -> HalfPlanePoint - action on the compactified half-plane
};
