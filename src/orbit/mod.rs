// Orbit module: Contains the gamma path type and the orbit evaluator
// This module turns a sequence of generator indices into upper half-plane points

// ======================== MODULE DECLARATIONS ========================
pub mod gamma_path;
pub mod orbit_evaluator;

mod _tests_orbit_evaluator;

// ======================== GAMMA PATH ========================
pub use gamma_path::GammaPath; // struct - ordered sequence of generator indices
// GammaPath impl methods:
//   new(indices: Vec<usize>) -> Self                          - wraps an index sequence
//   len(&self) -> usize                                       - number of steps
//   is_empty(&self) -> bool                                   - true for the empty path
//   indices(&self) -> &[usize]                                - raw index slice
//   iter(&self) -> impl Iterator<Item = usize>                - index iterator
//   validate(&self, generator_count: usize) -> Result<(), PathError> - range check before evaluation
//   from_json_str(text: &str) -> Result<Self, PathError>      - parse from a JSON document
//   from_json_file(path) -> Result<Self, PathError>           - load from a JSON file
//   default() -> Self                                         - fixed 20-index literal path

// ======================== ORBIT EVALUATION ========================
pub use orbit_evaluator::{
    basepoint,      // fn() -> Complex64 - canonical basepoint i of the walk
    Orbit,          // struct - ordered half-plane points visited by a walk
    OrbitEvaluator, // struct - walks gamma paths against a borrowed generator table
};
// Orbit impl methods:
//   points(&self) -> &[HalfPlanePoint]                        - visited points, basepoint first
//   len(&self) -> usize                                       - path length + 1
//   iter(&self) -> impl Iterator<Item = HalfPlanePoint>       - point iterator
// OrbitEvaluator impl methods:
//   new(group: &FuchsianGroup) -> Self                        - borrows the generator table
//   evaluate(&self, path: &GammaPath) -> Result<Orbit, PathError> - eager, validated evaluation
//   walk(&self, path: &GammaPath) -> impl Iterator<Item = HalfPlanePoint> - lazy single-pass walk
