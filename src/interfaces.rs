// Definitions that are used throughout all modules

use num_complex::Complex64;

// A point of the upper half-plane model, or the point at infinity when a
// Möbius step degenerates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HalfPlanePoint {
    Finite(Complex64),
    Infinity,
}

impl HalfPlanePoint {
    pub fn is_finite(&self) -> bool {
        matches!(self, HalfPlanePoint::Finite(_))
    }

    pub fn finite(&self) -> Option<Complex64> {
        match self {
            HalfPlanePoint::Finite(z) => Some(*z),
            HalfPlanePoint::Infinity => None,
        }
    }
}

// Projected coordinates inside the open unit disk
pub type DiskPoint = Complex64;
