// Disk projection module: conformal map from the upper half-plane to the Poincaré disk

use num_complex::Complex64;

use crate::interfaces::{DiskPoint, HalfPlanePoint};
use crate::orbit::Orbit;

/// Cayley transform w = (z - i)/(z + i).
///
/// Sends i to 0, the upper half-plane into the open unit disk, and the
/// real axis onto the unit circle.
pub fn to_disk(z: Complex64) -> DiskPoint {
    let i = Complex64::new(0.0, 1.0);
    (z - i) / (z + i)
}

/// Project a walk point for display.
///
/// Infinity maps to the disk origin. This is a display-layer fallback, not
/// a property of the transform (the true image of infinity is the boundary
/// point 1).
pub fn project(point: HalfPlanePoint) -> DiskPoint {
    match point {
        HalfPlanePoint::Finite(z) => to_disk(z),
        HalfPlanePoint::Infinity => Complex64::new(0.0, 0.0),
    }
}

/// Project a whole orbit elementwise, preserving order and length.
pub fn project_orbit(orbit: &Orbit) -> Vec<DiskPoint> {
    orbit.iter().map(project).collect()
}
