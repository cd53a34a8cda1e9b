// Möbius action module: fractional linear action of SL(2, R) on the upper half-plane

use log::warn;
use nalgebra::Matrix2;
use num_complex::Complex64;

use crate::config::MOBIUS_DENOM_TOLERANCE;
use crate::interfaces::HalfPlanePoint;

/// Apply z -> (a·z + b) / (c·z + d) to a finite point.
///
/// Returns the infinity sentinel when the denominator vanishes or the
/// quotient stops being finite; never panics.
pub fn apply_mobius(m: &Matrix2<f64>, z: Complex64) -> HalfPlanePoint {
    let numer = m[(0, 0)] * z + m[(0, 1)];
    let denom = m[(1, 0)] * z + m[(1, 1)];

    if denom.norm() < MOBIUS_DENOM_TOLERANCE {
        warn!("Möbius denominator vanished at z = {}", z);
        return HalfPlanePoint::Infinity;
    }

    let w = numer / denom;
    if w.re.is_finite() && w.im.is_finite() {
        HalfPlanePoint::Finite(w)
    } else {
        warn!("Möbius image of z = {} is not finite", z);
        HalfPlanePoint::Infinity
    }
}

/// Extend the action to the compactified half-plane.
///
/// Infinity maps to a/c, the image of the point at infinity under the
/// transformation; it stays at infinity when c = 0. A degenerate step
/// therefore propagates forward but is not sticky: a later generator with
/// c != 0 pulls the walk back to a (boundary) point.
pub fn apply_mobius_point(m: &Matrix2<f64>, point: HalfPlanePoint) -> HalfPlanePoint {
    match point {
        HalfPlanePoint::Finite(z) => apply_mobius(m, z),
        HalfPlanePoint::Infinity => {
            let c = m[(1, 0)];
            if c.abs() < MOBIUS_DENOM_TOLERANCE {
                HalfPlanePoint::Infinity
            } else {
                HalfPlanePoint::Finite(Complex64::new(m[(0, 0)] / c, 0.0))
            }
        }
    }
}
