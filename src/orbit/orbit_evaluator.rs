// Orbit evaluation module: walks a gamma path from the basepoint under the Möbius action

use num_complex::Complex64;

use crate::error::PathError;
use crate::group::{apply_mobius_point, FuchsianGroup};
use crate::interfaces::HalfPlanePoint;
use crate::orbit::gamma_path::GammaPath;

/// Canonical basepoint of every walk: the imaginary unit
pub fn basepoint() -> Complex64 {
    Complex64::new(0.0, 1.0)
}

/// The ordered half-plane points visited by a path walk.
///
/// The basepoint is element 0, so the length is always path length + 1.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    points: Vec<HalfPlanePoint>,
}

impl Orbit {
    pub fn points(&self) -> &[HalfPlanePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = HalfPlanePoint> + '_ {
        self.points.iter().copied()
    }
}

/// Walks gamma paths against a borrowed generator table, one generator
/// per step. Pure with respect to the table; repeat evaluations of the
/// same path are bit-identical.
#[derive(Debug, Clone, Copy)]
pub struct OrbitEvaluator<'a> {
    group: &'a FuchsianGroup,
}

impl<'a> OrbitEvaluator<'a> {
    pub fn new(group: &'a FuchsianGroup) -> Self {
        OrbitEvaluator { group }
    }

    /// Evaluate the full orbit eagerly.
    ///
    /// The path is validated first, so an out-of-range index aborts
    /// before any Möbius arithmetic. Degenerate steps do not abort: the
    /// infinity sentinel is recorded and the walk continues from it,
    /// each step applying its generator to whatever point preceded it
    /// (no reset to the last finite value).
    pub fn evaluate(&self, path: &GammaPath) -> Result<Orbit, PathError> {
        path.validate(self.group.generator_count())?;

        let mut points = Vec::with_capacity(path.len() + 1);
        points.extend(self.walk(path));

        Ok(Orbit { points })
    }

    /// Lazy single-pass walk over the same orbit; the first yielded point
    /// is the basepoint. Indices must already be validated: an unknown
    /// index ends the walk early instead of panicking.
    pub fn walk<'p>(&self, path: &'p GammaPath) -> impl Iterator<Item = HalfPlanePoint> + 'p
    where
        'a: 'p,
    {
        let group: &'p FuchsianGroup = self.group;
        let start = HalfPlanePoint::Finite(basepoint());

        std::iter::once(start).chain(path.iter().scan(start, move |current, index| {
            let matrix = group.generator(index).ok()?;
            let next = apply_mobius_point(&matrix, *current);
            *current = next;
            Some(next)
        }))
    }
}
