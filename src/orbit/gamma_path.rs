// Gamma path module: the generator-index sequence being visualized

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Literal fallback path used when no input document is given.
const DEFAULT_GAMMA: [usize; 20] = [
    0, 5, 1, 6, 2, 7, 3, 8, 4, 9, 10, 15, 11, 16, 12, 17, 13, 18, 14, 19,
];

/// Shape of an input document: a `gamma` field, with `private_key` kept
/// as the legacy fallback name.
#[derive(Debug, Deserialize)]
struct PathDocument {
    gamma: Option<Vec<usize>>,
    private_key: Option<Vec<usize>>,
}

/// An ordered sequence of generator indices (the "gamma path").
///
/// Repeats and arbitrary order are valid; the empty path is valid and
/// evaluates to the basepoint alone. Indices are range-checked against the
/// generator table by `validate`, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GammaPath(Vec<usize>);

impl GammaPath {
    pub fn new(indices: Vec<usize>) -> Self {
        GammaPath(indices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Check every index against the generator table size; the first
    /// offender is reported.
    pub fn validate(&self, generator_count: usize) -> Result<(), PathError> {
        match self.0.iter().find(|&&index| index >= generator_count) {
            Some(&index) => Err(PathError::InvalidGeneratorIndex {
                index,
                count: generator_count,
            }),
            None => Ok(()),
        }
    }

    /// Parse a path from a JSON document holding `gamma` (preferred) or
    /// `private_key` (fallback).
    pub fn from_json_str(text: &str) -> Result<Self, PathError> {
        let doc: PathDocument = serde_json::from_str(text)
            .map_err(|e| PathError::MalformedInput(format!("invalid JSON: {}", e)))?;

        let indices = doc.gamma.or(doc.private_key).ok_or_else(|| {
            PathError::MalformedInput(
                "neither \"gamma\" nor \"private_key\" present".to_string(),
            )
        })?;

        Ok(GammaPath(indices))
    }

    /// Load a path from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PathError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PathError::MalformedInput(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }
}

impl Default for GammaPath {
    fn default() -> Self {
        GammaPath(DEFAULT_GAMMA.to_vec())
    }
}

impl From<Vec<usize>> for GammaPath {
    fn from(indices: Vec<usize>) -> Self {
        GammaPath(indices)
    }
}
