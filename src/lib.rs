
//! Gamma path visualization library
//!
//! This library provides the mathematical pipeline for rendering a "gamma path"
//! (a sequence of generator indices of a genus-5 Fuchsian-type group) as a
//! trajectory on the Poincaré disk: generator table construction, Möbius orbit
//! evaluation in the upper half-plane, and conformal projection into the disk.

pub mod animation;
pub mod config;
pub mod error;
pub mod group;
pub mod interfaces;
pub mod orbit;
pub mod projection;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
