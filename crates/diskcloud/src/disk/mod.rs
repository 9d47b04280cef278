//! Disk sampling and point-cloud normalization.
//!
//! Purpose
//! - Draw `n` points uniformly over the area of a disk of radius `R` from an
//!   explicitly passed RNG, convert them to Cartesian coordinates, and shift
//!   them into the non-negative quadrant expected by the hull solver.
//!
//! Code cross-refs: `sample_polar`, `to_cartesian`, `PointCloud::normalize`.

pub mod cloud;
pub mod sample;

pub use cloud::PointCloud;
pub use sample::{sample_polar, to_cartesian, PolarSamples};

/// One Cartesian sample.
pub type CartesianSample = nalgebra::Vector2<f32>;

#[cfg(test)]
mod tests;
