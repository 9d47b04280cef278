//! Synthetic 2D point clouds sampled uniformly over a disk.
//!
//! The pipeline is linear and runs once per invocation:
//! resolve parameters → sample polar coordinates → convert to Cartesian →
//! shift into the non-negative quadrant → write a flat `f32` point file.
//!
//! The point files feed an external convex-hull solver that expects
//! `n` little-endian x-values followed by `n` y-values.

pub mod codec;
pub mod count;
pub mod disk;
pub mod error;
pub mod params;
pub mod pipeline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GenError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::codec::{decode, encode, read_cloud, write_cloud, BYTES_PER_POINT};
    pub use crate::count::{parse_count_expr, CountSpec, PointCount, DEFAULT_COUNT, MAX_COUNT};
    pub use crate::disk::{sample_polar, to_cartesian, CartesianSample, PointCloud, PolarSamples};
    pub use crate::error::GenError;
    pub use crate::params::{GenParams, Normalization, RadiusRule};
    pub use crate::pipeline::{generate, generate_seeded, run, verify, RunReport};
}
