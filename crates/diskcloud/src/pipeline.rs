//! End-to-end generation: parameters → samples → normalized cloud → point file.
//!
//! `generate` is the pure part and takes any RNG; `run` seeds a `StdRng`, writes
//! the file under `out_dir`, and reports what it did so callers can log or
//! record provenance.

use crate::codec;
use crate::disk::{sample_polar, to_cartesian, PointCloud};
use crate::error::{GenError, Result};
use crate::params::GenParams;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Summary of one generator run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub path: PathBuf,
    pub count: usize,
    pub radius_bound: f32,
    pub seed: u64,
    pub offset: Vector2<f32>,
    pub bytes_written: u64,
    /// First (up to) two stored x-values, echoed so readers can check byte order.
    pub head_x: Vec<f32>,
}

/// Sample, convert, and normalize a cloud with the given RNG.
pub fn generate<R: Rng + ?Sized>(params: &GenParams, rng: &mut R) -> Result<PointCloud> {
    params.validate()?;
    let n = params.count.count;
    let radius_bound = params.radius_bound();
    let polar = sample_polar(rng, n, radius_bound);
    tracing::info!(
        count = n.get(),
        radius_bound,
        "generated random points as radius and theta coordinates"
    );
    let mut cloud = to_cartesian(&polar);
    drop(polar);
    tracing::info!("coordinate conversion finished");
    cloud.normalize(params.normalization, radius_bound);
    Ok(cloud)
}

/// [`generate`] with a `StdRng` seeded from `seed`.
pub fn generate_seeded(params: &GenParams, seed: u64) -> Result<PointCloud> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(params, &mut rng)
}

/// Generate and write `out_dir/round_<label>`.
pub fn run(params: &GenParams, seed: u64, out_dir: &Path) -> Result<(RunReport, PointCloud)> {
    let cloud = generate_seeded(params, seed)?;
    let head_x: Vec<f32> = cloud.xs().iter().take(2).copied().collect();
    tracing::info!(
        head_x = ?head_x,
        "first two x values (check the reader decodes them identically)"
    );
    let path = out_dir.join(params.count.file_name());
    let bytes_written = codec::write_cloud(&path, &cloud)?;
    tracing::info!(path = %path.display(), bytes_written, "all finished correctly");
    let report = RunReport {
        path,
        count: cloud.len(),
        radius_bound: params.radius_bound(),
        seed,
        offset: cloud.offset(),
        bytes_written,
        head_x,
    };
    Ok((report, cloud))
}

/// Read the file named in `report` back and compare it bit-for-bit with `cloud`.
pub fn verify(report: &RunReport, cloud: &PointCloud) -> Result<()> {
    let expected_len = cloud.len() as u64 * codec::BYTES_PER_POINT as u64;
    if report.bytes_written != expected_len {
        return Err(GenError::format(format!(
            "wrote {} bytes, expected {expected_len}",
            report.bytes_written
        )));
    }
    let back = codec::read_cloud(&report.path)?;
    if back.len() != cloud.len() {
        return Err(GenError::format(format!(
            "file holds {} points, expected {}",
            back.len(),
            cloud.len()
        )));
    }
    let same = |a: &[f32], b: &[f32]| a.iter().zip(b).all(|(p, q)| p.to_bits() == q.to_bits());
    if !same(back.xs(), cloud.xs()) {
        return Err(GenError::format("x block differs from generated values"));
    }
    if !same(back.ys(), cloud.ys()) {
        return Err(GenError::format("y block differs from generated values"));
    }
    tracing::debug!(path = %report.path.display(), "verified point file");
    Ok(())
}
