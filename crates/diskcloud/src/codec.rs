//! Flat binary point files.
//!
//! Layout: `n` little-endian IEEE-754 `f32` x-values in sample order, followed by
//! `n` y-values in the same order. No header; the reader infers `n` from the file
//! name or from `len / 8`.

use crate::disk::PointCloud;
use crate::error::{GenError, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bytes per stored point (one `f32` per axis).
pub const BYTES_PER_POINT: usize = 2 * std::mem::size_of::<f32>();

/// Encode the x-block followed by the y-block.
pub fn encode(cloud: &PointCloud) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(cloud.len() * BYTES_PER_POINT);
    for &v in cloud.xs().iter().chain(cloud.ys()) {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

/// Split a point file back into `(xs, ys)`.
pub fn decode(bytes: &[u8]) -> Result<(Vec<f32>, Vec<f32>)> {
    if bytes.len() % BYTES_PER_POINT != 0 {
        return Err(GenError::format(format!(
            "{} bytes is not a multiple of {BYTES_PER_POINT}",
            bytes.len()
        )));
    }
    let mut values = bytes.chunks_exact(4).map(|chunk| {
        let mut word = [0u8; 4];
        word.copy_from_slice(chunk);
        f32::from_le_bytes(word)
    });
    let n = bytes.len() / BYTES_PER_POINT;
    let xs: Vec<f32> = values.by_ref().take(n).collect();
    let ys: Vec<f32> = values.collect();
    Ok((xs, ys))
}

/// Write `cloud` to `path` and return the number of bytes written.
///
/// Data goes to `<path>.partial` first and is renamed into place once fully
/// flushed; the partial file is removed if any step fails.
pub fn write_cloud(path: &Path, cloud: &PointCloud) -> Result<u64> {
    let bytes = encode(cloud);
    let partial = partial_path(path);
    let written = write_synced(&partial, &bytes).and_then(|()| {
        fs::rename(&partial, path).map_err(|e| GenError::io(path, e))
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&partial);
        return Err(err);
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "point file written");
    Ok(bytes.len() as u64)
}

/// Read a point file written by [`write_cloud`].
pub fn read_cloud(path: &Path) -> Result<PointCloud> {
    let bytes = fs::read(path).map_err(|e| GenError::io(path, e))?;
    let (xs, ys) = decode(&bytes)?;
    Ok(PointCloud::from_axes(xs, ys))
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| GenError::io(path, e))?;
    file.write_all(bytes).map_err(|e| GenError::io(path, e))?;
    file.sync_all().map_err(|e| GenError::io(path, e))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("points"));
    name.push(".partial");
    path.with_file_name(name)
}
