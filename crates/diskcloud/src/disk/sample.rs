//! Area-uniform polar sampling on a disk and conversion to Cartesian.
//!
//! Model
//! - `theta = 2π·u₁`, `radius = R·sqrt(u₂)` with `u₁, u₂` uniform on `[0, 1)`.
//!   The square root makes the density uniform in area; a plain uniform radius
//!   would crowd points towards the rim.
//! - All angles are drawn first, then all radii, from the caller's RNG.

use super::cloud::PointCloud;
use crate::count::PointCount;
use rand::Rng;
use std::f32::consts::TAU;

/// Largest `f32` strictly below 2π.
#[allow(clippy::approx_constant)]
const THETA_MAX: f32 = 6.283_185;

/// Angles and radii of `n` points, stored as parallel arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolarSamples {
    pub theta: Vec<f32>,
    pub radius: Vec<f32>,
}

impl PolarSamples {
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// `(theta, radius)` pairs in sample order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.theta.iter().copied().zip(self.radius.iter().copied())
    }
}

/// Draw `n` polar samples inside the disk of radius `radius_bound`.
pub fn sample_polar<R: Rng + ?Sized>(
    rng: &mut R,
    n: PointCount,
    radius_bound: f32,
) -> PolarSamples {
    let n = n.get();
    let theta: Vec<f32> = (0..n)
        .map(|_| (rng.gen::<f32>() * TAU).min(THETA_MAX))
        .collect();
    let radius: Vec<f32> = (0..n)
        .map(|_| rng.gen::<f32>().sqrt() * radius_bound)
        .collect();
    PolarSamples { theta, radius }
}

/// `x = r·cos θ`, `y = r·sin θ`, keeping sample order. The result is not normalized.
pub fn to_cartesian(polar: &PolarSamples) -> PointCloud {
    let (xs, ys) = polar
        .iter()
        .map(|(th, r)| {
            let (s, c) = th.sin_cos();
            (r * c, r * s)
        })
        .unzip();
    PointCloud::from_axes(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn theta_max_is_below_two_pi() {
        assert!(THETA_MAX < TAU);
        assert!((f64::from(THETA_MAX)) < std::f64::consts::TAU);
        assert_eq!(f32::from_bits(TAU.to_bits() - 1), THETA_MAX);
    }

    #[test]
    fn sample_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = PointCount::new(2_000).unwrap();
        let s = sample_polar(&mut rng, n, 4.0);
        assert_eq!(s.len(), 2_000);
        assert_eq!(s.radius.len(), 2_000);
        for (th, r) in s.iter() {
            assert!((0.0..TAU).contains(&th), "theta {th}");
            assert!((0.0..=4.0).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn cartesian_matches_polar() {
        let polar = PolarSamples {
            theta: vec![0.0, std::f32::consts::FRAC_PI_2, std::f32::consts::PI],
            radius: vec![2.0, 3.0, 1.0],
        };
        let cloud = to_cartesian(&polar);
        let expected = [(2.0, 0.0), (0.0, 3.0), (-1.0, 0.0)];
        for (p, (ex, ey)) in cloud.points().zip(expected) {
            assert!((p.x - ex).abs() < 1e-6 && (p.y - ey).abs() < 1e-6, "{p:?}");
        }
    }
}
