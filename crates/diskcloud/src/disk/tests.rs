use super::*;
use crate::count::PointCount;
use crate::params::Normalization;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn draw(seed: u64, n: usize, r: f32) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let polar = sample_polar(&mut rng, PointCount::new(n).unwrap(), r);
    to_cartesian(&polar)
}

proptest! {
    #[test]
    fn points_stay_inside_disk(seed in any::<u64>(), n in 1usize..400, r in 0.01f32..1e4) {
        let cloud = draw(seed, n, r);
        prop_assert_eq!(cloud.len(), n);
        let slack = r * 1e-5;
        for p in cloud.points() {
            prop_assert!(p.norm() <= r + slack, "{:?} outside radius {}", p, r);
        }
    }

    #[test]
    fn min_shift_hits_zero_on_both_axes(seed in any::<u64>(), n in 1usize..400) {
        let mut cloud = draw(seed, n, 3.0);
        cloud.normalize(Normalization::MinShift, 3.0);
        let min = cloud.axis_min().unwrap();
        prop_assert_eq!(min.x, 0.0);
        prop_assert_eq!(min.y, 0.0);
        prop_assert!(cloud.xs().iter().chain(cloud.ys()).all(|&v| v >= 0.0));
    }

    #[test]
    fn fixed_offset_stays_within_diameter(seed in any::<u64>(), n in 1usize..400, r in 0.01f32..1e4) {
        let mut cloud = draw(seed, n, r);
        cloud.normalize(Normalization::FixedOffset, r);
        let min = cloud.axis_min().unwrap();
        let max = cloud.axis_max().unwrap();
        prop_assert!(min.x >= 0.0 && min.y >= 0.0, "{:?} below zero", min);
        prop_assert!(max.x <= 2.0 * r && max.y <= 2.0 * r, "{:?} above 2R = {}", max, 2.0 * r);
    }

    #[test]
    fn denormalized_points_lie_in_disk(seed in any::<u64>(), n in 1usize..200) {
        let r = 5.0f32;
        let mut cloud = draw(seed, n, r);
        cloud.normalize(Normalization::MinShift, r);
        for p in cloud.denormalized() {
            prop_assert!(p.norm() <= r * (1.0 + 1e-5));
        }
    }
}

#[test]
fn same_seed_same_samples() {
    let a = draw(42, 64, 2.0);
    let b = draw(42, 64, 2.0);
    assert_eq!(a, b);
    let c = draw(43, 64, 2.0);
    assert_ne!(a, c);
}

/// `(r/R)²` must be uniform on `[0, 1)` when the disk is sampled by area.
#[test]
fn squared_radius_is_uniform() {
    let n = 200_000;
    let r = 7.0f32;
    let cloud = draw(2024, n, r);
    let bins = 10;
    let mut counts = vec![0usize; bins];
    let mut sum = 0.0f64;
    for p in cloud.points() {
        let u = f64::from(p.norm_squared() / (r * r));
        sum += u;
        let k = ((u * bins as f64) as usize).min(bins - 1);
        counts[k] += 1;
    }
    let mean = sum / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "mean {mean}");
    let expected = n as f64 / bins as f64;
    for (k, &c) in counts.iter().enumerate() {
        let rel = (c as f64 - expected).abs() / expected;
        assert!(rel < 0.05, "bin {k}: {c} vs {expected}");
    }
}

/// Equal-area quadrants receive roughly equal shares of the points.
#[test]
fn angles_cover_all_quadrants() {
    let n = 100_000;
    let cloud = draw(11, n, 1.0);
    let mut quad = [0usize; 4];
    for p in cloud.points() {
        let k = match (p.x >= 0.0, p.y >= 0.0) {
            (true, true) => 0,
            (false, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        };
        quad[k] += 1;
    }
    for c in quad {
        let share = c as f64 / n as f64;
        assert!((share - 0.25).abs() < 0.01, "share {share}");
    }
}
