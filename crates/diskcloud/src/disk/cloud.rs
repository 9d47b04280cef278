//! Point clouds as parallel coordinate arrays, plus the non-negative shift.

use crate::params::Normalization;
use nalgebra::Vector2;

/// A 2D point cloud in sample order.
///
/// `offset` is the total shift applied by [`PointCloud::normalize`]; the
/// sampled coordinates are `stored - offset`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    xs: Vec<f32>,
    ys: Vec<f32>,
    offset: Vector2<f32>,
}

impl PointCloud {
    /// Build from x and y arrays of equal length.
    ///
    /// Panics if the lengths differ.
    pub fn from_axes(xs: Vec<f32>, ys: Vec<f32>) -> Self {
        assert_eq!(xs.len(), ys.len(), "x/y arrays must have equal length");
        Self {
            xs,
            ys,
            offset: Vector2::zeros(),
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    pub fn ys(&self) -> &[f32] {
        &self.ys
    }

    pub fn offset(&self) -> Vector2<f32> {
        self.offset
    }

    pub fn points(&self) -> impl Iterator<Item = Vector2<f32>> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Vector2::new(x, y))
    }

    /// Points with the normalization shift removed.
    pub fn denormalized(&self) -> impl Iterator<Item = Vector2<f32>> + '_ {
        let off = self.offset;
        self.points().map(move |p| p - off)
    }

    /// Per-axis minimum, or `None` for an empty cloud.
    pub fn axis_min(&self) -> Option<Vector2<f32>> {
        if self.is_empty() {
            return None;
        }
        Some(Vector2::new(fold_min(&self.xs), fold_min(&self.ys)))
    }

    /// Per-axis maximum, or `None` for an empty cloud.
    pub fn axis_max(&self) -> Option<Vector2<f32>> {
        if self.is_empty() {
            return None;
        }
        Some(Vector2::new(fold_max(&self.xs), fold_max(&self.ys)))
    }

    /// Shift all coordinates into the non-negative quadrant.
    ///
    /// `radius_bound` is only used by [`Normalization::FixedOffset`]. The shift is
    /// accumulated into [`PointCloud::offset`]. An empty cloud is left untouched.
    pub fn normalize(&mut self, strategy: Normalization, radius_bound: f32) {
        let shift = match (strategy, self.axis_min()) {
            (_, None) => return,
            (Normalization::MinShift, Some(min)) => -min,
            (Normalization::FixedOffset, Some(_)) => Vector2::repeat(radius_bound),
        };
        self.xs.iter_mut().for_each(|x| *x += shift.x);
        self.ys.iter_mut().for_each(|y| *y += shift.y);
        self.offset += shift;
        tracing::debug!(
            strategy = %strategy,
            dx = shift.x,
            dy = shift.y,
            "normalized"
        );
    }
}

fn fold_min(v: &[f32]) -> f32 {
    v.iter().copied().fold(f32::INFINITY, f32::min)
}

fn fold_max(v: &[f32]) -> f32 {
    v.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}
