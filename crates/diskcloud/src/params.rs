//! Generator parameters: count, radius rule, and normalization strategy.

use crate::count::{CountSpec, PointCount};
use crate::error::{GenError, Result};
use std::fmt;
use std::str::FromStr;

/// How the sampling radius is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RadiusRule {
    /// Constant radius, independent of the point count.
    Fixed(f32),
    /// `count^(1/4)`: the disk grows slowly with the number of points.
    #[default]
    QuarticRoot,
}

impl RadiusRule {
    pub fn resolve(self, count: PointCount) -> f32 {
        match self {
            RadiusRule::Fixed(r) => r,
            RadiusRule::QuarticRoot => (count.get() as f64).powf(0.25) as f32,
        }
    }
}

/// Shift applied after sampling so every stored coordinate is non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Subtract the per-axis minimum; afterwards `min(x) == min(y) == 0`.
    #[default]
    MinShift,
    /// Add the radius bound on both axes; afterwards all values lie in `[0, 2R]`.
    FixedOffset,
}

impl Normalization {
    pub fn as_str(self) -> &'static str {
        match self {
            Normalization::MinShift => "min",
            Normalization::FixedOffset => "fixed",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Normalization {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(Normalization::MinShift),
            "fixed" => Ok(Normalization::FixedOffset),
            other => Err(GenError::parameter(format!(
                "unknown normalization {other:?} (expected \"min\" or \"fixed\")"
            ))),
        }
    }
}

/// Everything needed to produce one point file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenParams {
    pub count: CountSpec,
    pub radius: RadiusRule,
    pub normalization: Normalization,
}

impl GenParams {
    pub fn new(count: CountSpec) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let RadiusRule::Fixed(r) = self.radius {
            if !r.is_finite() {
                return Err(GenError::parameter("radius must be finite"));
            }
            if r <= 0.0 {
                return Err(GenError::parameter("radius must be > 0"));
            }
        }
        Ok(())
    }

    /// Radius bound for this parameter set.
    pub fn radius_bound(&self) -> f32 {
        self.radius.resolve(self.count.count)
    }
}
