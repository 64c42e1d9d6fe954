//! Tunable parameters for clipping, fracturing and subdivision.
//!
//! Each config has a `Default`, chainable setters and a `validate` method
//! that reports the first out-of-range field.
//!
//! # Example
//!
//! ```
//! use polyshape::config::{ClipConfig, FillRule};
//!
//! let config: ClipConfig<f64> = ClipConfig::default()
//!     .fill_rule(FillRule::EvenOdd)
//!     .cut_width(0.01);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::GeomError;
use num_traits::Float;

/// Winding rule used to decide which regions of a contour set are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    EvenOdd,
    #[default]
    NonZero,
    Positive,
    Negative,
}

impl From<FillRule> for i_overlay::core::fill_rule::FillRule {
    fn from(rule: FillRule) -> Self {
        use i_overlay::core::fill_rule::FillRule as Rule;
        match rule {
            FillRule::EvenOdd => Rule::EvenOdd,
            FillRule::NonZero => Rule::NonZero,
            FillRule::Positive => Rule::Positive,
            FillRule::Negative => Rule::Negative,
        }
    }
}

/// Options for boolean operations and segment splits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig<F> {
    /// Rule deciding which regions of the operands count as filled.
    pub fill_rule: FillRule,
    /// Width of the band cut out of a polygon when splitting along a
    /// segment or polyline.
    pub cut_width: F,
}

impl<F: Float> Default for ClipConfig<F> {
    fn default() -> Self {
        Self {
            fill_rule: FillRule::NonZero,
            cut_width: F::from(1e-3).unwrap(),
        }
    }
}

impl<F: Float> ClipConfig<F> {
    /// Sets the fill rule.
    pub fn fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    pub fn cut_width(mut self, width: F) -> Self {
        self.cut_width = width;
        self
    }

    /// Rejects a cut width that is not finite and positive.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !(self.cut_width.is_finite() && self.cut_width > F::zero()) {
            return Err(GeomError::InvalidParameter {
                name: "cut_width",
                reason: "must be finite and positive",
            });
        }
        Ok(())
    }
}

/// Options for jittered fracture lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractureConfig<F> {
    /// Number of interior points between the two boundary endpoints.
    pub points: usize,
    /// Largest perpendicular offset of an interior point, as a fraction
    /// of the distance between neighbouring points.
    pub max_offset_percentage: F,
    /// Direction of the cut in radians; random when `None`.
    pub angle: Option<F>,
    /// Options for the boolean split along the fracture line.
    pub clip: ClipConfig<F>,
}

impl<F: Float> Default for FractureConfig<F> {
    fn default() -> Self {
        Self {
            points: 4,
            max_offset_percentage: F::from(0.25).unwrap(),
            angle: None,
            clip: ClipConfig::default(),
        }
    }
}

impl<F: Float> FractureConfig<F> {
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn max_offset_percentage(mut self, percentage: F) -> Self {
        self.max_offset_percentage = percentage;
        self
    }

    /// Fixes the cut direction instead of drawing it at random.
    pub fn angle(mut self, angle: F) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn clip(mut self, clip: ClipConfig<F>) -> Self {
        self.clip = clip;
        self
    }

    /// Checks the offset range and the nested clip options.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !(self.max_offset_percentage >= F::zero() && self.max_offset_percentage <= F::one()) {
            return Err(GeomError::InvalidParameter {
                name: "max_offset_percentage",
                reason: "must be in [0, 1]",
            });
        }
        if let Some(angle) = self.angle {
            if !angle.is_finite() {
                return Err(GeomError::InvalidParameter {
                    name: "angle",
                    reason: "must be finite",
                });
            }
        }
        self.clip.validate()
    }
}

/// Options for stochastic triangulation refinement.
///
/// Triangles below `min_area` or narrower than `narrow_value` are always
/// kept; triangles above `max_area` are always split; the rest are kept
/// with probability `keep_chance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivideConfig<F> {
    /// Area below which a triangle is never split. Also the target piece
    /// size of a split.
    pub min_area: F,
    /// Area above which a triangle is always split.
    pub max_area: F,
    /// Probability in `[0, 1]` of keeping a triangle between the bounds.
    pub keep_chance: f64,
    /// Aspect ratio below which a triangle counts as narrow, see
    /// [`Triangle2::is_narrow`](crate::primitives::Triangle2::is_narrow).
    pub narrow_value: F,
}

impl<F: Float> Default for SubdivideConfig<F> {
    fn default() -> Self {
        Self {
            min_area: F::one(),
            max_area: F::from(100.0).unwrap(),
            keep_chance: 0.5,
            narrow_value: F::from(0.2).unwrap(),
        }
    }
}

impl<F: Float> SubdivideConfig<F> {
    pub fn min_area(mut self, area: F) -> Self {
        self.min_area = area;
        self
    }

    pub fn max_area(mut self, area: F) -> Self {
        self.max_area = area;
        self
    }

    pub fn keep_chance(mut self, chance: f64) -> Self {
        self.keep_chance = chance;
        self
    }

    pub fn narrow_value(mut self, value: F) -> Self {
        self.narrow_value = value;
        self
    }

    /// Checks that the area bounds are ordered and the probability and
    /// narrowness threshold are in range.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !(self.min_area.is_finite() && self.min_area > F::zero()) {
            return Err(GeomError::InvalidParameter {
                name: "min_area",
                reason: "must be finite and positive",
            });
        }
        if !(self.max_area >= self.min_area) {
            return Err(GeomError::InvalidParameter {
                name: "max_area",
                reason: "must not be below min_area",
            });
        }
        if !(0.0..=1.0).contains(&self.keep_chance) {
            return Err(GeomError::InvalidParameter {
                name: "keep_chance",
                reason: "must be in [0, 1]",
            });
        }
        if !(self.narrow_value >= F::zero()) {
            return Err(GeomError::InvalidParameter {
                name: "narrow_value",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
