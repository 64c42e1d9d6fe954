//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Points have no
/// identity beyond their value: `==` is exact, [`Point2::is_similar`] is
/// the tolerant comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<F> {
    /// X coordinate.
    pub x: F,
    /// Y coordinate.
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns the position vector of this point.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Returns true if both coordinates differ by at most `tolerance`.
    #[inline]
    pub fn is_similar(self, other: Self, tolerance: F) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotates this point by `angle` radians around `pivot`.
    #[inline]
    pub fn rotated_around(self, angle: F, pivot: Self) -> Self {
        pivot + (self - pivot).rotate(angle)
    }

    /// Scales this point's offset from `origin` per axis.
    #[inline]
    pub fn scaled_from(self, origin: Self, scale: Vec2<F>) -> Self {
        let d = self - origin;
        Self::new(origin.x + d.x * scale.x, origin.y + d.y * scale.y)
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<F: Float> AddAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<F>) {
        self.x = self.x + v.x;
        self.y = self.y + v.y;
    }
}

impl<F: Float> SubAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn sub_assign(&mut self, v: Vec2<F>) {
        self.x = self.x - v.x;
        self.y = self.y - v.y;
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}
