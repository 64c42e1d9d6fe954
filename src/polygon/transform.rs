//! In-place transforms and their allocating counterparts.
//!
//! The `&mut self` forms mutate the polygon; the past-participle forms
//! (`translated`, `rotated`, ...) leave it untouched and return a copy.

use super::Polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

impl<F: Float> Polygon<F> {
    fn map_points(&mut self, f: impl Fn(Point2<F>) -> Point2<F>) {
        for p in self.points_mut().iter_mut() {
            *p = f(*p);
        }
    }

    fn mapped(&self, f: impl Fn(&mut Self)) -> Self {
        let mut copy = self.clone();
        f(&mut copy);
        copy
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.map_points(|p| p + offset);
    }

    /// Translated copy.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        self.mapped(|p| p.translate(offset))
    }

    /// Moves the polygon so its centroid lands on `center`.
    pub fn set_position(&mut self, center: Point2<F>) {
        if let Some(c) = self.centroid() {
            self.translate(center - c);
        }
    }

    /// Copy centred on `center`.
    pub fn positioned(&self, center: Point2<F>) -> Self {
        self.mapped(|p| p.set_position(center))
    }

    /// Rotates by `angle` radians counter-clockwise around `origin`.
    pub fn rotate(&mut self, angle: F, origin: Point2<F>) {
        self.map_points(|p| p.rotated_around(angle, origin));
    }

    /// Rotated copy.
    pub fn rotated(&self, angle: F, origin: Point2<F>) -> Self {
        self.mapped(|p| p.rotate(angle, origin))
    }

    /// Scales both axes by `factor` around `origin`.
    pub fn scale_uniform(&mut self, factor: F, origin: Point2<F>) {
        self.scale(Vec2::new(factor, factor), origin);
    }

    /// Uniformly scaled copy.
    pub fn scaled_uniform(&self, factor: F, origin: Point2<F>) -> Self {
        self.mapped(|p| p.scale_uniform(factor, origin))
    }

    /// Scales each axis separately around `origin`.
    pub fn scale(&mut self, factor: Vec2<F>, origin: Point2<F>) {
        self.map_points(|p| p.scaled_from(origin, factor));
    }

    /// Scaled copy.
    pub fn scaled(&self, factor: Vec2<F>, origin: Point2<F>) -> Self {
        self.mapped(|p| p.scale(factor, origin))
    }

    /// Pushes every vertex `amount` further from `origin` along its
    /// direction; negative amounts pull inward. Vertices at `origin` stay.
    pub fn change_size(&mut self, amount: F, origin: Point2<F>) {
        self.map_points(|p| match (p - origin).normalize() {
            Some(dir) => p + dir * amount,
            None => p,
        });
    }

    /// Copy with [`change_size`](Self::change_size) applied.
    pub fn resized(&self, amount: F, origin: Point2<F>) -> Self {
        self.mapped(|p| p.change_size(amount, origin))
    }

    /// Places every vertex at distance `size` from `origin`, keeping its
    /// direction. Vertices at `origin` stay.
    pub fn set_size(&mut self, size: F, origin: Point2<F>) {
        self.map_points(|p| match (p - origin).normalize() {
            Some(dir) => origin + dir * size,
            None => p,
        });
    }

    /// Copy with [`set_size`](Self::set_size) applied.
    pub fn sized(&self, size: F, origin: Point2<F>) -> Self {
        self.mapped(|p| p.set_size(size, origin))
    }
}
