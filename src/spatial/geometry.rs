//! Axis-aligned boxes and circles on the horizontal plane
//!
//! Every predicate is inclusive: touching edges count as overlap. Distance
//! comparisons are done on squared lengths.

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Axis-aligned bounding box
///
/// Expected to satisfy `min <= max` on both axes. Nothing enforces it:
/// an inverted box simply intersects nothing it would not otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half_w` along x and `half_d` along z
    pub fn from_center(center: Point, half_w: f32, half_d: f32) -> Self {
        Self {
            min: Point::new(center.x - half_w, center.z - half_d),
            max: Point::new(center.x + half_w, center.z + half_d),
        }
    }

    /// Square box enclosing a circle of radius `radius`
    pub fn from_radius(center: Point, radius: f32) -> Self {
        Self::from_center(center, radius, radius)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Grow every edge outward by `amount`. Negative values shrink and may invert the box.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: Point::new(self.min.x - amount, self.min.z - amount),
            max: Point::new(self.max.x + amount, self.max.z + amount),
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.z >= self.min.z && p.z <= self.max.z
    }

    /// Closest point on the box to the circle center, compared against r²
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        // f32::clamp panics on an inverted box
        let closest = Point::new(
            circle.center.x.max(self.min.x).min(self.max.x),
            circle.center.z.max(self.min.z).min(self.max.z),
        );
        closest.distance_squared(&circle.center) <= circle.radius * circle.radius
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }
}

/// Circle on the horizontal plane. A radius of zero is a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_radius(self.center, self.radius)
    }

    pub fn intersects(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(&other.center) <= reach * reach
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.center.distance_squared(&p) <= self.radius * self.radius
    }
}
