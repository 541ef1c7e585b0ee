//! Core value types shared by the geometry kernel and the spatial hash

use serde::{Deserialize, Serialize};

/// Position on the horizontal plane
///
/// Elevation is not modeled, so the second axis is `z` (depth) rather than `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub z: f32,
}

impl Point {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, z: self.z + rhs.z }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, z: self.z - rhs.z }
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, z: self.z * rhs }
    }
}
