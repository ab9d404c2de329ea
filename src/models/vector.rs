use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::constants::DEGENERATE_DIRECTION_EPSILON;
use crate::services::angles::deg_to_rad;

/// Point or direction in world space, in engine units.
/// Z is up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` when the input is too
    /// short to have one.
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len < DEGENERATE_DIRECTION_EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / len)
    }

    /// Projection onto the XY plane.
    pub fn horizontal(self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Camera orientation in degrees.
/// Pitch is positive when looking down; yaw turns in the XY plane.
/// Roll is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewAngles {
    pub pitch: f64,
    pub yaw: f64,
}

impl ViewAngles {
    pub const fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    /// Same orientation in radians, as `(yaw, pitch)`.
    pub fn to_radians(self) -> (f64, f64) {
        (deg_to_rad(self.yaw), deg_to_rad(self.pitch))
    }
}

/// Axis-aligned box given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}
