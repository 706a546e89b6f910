//! World-space geometry, in meters.

use serde::{Deserialize, Serialize};

/// A point in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Location {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Location) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A direction or rate in world space (velocities are in m/s).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Vector3D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Magnitude on the ground plane, ignoring `z`.
    ///
    /// This is what "speed" means for a vehicle: bumps and slopes do not
    /// count towards it.
    #[inline]
    pub fn planar_length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Location::new(0.0, 0.0, 0.0);
        let b = Location::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance(b), 13.0);
        assert_eq!(b.distance(a), 13.0);
    }

    #[test]
    fn planar_length_ignores_vertical_component() {
        let v = Vector3D::new(12.0, 16.0, 50.0);
        assert_eq!(v.planar_length(), 20.0);
        assert!(v.length() > 50.0);
    }

    #[test]
    fn missing_z_deserializes_as_ground_level() {
        let loc: Location = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(loc, Location::new(1.5, -2.0, 0.0));
    }
}
