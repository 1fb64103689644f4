//! Positions and distance attenuation.

/// A point in 3-D space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Scalar distance rolloff: `1 / (1 + distance)`.
///
/// Unity when source and listener coincide, halved at one meter. This is
/// the whole spatial model — no panning, no doppler.
pub fn distance_attenuation(source: Vec3, listener: Vec3) -> f64 {
    1.0 / (1.0 + source.distance(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(-3.0, 0.0, 4.0);

        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn pythagorean_triple() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);

        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn attenuation_is_unity_at_zero_distance() {
        let p = Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(distance_attenuation(p, p), 1.0);
    }

    #[test]
    fn attenuation_is_half_at_one_meter() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);

        assert!((distance_attenuation(a, b) - 0.5).abs() < 1e-12);
    }
}
