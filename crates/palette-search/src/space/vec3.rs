//! Three-component vector used for search-space points.

use std::ops::{Add, Mul, Sub};

/// A component axis of a [`Vec3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index (X=0, Y=1, Z=2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A point in a search space.
///
/// The meaning of the components depends on the [`ColorSpace`](super::ColorSpace)
/// the point was projected into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    #[inline]
    pub fn component(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    #[inline]
    pub fn try_normalize(self) -> Option<Vec3> {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            Some(self * (1.0 / length))
        } else {
            None
        }
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, factors: Vec3) -> Vec3 {
        Vec3::new(self.x * factors.x, self.y * factors.y, self.z * factors.z)
    }

    /// Closest point to `self` on the segment `start..=end`.
    ///
    /// A zero-length segment returns `start`.
    pub fn closest_point_on_segment(self, start: Vec3, end: Vec3) -> Vec3 {
        let segment = end - start;
        let to_point = self - start;

        let along = to_point.dot(segment);
        if along <= 0.0 {
            return start;
        }

        let segment_len_sq = segment.length_squared();
        if segment_len_sq <= along {
            return end;
        }

        start + segment * (along / segment_len_sq)
    }

    /// Distance from `self` to the segment `start..=end`.
    #[inline]
    pub fn distance_to_segment(self, start: Vec3, end: Vec3) -> f32 {
        self.distance(self.closest_point_on_segment(start, end))
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}
