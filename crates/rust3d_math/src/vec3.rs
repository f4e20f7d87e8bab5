//! 3D Vector type
//!
//! A `Vec3` is used both for points and for free directions; the caller keeps
//! track of which one it holds. Equality is a geometric predicate: two vectors
//! are equal when the squared distance between them is below [`EPSILON`].

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::EPSILON;

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build from the first three elements of a slice
    ///
    /// Panics if the slice holds fewer than three elements.
    #[inline]
    pub fn from_slice(values: &[f32]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product
    ///
    /// Positive when both vectors point the same general way, negative when
    /// they point away from each other, zero when perpendicular.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    ///
    /// Returns exactly 0 when the squared length is below [`EPSILON`].
    #[inline]
    pub fn length(self) -> f32 {
        let len_sq = self.length_squared();
        if len_sq < EPSILON {
            return 0.0;
        }
        len_sq.sqrt()
    }

    /// Normalize in place
    ///
    /// A degenerate (near zero) vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Return a unit-length copy
    ///
    /// A degenerate (near zero) vector is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq < EPSILON {
            return self;
        }
        self * (1.0 / len_sq.sqrt())
    }

    /// Angle between two vectors in radians
    ///
    /// Returns 0 if either vector is degenerate.
    pub fn angle(self, other: Self) -> f32 {
        let len_sq_a = self.length_squared();
        let len_sq_b = other.length_squared();
        if len_sq_a < EPSILON || len_sq_b < EPSILON {
            return 0.0;
        }

        let cos = self.dot(other) / (len_sq_a * len_sq_b).sqrt();
        // Rounding can push |cos| past 1 for (anti)parallel inputs
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Component of `self` parallel to `onto`
    ///
    /// Returns [`Vec3::ZERO`] when `onto` is degenerate.
    pub fn project(self, onto: Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            return Self::ZERO;
        }
        onto * (self.dot(onto) / len_sq)
    }

    /// Component of `self` perpendicular to `onto`
    #[inline]
    pub fn reject(self, onto: Self) -> Self {
        self - self.project(onto)
    }

    /// Reflect `self` off the plane whose normal is `normal`
    ///
    /// Returns [`Vec3::ZERO`] when `normal` is degenerate.
    pub fn reflect(self, normal: Self) -> Self {
        let len_sq = normal.length_squared();
        if len_sq < EPSILON {
            return Self::ZERO;
        }
        let scale = self.dot(normal) / len_sq;
        self - normal * (scale * 2.0)
    }

    /// Cross product (right-handed, not commutative)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linear interpolation between two vectors (t is not clamped)
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Spherical interpolation between the directions of two vectors
    ///
    /// Small `t` (below 0.01) falls back to [`lerp`](Self::lerp), as do
    /// endpoints whose directions are (anti)parallel.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        if t < 0.01 {
            return self.lerp(other, t);
        }

        let from = self.normalized();
        let to = other.normalized();

        let theta = from.angle(to);
        let sin_theta = theta.sin();
        if sin_theta.abs() < EPSILON {
            return from.lerp(to, t);
        }

        let a = ((1.0 - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        from * a + to * b
    }

    /// Normalized linear interpolation
    ///
    /// Cheaper than [`slerp`](Self::slerp) but does not move at constant
    /// angular speed.
    #[inline]
    pub fn nlerp(self, other: Self, t: f32) -> Self {
        self.lerp(other, t).normalized()
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl PartialEq for Vec3 {
    /// Tolerance based: equal when the squared distance is below [`EPSILON`]
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).length_squared() < EPSILON
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl std::ops::Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {}", index),
        }
    }
}

// Operator overloads

impl std::ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl std::ops::MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

/// Component-wise product, same as [`Vec3::component_mul`]
impl std::ops::Mul for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.component_mul(other)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
