//! Generic 4-component vector

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// 4D vector over any scalar type
///
/// Used for homogeneous coordinates (w = 0 for directions, w = 1 for points)
/// and as the column type of [`Mat4`](crate::Mat4).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Float 4D vector
pub type Vec4f = Vec4<f32>;
/// Integer 4D vector
pub type IVec4 = Vec4<i32>;
/// Unsigned 4D vector (e.g. bone indices)
pub type UIVec4 = Vec4<u32>;

// SAFETY: repr(C) with four fields of the same Pod type, so there is no padding.
unsafe impl<T: Zeroable> Zeroable for Vec4<T> {}
unsafe impl<T: Pod> Pod for Vec4<T> {}

impl<T> Vec4<T> {
    /// Create a new Vec4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Copy> Vec4<T> {
    /// Build from the first four elements of a slice
    ///
    /// Panics if the slice holds fewer than four elements.
    #[inline]
    pub fn from_slice(values: &[T]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Vec4<f32> {
    /// Extend a 3D vector with a homogeneous coordinate
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T> From<[T; 4]> for Vec4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl<T> From<Vec4<T>> for [T; 4] {
    #[inline]
    fn from(v: Vec4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<T> std::ops::Index<usize> for Vec4<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {}", index),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {}", index),
        }
    }
}
