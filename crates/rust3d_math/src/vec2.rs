//! Generic 2-component vector

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// 2D vector over any scalar type
///
/// A plain data container: construction and element access only.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// Float 2D vector
pub type Vec2f = Vec2<f32>;
/// Integer 2D vector
pub type IVec2 = Vec2<i32>;

// SAFETY: repr(C) with two fields of the same Pod type, so there is no padding.
unsafe impl<T: Zeroable> Zeroable for Vec2<T> {}
unsafe impl<T: Pod> Pod for Vec2<T> {}

impl<T> Vec2<T> {
    /// Create a new Vec2
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    /// Build from the first two elements of a slice
    ///
    /// Panics if the slice holds fewer than two elements.
    #[inline]
    pub fn from_slice(values: &[T]) -> Self {
        Self::new(values[0], values[1])
    }

    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> std::ops::Index<usize> for Vec2<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {}", index),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Vec2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {}", index),
        }
    }
}
