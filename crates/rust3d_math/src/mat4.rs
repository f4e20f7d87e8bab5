//! 4x4 Matrix for 3D transformations
//!
//! Storage is a flat array of 16 floats in column-major order: the cell at
//! column `c`, row `r` lives at index `c * 4 + r`. The four columns double as
//! the basis of an affine transform and are exposed as [`right`](Mat4::right),
//! [`up`](Mat4::up), [`forward`](Mat4::forward) and
//! [`position`](Mat4::position).
//!
//! Functions with an imperative name ([`transpose`](Mat4::transpose),
//! [`invert`](Mat4::invert)) mutate in place; their past-participle twins
//! ([`transposed`](Mat4::transposed), [`inverse`](Mat4::inverse)) return a new
//! matrix.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{Vec3, Vec4, EPSILON};

/// 4x4 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat4 {
    v: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Named accessors for individual cells.
///
/// The first letter names the column (x, y, z, t for translation), the second
/// the row: `zy()` is column 2, row 1.
macro_rules! cell_accessors {
    ($($name:ident => $idx:expr),* $(,)?) => {
        impl Mat4 {
            $(
                #[inline]
                pub fn $name(&self) -> f32 {
                    self.v[$idx]
                }
            )*
        }
    };
}

cell_accessors! {
    xx => 0, xy => 1, xz => 2, xw => 3,
    yx => 4, yy => 5, yz => 6, yw => 7,
    zx => 8, zy => 9, zz => 10, zw => 11,
    tx => 12, ty => 13, tz => 14, tw => 15,
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        v: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// All cells zero
    pub const ZERO: Self = Self { v: [0.0; 16] };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a matrix from 16 cells given in storage order
    ///
    /// Cell `mCR` lands at column `C`, row `R`, so the first four arguments
    /// form the first column (`xx, xy, xz, xw`).
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            v: [
                m00, m01, m02, m03,
                m10, m11, m12, m13,
                m20, m21, m22, m23,
                m30, m31, m32, m33,
            ],
        }
    }

    /// Create a matrix from a column-major array
    #[inline]
    pub const fn from_cols_array(v: &[f32; 16]) -> Self {
        Self { v: *v }
    }

    /// Create a matrix from the first 16 floats of a column-major buffer
    ///
    /// Panics if the buffer holds fewer than 16 floats.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut v = [0.0; 16];
        v.copy_from_slice(&values[..16]);
        Self { v }
    }

    /// Create a matrix from its four basis columns
    pub fn from_cols(right: Vec4<f32>, up: Vec4<f32>, forward: Vec4<f32>, position: Vec4<f32>) -> Self {
        let mut m = Self::ZERO;
        m.set_column(0, right);
        m.set_column(1, up);
        m.set_column(2, forward);
        m.set_column(3, position);
        m
    }

    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.v
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.v
    }

    /// Cell at column `col`, row `row`
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.v[col * 4 + row]
    }

    /// Overwrite the cell at column `col`, row `row`
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        self.v[col * 4 + row] = value;
    }

    /// Get a column vector
    pub fn column(&self, col: usize) -> Vec4<f32> {
        Vec4::from_slice(&self.v[col * 4..col * 4 + 4])
    }

    /// Overwrite a column
    pub fn set_column(&mut self, col: usize, value: Vec4<f32>) {
        self.v[col * 4..col * 4 + 4].copy_from_slice(&value.to_array());
    }

    /// Get a row vector
    pub fn row(&self, row: usize) -> Vec4<f32> {
        Vec4::new(self.v[row], self.v[4 + row], self.v[8 + row], self.v[12 + row])
    }

    #[inline]
    pub fn right(&self) -> Vec4<f32> {
        self.column(0)
    }

    #[inline]
    pub fn up(&self) -> Vec4<f32> {
        self.column(1)
    }

    #[inline]
    pub fn forward(&self) -> Vec4<f32> {
        self.column(2)
    }

    #[inline]
    pub fn position(&self) -> Vec4<f32> {
        self.column(3)
    }

    #[inline]
    pub fn set_right(&mut self, value: Vec4<f32>) {
        self.set_column(0, value);
    }

    #[inline]
    pub fn set_up(&mut self, value: Vec4<f32>) {
        self.set_column(1, value);
    }

    #[inline]
    pub fn set_forward(&mut self, value: Vec4<f32>) {
        self.set_column(2, value);
    }

    #[inline]
    pub fn set_position(&mut self, value: Vec4<f32>) {
        self.set_column(3, value);
    }

    /// Multiply every cell by `f`
    pub fn scale(&self, f: f32) -> Self {
        Self { v: self.v.map(|cell| cell * f) }
    }

    /// Transform a direction (w = 0, translation is ignored)
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(v, 0.0)).xyz()
    }

    /// Transform a point with an explicit homogeneous coordinate
    ///
    /// `w` is read as the input coordinate and overwritten with the
    /// transformed one, so the caller can perform the perspective divide.
    pub fn transform_point(&self, v: Vec3, w: &mut f32) -> Vec3 {
        let out = *self * Vec4::from_vec3(v, *w);
        *w = out.w;
        out.xyz()
    }

    /// Transform a point with w = 1, discarding the resulting w
    pub fn transform_point3(&self, v: Vec3) -> Vec3 {
        let mut w = 1.0;
        self.transform_point(v, &mut w)
    }

    /// Transpose in place
    pub fn transpose(&mut self) {
        for col in 0..4 {
            for row in (col + 1)..4 {
                self.v.swap(col * 4 + row, row * 4 + col);
            }
        }
    }

    /// Return the transposed matrix
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Determinant of the 3x3 matrix left after removing `col` and `row`
    fn minor(&self, col: usize, row: usize) -> f32 {
        let mut cols = [0usize; 3];
        let mut rows = [0usize; 3];
        for (slot, c) in (0..4).filter(|&c| c != col).enumerate() {
            cols[slot] = c;
        }
        for (slot, r) in (0..4).filter(|&r| r != row).enumerate() {
            rows[slot] = r;
        }

        let m = |c: usize, r: usize| self.v[cols[c] * 4 + rows[r]];

        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(1, 0) * (m(0, 1) * m(2, 2) - m(0, 2) * m(2, 1))
            + m(2, 0) * (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1))
    }

    /// Signed minor
    fn cofactor(&self, col: usize, row: usize) -> f32 {
        let minor = self.minor(col, row);
        if (col + row) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Determinant by cofactor expansion along the first column
    pub fn determinant(&self) -> f32 {
        (0..4).map(|row| self.v[row] * self.cofactor(0, row)).sum()
    }

    /// Classical adjugate: the transposed matrix of cofactors
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                adj.v[col * 4 + row] = self.cofactor(row, col);
            }
        }
        adj
    }

    /// Inverse, or `None` when the determinant is exactly zero
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        Some(self.adjugate() * (1.0 / det))
    }

    /// Return the inverse matrix
    ///
    /// A singular matrix (determinant exactly zero) cannot be inverted; a
    /// warning is logged and the identity is returned instead.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            log::warn!("Trying to invert a matrix with a zero determinant, using identity");
            Self::IDENTITY
        })
    }

    /// Invert in place, see [`inverse`](Self::inverse)
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Perspective projection from the six clip planes
    ///
    /// Returns the identity (and logs a warning) when any pair of planes
    /// coincides.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        if left == right || top == bottom || near == far {
            log::warn!(
                "Invalid frustum (l={}, r={}, b={}, t={}, n={}, f={}), using identity",
                left, right, bottom, top, near, far
            );
            return Self::IDENTITY;
        }

        Self::new(
            (2.0 * near) / (right - left), 0.0, 0.0, 0.0,
            0.0, (2.0 * near) / (top - bottom), 0.0, 0.0,
            (right + left) / (right - left), (top + bottom) / (top - bottom), -(far + near) / (far - near), -1.0,
            0.0, 0.0, (-2.0 * far * near) / (far - near), 0.0,
        )
    }

    /// Symmetric perspective projection
    ///
    /// `fov_y` is the vertical field of view in degrees.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let y_max = near * (fov_y.to_radians() * 0.5).tan();
        let x_max = y_max * aspect;
        Self::frustum(-x_max, x_max, -y_max, y_max, near, far)
    }

    /// Orthographic projection
    ///
    /// Returns the identity (and logs a warning) when any pair of planes
    /// coincides.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        if left == right || top == bottom || near == far {
            log::warn!(
                "Invalid orthographic volume (l={}, r={}, b={}, t={}, n={}, f={}), using identity",
                left, right, bottom, top, near, far
            );
            return Self::IDENTITY;
        }

        Self::new(
            2.0 / (right - left), 0.0, 0.0, 0.0,
            0.0, 2.0 / (top - bottom), 0.0, 0.0,
            0.0, 0.0, -2.0 / (far - near), 0.0,
            -(right + left) / (right - left), -(top + bottom) / (top - bottom), -(far + near) / (far - near), 1.0,
        )
    }

    /// Right-handed view matrix looking from `eye` towards `target`
    ///
    /// Returns the identity (and logs a warning) when `up` is parallel to the
    /// view direction.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = -(target - eye).normalized();
        let mut r = up.cross(f);
        if r == Vec3::ZERO {
            log::warn!("look_at: up vector is parallel to the view direction, using identity");
            return Self::IDENTITY;
        }
        r.normalize();
        let u = f.cross(r).normalized();
        let t = Vec3::new(-r.dot(eye), -u.dot(eye), -f.dot(eye));

        Self::new(
            r.x, u.x, f.x, 0.0,
            r.y, u.y, f.y, 0.0,
            r.z, u.z, f.z, 0.0,
            t.x, t.y, t.z, 1.0,
        )
    }
}

impl PartialEq for Mat4 {
    /// Tolerance based: every pair of cells within [`EPSILON`]
    fn eq(&self, other: &Self) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| (a - b).abs() <= EPSILON)
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.v[index]
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.v[index]
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(v: [f32; 16]) -> Self {
        Self { v }
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.v
    }
}

impl std::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut v = self.v;
        for (cell, rhs) in v.iter_mut().zip(other.v.iter()) {
            *cell += rhs;
        }
        Self { v }
    }
}

impl std::ops::Mul<f32> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, f: f32) -> Self {
        self.scale(f)
    }
}

/// Matrix product: `a * b` applies `b` first, then `a`
impl std::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, b: Self) -> Self {
        let mut result = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                result.v[col * 4 + row] = (0..4)
                    .map(|k| self.v[k * 4 + row] * b.v[col * 4 + k])
                    .sum();
            }
        }
        result
    }
}

impl std::ops::MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<Vec4<f32>> for Mat4 {
    type Output = Vec4<f32>;
    fn mul(self, v: Vec4<f32>) -> Vec4<f32> {
        let m = &self.v;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}

impl fmt::Display for Mat4 {
    /// Prints one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let r = self.row(row);
            writeln!(f, "[{:>10.4} {:>10.4} {:>10.4} {:>10.4}]", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    /// Upper triangular in row terms, determinant 2 * 4 * 1 * 2
    #[rustfmt::skip]
    fn triangular() -> Mat4 {
        Mat4::new(
            2.0, 0.0, 0.0, 0.0,
            1.0, 4.0, 0.0, 0.0,
            4.0, 5.0, 1.0, 0.0,
            7.0, 8.0, 9.0, 2.0,
        )
    }

    fn sequence() -> Mat4 {
        let mut v = [0.0; 16];
        for (i, cell) in v.iter_mut().enumerate() {
            *cell = (i + 1) as f32;
        }
        Mat4::from_cols_array(&v)
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Mat4::default().to_cols_array(), Mat4::IDENTITY.to_cols_array());
        assert_eq!(Mat4::identity(), Mat4::IDENTITY);
    }

    #[test]
    fn test_new_storage_order() {
        let m = sequence();
        let n = Mat4::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m.to_cols_array(), n.to_cols_array());
        assert_eq!(n.xx(), 1.0);
        assert_eq!(n.xw(), 4.0);
        assert_eq!(n.yx(), 5.0);
        assert_eq!(n.zy(), 10.0);
        assert_eq!(n.tx(), 13.0);
        assert_eq!(n.tw(), 16.0);
        assert_eq!(n.get(2, 1), 10.0);
    }

    #[test]
    fn test_from_slice() {
        let buffer: Vec<f32> = (1..=20).map(|i| i as f32).collect();
        let m = Mat4::from_slice(&buffer);
        assert_eq!(m.to_cols_array(), sequence().to_cols_array());
    }

    #[test]
    #[should_panic]
    fn test_from_short_slice_panics() {
        let _ = Mat4::from_slice(&[1.0; 15]);
    }

    #[test]
    fn test_column_views() {
        let m = sequence();
        assert_eq!(m.right(), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.up(), Vec4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.forward(), Vec4::new(9.0, 10.0, 11.0, 12.0));
        assert_eq!(m.position(), Vec4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(m.row(0), Vec4::new(1.0, 5.0, 9.0, 13.0));

        let rebuilt = Mat4::from_cols(m.right(), m.up(), m.forward(), m.position());
        assert_eq!(rebuilt, m);

        let mut t = Mat4::IDENTITY;
        t.set_position(Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(t.tx(), 1.0);
        assert_eq!(t.ty(), 2.0);
        assert_eq!(t.tz(), 3.0);
        assert_eq!(t[14], 3.0);
    }

    #[test]
    fn test_tolerance_equality() {
        let mut m = sequence();
        m.set(1, 1, 6.0 + 0.0000005);
        assert_eq!(m, sequence());
        m.set(1, 1, 6.01);
        assert_ne!(m, sequence());
    }

    #[test]
    fn test_add_pairs_matching_cells() {
        let sum = sequence() + Mat4::IDENTITY;
        let expected = Mat4::new(
            2.0, 2.0, 3.0, 4.0, 5.0, 7.0, 7.0, 8.0,
            9.0, 10.0, 12.0, 12.0, 13.0, 14.0, 15.0, 17.0,
        );
        assert_eq!(sum.to_cols_array(), expected.to_cols_array());
    }

    #[test]
    fn test_scale_every_cell() {
        let m = sequence();
        let scaled = m * 3.0;
        for i in 0..16 {
            assert_eq!(scaled[i], m[i] * 3.0, "cell {} not scaled", i);
        }
        assert_eq!(m.scale(3.0).to_cols_array(), scaled.to_cols_array());
    }

    #[test]
    fn test_mul_identity() {
        let m = sequence();
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn test_mul_order() {
        let mut translate = Mat4::IDENTITY;
        translate.set_position(Vec4::new(10.0, 0.0, 0.0, 1.0));
        let mut scale = Mat4::IDENTITY * 2.0;
        scale.set(3, 3, 1.0);

        let p = Vec3::new(1.0, 0.0, 0.0);
        // Scale first, then translate
        assert_eq!((translate * scale).transform_point3(p), Vec3::new(12.0, 0.0, 0.0));
        // Translate first, then scale
        assert_eq!((scale * translate).transform_point3(p), Vec3::new(22.0, 0.0, 0.0));
    }

    #[test]
    fn test_mul_vec4() {
        let m = sequence();
        let r = m * Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(r, m.right());
        let r = m * Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(r, Vec4::new(28.0, 32.0, 36.0, 40.0));
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let mut m = Mat4::IDENTITY;
        m.set_position(Vec4::new(5.0, 6.0, 7.0, 1.0));
        let d = m.transform_vector(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(d, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_point_writes_w() {
        let mut m = Mat4::IDENTITY;
        m.set_position(Vec4::new(5.0, 6.0, 7.0, 1.0));
        m.set(2, 3, -1.0);

        let mut w = 1.0;
        let p = m.transform_point(Vec3::new(1.0, 2.0, 3.0), &mut w);
        assert_eq!(p, Vec3::new(6.0, 8.0, 10.0));
        // row 3 = (0, 0, -1, 1)
        assert_eq!(w, -2.0);

        let mut w = 0.0;
        let d = m.transform_point(Vec3::new(1.0, 2.0, 3.0), &mut w);
        assert_eq!(d, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(w, -3.0);
    }

    #[test]
    fn test_transpose() {
        let m = sequence();
        let t = m.transposed();
        assert_eq!(t.row(0), m.column(0));
        assert_eq!(t.get(3, 0), m.get(0, 3));
        assert_eq!(t.transposed().to_cols_array(), m.to_cols_array());

        let mut in_place = m;
        in_place.transpose();
        assert_eq!(in_place.to_cols_array(), t.to_cols_array());
        // Source matrix untouched by the returning variant
        assert_eq!(m.to_cols_array(), sequence().to_cols_array());
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(triangular().determinant(), 16.0);
        assert_eq!(triangular().transposed().determinant(), 16.0);
        // Linearly dependent rows
        assert_eq!(sequence().determinant(), 0.0);
    }

    #[test]
    fn test_determinant_zero_row_or_column() {
        let mut m = triangular();
        m.set_column(2, Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(m.determinant(), 0.0);

        let mut m = triangular();
        for col in 0..4 {
            m.set(col, 1, 0.0);
        }
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn test_adjugate() {
        // adj(M) * M = det(M) * I
        let m = triangular();
        let product = m.adjugate() * m;
        assert_eq!(product, Mat4::IDENTITY * 16.0);
        assert_eq!(Mat4::IDENTITY.adjugate(), Mat4::IDENTITY);
    }

    #[test]
    fn test_inverse_diagonal() {
        let m = Mat4::new(
            2.0, 0.0, 0.0, 0.0,
            0.0, 2.0, 0.0, 0.0,
            0.0, 0.0, 2.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        let inv = m.inverse();
        let expected = Mat4::new(
            0.5, 0.0, 0.0, 0.0,
            0.0, 0.5, 0.0, 0.0,
            0.0, 0.0, 0.5, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(inv, expected);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = triangular();
        let inv = m.inverse();
        assert_eq!(m * inv, Mat4::IDENTITY);
        assert_eq!(inv * m, Mat4::IDENTITY);

        let mut in_place = m;
        in_place.invert();
        assert_eq!(in_place, inv);
    }

    #[test]
    fn test_inverse_singular_is_identity() {
        let inv = Mat4::ZERO.inverse();
        assert_eq!(inv.to_cols_array(), Mat4::IDENTITY.to_cols_array());

        let mut m = sequence();
        m.invert();
        assert_eq!(m.to_cols_array(), Mat4::IDENTITY.to_cols_array());
    }

    #[test]
    fn test_try_inverse() {
        assert!(Mat4::ZERO.try_inverse().is_none());
        assert!(sequence().try_inverse().is_none());
        let inv = triangular().try_inverse().expect("triangular matrix is invertible");
        assert_eq!(inv, triangular().inverse());
    }

    #[test]
    fn test_perspective_maps_near_and_far() {
        let proj = Mat4::perspective(90.0, 1.0, 1.0, 100.0);

        let mut w = 1.0;
        let near = proj.transform_point(Vec3::new(0.0, 0.0, -1.0), &mut w);
        assert!(approx_eq(w, 1.0));
        assert!(approx_eq(near.z / w, -1.0));

        let mut w = 1.0;
        let far = proj.transform_point(Vec3::new(0.0, 0.0, -100.0), &mut w);
        assert!(approx_eq(w, 100.0));
        assert!(approx_eq(far.z / w, 1.0));

        // Edge of a 90 degree field of view lands on the clip boundary
        let mut w = 1.0;
        let edge = proj.transform_point(Vec3::new(1.0, 1.0, -1.0), &mut w);
        assert!(approx_eq(edge.x / w, 1.0));
        assert!(approx_eq(edge.y / w, 1.0));
    }

    #[test]
    fn test_degenerate_frustum_is_identity() {
        assert_eq!(Mat4::frustum(1.0, 1.0, -1.0, 1.0, 0.1, 10.0), Mat4::IDENTITY);
        assert_eq!(Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0), Mat4::IDENTITY);
        assert_eq!(Mat4::orthographic(-1.0, 1.0, 2.0, 2.0, 0.0, 1.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_orthographic() {
        let proj = Mat4::orthographic(0.0, 2.0, 0.0, 2.0, -1.0, 1.0);
        assert_eq!(proj.transform_point3(Vec3::new(2.0, 2.0, 0.0)), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(proj.transform_point3(Vec3::ZERO), Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(proj.transform_point3(Vec3::new(0.0, 0.0, -1.0)), Vec3::new(-1.0, -1.0, 1.0));
    }

    #[test]
    fn test_look_at() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);
        assert_eq!(view.transform_point3(Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(view.transform_point3(eye), Vec3::ZERO);
        assert_eq!(view.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_look_at_parallel_up_is_identity() {
        let view = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(view, Mat4::IDENTITY);
    }

    #[test]
    fn test_bytemuck_layout() {
        let m = sequence();
        let bytes = bytemuck::bytes_of(&m);
        assert_eq!(bytes.len(), 64);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[4], 5.0);
    }

    #[test]
    fn test_display_prints_rows() {
        let text = sequence().to_string();
        let first = text.lines().next().expect("four lines");
        assert_eq!(text.lines().count(), 4);
        assert!(first.contains("1.0000"));
        assert!(first.contains("13.0000"));
    }
}
