// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::{Euler, EulerOrder, Mat4, MathError, Vec3};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion `w + xi + yj + zk`, used for 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector"
/// part and `w` is the "scalar" part. Only unit quaternions
/// (`x² + y² + z² + w² = 1`) represent rotations, but the type never enforces
/// this: callers restore unit length with [`Quaternion::normalize`] when they
/// need it.
///
/// Every operation returns a new value and leaves its inputs untouched, so
/// operations chain by value:
///
/// ```
/// use orient_core::math::{Euler, EulerOrder, Quaternion};
///
/// let q = Quaternion::from_euler(&Euler::new(0.1, 0.2, 0.3, EulerOrder::XYZ))
///     .conjugate()
///     .normalize();
/// assert!((q.length() - 1.0).abs() < 1e-6);
/// ```
///
/// Equality is exact and component-wise. Use the `approx` traits or
/// [`Quaternion::same_rotation`] for tolerant comparisons.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// The number of scalar components, and of slots used in a flat buffer.
    pub const NUM_COMPONENTS: usize = 4;

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer `from_axis_angle` or the other rotation-specific constructors.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    // --- Conversions ---

    /// Creates a quaternion from Euler angles.
    ///
    /// The result is the product of the three elemental rotations in the
    /// order named by `euler.order`; for `XYZ` that is `qx * qy * qz`.
    pub fn from_euler(euler: &Euler) -> Self {
        let (s1, c1) = (euler.x * 0.5).sin_cos();
        let (s2, c2) = (euler.y * 0.5).sin_cos();
        let (s3, c3) = (euler.z * 0.5).sin_cos();

        match euler.order {
            EulerOrder::XYZ => Self {
                x: s1 * c2 * c3 + c1 * s2 * s3,
                y: c1 * s2 * c3 - s1 * c2 * s3,
                z: c1 * c2 * s3 + s1 * s2 * c3,
                w: c1 * c2 * c3 - s1 * s2 * s3,
            },
            EulerOrder::YXZ => Self {
                x: s1 * c2 * c3 + c1 * s2 * s3,
                y: c1 * s2 * c3 - s1 * c2 * s3,
                z: c1 * c2 * s3 - s1 * s2 * c3,
                w: c1 * c2 * c3 + s1 * s2 * s3,
            },
            EulerOrder::ZXY => Self {
                x: s1 * c2 * c3 - c1 * s2 * s3,
                y: c1 * s2 * c3 + s1 * c2 * s3,
                z: c1 * c2 * s3 + s1 * s2 * c3,
                w: c1 * c2 * c3 - s1 * s2 * s3,
            },
            EulerOrder::ZYX => Self {
                x: s1 * c2 * c3 - c1 * s2 * s3,
                y: c1 * s2 * c3 + s1 * c2 * s3,
                z: c1 * c2 * s3 - s1 * s2 * c3,
                w: c1 * c2 * c3 + s1 * s2 * s3,
            },
            EulerOrder::YZX => Self {
                x: s1 * c2 * c3 + c1 * s2 * s3,
                y: c1 * s2 * c3 + s1 * c2 * s3,
                z: c1 * c2 * s3 - s1 * s2 * c3,
                w: c1 * c2 * c3 - s1 * s2 * s3,
            },
            EulerOrder::XZY => Self {
                x: s1 * c2 * c3 - c1 * s2 * s3,
                y: c1 * s2 * c3 - s1 * c2 * s3,
                z: c1 * c2 * s3 + s1 * s2 * c3,
                w: c1 * c2 * c3 + s1 * s2 * s3,
            },
        }
    }

    /// Creates a quaternion from the rotation held in a 4x4 matrix.
    ///
    /// Only the upper-left 3x3 block is read, and it must be a pure rotation:
    /// any scale or shear yields a meaningless quaternion. The result is not
    /// renormalized.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let m11 = m.cols[0].x;
        let m21 = m.cols[0].y;
        let m31 = m.cols[0].z;
        let m12 = m.cols[1].x;
        let m22 = m.cols[1].y;
        let m32 = m.cols[1].z;
        let m13 = m.cols[2].x;
        let m23 = m.cols[2].y;
        let m33 = m.cols[2].z;

        // Algorithm from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self {
                x: (m32 - m23) * s,
                y: (m13 - m31) * s,
                z: (m21 - m12) * s,
                w: 0.25 / s,
            }
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            Self {
                x: 0.25 * s,
                y: (m12 + m21) / s,
                z: (m13 + m31) / s,
                w: (m32 - m23) / s,
            }
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            Self {
                x: (m12 + m21) / s,
                y: 0.25 * s,
                z: (m23 + m32) / s,
                w: (m13 - m31) / s,
            }
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            Self {
                x: (m13 + m31) / s,
                y: (m23 + m32) / s,
                z: 0.25 * s,
                w: (m21 - m12) / s,
            }
        }
    }

    /// Creates a quaternion representing a rotation around an axis.
    ///
    /// # Arguments
    ///
    /// * `unit_axis`: The axis of rotation. It must already be normalized; a
    ///   longer or shorter axis yields a quaternion of the same non-unit length.
    /// * `angle_radians`: The angle of rotation in radians.
    ///
    /// ```
    /// use orient_core::math::{Quaternion, Vec3, PI};
    ///
    /// let q = Quaternion::from_axis_angle(Vec3::Z, PI);
    /// assert!((q.z - 1.0).abs() < 1e-6 && q.w.abs() < 1e-6);
    /// ```
    #[inline]
    pub fn from_axis_angle(unit_axis: Vec3, angle_radians: f32) -> Self {
        let (s, c) = (angle_radians * 0.5).sin_cos();
        Self {
            x: unit_axis.x * s,
            y: unit_axis.y * s,
            z: unit_axis.z * s,
            w: c,
        }
    }

    // --- Algebra ---

    /// Calculates the squared length of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (Euclidean norm) of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the quaternion scaled to unit length.
    ///
    /// A quaternion of length exactly zero has no direction to keep and
    /// becomes the identity.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            log::trace!("Normalizing a zero-length quaternion; returning identity.");
            Self::IDENTITY
        } else {
            *self * (1.0 / length)
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the inverse of the quaternion.
    /// For a unit quaternion, the inverse is equal to its conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        let length_squared = self.length_squared();
        if length_squared == 0.0 {
            Self::IDENTITY
        } else {
            self.conjugate() * (1.0 / length_squared)
        }
    }

    /// Computes the four-dimensional dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns `true` if both quaternions describe the same rotation within
    /// `epsilon`, treating `q` and `-q` as equal.
    #[inline]
    pub fn same_rotation(&self, other: Self, epsilon: f32) -> bool {
        (self.dot(other).abs() - 1.0).abs() <= epsilon
    }

    /// Rotates a 3D vector by this quaternion, which must be unit length.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let s = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    // --- Interpolation ---

    /// Performs a spherical linear interpolation from `self` towards `target`.
    ///
    /// The result moves along the shorter great-circle arc between the two
    /// orientations at constant angular speed. `t` is not clamped. Both inputs
    /// are expected to be unit quaternions.
    ///
    /// Endpoints that coincide return `self`; endpoints too close for the
    /// trigonometric weights to be stable fall back to a normalized linear
    /// interpolation.
    pub fn slerp(&self, target: Self, t: f32) -> Self {
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return target;
        }

        // Algorithm from http://www.euclideanspace.com/maths/algebra/realNormedAlgebra/quaternions/slerp/
        let mut cos_half_theta = self.dot(target);
        let mut end = target;

        // `q` and `-q` are the same rotation; flip to take the short arc.
        if cos_half_theta < 0.0 {
            end = -target;
            cos_half_theta = -cos_half_theta;
        }

        if cos_half_theta >= 1.0 {
            log::trace!("Slerp endpoints coincide; returning the start orientation.");
            return *self;
        }

        let sqr_sin_half_theta = 1.0 - cos_half_theta * cos_half_theta;

        if sqr_sin_half_theta <= f32::EPSILON {
            log::trace!("Slerp arc is degenerate; falling back to normalized lerp.");
            return (*self * (1.0 - t) + end * t).normalize();
        }

        let sin_half_theta = sqr_sin_half_theta.sqrt();
        let half_theta = sin_half_theta.atan2(cos_half_theta);
        let ratio_a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;

        *self * ratio_a + end * ratio_b
    }

    // --- Component access ---

    /// Returns the number of scalar components (always 4).
    #[inline]
    pub const fn num_components(&self) -> usize {
        Self::NUM_COMPONENTS
    }

    /// Reads a component by index: `0 → x`, `1 → y`, `2 → z`, `3 → w`.
    pub fn get_component(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::ComponentIndexOutOfRange {
                index,
                count: Self::NUM_COMPONENTS,
            }),
        }
    }

    /// Writes a component by index: `0 → x`, `1 → y`, `2 → z`, `3 → w`.
    ///
    /// The quaternion is left untouched when `index` is out of range.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => {
                return Err(MathError::ComponentIndexOutOfRange {
                    index,
                    count: Self::NUM_COMPONENTS,
                })
            }
        };
        *slot = value;
        Ok(())
    }

    // --- Flat buffers ---

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates a quaternion from `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Reads `x, y, z, w` from four consecutive slots of `buffer` starting at
    /// `offset`.
    pub fn from_slice(buffer: &[f32], offset: usize) -> Result<Self, MathError> {
        let slots = Self::slot_range(buffer.len(), offset)?;
        let c = &buffer[slots];
        Ok(Self::new(c[0], c[1], c[2], c[3]))
    }

    /// Writes `x, y, z, w` into four consecutive slots of `buffer` starting at
    /// `offset`. Nothing is written if the buffer is too short.
    pub fn write_to_slice(&self, buffer: &mut [f32], offset: usize) -> Result<(), MathError> {
        let slots = Self::slot_range(buffer.len(), offset)?;
        buffer[slots].copy_from_slice(&self.to_array());
        Ok(())
    }

    fn slot_range(len: usize, offset: usize) -> Result<std::ops::Range<usize>, MathError> {
        match offset.checked_add(Self::NUM_COMPONENTS) {
            Some(end) if end <= len => Ok(offset..end),
            _ => Err(MathError::BufferTooSmall {
                offset,
                required: Self::NUM_COMPONENTS,
                len,
            }),
        }
    }

    // --- Hashing ---

    /// Returns a deterministic 64-bit hash of the four components.
    ///
    /// The hash is FNV-1a over the little-endian bit patterns of `x, y, z, w`,
    /// so it is stable across runs and platforms. `-0.0` hashes like `0.0`,
    /// keeping the hash consistent with `==`.
    pub fn hash_code(&self) -> u64 {
        let mut bytes = [0u8; 16];
        for (chunk, value) in bytes.chunks_exact_mut(4).zip(self.to_array()) {
            let bits = if value == 0.0 { 0 } else { value.to_bits() };
            chunk.copy_from_slice(&bits.to_le_bytes());
        }
        const_fnv1a_hash::fnv1a_hash_64(&bytes, None)
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Composes two rotations with the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.w + self.w * rhs.x + self.y * rhs.z - self.z * rhs.y,
            y: self.y * rhs.w + self.w * rhs.y + self.z * rhs.x - self.x * rhs.z,
            z: self.z * rhs.w + self.w * rhs.z + self.x * rhs.y - self.y * rhs.x,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Replaces `self` with `self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalize().rotate_vec3(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a composition of rotations.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result is the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Index<usize> for Quaternion {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Quaternion"),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Quaternion"),
        }
    }
}

impl_approx_eq!(Quaternion, x, y, z, w);
