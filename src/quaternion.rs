/*a Copyright

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

  http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.

@file    quaternion.rs
@brief   Quaternion value type
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::AffineStorage;
use crate::policy;
use crate::vector_types::{Vec3, Vec4};
use crate::{quaternion_op as quat, vector_op as vector};
use crate::Float;

//a Quaternion
//tp Quaternion
/// A quaternion |x y z w|: a rotation when unit length, an arbitrary
/// four-component quantity otherwise
///
/// Multiplication is the Hamilton product, and under the crate's
/// sandwich convention `a * b` is the rotation that applies `a` first
/// and `b` second - the same reading as the matrix products. Euler
/// angles compose in the order Z, then X, then Y (yaw, pitch, roll).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<F: Float> {
    /// X component
    pub x: F,
    /// Y component
    pub y: F,
    /// Z component
    pub z: F,
    /// W component
    pub w: F,
}

//ip Quaternion
impl<F: Float> Quaternion<F> {
    //fp new
    /// Create a quaternion from its four components
    #[inline]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    //fp identity
    /// The identity quaternion (0, 0, 0, 1)
    pub fn identity() -> Self {
        Self::from_array(quat::identity())
    }

    //fp from_array / to_array
    /// Create a quaternion from an `[x, y, z, w]` array
    #[inline]
    pub fn from_array(data: [F; 4]) -> Self {
        Self::new(data[0], data[1], data[2], data[3])
    }

    /// Return the components as an `[x, y, z, w]` array
    #[inline]
    pub fn to_array(self) -> [F; 4] {
        [self.x, self.y, self.z, self.w]
    }

    //fp from_axis_angle
    /// Create the unit quaternion rotating by an angle (policy unit)
    /// about an axis, which must be a unit vector
    pub fn from_axis_angle(axis: &Vec3<F>, angle: F) -> Self {
        Self::from_array(quat::of_axis_angle(
            &axis.to_array(),
            policy::angle_to_rad(angle),
        ))
    }

    //fp from_axis_angle4
    /// As [Quaternion::from_axis_angle] with the axis carried in the
    /// xyz of a [Vec4]
    pub fn from_axis_angle4(axis: &Vec4<F>, angle: F) -> Self {
        Self::from_array(quat::of_axis_angle(
            &[axis.x, axis.y, axis.z],
            policy::angle_to_rad(angle),
        ))
    }

    //fp from_euler
    /// Create the unit quaternion for three Euler angles (policy
    /// unit), applied in the order Z, then X, then Y
    pub fn from_euler(rx: F, ry: F, rz: F) -> Self {
        Self::from_array(quat::of_euler(
            policy::angle_to_rad(rx),
            policy::angle_to_rad(ry),
            policy::angle_to_rad(rz),
        ))
    }

    //fp from_rotation
    /// Extract the unit quaternion of a rotation matrix
    pub fn from_rotation(rotation: &crate::RotationMatrix3x3<F>) -> Self {
        Self::from_array(quat::of_rotation3(rotation.matrix().as_array()))
    }

    //fp from_transformation
    /// Extract the rotation of a transformation matrix as a unit
    /// quaternion
    ///
    /// The scale is divided out of the linear block first. When the
    /// transformation was composed with negative scale factors the
    /// extraction cannot tell the sign apart from a rotation, so the
    /// result may not match the quaternion the matrix was built from.
    pub fn from_transformation<S: AffineStorage<F>>(
        transformation: &crate::TransformationMatrix<F, S>,
    ) -> Self {
        Self::from_array(crate::transformation::rotation_of_linear(
            transformation.storage().linear().as_array(),
        ))
    }

    //mp length / length_sq
    /// The length of the quaternion
    pub fn length(&self) -> F {
        vector::length(&self.to_array())
    }
    /// The squared length of the quaternion
    pub fn length_sq(&self) -> F {
        vector::length_sq(&self.to_array())
    }

    //mp dot
    /// The four-component dot product with another quaternion
    pub fn dot(&self, other: &Self) -> F {
        quat::dot(&self.to_array(), &other.to_array())
    }

    //mp angle_between
    /// The angle (policy unit) between the rotations of two unit
    /// quaternions, in [0, half a turn]
    pub fn angle_between(&self, other: &Self) -> F {
        policy::rad_to_angle(quat::angle_between(&self.to_array(), &other.to_array()))
    }

    //cp normalize
    /// The quaternion scaled to unit length; normalizing a null
    /// quaternion is outside the contract and yields zero
    #[must_use]
    pub fn normalize(self) -> Self {
        Self::from_array(quat::normalize(self.to_array()))
    }

    //cp conjugate
    /// The conjugate (-x, -y, -z, w)
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::from_array(quat::conjugate(&self.to_array()))
    }

    //cp invert
    /// The general inverse: conjugate over squared length
    #[must_use]
    pub fn invert(self) -> Self {
        Self::from_array(quat::invert(&self.to_array()))
    }

    //cp unit_invert
    /// The inverse of a unit quaternion, which is just its conjugate
    /// (cheaper than [Quaternion::invert])
    #[must_use]
    pub fn unit_invert(self) -> Self {
        self.conjugate()
    }

    //cp lerp
    /// Linear interpolation towards another quaternion; the result is
    /// renormalized
    #[must_use]
    pub fn lerp(self, t: F, other: &Self) -> Self {
        Self::from_array(quat::nlerp(t, &self.to_array(), &other.to_array()))
    }

    //cp slerp
    /// Spherical linear interpolation towards another quaternion of
    /// any length; when the interpolation angle is 0 or half a turn
    /// the operand itself is returned
    #[must_use]
    pub fn slerp(self, t: F, other: &Self) -> Self {
        Self::from_array(quat::slerp(t, &self.to_array(), &other.to_array()))
    }

    //cp unit_slerp
    /// Spherical linear interpolation between unit quaternions
    #[must_use]
    pub fn unit_slerp(self, t: F, other: &Self) -> Self {
        Self::from_array(quat::unit_slerp(t, &self.to_array(), &other.to_array()))
    }

    //mp to_euler
    /// The Euler angles (policy unit, Z-X-Y order) of a unit
    /// quaternion, as (x, y, z)
    ///
    /// At the x = quarter-turn poles y is reported as zero; the angles
    /// recompose to the same rotation but need not match the values
    /// the quaternion was built from.
    pub fn to_euler(&self) -> (F, F, F) {
        let (rx, ry, rz) = quat::to_euler(&self.to_array());
        (
            policy::rad_to_angle(rx),
            policy::rad_to_angle(ry),
            policy::rad_to_angle(rz),
        )
    }

    //mp to_axis_angle
    /// The rotation axis and angle (policy unit) of a unit quaternion
    ///
    /// At the 0 and half-turn singularities the axis is arbitrary.
    pub fn to_axis_angle(&self) -> (Vec3<F>, F) {
        let (axis, angle) = quat::as_axis_angle(&self.to_array());
        (Vec3::from_array(axis), policy::rad_to_angle(angle))
    }

    //zz All done
}

//ip Default for Quaternion
impl<F: Float> std::default::Default for Quaternion<F> {
    fn default() -> Self {
        Self::identity()
    }
}

//ip Neg for Quaternion
impl<F: Float> std::ops::Neg for Quaternion<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

//ip Add/Sub for Quaternion
impl<F: Float> std::ops::Add for Quaternion<F> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}
impl<F: Float> std::ops::Sub for Quaternion<F> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

//ip Mul/Div for Quaternion
impl<F: Float> std::ops::Mul for Quaternion<F> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_array(quat::multiply(&self.to_array(), &other.to_array()))
    }
}
impl<F: Float> std::ops::Div for Quaternion<F> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Self::from_array(quat::divide(&self.to_array(), &other.to_array()))
    }
}

//ip Mul<F>/Div<F> for Quaternion
impl<F: Float> std::ops::Mul<F> for Quaternion<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}
impl<F: Float> std::ops::Div<F> for Quaternion<F> {
    type Output = Self;
    fn div(self, s: F) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

//ip Mul<Vec3>/Mul<Vec4> for Quaternion
impl<F: Float> std::ops::Mul<Vec3<F>> for Quaternion<F> {
    type Output = Self;
    /// The vector is promoted to the pure quaternion (x, y, z, 0)
    /// before the Hamilton product
    fn mul(self, v: Vec3<F>) -> Self {
        self * Self::new(v.x, v.y, v.z, F::zero())
    }
}
impl<F: Float> std::ops::Mul<Vec4<F>> for Quaternion<F> {
    type Output = Self;
    /// The vector is promoted to the quaternion (x, y, z, w) before
    /// the Hamilton product
    fn mul(self, v: Vec4<F>) -> Self {
        self * Self::new(v.x, v.y, v.z, v.w)
    }
}

//ip Display for Quaternion
impl<F: Float> std::fmt::Display for Quaternion<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        vector::fmt(f, &self.to_array())
    }
}

//ip AbsDiffEq/RelativeEq for Quaternion
impl<F: Float + approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<F>
where
    F::Epsilon: Copy,
{
    type Epsilon = F::Epsilon;
    fn default_epsilon() -> F::Epsilon {
        F::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: F::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}
impl<F: Float + approx::RelativeEq> approx::RelativeEq for Quaternion<F>
where
    F::Epsilon: Copy,
{
    fn default_max_relative() -> F::Epsilon {
        F::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: F::Epsilon, max_relative: F::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}
