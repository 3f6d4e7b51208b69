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

@file    rotation.rs
@brief   Orthonormal 3-by-3 rotation matrix
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix3x3;
use crate::policy;
use crate::quaternion::Quaternion;
use crate::quaternion_op as quat;
use crate::vector_types::Vec3;
use crate::{Float, Point3};

//a RotationMatrix3x3
//tp RotationMatrix3x3
/// A 3-by-3 matrix that is orthonormal with determinant +1: a pure
/// rotation
///
/// The invariant is guaranteed by the constructors only; arithmetic on
/// the generic [Matrix3x3] view is not re-verified. The inverse of a
/// rotation is its transpose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix3x3<F: Float> {
    m: Matrix3x3<F>,
}

//ip RotationMatrix3x3
impl<F: Float> RotationMatrix3x3<F> {
    //fp identity
    /// The identity rotation
    pub fn identity() -> Self {
        Self {
            m: Matrix3x3::identity(),
        }
    }

    //fp from_axis_angle
    /// The rotation by an angle (policy unit) about an axis, which
    /// must be a unit vector
    pub fn from_axis_angle(axis: &Vec3<F>, angle: F) -> Self {
        let q = quat::of_axis_angle(&axis.to_array(), policy::angle_to_rad(angle));
        Self {
            m: Matrix3x3::from_array(quat::to_rotation3(&q)),
        }
    }

    //fp from_euler
    /// The rotation of three Euler angles (policy unit) applied in
    /// the order Z, then X, then Y
    pub fn from_euler(rx: F, ry: F, rz: F) -> Self {
        let q = quat::of_euler(
            policy::angle_to_rad(rx),
            policy::angle_to_rad(ry),
            policy::angle_to_rad(rz),
        );
        Self {
            m: Matrix3x3::from_array(quat::to_rotation3(&q)),
        }
    }

    //fp from_quaternion
    /// The rotation of a unit quaternion
    pub fn from_quaternion(q: &Quaternion<F>) -> Self {
        Self {
            m: Matrix3x3::from_array(quat::to_rotation3(&q.to_array())),
        }
    }

    //mp matrix / to_matrix
    /// Borrow the generic matrix view
    pub fn matrix(&self) -> &Matrix3x3<F> {
        &self.m
    }
    /// Return the generic matrix
    pub fn to_matrix(self) -> Matrix3x3<F> {
        self.m
    }

    //mp to_quaternion
    /// The unit quaternion of this rotation
    pub fn to_quaternion(&self) -> Quaternion<F> {
        Quaternion::from_array(quat::of_rotation3(self.m.as_array()))
    }

    //mp to_axis_angle
    /// The axis and angle (policy unit) of this rotation
    pub fn to_axis_angle(&self) -> (Vec3<F>, F) {
        let (axis, angle) = quat::as_axis_angle(&quat::of_rotation3(self.m.as_array()));
        (Vec3::from_array(axis), policy::rad_to_angle(angle))
    }

    //cp invert
    /// The inverse rotation, which is the transpose
    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            m: self.m.transpose(),
        }
    }

    //mp transform
    /// Rotate a point about the origin; a [crate::Vec4]'s w is
    /// untouched
    pub fn transform<P: Point3<F>>(&self, p: &P) -> P {
        p.with_coords(crate::matrix_op::transform_dir3(
            &p.coords(),
            self.m.as_array(),
        ))
    }

    //zz All done
}

//ip Default for RotationMatrix3x3
impl<F: Float> std::default::Default for RotationMatrix3x3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

//ip Mul for RotationMatrix3x3
impl<F: Float> std::ops::Mul for RotationMatrix3x3<F> {
    type Output = Self;
    /// Rotation composed with rotation stays a rotation; `a * b`
    /// applies `a` first
    fn mul(self, other: Self) -> Self {
        Self { m: self.m * other.m }
    }
}

//ip Display for RotationMatrix3x3
impl<F: Float> std::fmt::Display for RotationMatrix3x3<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.m, f)
    }
}
