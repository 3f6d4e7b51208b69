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

@file    vector.rs
@brief   Concrete Vec2 / Vec3 / Vec4 value types
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix3x3, Matrix4x3, Matrix4x4};
use crate::policy;
use crate::quaternion::Quaternion;
use crate::{matrix_op as matrix, vector_op as vector};
use crate::{Float, Point3};

//a Macros
//mi vec_type!
/// Implement the componentwise surface shared by the three vector
/// widths: operators, conversions, approx equality and display
macro_rules! vec_type {
    { $t:ident, $d:expr, $( $c:ident ),+ } => {
        impl<F: Float> $t<F> {
            //fp new
            /// Create a vector from its components
            #[inline]
            pub const fn new( $( $c: F ),+ ) -> Self {
                Self { $( $c ),+ }
            }

            //fp zero
            /// Create the zero vector
            #[inline]
            pub fn zero() -> Self {
                Self { $( $c: F::zero() ),+ }
            }

            //fp from_array / to_array
            /// Create a vector from an array of components
            #[inline]
            pub fn from_array(data: [F; $d]) -> Self {
                let [ $( $c ),+ ] = data;
                Self { $( $c ),+ }
            }

            /// Return the components as an array
            #[inline]
            pub fn to_array(self) -> [F; $d] {
                [ $( self.$c ),+ ]
            }

            //mp is_zero
            /// Return true if every component is zero
            pub fn is_zero(&self) -> bool {
                vector::is_zero(&self.to_array())
            }

            //mp length_sq
            /// The squared length of the vector
            pub fn length_sq(&self) -> F {
                vector::length_sq(&self.to_array())
            }

            //mp length
            /// The length of the vector
            pub fn length(&self) -> F {
                vector::length(&self.to_array())
            }

            //mp distance
            /// The distance to another vector
            pub fn distance(&self, other: &Self) -> F {
                vector::distance(&self.to_array(), &other.to_array())
            }

            //cp normalize
            /// The vector scaled to unit length
            ///
            /// Normalizing a null vector is outside the contract and
            /// yields the zero vector.
            #[must_use]
            pub fn normalize(self) -> Self {
                Self::from_array(vector::normalize(self.to_array()))
            }

            //cp lerp
            /// Linear interpolation towards another vector by `t`
            #[must_use]
            pub fn lerp(self, other: &Self, t: F) -> Self {
                Self::from_array(vector::mix(&self.to_array(), &other.to_array(), t))
            }

            //cp abs
            /// The componentwise absolute value
            #[must_use]
            pub fn abs(self) -> Self {
                Self { $( $c: self.$c.abs() ),+ }
            }

            //cp min / max
            /// The componentwise minimum of two vectors
            #[must_use]
            pub fn min(self, other: &Self) -> Self {
                Self { $( $c: self.$c.min(other.$c) ),+ }
            }
            /// The componentwise maximum of two vectors
            #[must_use]
            pub fn max(self, other: &Self) -> Self {
                Self { $( $c: self.$c.max(other.$c) ),+ }
            }
        }

        //ip Neg for $t
        impl<F: Float> std::ops::Neg for $t<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $( $c: -self.$c ),+ }
            }
        }

        //ip Add/Sub/Mul/Div for $t
        vec_type!{ @binop $t, Add, add, +, AddAssign, add_assign, +=, $( $c ),+ }
        vec_type!{ @binop $t, Sub, sub, -, SubAssign, sub_assign, -=, $( $c ),+ }
        vec_type!{ @binop $t, Mul, mul, *, MulAssign, mul_assign, *=, $( $c ),+ }
        vec_type!{ @binop $t, Div, div, /, DivAssign, div_assign, /=, $( $c ),+ }

        //ip From<[F; $d]> for $t and back
        impl<F: Float> From<[F; $d]> for $t<F> {
            fn from(data: [F; $d]) -> Self {
                Self::from_array(data)
            }
        }
        impl<F: Float> From<$t<F>> for [F; $d] {
            fn from(v: $t<F>) -> [F; $d] {
                v.to_array()
            }
        }

        //ip Display for $t
        impl<F: Float> std::fmt::Display for $t<F> {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                vector::fmt(f, &self.to_array())
            }
        }

        //ip AbsDiffEq/RelativeEq/UlpsEq for $t
        impl<F: Float + approx::AbsDiffEq> approx::AbsDiffEq for $t<F>
        where
            F::Epsilon: Copy,
        {
            type Epsilon = F::Epsilon;
            fn default_epsilon() -> F::Epsilon {
                F::default_epsilon()
            }
            fn abs_diff_eq(&self, other: &Self, epsilon: F::Epsilon) -> bool {
                true $( && self.$c.abs_diff_eq(&other.$c, epsilon) )+
            }
        }
        impl<F: Float + approx::RelativeEq> approx::RelativeEq for $t<F>
        where
            F::Epsilon: Copy,
        {
            fn default_max_relative() -> F::Epsilon {
                F::default_max_relative()
            }
            fn relative_eq(&self, other: &Self, epsilon: F::Epsilon, max_relative: F::Epsilon) -> bool {
                true $( && self.$c.relative_eq(&other.$c, epsilon, max_relative) )+
            }
        }
        impl<F: Float + approx::UlpsEq> approx::UlpsEq for $t<F>
        where
            F::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                F::default_max_ulps()
            }
            fn ulps_eq(&self, other: &Self, epsilon: F::Epsilon, max_ulps: u32) -> bool {
                true $( && self.$c.ulps_eq(&other.$c, epsilon, max_ulps) )+
            }
        }
    };
    { @binop $t:ident, $trait_op:ident, $op:ident, $binop:tt, $trait_assign:ident, $assign:ident, $assign_binop:tt, $( $c:ident ),+ } => {
        impl<F: Float> std::ops::$trait_op<Self> for $t<F> {
            type Output = Self;
            fn $op(self, other: Self) -> Self {
                Self { $( $c: self.$c $binop other.$c ),+ }
            }
        }
        impl<F: Float> std::ops::$trait_assign<Self> for $t<F> {
            fn $assign(&mut self, other: Self) {
                $( self.$c $assign_binop other.$c; )+
            }
        }
        impl<F: Float> std::ops::$trait_op<F> for $t<F> {
            type Output = Self;
            fn $op(self, other: F) -> Self {
                Self { $( $c: self.$c $binop other ),+ }
            }
        }
        impl<F: Float> std::ops::$trait_assign<F> for $t<F> {
            fn $assign(&mut self, other: F) {
                $( self.$c $assign_binop other; )+
            }
        }
    };
}

//a Vec2
//tp Vec2
/// A 2-component vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<F: Float> {
    /// X component
    pub x: F,
    /// Y component
    pub y: F,
}

vec_type! { Vec2, 2, x, y }

//ip Vec2
impl<F: Float> Vec2<F> {
    //fp unit_x / unit_y
    /// The unit vector along X
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero())
    }
    /// The unit vector along Y
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one())
    }

    //mp dot
    /// The dot product with another vector
    pub fn dot(&self, other: &Self) -> F {
        vector::dot(&self.to_array(), &other.to_array())
    }

    //mp angle_between
    /// The angle to another vector, in the policy angle unit
    pub fn angle_between(&self, other: &Self) -> F {
        policy::rad_to_angle(vector::angle_between(&self.to_array(), &other.to_array()))
    }

    //cp rotated
    /// The vector rotated by an angle (policy unit) about the origin
    #[must_use]
    pub fn rotated(self, angle: F) -> Self {
        let (s, c) = policy::angle_to_rad(angle).sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    //cp transform
    /// The point transformed by a 3-by-3 matrix used as a 2D affine
    /// transformation: `(x, y, 1) * M`, keeping the first two
    /// components
    #[must_use]
    pub fn transform(self, m: &Matrix3x3<F>) -> Self {
        let r = matrix::transform_dir3(&[self.x, self.y, F::one()], m.as_array());
        Self::new(r[0], r[1])
    }
}

//a Vec3
//tp Vec3
/// A 3-component vector: a direction or a 3D position depending on
/// the operation applied to it
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<F: Float> {
    /// X component
    pub x: F,
    /// Y component
    pub y: F,
    /// Z component
    pub z: F,
}

vec_type! { Vec3, 3, x, y, z }

//ip Vec3
impl<F: Float> Vec3<F> {
    //fp unit_x / unit_y / unit_z
    /// The unit vector along X
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero(), F::zero())
    }
    /// The unit vector along Y
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one(), F::zero())
    }
    /// The unit vector along Z
    pub fn unit_z() -> Self {
        Self::new(F::zero(), F::zero(), F::one())
    }

    //mp dot
    /// The dot product with another vector
    pub fn dot(&self, other: &Self) -> F {
        vector::dot(&self.to_array(), &other.to_array())
    }

    //mp cross
    /// The right-handed cross product with another vector
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_array(vector::cross_product3(&self.to_array(), &other.to_array()))
    }

    //mp angle_between
    /// The angle to another vector, in the policy angle unit
    ///
    /// Both vectors must be non-null.
    pub fn angle_between(&self, other: &Self) -> F {
        policy::rad_to_angle(vector::angle_between(&self.to_array(), &other.to_array()))
    }

    //cp rotate
    /// The vector rotated by a quaternion
    #[must_use]
    pub fn rotate(self, q: &Quaternion<F>) -> Self {
        Self::from_array(crate::quaternion_op::rotate_point3(
            &q.to_array(),
            &self.to_array(),
        ))
    }

    //cp transform_3x3
    /// `v * M` under a 3-by-3 matrix; the vector is treated as a
    /// direction
    #[must_use]
    pub fn transform_3x3(self, m: &Matrix3x3<F>) -> Self {
        Self::from_array(matrix::transform_dir3(&self.to_array(), m.as_array()))
    }

    //cp transform_4x3
    /// `v * M` under a 4-by-3 affine matrix; the vector is treated as
    /// a position and picks up the translation row
    #[must_use]
    pub fn transform_4x3(self, m: &Matrix4x3<F>) -> Self {
        Self::from_array(matrix::transform_point12(&self.to_array(), m.as_array()))
    }

    //cp transform_4x4
    /// `(v, 1) * M` under a full 4-by-4 matrix with the homogeneous
    /// divide applied when the resulting w is non-null
    #[must_use]
    pub fn transform_4x4(self, m: &Matrix4x4<F>) -> Self {
        let [x, y, z, w] =
            matrix::transform_vec4(&[self.x, self.y, self.z, F::one()], m.as_array());
        if w.abs() > F::epsilon() {
            Self::new(x / w, y / w, z / w)
        } else {
            Self::new(x, y, z)
        }
    }

    //mp homogenized
    /// The vector extended with the given w component
    pub fn homogenized(&self, w: F) -> Vec4<F> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

//ip Point3 for Vec3
impl<F: Float> Point3<F> for Vec3<F> {
    fn coords(&self) -> [F; 3] {
        self.to_array()
    }
    fn with_coords(&self, coords: [F; 3]) -> Self {
        Self::from_array(coords)
    }
}

//a Vec4
//tp Vec4
/// A 4-component vector: a 3D position when w is one, a direction when
/// w is zero, a homogeneous coordinate otherwise
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4<F: Float> {
    /// X component
    pub x: F,
    /// Y component
    pub y: F,
    /// Z component
    pub z: F,
    /// W component
    pub w: F,
}

vec_type! { Vec4, 4, x, y, z, w }

//ip Vec4
impl<F: Float> Vec4<F> {
    //fp position / direction
    /// A position: (x, y, z, 1)
    pub fn position(x: F, y: F, z: F) -> Self {
        Self::new(x, y, z, F::one())
    }
    /// A direction: (x, y, z, 0)
    pub fn direction(x: F, y: F, z: F) -> Self {
        Self::new(x, y, z, F::zero())
    }

    //mp xyz
    /// The first three components as a [Vec3]
    pub fn xyz(&self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    //mp dot
    /// The three-component dot product; w does not participate, so
    /// directions and positions compare the same way
    pub fn dot(&self, other: &Self) -> F {
        vector::dot(
            &[self.x, self.y, self.z],
            &[other.x, other.y, other.z],
        )
    }

    //mp cross
    /// The right-handed cross product of the xyz parts; the result
    /// keeps this vector's w
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let c = vector::cross_product3(
            &[self.x, self.y, self.z],
            &[other.x, other.y, other.z],
        );
        Self::new(c[0], c[1], c[2], self.w)
    }

    //mp angle_between
    /// The angle to another vector (xyz parts), in the policy angle
    /// unit
    pub fn angle_between(&self, other: &Self) -> F {
        policy::rad_to_angle(vector::angle_between(
            &[self.x, self.y, self.z],
            &[other.x, other.y, other.z],
        ))
    }

    //cp rotate
    /// The xyz part rotated by a quaternion; w is preserved
    #[must_use]
    pub fn rotate(self, q: &Quaternion<F>) -> Self {
        let r = crate::quaternion_op::rotate_point3(&q.to_array(), &[self.x, self.y, self.z]);
        Self::new(r[0], r[1], r[2], self.w)
    }

    //cp transform_4x3
    /// `v * M` under a 4-by-3 affine matrix
    ///
    /// The result's w equals the input w, so a w=0 direction remains a
    /// direction and a w=1 position picks up translation.
    #[must_use]
    pub fn transform_4x3(self, m: &Matrix4x3<F>) -> Self {
        Self::from_array(matrix::transform_vec4_12(&self.to_array(), m.as_array()))
    }

    //cp transform_4x4
    /// `v * M` under a full 4-by-4 matrix; w follows the projective
    /// convention
    #[must_use]
    pub fn transform_4x4(self, m: &Matrix4x4<F>) -> Self {
        Self::from_array(matrix::transform_vec4(&self.to_array(), m.as_array()))
    }
}

//ip Point3 for Vec4
impl<F: Float> Point3<F> for Vec4<F> {
    fn coords(&self) -> [F; 3] {
        [self.x, self.y, self.z]
    }
    fn with_coords(&self, coords: [F; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2], self.w)
    }
}
