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

@file    matrix.rs
@brief   Dense row-major matrix value types
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix_op as matrix;
use crate::policy;
use crate::vector_types::{Vec2, Vec3};
use crate::Float;

//a Macros
//mi mat_type!
/// Implement the surface shared by every matrix shape: element
/// access, componentwise operators, approx equality and display
macro_rules! mat_type {
    { $t:ident, $n:expr, $cols:expr } => {
        impl<F: Float> $t<F> {
            //fp from_array
            /// Create a matrix from its row-major entries
            #[inline]
            pub const fn from_array(data: [F; $n]) -> Self {
                Self { data }
            }

            //fp null
            /// Create the all-zero matrix
            pub fn null() -> Self {
                Self { data: [F::zero(); $n] }
            }

            //mp as_array / to_array
            /// Borrow the row-major entries
            #[inline]
            pub fn as_array(&self) -> &[F; $n] {
                &self.data
            }

            /// Return the row-major entries
            #[inline]
            pub fn to_array(self) -> [F; $n] {
                self.data
            }

            //mp at
            /// Read the entry at (row, col)
            #[inline]
            pub fn at(&self, row: usize, col: usize) -> F {
                self.data[row * $cols + col]
            }

            //mp set
            /// Write the entry at (row, col)
            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: F) {
                self.data[row * $cols + col] = value;
            }

            //mp is_null
            /// Return true if every entry is zero
            pub fn is_null(&self) -> bool {
                crate::vector_op::is_zero(&self.data)
            }
        }

        //ip Default for $t
        impl<F: Float> std::default::Default for $t<F> {
            fn default() -> Self {
                Self::identity()
            }
        }

        //ip Add/Sub for $t
        impl<F: Float> std::ops::Add for $t<F> {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                let mut data = self.data;
                for (d, o) in data.iter_mut().zip(other.data.iter()) {
                    *d = *d + *o;
                }
                Self { data }
            }
        }
        impl<F: Float> std::ops::Sub for $t<F> {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                let mut data = self.data;
                for (d, o) in data.iter_mut().zip(other.data.iter()) {
                    *d = *d - *o;
                }
                Self { data }
            }
        }

        //ip Mul<F> for $t
        impl<F: Float> std::ops::Mul<F> for $t<F> {
            type Output = Self;
            fn mul(self, s: F) -> Self {
                let mut data = self.data;
                for d in data.iter_mut() {
                    *d = *d * s;
                }
                Self { data }
            }
        }

        //ip Display for $t
        impl<F: Float> std::fmt::Display for $t<F> {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                matrix::fmt(f, &self.data, $cols)
            }
        }

        //ip AbsDiffEq for $t
        impl<F: Float + approx::AbsDiffEq> approx::AbsDiffEq for $t<F>
        where
            F::Epsilon: Copy,
        {
            type Epsilon = F::Epsilon;
            fn default_epsilon() -> F::Epsilon {
                F::default_epsilon()
            }
            fn abs_diff_eq(&self, other: &Self, epsilon: F::Epsilon) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        //ip RelativeEq for $t
        impl<F: Float + approx::RelativeEq> approx::RelativeEq for $t<F>
        where
            F::Epsilon: Copy,
        {
            fn default_max_relative() -> F::Epsilon {
                F::default_max_relative()
            }
            fn relative_eq(&self, other: &Self, epsilon: F::Epsilon, max_relative: F::Epsilon) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

//a Matrix3x3
//tp Matrix3x3
/// A dense row-major 3-by-3 matrix
///
/// Under the crate-wide row-vector convention a product `a * b` is the
/// matrix that applies `a` first and `b` second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x3<F: Float> {
    data: [F; 9],
}

mat_type! { Matrix3x3, 9, 3 }

//ip Matrix3x3
impl<F: Float> Matrix3x3<F> {
    //fp identity
    /// Create the identity matrix
    pub fn identity() -> Self {
        Self::from_array(matrix::identity3())
    }

    //fp from_rows
    /// Create a matrix from three row vectors
    pub fn from_rows(r0: [F; 3], r1: [F; 3], r2: [F; 3]) -> Self {
        Self::from_array([
            r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], r2[0], r2[1], r2[2],
        ])
    }

    //fp transformation2d
    /// Build the 3-by-3 affine matrix for a 2D transformation that
    /// scales, then rotates by an angle (policy unit), then translates
    ///
    /// The linear block occupies the upper-left 2-by-2 and the
    /// translation lives in the final row, so a point transforms as
    /// `(x, y, 1) * M`.
    pub fn transformation2d(translation: &Vec2<F>, rotation: F, scale: &Vec2<F>) -> Self {
        let (s, c) = policy::angle_to_rad(rotation).sin_cos();
        Self::from_rows(
            [scale.x * c, scale.x * s, F::zero()],
            [-scale.y * s, scale.y * c, F::zero()],
            [translation.x, translation.y, F::one()],
        )
    }

    //mp row / column
    /// Return a row as a [Vec3]
    pub fn row(&self, row: usize) -> Vec3<F> {
        Vec3::new(self.at(row, 0), self.at(row, 1), self.at(row, 2))
    }
    /// Return a column as a [Vec3]
    pub fn column(&self, col: usize) -> Vec3<F> {
        Vec3::new(self.at(0, col), self.at(1, col), self.at(2, col))
    }

    //mp transpose
    /// The transposed matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_array(matrix::transpose3(&self.data))
    }

    //mp determinant
    /// The determinant
    pub fn determinant(&self) -> F {
        matrix::determinant3(&self.data)
    }

    //mp inverse
    /// The inverse matrix; a singular input yields the null matrix
    /// (inverting a singular matrix is outside the callers' contract)
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_array(matrix::inverse3(&self.data))
    }
}

//ip Mul for Matrix3x3
impl<F: Float> std::ops::Mul for Matrix3x3<F> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_array(matrix::multiply3(&self.data, &other.data))
    }
}

//ip Mul<Matrix4x3> for Matrix3x3
impl<F: Float> std::ops::Mul<Matrix4x3<F>> for Matrix3x3<F> {
    type Output = Matrix4x3<F>;
    fn mul(self, other: Matrix4x3<F>) -> Matrix4x3<F> {
        Matrix4x3::from_array(matrix::multiply3_12(&self.data, &other.data))
    }
}

//a Matrix4x3
//tp Matrix4x3
/// A dense row-major 4-by-3 matrix: an affine transformation whose
/// implicit fourth column is (0,0,0,1)
///
/// The upper three rows are the linear block; the translation lives in
/// the final row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x3<F: Float> {
    data: [F; 12],
}

mat_type! { Matrix4x3, 12, 3 }

//ip Matrix4x3
impl<F: Float> Matrix4x3<F> {
    //fp identity
    /// Create the affine identity matrix
    pub fn identity() -> Self {
        Self::from_array(matrix::identity12())
    }

    //fp from_blocks
    /// Assemble from a 3-by-3 linear block and a translation row
    pub fn from_blocks(linear: &Matrix3x3<F>, translation: &Vec3<F>) -> Self {
        Self::from_array(matrix::from_blocks12(
            linear.as_array(),
            &translation.to_array(),
        ))
    }

    //mp linear / translation
    /// The 3-by-3 linear block
    pub fn linear(&self) -> Matrix3x3<F> {
        Matrix3x3::from_array(matrix::linear_of12(&self.data))
    }
    /// The translation row
    pub fn translation(&self) -> Vec3<F> {
        Vec3::new(self.data[9], self.data[10], self.data[11])
    }

    //mp row / column
    /// Return one of the four rows as a [Vec3]
    pub fn row(&self, row: usize) -> Vec3<F> {
        Vec3::new(self.at(row, 0), self.at(row, 1), self.at(row, 2))
    }
    /// Return a column including its translation entry as a [Vec4]
    pub fn column(&self, col: usize) -> crate::vector_types::Vec4<F> {
        crate::vector_types::Vec4::new(
            self.at(0, col),
            self.at(1, col),
            self.at(2, col),
            self.at(3, col),
        )
    }

    //mp determinant
    /// The determinant, which is that of the linear block
    pub fn determinant(&self) -> F {
        matrix::determinant12(&self.data)
    }

    //mp inverse
    /// The affine inverse; a singular linear block yields the null
    /// matrix
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_array(matrix::inverse12(&self.data))
    }
}

//ip Mul for Matrix4x3
impl<F: Float> std::ops::Mul for Matrix4x3<F> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_array(matrix::multiply12(&self.data, &other.data))
    }
}

//ip Mul<Matrix3x3> for Matrix4x3
impl<F: Float> std::ops::Mul<Matrix3x3<F>> for Matrix4x3<F> {
    type Output = Self;
    fn mul(self, other: Matrix3x3<F>) -> Self {
        Self::from_array(matrix::multiply12_3(&self.data, other.as_array()))
    }
}

//a Matrix4x4
//tp Matrix4x4
/// A dense row-major 4-by-4 matrix
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4<F: Float> {
    data: [F; 16],
}

mat_type! { Matrix4x4, 16, 4 }

//ip Matrix4x4
impl<F: Float> Matrix4x4<F> {
    //fp identity
    /// Create the identity matrix
    pub fn identity() -> Self {
        Self::from_array(matrix::identity4())
    }

    //fp from_blocks
    /// Assemble from a 3-by-3 linear block and a translation row; the
    /// fourth column is (0,0,0,1)
    pub fn from_blocks(linear: &Matrix3x3<F>, translation: &Vec3<F>) -> Self {
        Self::from_array(matrix::from_blocks16(
            linear.as_array(),
            &translation.to_array(),
        ))
    }

    //mp linear / translation
    /// The upper-left 3-by-3 block
    pub fn linear(&self) -> Matrix3x3<F> {
        Matrix3x3::from_array(matrix::linear_of16(&self.data))
    }
    /// The translation row (first three entries of the final row)
    pub fn translation(&self) -> Vec3<F> {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    //mp row / column
    /// Return a row as a [Vec4](crate::vector_types::Vec4)
    pub fn row(&self, row: usize) -> crate::vector_types::Vec4<F> {
        crate::vector_types::Vec4::new(
            self.at(row, 0),
            self.at(row, 1),
            self.at(row, 2),
            self.at(row, 3),
        )
    }
    /// Return a column as a [Vec4](crate::vector_types::Vec4)
    pub fn column(&self, col: usize) -> crate::vector_types::Vec4<F> {
        crate::vector_types::Vec4::new(
            self.at(0, col),
            self.at(1, col),
            self.at(2, col),
            self.at(3, col),
        )
    }

    //mp transpose
    /// The transposed matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_array(matrix::transpose4(&self.data))
    }

    //mp determinant
    /// The determinant
    pub fn determinant(&self) -> F {
        matrix::determinant4(&self.data)
    }

    //mp inverse
    /// The inverse matrix; a singular input yields the null matrix
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_array(matrix::inverse4(&self.data))
    }
}

//ip Mul for Matrix4x4
impl<F: Float> std::ops::Mul for Matrix4x4<F> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_array(matrix::multiply4(&self.data, &other.data))
    }
}

//a AffineStorage
//tt AffineStorage
/// The storage choice behind [crate::TranslationMatrix] and
/// [crate::TransformationMatrix]: either the affine [Matrix4x3] (no
/// projective column) or the full [Matrix4x4]
///
/// Both store the linear block in the upper three rows and the
/// translation in the final row, so the specialized matrices only need
/// this block-level view of their backing.
pub trait AffineStorage<F: Float>:
    Copy
    + Clone
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + std::ops::Mul<Output = Self>
{
    /// The identity transformation
    fn identity() -> Self;
    /// Assemble from a linear block and a translation row
    fn from_blocks(linear: &Matrix3x3<F>, translation: &Vec3<F>) -> Self;
    /// The 3-by-3 linear block
    fn linear(&self) -> Matrix3x3<F>;
    /// The translation row
    fn translation(&self) -> Vec3<F>;
    /// The determinant of the transformation
    fn determinant(&self) -> F;
    /// The inverse transformation
    fn inverse(&self) -> Self;
    /// `p * M` for a 3-component position
    fn transform_coords(&self, p: [F; 3]) -> [F; 3];
}

//ip AffineStorage for Matrix4x3
impl<F: Float> AffineStorage<F> for Matrix4x3<F> {
    fn identity() -> Self {
        Matrix4x3::identity()
    }
    fn from_blocks(linear: &Matrix3x3<F>, translation: &Vec3<F>) -> Self {
        Matrix4x3::from_blocks(linear, translation)
    }
    fn linear(&self) -> Matrix3x3<F> {
        Matrix4x3::linear(self)
    }
    fn translation(&self) -> Vec3<F> {
        Matrix4x3::translation(self)
    }
    fn determinant(&self) -> F {
        Matrix4x3::determinant(self)
    }
    fn inverse(&self) -> Self {
        Matrix4x3::inverse(self)
    }
    fn transform_coords(&self, p: [F; 3]) -> [F; 3] {
        matrix::transform_point12(&p, &self.data)
    }
}

//ip AffineStorage for Matrix4x4
impl<F: Float> AffineStorage<F> for Matrix4x4<F> {
    fn identity() -> Self {
        Matrix4x4::identity()
    }
    fn from_blocks(linear: &Matrix3x3<F>, translation: &Vec3<F>) -> Self {
        Matrix4x4::from_blocks(linear, translation)
    }
    fn linear(&self) -> Matrix3x3<F> {
        Matrix4x4::linear(self)
    }
    fn translation(&self) -> Vec3<F> {
        Matrix4x4::translation(self)
    }
    fn determinant(&self) -> F {
        Matrix4x4::determinant(self)
    }
    fn inverse(&self) -> Self {
        Matrix4x4::inverse(self)
    }
    fn transform_coords(&self, p: [F; 3]) -> [F; 3] {
        matrix::transform_point16(&p, &self.data)
    }
}
