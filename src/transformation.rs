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

@file    transformation.rs
@brief   Composed scale-rotate-translate matrix
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::{AffineStorage, Matrix4x3, Matrix4x4};
use crate::quaternion::Quaternion;
use crate::quaternion_op as quat;
use crate::rotation::RotationMatrix3x3;
use crate::scaling::ScalingMatrix3x3;
use crate::translation::TranslationMatrix;
use crate::vector_types::Vec3;
use crate::vector_op as vector;
use crate::{Float, Point3};

//a TransformationMatrix
//tp TransformationMatrix
/// A matrix composed as scale, then rotation, then translation
///
/// Under the row-vector convention the product reads
/// `S * R * T`: the top-left 3-by-3 block is rotation times scale and
/// the translation lives in the final row. The backing storage `S`
/// picks the affine [Matrix4x3] or the full [Matrix4x4].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformationMatrix<F: Float, S: AffineStorage<F>> {
    m: S,
    #[serde(skip)]
    _f: std::marker::PhantomData<F>,
}

/// A transformation backed by the affine 4-by-3 matrix
pub type TransformationMatrix4x3<F> = TransformationMatrix<F, Matrix4x3<F>>;
/// A transformation backed by the full 4-by-4 matrix
pub type TransformationMatrix4x4<F> = TransformationMatrix<F, Matrix4x4<F>>;

//ip TransformationMatrix
impl<F: Float, S: AffineStorage<F>> TransformationMatrix<F, S> {
    //fp of_storage
    /// Adopt a backing matrix that is already a scale-rotate-translate
    /// composition; the invariant is not verified
    pub fn of_storage(m: S) -> Self {
        Self {
            m,
            _f: std::marker::PhantomData,
        }
    }

    //fp identity
    /// The identity transformation
    pub fn identity() -> Self {
        Self::of_storage(S::identity())
    }

    //fp from_trs
    /// Build the transformation that scales, then rotates by a unit
    /// quaternion, then translates
    pub fn from_trs(translation: &Vec3<F>, rotation: &Quaternion<F>, scale: &Vec3<F>) -> Self {
        let rot = RotationMatrix3x3::from_quaternion(rotation).to_matrix();
        let linear = ScalingMatrix3x3::from_vec3(scale).to_matrix() * rot;
        Self::of_storage(S::from_blocks(&linear, translation))
    }

    //fp from_parts
    /// Build the transformation from the three specialized matrices
    pub fn from_parts(
        translation: &TranslationMatrix<F, S>,
        rotation: &RotationMatrix3x3<F>,
        scale: &ScalingMatrix3x3<F>,
    ) -> Self {
        let linear = scale.to_matrix() * rotation.to_matrix();
        Self::of_storage(S::from_blocks(&linear, &translation.translation()))
    }

    //mp storage / to_storage
    /// Borrow the backing matrix
    pub fn storage(&self) -> &S {
        &self.m
    }
    /// Return the backing matrix
    pub fn to_storage(self) -> S {
        self.m
    }

    //mp translation
    /// The translation part: the final row
    pub fn translation(&self) -> Vec3<F> {
        self.m.translation()
    }

    //mp scale
    /// The scale part: the lengths of the linear block's rows
    ///
    /// Scale factors come back positive; a transformation built with
    /// negative scale cannot be told apart from a rotation, so the
    /// decomposition of such a matrix does not round-trip.
    pub fn scale(&self) -> Vec3<F> {
        let m = self.m.linear();
        let l = |row: usize| vector::length(&[m.at(row, 0), m.at(row, 1), m.at(row, 2)]);
        Vec3::new(l(0), l(1), l(2))
    }

    //mp rotation
    /// The rotation part as a unit quaternion, after the scale has
    /// been divided out of the linear block
    pub fn rotation(&self) -> Quaternion<F> {
        Quaternion::from_transformation(self)
    }

    //mp decompose
    /// Split back into (translation, rotation, scale)
    pub fn decompose(&self) -> (Vec3<F>, Quaternion<F>, Vec3<F>) {
        (self.translation(), self.rotation(), self.scale())
    }

    //mp determinant
    /// The determinant of the transformation
    pub fn determinant(&self) -> F {
        self.m.determinant()
    }

    //cp invert
    /// The inverse transformation
    ///
    /// Undefined when the transformation is singular (a zero scale on
    /// any axis): the result is the null matrix.
    #[must_use]
    pub fn invert(self) -> Self {
        Self::of_storage(self.m.inverse())
    }

    //mp transform
    /// Apply the transformation to a point
    ///
    /// A [crate::Vec4] point keeps its w with a 4-by-3 backing; with a
    /// 4-by-4 backing the w column of the storage participates via
    /// [crate::Vec4::transform_4x4] on the caller's side. Through this
    /// [Point3] surface the point is taken as a position.
    pub fn transform<P: Point3<F>>(&self, p: &P) -> P {
        p.with_coords(self.m.transform_coords(p.coords()))
    }

    //mp rotation_matrix
    /// The rotation part as a [RotationMatrix3x3]
    pub fn rotation_matrix(&self) -> RotationMatrix3x3<F> {
        RotationMatrix3x3::from_quaternion(&self.rotation())
    }

    //zz All done
}

//ip TransformationMatrix4x3
impl<F: Float> TransformationMatrix4x3<F> {
    //mp to_4x4
    /// Widen the affine backing into the full 4-by-4 form
    pub fn to_4x4(&self) -> TransformationMatrix4x4<F> {
        TransformationMatrix::of_storage(Matrix4x4::from_blocks(
            &self.m.linear(),
            &self.m.translation(),
        ))
    }
}

//ip TransformationMatrix4x4
impl<F: Float> TransformationMatrix4x4<F> {
    //mp to_4x3
    /// Narrow the backing to the affine 4-by-3 form, dropping the
    /// projective column
    pub fn to_4x3(&self) -> TransformationMatrix4x3<F> {
        TransformationMatrix::of_storage(Matrix4x3::from_blocks(
            &self.m.linear(),
            &self.m.translation(),
        ))
    }
}

//ip Default for TransformationMatrix
impl<F: Float, S: AffineStorage<F>> std::default::Default for TransformationMatrix<F, S> {
    fn default() -> Self {
        Self::identity()
    }
}

//ip Mul for TransformationMatrix
impl<F: Float, S: AffineStorage<F>> std::ops::Mul for TransformationMatrix<F, S> {
    type Output = Self;
    /// `a * b` applies `a` first, then `b`
    fn mul(self, other: Self) -> Self {
        Self::of_storage(self.m * other.m)
    }
}

//ip Display for TransformationMatrix
impl<F: Float, S: AffineStorage<F>> std::fmt::Display for TransformationMatrix<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.m, f)
    }
}

//a Free helpers
//fp rotation_of_linear
/// Extract the unit quaternion of a linear block whose rows may carry
/// scale; shared by the quaternion and transformation constructors
pub(crate) fn rotation_of_linear<F: Float>(m: &[F; 9]) -> [F; 4] {
    let mut n = *m;
    for row in 0..3 {
        let l = vector::length(&[n[row * 3], n[row * 3 + 1], n[row * 3 + 2]]);
        if l > F::epsilon() {
            for col in 0..3 {
                n[row * 3 + col] = n[row * 3 + col] / l;
            }
        }
    }
    quat::of_rotation3(&n)
}
