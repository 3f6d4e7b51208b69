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

@file    translation.rs
@brief   Translation matrix over a 4x3 or 4x4 backing
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::{AffineStorage, Matrix3x3, Matrix4x3, Matrix4x4};
use crate::vector_types::{Vec3, Vec4};
use crate::{Float, Point3};

//a TranslationMatrix
//tp TranslationMatrix
/// A matrix whose upper-left 3-by-3 block is the identity and whose
/// final row carries a translation
///
/// The backing storage `S` picks the affine [Matrix4x3] or the full
/// [Matrix4x4]; see [TranslationMatrix4x3] and [TranslationMatrix4x4].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationMatrix<F: Float, S: AffineStorage<F>> {
    m: S,
    #[serde(skip)]
    _f: std::marker::PhantomData<F>,
}

/// A translation backed by the affine 4-by-3 matrix
pub type TranslationMatrix4x3<F> = TranslationMatrix<F, Matrix4x3<F>>;
/// A translation backed by the full 4-by-4 matrix
pub type TranslationMatrix4x4<F> = TranslationMatrix<F, Matrix4x4<F>>;

//ip TranslationMatrix
impl<F: Float, S: AffineStorage<F>> TranslationMatrix<F, S> {
    //fi of_storage
    fn of_storage(m: S) -> Self {
        Self {
            m,
            _f: std::marker::PhantomData,
        }
    }

    //fp identity
    /// The zero translation
    pub fn identity() -> Self {
        Self::of_storage(S::identity())
    }

    //fp from_vec3
    /// The translation by a vector
    pub fn from_vec3(translation: &Vec3<F>) -> Self {
        Self::of_storage(S::from_blocks(&Matrix3x3::identity(), translation))
    }

    //fp from_vec4
    /// The translation by the xyz of a [Vec4]; w does not participate
    pub fn from_vec4(translation: &Vec4<F>) -> Self {
        Self::from_vec3(&translation.xyz())
    }

    //fp from_factors
    /// The translation by three per-axis deltas
    pub fn from_factors(tx: F, ty: F, tz: F) -> Self {
        Self::from_vec3(&Vec3::new(tx, ty, tz))
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
    /// The translation row
    pub fn translation(&self) -> Vec3<F> {
        self.m.translation()
    }

    //cp invert
    /// The opposite translation
    #[must_use]
    pub fn invert(self) -> Self {
        Self::from_vec3(&-self.translation())
    }

    //mp transform
    /// Move a point by the translation; a [crate::Vec4]'s w is
    /// untouched
    pub fn transform<P: Point3<F>>(&self, p: &P) -> P {
        p.translated(&self.translation().to_array())
    }

    //zz All done
}

//ip Default for TranslationMatrix
impl<F: Float, S: AffineStorage<F>> std::default::Default for TranslationMatrix<F, S> {
    fn default() -> Self {
        Self::identity()
    }
}

//ip Mul for TranslationMatrix
impl<F: Float, S: AffineStorage<F>> std::ops::Mul for TranslationMatrix<F, S> {
    type Output = Self;
    /// Translation composed with translation adds the deltas
    fn mul(self, other: Self) -> Self {
        Self::from_vec3(&(self.translation() + other.translation()))
    }
}

//ip Display for TranslationMatrix
impl<F: Float, S: AffineStorage<F>> std::fmt::Display for TranslationMatrix<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.m, f)
    }
}
