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

@file    scaling.rs
@brief   Diagonal 3-by-3 scaling matrix
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix3x3;
use crate::vector_types::Vec3;
use crate::{Float, Point3};

//a ScalingMatrix3x3
//tp ScalingMatrix3x3
/// A diagonal 3-by-3 matrix: a componentwise scaling
///
/// Off-diagonal entries are zero by construction; arithmetic on the
/// generic [Matrix3x3] view is not re-verified.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalingMatrix3x3<F: Float> {
    m: Matrix3x3<F>,
}

//ip ScalingMatrix3x3
impl<F: Float> ScalingMatrix3x3<F> {
    //fp identity
    /// The identity scaling
    pub fn identity() -> Self {
        Self {
            m: Matrix3x3::identity(),
        }
    }

    //fp from_factors
    /// The scaling by three per-axis factors
    pub fn from_factors(sx: F, sy: F, sz: F) -> Self {
        let mut m = Matrix3x3::null();
        m.set(0, 0, sx);
        m.set(1, 1, sy);
        m.set(2, 2, sz);
        Self { m }
    }

    //fp from_vec3
    /// The scaling whose per-axis factors are a vector's components
    pub fn from_vec3(scale: &Vec3<F>) -> Self {
        Self::from_factors(scale.x, scale.y, scale.z)
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

    //mp scale_factors
    /// The diagonal as a vector
    pub fn scale_factors(&self) -> Vec3<F> {
        Vec3::new(self.m.at(0, 0), self.m.at(1, 1), self.m.at(2, 2))
    }

    //cp invert
    /// The inverse scaling: the reciprocal diagonal
    ///
    /// A zero factor on any axis is outside the contract; the
    /// corresponding entry comes out zero.
    #[must_use]
    pub fn invert(self) -> Self {
        let f = self.scale_factors();
        let inv = |v: F| {
            if v.abs() > F::epsilon() {
                F::one() / v
            } else {
                F::zero()
            }
        };
        Self::from_factors(inv(f.x), inv(f.y), inv(f.z))
    }

    //mp transform
    /// Scale a point about the origin; a [crate::Vec4]'s w is
    /// untouched
    pub fn transform<P: Point3<F>>(&self, p: &P) -> P {
        p.scaled(&self.scale_factors().to_array())
    }

    //zz All done
}

//ip Default for ScalingMatrix3x3
impl<F: Float> std::default::Default for ScalingMatrix3x3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

//ip Mul for ScalingMatrix3x3
impl<F: Float> std::ops::Mul for ScalingMatrix3x3<F> {
    type Output = Self;
    /// Scaling composed with scaling multiplies the diagonals
    fn mul(self, other: Self) -> Self {
        let a = self.scale_factors();
        let b = other.scale_factors();
        Self::from_factors(a.x * b.x, a.y * b.y, a.z * b.z)
    }
}

//ip Display for ScalingMatrix3x3
impl<F: Float> std::fmt::Display for ScalingMatrix3x3<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.m, f)
    }
}
