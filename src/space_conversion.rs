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

@file    space_conversion.rs
@brief   World / view / projection space conversion matrix
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix4x4;
use crate::policy;
use crate::quaternion::Quaternion;
use crate::transformation::TransformationMatrix4x4;
use crate::vector_types::Vec3;
use crate::Float;

//a SpaceConversionMatrix
//tp SpaceConversionMatrix
/// A 4-by-4 matrix carrying a change between the world, view and
/// projection spaces of a rendering pipeline
///
/// Products compose the conversions in row-vector order, so
/// `world * view * projection` is the full object-to-clip conversion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceConversionMatrix<F: Float> {
    m: Matrix4x4<F>,
}

//ip SpaceConversionMatrix
impl<F: Float> SpaceConversionMatrix<F> {
    //fp identity
    /// The identity conversion
    pub fn identity() -> Self {
        Self {
            m: Matrix4x4::identity(),
        }
    }

    //fp of_matrix
    /// Adopt a 4-by-4 matrix as a space conversion
    pub fn of_matrix(m: Matrix4x4<F>) -> Self {
        Self { m }
    }

    //fp world_space
    /// The object-to-world conversion of an object that is scaled,
    /// then rotated, then translated
    pub fn world_space(translation: &Vec3<F>, rotation: &Quaternion<F>, scale: &Vec3<F>) -> Self {
        Self {
            m: TransformationMatrix4x4::from_trs(translation, rotation, scale).to_storage(),
        }
    }

    //fp view_space
    /// The world-to-view conversion of a camera at `eye` looking at
    /// `target` with the given up direction
    pub fn view_space(eye: &Vec3<F>, target: &Vec3<F>, up: &Vec3<F>) -> Self {
        let z_axis = (*target - *eye).normalize();
        let x_axis = up.cross(&z_axis).normalize();
        let y_axis = z_axis.cross(&x_axis);
        let mut m = Matrix4x4::identity();
        m.set(0, 0, x_axis.x);
        m.set(0, 1, y_axis.x);
        m.set(0, 2, z_axis.x);
        m.set(1, 0, x_axis.y);
        m.set(1, 1, y_axis.y);
        m.set(1, 2, z_axis.y);
        m.set(2, 0, x_axis.z);
        m.set(2, 1, y_axis.z);
        m.set(2, 2, z_axis.z);
        m.set(3, 0, -x_axis.dot(eye));
        m.set(3, 1, -y_axis.dot(eye));
        m.set(3, 2, -z_axis.dot(eye));
        Self { m }
    }

    //fp projection_space
    /// The view-to-projection conversion of a perspective frustum
    ///
    /// `vertical_fov` is in the policy angle unit; near and far are
    /// the clip distances and must be distinct, aspect is width over
    /// height.
    pub fn projection_space(near: F, far: F, aspect: F, vertical_fov: F) -> Self {
        let fov = policy::angle_to_rad(vertical_fov);
        let h = F::one() / (fov * F::half()).tan();
        let w = h / aspect;
        let depth = far / (far - near);
        let mut m = Matrix4x4::null();
        m.set(0, 0, w);
        m.set(1, 1, h);
        m.set(2, 2, depth);
        m.set(2, 3, F::one());
        m.set(3, 2, -near * depth);
        Self { m }
    }

    //mp matrix / to_matrix
    /// Borrow the generic matrix view
    pub fn matrix(&self) -> &Matrix4x4<F> {
        &self.m
    }
    /// Return the generic matrix
    pub fn to_matrix(self) -> Matrix4x4<F> {
        self.m
    }

    //cp invert
    /// The opposite conversion; a singular matrix yields null
    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            m: self.m.inverse(),
        }
    }

    //zz All done
}

//ip Default for SpaceConversionMatrix
impl<F: Float> std::default::Default for SpaceConversionMatrix<F> {
    fn default() -> Self {
        Self::identity()
    }
}

//ip Mul for SpaceConversionMatrix
impl<F: Float> std::ops::Mul for SpaceConversionMatrix<F> {
    type Output = Self;
    /// `a * b` converts through `a` first, then `b`
    fn mul(self, other: Self) -> Self {
        Self {
            m: self.m * other.m,
        }
    }
}

//ip Display for SpaceConversionMatrix
impl<F: Float> std::fmt::Display for SpaceConversionMatrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.m, f)
    }
}
