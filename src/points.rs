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

@file    points.rs
@brief   Bulk in-place transformation of point arrays
 */

//a Documentation
/*!
Stateless bulk application of every transform kind to slices of
points, in place.

The 3D entry points are generic over [Point3], so they serve both
[Vec3](crate::Vec3) and [Vec4](crate::Vec4) slices; a [Vec4] keeps its
w through every affine operation here. The 2D entry points operate on
[Vec2](crate::Vec2) slices, taking a 3-by-3 matrix as the 2D affine
transformation and a 2D pivot.

Every `*_with_pivot` variant computes `p' = T(p - pivot) + pivot`; the
pivot's w (for [Vec4] pivots) never affects the result, and the zero
pivot makes them equal to the plain forms.
!*/

//a Imports
use crate::matrix::{AffineStorage, Matrix3x3};
use crate::quaternion::Quaternion;
use crate::quaternion_op as quat;
use crate::rotation::RotationMatrix3x3;
use crate::scaling::ScalingMatrix3x3;
use crate::space_conversion::SpaceConversionMatrix;
use crate::transformation::TransformationMatrix;
use crate::translation::TranslationMatrix;
use crate::vector_types::{Vec2, Vec3, Vec4};
use crate::{Float, Point3};

//a 3D translation
//fp translate
/// Move every point by a delta
pub fn translate<F: Float, P: Point3<F>>(translation: &Vec3<F>, points: &mut [P]) {
    let t = translation.to_array();
    for p in points.iter_mut() {
        *p = p.translated(&t);
    }
}

//fp translate_factors
/// Move every point by three per-axis deltas
pub fn translate_factors<F: Float, P: Point3<F>>(tx: F, ty: F, tz: F, points: &mut [P]) {
    translate(&Vec3::new(tx, ty, tz), points);
}

//fp translate_m
/// Move every point by a translation matrix
pub fn translate_m<F: Float, S: AffineStorage<F>, P: Point3<F>>(
    translation: &TranslationMatrix<F, S>,
    points: &mut [P],
) {
    translate(&translation.translation(), points);
}

//a 3D rotation
//fp rotate
/// Rotate every point about the origin by a quaternion
pub fn rotate<F: Float, P: Point3<F>>(rotation: &Quaternion<F>, points: &mut [P]) {
    // One matrix conversion covers the whole slice
    let m = quat::to_rotation3(&rotation.to_array());
    for p in points.iter_mut() {
        *p = p.with_coords(crate::matrix_op::transform_dir3(&p.coords(), &m));
    }
}

//fp rotate_m
/// Rotate every point about the origin by a rotation matrix
pub fn rotate_m<F: Float, P: Point3<F>>(rotation: &RotationMatrix3x3<F>, points: &mut [P]) {
    for p in points.iter_mut() {
        *p = rotation.transform(p);
    }
}

//a 3D scaling
//fp scale
/// Scale every point about the origin, componentwise
pub fn scale<F: Float, P: Point3<F>>(factors: &Vec3<F>, points: &mut [P]) {
    let f = factors.to_array();
    for p in points.iter_mut() {
        *p = p.scaled(&f);
    }
}

//fp scale_factors
/// Scale every point about the origin by three per-axis factors
pub fn scale_factors<F: Float, P: Point3<F>>(sx: F, sy: F, sz: F, points: &mut [P]) {
    scale(&Vec3::new(sx, sy, sz), points);
}

//fp scale_m
/// Scale every point about the origin by a scaling matrix
pub fn scale_m<F: Float, P: Point3<F>>(scaling: &ScalingMatrix3x3<F>, points: &mut [P]) {
    scale(&scaling.scale_factors(), points);
}

//a 3D transformation
//fp transform
/// Apply a full transformation to every point
pub fn transform<F: Float, S: AffineStorage<F>, P: Point3<F>>(
    transformation: &TransformationMatrix<F, S>,
    points: &mut [P],
) {
    for p in points.iter_mut() {
        *p = transformation.transform(p);
    }
}

//fp transform_space3
/// Apply a space conversion to every 3D point, with the homogeneous
/// divide applied per point
pub fn transform_space3<F: Float>(conversion: &SpaceConversionMatrix<F>, points: &mut [Vec3<F>]) {
    for p in points.iter_mut() {
        *p = p.transform_4x4(conversion.matrix());
    }
}

//fp transform_space4
/// Apply a space conversion to every 4D point; w follows the
/// projective convention
pub fn transform_space4<F: Float>(conversion: &SpaceConversionMatrix<F>, points: &mut [Vec4<F>]) {
    for p in points.iter_mut() {
        *p = p.transform_4x4(conversion.matrix());
    }
}

//a 3D pivoted variants
//fp rotate_with_pivot
/// Rotate every point by a quaternion about a pivot point
pub fn rotate_with_pivot<F: Float, P: Point3<F>>(
    rotation: &Quaternion<F>,
    pivot: &P,
    points: &mut [P],
) {
    let m = quat::to_rotation3(&rotation.to_array());
    with_pivot(pivot, points, |c| crate::matrix_op::transform_dir3(&c, &m));
}

//fp rotate_m_with_pivot
/// Rotate every point by a rotation matrix about a pivot point
pub fn rotate_m_with_pivot<F: Float, P: Point3<F>>(
    rotation: &RotationMatrix3x3<F>,
    pivot: &P,
    points: &mut [P],
) {
    with_pivot(pivot, points, |c| {
        crate::matrix_op::transform_dir3(&c, rotation.matrix().as_array())
    });
}

//fp scale_with_pivot
/// Scale every point about a pivot point
pub fn scale_with_pivot<F: Float, P: Point3<F>>(factors: &Vec3<F>, pivot: &P, points: &mut [P]) {
    let f = factors.to_array();
    with_pivot(pivot, points, |c| [c[0] * f[0], c[1] * f[1], c[2] * f[2]]);
}

//fp scale_factors_with_pivot
/// Scale every point about a pivot point by three per-axis factors
pub fn scale_factors_with_pivot<F: Float, P: Point3<F>>(
    sx: F,
    sy: F,
    sz: F,
    pivot: &P,
    points: &mut [P],
) {
    scale_with_pivot(&Vec3::new(sx, sy, sz), pivot, points);
}

//fp scale_m_with_pivot
/// Scale every point about a pivot point by a scaling matrix
pub fn scale_m_with_pivot<F: Float, P: Point3<F>>(
    scaling: &ScalingMatrix3x3<F>,
    pivot: &P,
    points: &mut [P],
) {
    scale_with_pivot(&scaling.scale_factors(), pivot, points);
}

//fp transform_with_pivot
/// Apply a full transformation to every point about a pivot point
pub fn transform_with_pivot<F: Float, S: AffineStorage<F>, P: Point3<F>>(
    transformation: &TransformationMatrix<F, S>,
    pivot: &P,
    points: &mut [P],
) {
    with_pivot(pivot, points, |c| {
        transformation.storage().transform_coords(c)
    });
}

//fi with_pivot
/// Shared pivot loop: `p' = T(p - pivot) + pivot` over the slice
fn with_pivot<F: Float, P: Point3<F>>(
    pivot: &P,
    points: &mut [P],
    apply: impl Fn([F; 3]) -> [F; 3],
) {
    let pv = pivot.coords();
    for p in points.iter_mut() {
        let c = p.coords();
        let local = apply([c[0] - pv[0], c[1] - pv[1], c[2] - pv[2]]);
        *p = p.with_coords([local[0] + pv[0], local[1] + pv[1], local[2] + pv[2]]);
    }
}

//a 2D operations
//fp translate2d
/// Move every 2D point by a delta
pub fn translate2d<F: Float>(translation: &Vec2<F>, points: &mut [Vec2<F>]) {
    for p in points.iter_mut() {
        *p = *p + *translation;
    }
}

//fp translate2d_factors
/// Move every 2D point by two per-axis deltas
pub fn translate2d_factors<F: Float>(tx: F, ty: F, points: &mut [Vec2<F>]) {
    translate2d(&Vec2::new(tx, ty), points);
}

//fp rotate2d
/// Rotate every 2D point about the origin by an angle (policy unit)
pub fn rotate2d<F: Float>(angle: F, points: &mut [Vec2<F>]) {
    for p in points.iter_mut() {
        *p = p.rotated(angle);
    }
}

//fp scale2d
/// Scale every 2D point about the origin, componentwise
pub fn scale2d<F: Float>(factors: &Vec2<F>, points: &mut [Vec2<F>]) {
    for p in points.iter_mut() {
        *p = *p * *factors;
    }
}

//fp scale2d_factors
/// Scale every 2D point about the origin by two per-axis factors
pub fn scale2d_factors<F: Float>(sx: F, sy: F, points: &mut [Vec2<F>]) {
    scale2d(&Vec2::new(sx, sy), points);
}

//fp transform2d
/// Apply a 3-by-3 matrix as a 2D affine transformation to every point
pub fn transform2d<F: Float>(transformation: &Matrix3x3<F>, points: &mut [Vec2<F>]) {
    for p in points.iter_mut() {
        *p = p.transform(transformation);
    }
}

//a 2D pivoted variants
//fp rotate2d_with_pivot
/// Rotate every 2D point about a pivot point
pub fn rotate2d_with_pivot<F: Float>(angle: F, pivot: &Vec2<F>, points: &mut [Vec2<F>]) {
    for p in points.iter_mut() {
        *p = (*p - *pivot).rotated(angle) + *pivot;
    }
}

//fp scale2d_with_pivot
/// Scale every 2D point about a pivot point
pub fn scale2d_with_pivot<F: Float>(factors: &Vec2<F>, pivot: &Vec2<F>, points: &mut [Vec2<F>]) {
    for p in points.iter_mut() {
        *p = (*p - *pivot) * *factors + *pivot;
    }
}

//fp scale2d_factors_with_pivot
/// Scale every 2D point about a pivot point by two per-axis factors
pub fn scale2d_factors_with_pivot<F: Float>(sx: F, sy: F, pivot: &Vec2<F>, points: &mut [Vec2<F>]) {
    scale2d_with_pivot(&Vec2::new(sx, sy), pivot, points);
}

//fp transform2d_with_pivot
/// Apply a 2D affine transformation to every point about a pivot
pub fn transform2d_with_pivot<F: Float>(
    transformation: &Matrix3x3<F>,
    pivot: &Vec2<F>,
    points: &mut [Vec2<F>],
) {
    for p in points.iter_mut() {
        *p = (*p - *pivot).transform(transformation) + *pivot;
    }
}
