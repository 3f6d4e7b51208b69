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

@file    plane.rs
@brief   Plane in the general form ax + by + cz + d = 0
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::AffineStorage;
use crate::matrix_op as matrix;
use crate::policy;
use crate::quaternion::Quaternion;
use crate::relation::{Intersection, SpaceRelation};
use crate::rotation::RotationMatrix3x3;
use crate::scaling::ScalingMatrix3x3;
use crate::space_conversion::SpaceConversionMatrix;
use crate::transformation::TransformationMatrix;
use crate::translation::TranslationMatrix;
use crate::vector_types::Vec3;
use crate::vector_op as vector;
use crate::{Float, Point3};

//a Plane
//tp Plane
/// The plane of all points satisfying `a*x + b*y + c*z + d = 0`
///
/// The triple (a, b, c) is the plane's normal. When that normal has
/// unit length the plane is *normalized*, and |d| is then the distance
/// from the origin to the plane. The positive side of the plane is the
/// half-space the normal points into.
///
/// Two planes that describe the same point set through proportional
/// coefficients do not compare equal; normalize both to canonicalize
/// before comparing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plane<F: Float> {
    /// X coefficient of the plane equation, the normal's x
    pub a: F,
    /// Y coefficient of the plane equation, the normal's y
    pub b: F,
    /// Z coefficient of the plane equation, the normal's z
    pub c: F,
    /// Independent term of the plane equation
    pub d: F,
}

//ip Plane
impl<F: Float> Plane<F> {
    //fp new
    /// Create a plane from its four coefficients
    #[inline]
    pub const fn new(a: F, b: F, c: F, d: F) -> Self {
        Self { a, b, c, d }
    }

    //fp null
    /// The null plane, which is not a valid plane for most operations
    pub fn null() -> Self {
        Self::new(F::zero(), F::zero(), F::zero(), F::zero())
    }

    //fp plane_xy / plane_zx / plane_yz
    /// The z = 0 plane, with the normal along +Z
    pub fn plane_xy() -> Self {
        Self::new(F::zero(), F::zero(), F::one(), F::zero())
    }
    /// The y = 0 plane, with the normal along +Y
    pub fn plane_zx() -> Self {
        Self::new(F::zero(), F::one(), F::zero(), F::zero())
    }
    /// The x = 0 plane, with the normal along +X
    pub fn plane_yz() -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::zero())
    }

    //fp from_points
    /// The normalized plane through three points
    ///
    /// The normal direction is (p2-p1) x (p3-p2). Collinear or
    /// coincident points are outside the contract: the result is the
    /// null plane.
    pub fn from_points<P: Point3<F>>(p1: &P, p2: &P, p3: &P) -> Self {
        let c1 = p1.coords();
        let c2 = p2.coords();
        let c3 = p3.coords();
        let e1 = vector::sub(c2, &c1, F::one());
        let e2 = vector::sub(c3, &c2, F::one());
        let n = vector::normalize(vector::cross_product3(&e1, &e2));
        Self::new(n[0], n[1], n[2], -vector::dot(&n, &c1))
    }

    //fp from_normal_point
    /// The plane with the given normal passing through a point
    pub fn from_normal_point<P: Point3<F>>(normal: &Vec3<F>, point: &P) -> Self {
        let n = normal.to_array();
        Self::new(n[0], n[1], n[2], -vector::dot(&n, &point.coords()))
    }

    //mp normal
    /// The direction vector (a, b, c); unit length iff the plane is
    /// normalized
    pub fn normal(&self) -> Vec3<F> {
        Vec3::new(self.a, self.b, self.c)
    }

    //mp length / length_sq
    /// The length of the normal
    pub fn length(&self) -> F {
        vector::length(&[self.a, self.b, self.c])
    }
    /// The squared length of the normal
    pub fn length_sq(&self) -> F {
        vector::length_sq(&[self.a, self.b, self.c])
    }

    //cp normalize
    /// All four coefficients divided by the normal's length
    ///
    /// Normalizing a null plane is outside the contract and yields the
    /// null plane.
    #[must_use]
    pub fn normalize(self) -> Self {
        let l = self.length();
        if l < F::epsilon() {
            Self::null()
        } else {
            Self::new(self.a / l, self.b / l, self.c / l, self.d / l)
        }
    }

    //mp dot
    /// The dot product of the plane's normal with a vector; for a
    /// [crate::Vec4] the w component does not participate
    pub fn dot<P: Point3<F>>(&self, v: &P) -> F {
        vector::dot(&[self.a, self.b, self.c], &v.coords())
    }

    //mp dot_plane
    /// The dot product of the two planes' normals
    pub fn dot_plane(&self, other: &Self) -> F {
        vector::dot(&[self.a, self.b, self.c], &[other.a, other.b, other.c])
    }

    //mp angle_between
    /// The angle (policy unit) between the plane's normal and a
    /// vector; both must be non-null
    pub fn angle_between<P: Point3<F>>(&self, v: &P) -> F {
        policy::rad_to_angle(vector::angle_between(
            &[self.a, self.b, self.c],
            &v.coords(),
        ))
    }

    //mp angle_between_plane
    /// The angle (policy unit) between two planes' normals
    pub fn angle_between_plane(&self, other: &Self) -> F {
        policy::rad_to_angle(vector::angle_between(
            &[self.a, self.b, self.c],
            &[other.a, other.b, other.c],
        ))
    }

    //fi residual
    /// a*x + b*y + c*z + d for a point: the signed distance when the
    /// plane is normalized
    fn residual<P: Point3<F>>(&self, p: &P) -> F {
        self.dot(p) + self.d
    }

    //mp point_projection
    /// The orthogonal projection of a point onto the plane, which must
    /// be normalized; a [crate::Vec4]'s w passes through unchanged
    pub fn point_projection<P: Point3<F>>(&self, p: &P) -> P {
        let r = self.residual(p);
        let c = p.coords();
        p.with_coords([c[0] - r * self.a, c[1] - r * self.b, c[2] - r * self.c])
    }

    //mp contains
    /// True if the point satisfies the plane equation within the
    /// policy epsilon (the test is applied to the raw residual)
    pub fn contains<P: Point3<F>>(&self, p: &P) -> bool {
        self.residual(p).approx_zero()
    }

    //mp point_distance
    /// The distance from a point to the plane, which must be
    /// normalized; always non-negative
    pub fn point_distance<P: Point3<F>>(&self, p: &P) -> F {
        self.residual(p).abs()
    }

    //mp space_relation
    /// Where another plane lies relative to this one
    ///
    /// Parallel planes with proportional coefficients are
    /// [SpaceRelation::Contained]; parallel planes at different
    /// offsets classify by the side they lie on; anything else
    /// intersects in a line and is [SpaceRelation::BothSides].
    pub fn space_relation(&self, other: &Self) -> SpaceRelation {
        let n1 = [self.a, self.b, self.c];
        let n2 = [other.a, other.b, other.c];
        if !vector::is_parallel(&n1, &n2) {
            return SpaceRelation::BothSides;
        }
        let l1 = vector::length(&n1);
        let l2 = vector::length(&n2);
        let same_dirn = vector::dot(&n1, &n2) >= F::zero();
        let offset = if same_dirn {
            self.d / l1 - other.d / l2
        } else {
            self.d / l1 + other.d / l2
        };
        if offset.approx_zero() {
            SpaceRelation::Contained
        } else if offset > F::zero() {
            SpaceRelation::PositiveSide
        } else {
            SpaceRelation::NegativeSide
        }
    }

    //mp intersection_point
    /// Intersect this plane with two others
    ///
    /// When the three planes meet in exactly one point, that point is
    /// written through `out` (a [crate::Vec4]'s w is untouched) and
    /// [Intersection::One] returned. Otherwise `out` is left exactly
    /// as passed and the result classifies the degeneracy:
    ///
    /// * [Intersection::Infinite] - the three coincide, two coincide
    ///   and the third crosses them, or the three share a common line;
    /// * [Intersection::None] - parallel planes at distinct offsets,
    ///   or three pairwise intersection lines that are parallel and
    ///   distinct.
    pub fn intersection_point<P: Point3<F>>(
        &self,
        plane1: &Self,
        plane2: &Self,
        out: &mut P,
    ) -> Intersection {
        let n0 = [self.a, self.b, self.c];
        let n1 = [plane1.a, plane1.b, plane1.c];
        let n2 = [plane2.a, plane2.b, plane2.c];
        let m = [
            n0[0], n0[1], n0[2], n1[0], n1[1], n1[2], n2[0], n2[1], n2[2],
        ];
        let det = matrix::determinant3(&m);
        if det.abs() > F::epsilon() {
            // Cramer's rule on the system n_i . p = -d_i
            let rhs = [-self.d, -plane1.d, -plane2.d];
            let mut p = [F::zero(); 3];
            for col in 0..3 {
                let mut mc = m;
                mc[col] = rhs[0];
                mc[3 + col] = rhs[1];
                mc[6 + col] = rhs[2];
                p[col] = matrix::determinant3(&mc) / det;
            }
            *out = out.with_coords(p);
            return Intersection::One;
        }

        let par01 = vector::is_parallel(&n0, &n1);
        let par02 = vector::is_parallel(&n0, &n2);
        let par12 = vector::is_parallel(&n1, &n2);
        let coincide = |p: &Self, q: &Self| p.space_relation(q) == SpaceRelation::Contained;

        if par01 && par02 && par12 {
            // Three parallel planes share every point or none
            if coincide(self, plane1) && coincide(self, plane2) {
                Intersection::Infinite
            } else {
                Intersection::None
            }
        } else if par01 || par02 || par12 {
            // Exactly one parallel pair; the third plane crosses both
            let pair_coincides = if par01 {
                coincide(self, plane1)
            } else if par02 {
                coincide(self, plane2)
            } else {
                coincide(plane1, plane2)
            };
            if pair_coincides {
                Intersection::Infinite
            } else {
                Intersection::None
            }
        } else {
            // No parallel normals but a null determinant: the three
            // pairwise intersection lines are parallel. They either
            // coincide in a shared line or are distinct.
            let dirn = vector::cross_product3(&n1, &n2);
            let l2 = vector::length_sq(&dirn);
            let t1 = vector::scale(vector::cross_product3(&n2, &dirn), -plane1.d);
            let t2 = vector::scale(vector::cross_product3(&dirn, &n1), -plane2.d);
            let on_line = vector::reduce(vector::add(t1, &t2, F::one()), l2);
            let p = out.with_coords(on_line);
            if self.contains(&p) {
                Intersection::Infinite
            } else {
                Intersection::None
            }
        }
    }

    //a Transformations
    //cp rotate
    /// The plane rotated by a rotation matrix, rebuilt from the
    /// rotated normal and a rotated in-plane point
    #[must_use]
    pub fn rotate(self, rotation: &RotationMatrix3x3<F>) -> Self {
        let n = matrix::transform_dir3(&[self.a, self.b, self.c], rotation.matrix().as_array());
        let p = matrix::transform_dir3(&self.any_point(), rotation.matrix().as_array());
        Self::new(n[0], n[1], n[2], -vector::dot(&n, &p))
    }

    //cp rotate_q
    /// The plane rotated by a quaternion
    #[must_use]
    pub fn rotate_q(self, rotation: &Quaternion<F>) -> Self {
        self.rotate(&RotationMatrix3x3::from_quaternion(rotation))
    }

    //cp scale
    /// The plane scaled by per-axis factors: the normal is divided
    /// componentwise and the result renormalized
    ///
    /// A null factor on any axis is outside the contract.
    #[must_use]
    pub fn scale(self, scale: &Vec3<F>) -> Self {
        Self::new(
            self.a / scale.x,
            self.b / scale.y,
            self.c / scale.z,
            self.d,
        )
        .normalize()
    }

    //cp scale_factors
    /// As [Plane::scale] from three scalars
    #[must_use]
    pub fn scale_factors(self, sx: F, sy: F, sz: F) -> Self {
        self.scale(&Vec3::new(sx, sy, sz))
    }

    //cp scale_m
    /// As [Plane::scale] from a scaling matrix
    #[must_use]
    pub fn scale_m(self, scale: &ScalingMatrix3x3<F>) -> Self {
        self.scale(&scale.scale_factors())
    }

    //cp translate
    /// The plane moved by a translation: the normal is unchanged and
    /// `d` drops by the normal's advance along the translation
    ///
    /// A translation orthogonal to the normal leaves the plane
    /// unchanged.
    #[must_use]
    pub fn translate(self, translation: &Vec3<F>) -> Self {
        let shift = vector::dot(&[self.a, self.b, self.c], &translation.to_array());
        Self::new(self.a, self.b, self.c, self.d - shift)
    }

    //cp translate_factors
    /// As [Plane::translate] from three scalars
    #[must_use]
    pub fn translate_factors(self, tx: F, ty: F, tz: F) -> Self {
        self.translate(&Vec3::new(tx, ty, tz))
    }

    //cp translate_m
    /// As [Plane::translate] from a translation matrix
    #[must_use]
    pub fn translate_m<S: AffineStorage<F>>(self, translation: &TranslationMatrix<F, S>) -> Self {
        self.translate(&translation.translation())
    }

    //cp transform
    /// The plane carried through a full transformation, rebuilt from
    /// the transformed normal (through the inverse transpose of the
    /// linear block) and a transformed in-plane point; the result is
    /// normalized
    #[must_use]
    pub fn transform<S: AffineStorage<F>>(self, transformation: &TransformationMatrix<F, S>) -> Self {
        let inv_t = transformation.storage().linear().inverse().transpose();
        let n = vector::normalize(matrix::transform_dir3(
            &[self.a, self.b, self.c],
            inv_t.as_array(),
        ));
        let p = transformation.storage().transform_coords(self.any_point());
        Self::new(n[0], n[1], n[2], -vector::dot(&n, &p))
    }

    //cp transform_space
    /// The plane carried through a space conversion: the coefficient
    /// row is multiplied by the inverse transpose of the conversion
    /// and the result normalized
    #[must_use]
    pub fn transform_space(self, conversion: &SpaceConversionMatrix<F>) -> Self {
        let inv_t = matrix::transpose4(&matrix::inverse4(conversion.matrix().as_array()));
        let r = matrix::transform_vec4(&[self.a, self.b, self.c, self.d], &inv_t);
        Self::new(r[0], r[1], r[2], r[3]).normalize()
    }

    //a Pivoted transformations
    //cp rotate_with_pivot
    /// Rotate about a pivot point: translate by the pivot's negation,
    /// rotate, translate back; a zero pivot equals [Plane::rotate]
    #[must_use]
    pub fn rotate_with_pivot<P: Point3<F>>(self, rotation: &RotationMatrix3x3<F>, pivot: &P) -> Self {
        self.with_pivot(pivot, |p| p.rotate(rotation))
    }

    //cp rotate_q_with_pivot
    /// Rotate by a quaternion about a pivot point
    #[must_use]
    pub fn rotate_q_with_pivot<P: Point3<F>>(self, rotation: &Quaternion<F>, pivot: &P) -> Self {
        self.with_pivot(pivot, |p| p.rotate_q(rotation))
    }

    //cp scale_with_pivot
    /// Scale about a pivot point
    #[must_use]
    pub fn scale_with_pivot<P: Point3<F>>(self, scale: &Vec3<F>, pivot: &P) -> Self {
        self.with_pivot(pivot, |p| p.scale(scale))
    }

    //cp transform_with_pivot
    /// Transform about a pivot point
    #[must_use]
    pub fn transform_with_pivot<S: AffineStorage<F>, P: Point3<F>>(
        self,
        transformation: &TransformationMatrix<F, S>,
        pivot: &P,
    ) -> Self {
        self.with_pivot(pivot, |p| p.transform(transformation))
    }

    //fi with_pivot
    /// Translate by -pivot, apply, translate by +pivot; the pivot's w
    /// never participates
    fn with_pivot<P: Point3<F>>(self, pivot: &P, apply: impl FnOnce(Self) -> Self) -> Self {
        let c = pivot.coords();
        let to_origin = Vec3::new(-c[0], -c[1], -c[2]);
        apply(self.translate(&to_origin)).translate(&-to_origin)
    }

    //fi any_point
    /// A point on the plane: the origin's projection, valid for any
    /// non-null plane
    fn any_point(&self) -> [F; 3] {
        let f = -self.d / self.length_sq();
        [self.a * f, self.b * f, self.c * f]
    }

    //zz All done
}

//ip Neg for Plane
impl<F: Float> std::ops::Neg for Plane<F> {
    type Output = Self;
    /// Negate all four coefficients, `d` included
    ///
    /// The satisfied point set is unchanged (the coefficients are
    /// proportional by -1) but the normal flips, so the positive and
    /// negative sides swap and the negation compares unequal to the
    /// original.
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

//ip Mul<F>/Div<F> for Plane
impl<F: Float> std::ops::Mul<F> for Plane<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self {
        Self::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }
}
impl<F: Float> std::ops::Div<F> for Plane<F> {
    type Output = Self;
    fn div(self, s: F) -> Self {
        Self::new(self.a / s, self.b / s, self.c / s, self.d / s)
    }
}

//ip Display for Plane
impl<F: Float> std::fmt::Display for Plane<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "PL({},{},{},{})", self.a, self.b, self.c, self.d)
    }
}

//ip AbsDiffEq/RelativeEq for Plane
impl<F: Float + approx::AbsDiffEq> approx::AbsDiffEq for Plane<F>
where
    F::Epsilon: Copy,
{
    type Epsilon = F::Epsilon;
    fn default_epsilon() -> F::Epsilon {
        F::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: F::Epsilon) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
            && self.d.abs_diff_eq(&other.d, epsilon)
    }
}
impl<F: Float + approx::RelativeEq> approx::RelativeEq for Plane<F>
where
    F::Epsilon: Copy,
{
    fn default_max_relative() -> F::Epsilon {
        F::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: F::Epsilon, max_relative: F::Epsilon) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}
