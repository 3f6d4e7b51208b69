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

@file    triangle.rs
@brief   Triangle in 3D space
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::AffineStorage;
use crate::plane::Plane;
use crate::quaternion::Quaternion;
use crate::relation::SpaceRelation;
use crate::rotation::RotationMatrix3x3;
use crate::scaling::ScalingMatrix3x3;
use crate::transformation::TransformationMatrix;
use crate::translation::TranslationMatrix;
use crate::vector_types::Vec3;
use crate::vector_op as vector;
use crate::{Float, Point3};

//a Triangle3D
//tp Triangle3D
/// A triangle in 3D space: three vertices A, B and C
///
/// The vertex type picks the point flavour - [Vec3](crate::Vec3) or
/// [Vec4](crate::Vec4); [Vec4](crate::Vec4) vertices keep their w
/// through every transformation. The face normal derives from
/// (B-A) x (C-B) and is degenerate when the vertices are collinear or
/// coincident.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle3D<F: Float, P: Point3<F>> {
    /// First vertex
    pub a: P,
    /// Second vertex
    pub b: P,
    /// Third vertex
    pub c: P,
    #[serde(skip)]
    _f: std::marker::PhantomData<F>,
}

//ip Triangle3D
impl<F: Float, P: Point3<F>> Triangle3D<F, P> {
    //fp new
    /// Create a triangle from its three vertices
    pub fn new(a: P, b: P, c: P) -> Self {
        Self {
            a,
            b,
            c,
            _f: std::marker::PhantomData,
        }
    }

    //fi vertices / rebuild
    fn vertices(&self) -> [P; 3] {
        [self.a, self.b, self.c]
    }
    fn rebuild(v: [P; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    //mp normal
    /// The unit face normal: normalized (B-A) x (C-B)
    ///
    /// Collinear or coincident vertices are outside the contract and
    /// yield the zero vector.
    pub fn normal(&self) -> Vec3<F> {
        let a = self.a.coords();
        let b = self.b.coords();
        let c = self.c.coords();
        let ab = vector::sub(b, &a, F::one());
        let bc = vector::sub(c, &b, F::one());
        Vec3::from_array(vector::normalize(vector::cross_product3(&ab, &bc)))
    }

    //mp barycenter
    /// The average of the three vertices; a [crate::Vec4] result
    /// carries A's w
    pub fn barycenter(&self) -> P {
        let a = self.a.coords();
        let b = self.b.coords();
        let c = self.c.coords();
        let third = F::frac(1, 3);
        self.a.with_coords([
            (a[0] + b[0] + c[0]) * third,
            (a[1] + b[1] + c[1]) * third,
            (a[2] + b[2] + c[2]) * third,
        ])
    }

    //mp circumcenter
    /// The point equidistant from the three vertices; a
    /// [crate::Vec4] result carries A's w
    ///
    /// Coincident or collinear vertices are outside the contract.
    pub fn circumcenter(&self) -> P {
        let a = self.a.coords();
        let b = self.b.coords();
        let c = self.c.coords();
        let ab = vector::sub(b, &a, F::one());
        let bc = vector::sub(c, &b, F::one());
        let ca = vector::sub(a, &c, F::one());

        let semiperimeter =
            (vector::length(&ab) + vector::length(&bc) + vector::length(&ca)) * F::half();
        let area = (semiperimeter
            * (semiperimeter - vector::length(&ab))
            * (semiperimeter - vector::length(&bc))
            * (semiperimeter - vector::length(&ca)))
            .sqrt();

        let ab_x_bc = vector::cross_product3(&ab, &bc);
        let ca_x_ab_x_bc = vector::cross_product3(&ca, &ab_x_bc);

        let mid_ac = vector::scale(vector::add(a, &c, F::one()), F::half());
        let factor = vector::dot(&ab, &bc) / (F::int(8) * area * area);
        self.a
            .with_coords(vector::add(mid_ac, &ca_x_ab_x_bc, factor))
    }

    //mp orthocenter
    /// The intersection of the triangle's altitudes; a [crate::Vec4]
    /// result carries A's w
    ///
    /// Coincident or collinear vertices are outside the contract.
    pub fn orthocenter(&self) -> P {
        let a = self.a.coords();
        let b = self.b.coords();
        let c = self.c.coords();
        let ab = vector::sub(b, &a, F::one());
        let bc = vector::sub(c, &b, F::one());
        let ca = vector::sub(a, &c, F::one());

        // Normal to BC within the triangle's plane
        let normal_to_bc = vector::cross_product3(&vector::cross_product3(&bc, &ab), &bc);
        let dot = vector::dot(&normal_to_bc, &ab);
        let factor = vector::dot(&ca, &ab) / dot;
        self.a.with_coords(vector::sub(a, &normal_to_bc, factor))
    }

    //mp space_relation
    /// Where the triangle lies relative to a plane: a per-vertex
    /// half-space vote
    pub fn space_relation(&self, plane: &Plane<F>) -> SpaceRelation {
        let dist = |p: &P| plane.dot(p) + plane.d;
        let da = dist(&self.a);
        let db = dist(&self.b);
        let dc = dist(&self.c);

        if da.approx_zero() && db.approx_zero() && dc.approx_zero() {
            SpaceRelation::Contained
        } else if (da >= F::zero() || da.approx_zero())
            && (db >= F::zero() || db.approx_zero())
            && (dc >= F::zero() || dc.approx_zero())
        {
            SpaceRelation::PositiveSide
        } else if (da <= F::zero() || da.approx_zero())
            && (db <= F::zero() || db.approx_zero())
            && (dc <= F::zero() || dc.approx_zero())
        {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::BothSides
        }
    }

    //cp extrude
    /// The triangle moved along its unit normal by an amount
    #[must_use]
    pub fn extrude(self, amount: F) -> Self {
        let n = vector::scale(self.normal().to_array(), amount);
        Self::new(
            self.a.translated(&n),
            self.b.translated(&n),
            self.c.translated(&n),
        )
    }

    //cp project_to_plane
    /// The triangle with every vertex orthogonally projected onto a
    /// plane, which must be normalized
    #[must_use]
    pub fn project_to_plane(self, plane: &Plane<F>) -> Self {
        Self::new(
            plane.point_projection(&self.a),
            plane.point_projection(&self.b),
            plane.point_projection(&self.c),
        )
    }

    //a Transformations, all through the bulk point kernel
    //cp translate
    /// The triangle moved by a delta
    #[must_use]
    pub fn translate(self, translation: &Vec3<F>) -> Self {
        let mut v = self.vertices();
        crate::points::translate(translation, &mut v);
        Self::rebuild(v)
    }

    //cp translate_m
    /// The triangle moved by a translation matrix
    #[must_use]
    pub fn translate_m<S: AffineStorage<F>>(self, translation: &TranslationMatrix<F, S>) -> Self {
        self.translate(&translation.translation())
    }

    //cp rotate
    /// The triangle rotated about the origin by a quaternion
    #[must_use]
    pub fn rotate(self, rotation: &Quaternion<F>) -> Self {
        let mut v = self.vertices();
        crate::points::rotate(rotation, &mut v);
        Self::rebuild(v)
    }

    //cp rotate_m
    /// The triangle rotated about the origin by a rotation matrix
    #[must_use]
    pub fn rotate_m(self, rotation: &RotationMatrix3x3<F>) -> Self {
        let mut v = self.vertices();
        crate::points::rotate_m(rotation, &mut v);
        Self::rebuild(v)
    }

    //cp rotate_with_pivot
    /// The triangle rotated about a pivot point
    #[must_use]
    pub fn rotate_with_pivot(self, rotation: &Quaternion<F>, pivot: &P) -> Self {
        let mut v = self.vertices();
        crate::points::rotate_with_pivot(rotation, pivot, &mut v);
        Self::rebuild(v)
    }

    //cp scale
    /// The triangle scaled about the origin, componentwise
    #[must_use]
    pub fn scale(self, factors: &Vec3<F>) -> Self {
        let mut v = self.vertices();
        crate::points::scale(factors, &mut v);
        Self::rebuild(v)
    }

    //cp scale_m
    /// The triangle scaled about the origin by a scaling matrix
    #[must_use]
    pub fn scale_m(self, scaling: &ScalingMatrix3x3<F>) -> Self {
        self.scale(&scaling.scale_factors())
    }

    //cp scale_with_pivot
    /// The triangle scaled about a pivot point
    #[must_use]
    pub fn scale_with_pivot(self, factors: &Vec3<F>, pivot: &P) -> Self {
        let mut v = self.vertices();
        crate::points::scale_with_pivot(factors, pivot, &mut v);
        Self::rebuild(v)
    }

    //cp transform
    /// The triangle carried through a transformation
    #[must_use]
    pub fn transform<S: AffineStorage<F>>(self, transformation: &TransformationMatrix<F, S>) -> Self {
        let mut v = self.vertices();
        crate::points::transform(transformation, &mut v);
        Self::rebuild(v)
    }

    //cp transform_with_pivot
    /// The triangle carried through a transformation about a pivot
    /// point
    #[must_use]
    pub fn transform_with_pivot<S: AffineStorage<F>>(
        self,
        transformation: &TransformationMatrix<F, S>,
        pivot: &P,
    ) -> Self {
        let mut v = self.vertices();
        crate::points::transform_with_pivot(transformation, pivot, &mut v);
        Self::rebuild(v)
    }

    //zz All done
}

//ip Display for Triangle3D
impl<F: Float, P: Point3<F> + std::fmt::Display> std::fmt::Display for Triangle3D<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "T(a={},b={},c={})", self.a, self.b, self.c)
    }
}
