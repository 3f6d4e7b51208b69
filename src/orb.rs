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

@file    orb.rs
@brief   Sphere: a center point and a radius
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::matrix::AffineStorage;
use crate::plane::Plane;
use crate::quaternion::Quaternion;
use crate::relation::SpaceRelation;
use crate::rotation::RotationMatrix3x3;
use crate::transformation::TransformationMatrix;
use crate::vector_types::Vec3;
use crate::{Float, Point3};

//a Sphere
//tp Sphere
/// A sphere: a center point and a non-negative radius
///
/// The center's type picks the point flavour - [Vec3](crate::Vec3) or
/// [Vec4](crate::Vec4); a [Vec4](crate::Vec4) center keeps its w
/// through every transformation. Transformations move the center only,
/// except the scaling operations, which take an explicit factor for
/// the radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere<F: Float, P: Point3<F>> {
    /// Center of the sphere
    pub center: P,
    /// Radius of the sphere
    pub radius: F,
}

//ip Sphere
impl<F: Float, P: Point3<F>> Sphere<F, P> {
    //fp new
    /// Create a sphere from its center and radius
    pub fn new(center: P, radius: F) -> Self {
        Self { center, radius }
    }

    //mp contains
    /// True if a point lies inside or on the sphere, within the policy
    /// epsilon
    pub fn contains(&self, point: &P) -> bool {
        let d = self.center.distance_to(point);
        d <= self.radius || d.approx_eq(self.radius)
    }

    //cp translate
    /// The sphere moved by a delta
    #[must_use]
    pub fn translate(self, translation: &Vec3<F>) -> Self {
        Self::new(self.center.translated(&translation.to_array()), self.radius)
    }

    //cp rotate
    /// The sphere rotated about the origin: the center moves, the
    /// radius is unaffected
    #[must_use]
    pub fn rotate(self, rotation: &Quaternion<F>) -> Self {
        let mut c = [self.center];
        crate::points::rotate(rotation, &mut c);
        Self::new(c[0], self.radius)
    }

    //cp rotate_m
    /// The sphere rotated about the origin by a rotation matrix
    #[must_use]
    pub fn rotate_m(self, rotation: &RotationMatrix3x3<F>) -> Self {
        Self::new(rotation.transform(&self.center), self.radius)
    }

    //cp rotate_with_pivot
    /// The sphere rotated about a pivot point
    #[must_use]
    pub fn rotate_with_pivot(self, rotation: &Quaternion<F>, pivot: &P) -> Self {
        let mut c = [self.center];
        crate::points::rotate_with_pivot(rotation, pivot, &mut c);
        Self::new(c[0], self.radius)
    }

    //cp scale
    /// The sphere scaled: the center componentwise, the radius by its
    /// own independent factor
    #[must_use]
    pub fn scale(self, factors: &Vec3<F>, radius_scale: F) -> Self {
        Self::new(
            self.center.scaled(&factors.to_array()),
            self.radius * radius_scale,
        )
    }

    //cp scale_with_pivot
    /// The sphere scaled about a pivot point
    #[must_use]
    pub fn scale_with_pivot(self, factors: &Vec3<F>, radius_scale: F, pivot: &P) -> Self {
        let mut c = [self.center];
        crate::points::scale_with_pivot(factors, pivot, &mut c);
        Self::new(c[0], self.radius * radius_scale)
    }

    //cp transform
    /// The sphere carried through a transformation: the center fully,
    /// the radius by its own factor
    #[must_use]
    pub fn transform<S: AffineStorage<F>>(
        self,
        transformation: &TransformationMatrix<F, S>,
        radius_scale: F,
    ) -> Self {
        Self::new(
            transformation.transform(&self.center),
            self.radius * radius_scale,
        )
    }

    //cp transform_with_pivot
    /// The sphere carried through a transformation about a pivot point
    #[must_use]
    pub fn transform_with_pivot<S: AffineStorage<F>>(
        self,
        transformation: &TransformationMatrix<F, S>,
        radius_scale: F,
        pivot: &P,
    ) -> Self {
        let mut c = [self.center];
        crate::points::transform_with_pivot(transformation, pivot, &mut c);
        Self::new(c[0], self.radius * radius_scale)
    }

    //cp project_to_plane
    /// The sphere whose center is the orthogonal projection of this
    /// one's onto a plane, which must be normalized
    #[must_use]
    pub fn project_to_plane(self, plane: &Plane<F>) -> Self {
        Self::new(plane.point_projection(&self.center), self.radius)
    }

    //mp space_relation
    /// Where the sphere lies relative to a normalized plane
    ///
    /// A sphere whose center is within a radius of the plane crosses
    /// it; otherwise the center's side decides.
    pub fn space_relation(&self, plane: &Plane<F>) -> SpaceRelation {
        let dist = plane.dot(&self.center) + plane.d;
        if dist.approx_zero() || dist.abs() < self.radius {
            SpaceRelation::BothSides
        } else if dist < F::zero() {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::PositiveSide
        }
    }

    //zz All done
}

//ip Display for Sphere
impl<F: Float, P: Point3<F> + std::fmt::Display> std::fmt::Display for Sphere<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "OB(c={},r={})", self.center, self.radius)
    }
}
