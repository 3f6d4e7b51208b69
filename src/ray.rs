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

@file    ray.rs
@brief   Ray and line segment primitives
 */

//a Imports
use serde::{Deserialize, Serialize};

use crate::plane::Plane;
use crate::quaternion::Quaternion;
use crate::relation::Intersection;
use crate::vector_types::Vec3;
use crate::{Float, Point3};

//a Ray
//tp Ray
/// A ray: an origin point and a direction
///
/// The direction should be kept unit length for the distance-based
/// queries to be meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray<F: Float, P: Point3<F>> {
    /// Start point of the ray
    pub origin: P,
    /// Direction of the ray
    pub direction: Vec3<F>,
}

//ip Ray
impl<F: Float, P: Point3<F>> Ray<F, P> {
    //fp new
    /// Create a ray from its origin and direction
    pub fn new(origin: P, direction: Vec3<F>) -> Self {
        Self { origin, direction }
    }

    //mp point_at
    /// The point at a parameter distance along the ray; a
    /// [crate::Vec4] origin's w is carried over
    pub fn point_at(&self, t: F) -> P {
        self.origin
            .translated(&(self.direction * t).to_array())
    }

    //mp intersection_with_plane
    /// Classify the intersection of the ray with a plane
    ///
    /// A ray within the plane yields [Intersection::Infinite]; a ray
    /// parallel to but outside the plane, or pointing away from it,
    /// yields [Intersection::None]; anything else hits in one point,
    /// written through `out`.
    pub fn intersection_with_plane(&self, plane: &Plane<F>, out: &mut P) -> Intersection {
        let denom = plane.dot(&self.direction);
        let num = plane.dot(&self.origin) + plane.d;
        if denom.approx_zero() {
            if num.approx_zero() {
                Intersection::Infinite
            } else {
                Intersection::None
            }
        } else {
            let t = -num / denom;
            if t < F::zero() && !t.approx_zero() {
                Intersection::None
            } else {
                *out = self.point_at(t);
                Intersection::One
            }
        }
    }

    //cp translate
    /// The ray moved by a delta; the direction is unchanged
    #[must_use]
    pub fn translate(self, translation: &Vec3<F>) -> Self {
        Self::new(
            self.origin.translated(&translation.to_array()),
            self.direction,
        )
    }

    //cp rotate
    /// The ray rotated about the origin: both the origin point and
    /// the direction rotate
    #[must_use]
    pub fn rotate(self, rotation: &Quaternion<F>) -> Self {
        let mut o = [self.origin];
        crate::points::rotate(rotation, &mut o);
        Self::new(o[0], self.direction.rotate(rotation))
    }

    //zz All done
}

//ip Display for Ray
impl<F: Float, P: Point3<F> + std::fmt::Display> std::fmt::Display for Ray<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "RY(o={},d={})", self.origin, self.direction)
    }
}

//a LineSegment
//tp LineSegment
/// A line segment: two end points A and B
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment<F: Float, P: Point3<F>> {
    /// First end point
    pub a: P,
    /// Second end point
    pub b: P,
    #[serde(skip)]
    _f: std::marker::PhantomData<F>,
}

//ip LineSegment
impl<F: Float, P: Point3<F>> LineSegment<F, P> {
    //fp new
    /// Create a segment from its two end points
    pub fn new(a: P, b: P) -> Self {
        Self {
            a,
            b,
            _f: std::marker::PhantomData,
        }
    }

    //mp length
    /// The distance between the end points
    pub fn length(&self) -> F {
        self.a.distance_to(&self.b)
    }

    //mp center
    /// The midpoint of the segment; a [crate::Vec4] result carries
    /// A's w
    pub fn center(&self) -> P {
        self.lerp(F::half())
    }

    //mp lerp
    /// The point a proportion `t` of the way from A to B
    pub fn lerp(&self, t: F) -> P {
        let a = self.a.coords();
        let b = self.b.coords();
        self.a
            .with_coords(crate::vector_op::mix(&a, &b, t))
    }

    //cp translate
    /// The segment moved by a delta
    #[must_use]
    pub fn translate(self, translation: &Vec3<F>) -> Self {
        let t = translation.to_array();
        Self::new(self.a.translated(&t), self.b.translated(&t))
    }

    //cp rotate
    /// The segment rotated about the origin by a quaternion
    #[must_use]
    pub fn rotate(self, rotation: &Quaternion<F>) -> Self {
        let mut v = [self.a, self.b];
        crate::points::rotate(rotation, &mut v);
        Self::new(v[0], v[1])
    }

    //zz All done
}

//ip Display for LineSegment
impl<F: Float, P: Point3<F> + std::fmt::Display> std::fmt::Display for LineSegment<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "LS(a={},b={})", self.a, self.b)
    }
}
