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

@file    traits.rs
@brief   Scalar and point traits of the geometry kernel
 */

//a Imports
use crate::vector_op as vector;

//a Num and Float traits
//tp Num
/// The [Num] trait is required for matrix or vector elements; it is
/// not a float, so the plain matrix and vector operations can operate
/// on integer types such as i32, i64 and isize.
///
/// The trait requires basic numeric operations, plus [std::fmt::Display].
pub trait Num:
    std::ops::Neg<Output = Self>
    + num_traits::Num
    + num_traits::NumAssignOps
    + Clone
    + Copy
    + PartialEq
    + PartialOrd
    + std::fmt::Display
    + std::fmt::Debug
{
}

//tp Float
/// The [Float] trait is required wherever the maths needs `sqrt`,
/// trigonometry or an epsilon; it is the compile-time scalar policy of
/// the whole crate.
///
/// The trait is essentially [num_traits::Float] with cheap constant
/// constructors bolted on so generic code can write `F::two()` or
/// `F::frac(1, 2)` without a `NumCast` dance at every use site.
pub trait Float: Num + num_traits::Float + num_traits::FloatConst {
    //fp int
    /// Create a [Float] from an `isize` value
    #[inline]
    fn int(n: isize) -> Self {
        Self::from(n).unwrap()
    }

    //fp frac
    /// Create a [Float] as the fraction of two `isize` values
    #[inline]
    fn frac(n: isize, d: isize) -> Self {
        Self::int(n) / Self::int(d)
    }

    //fp two
    /// Return the value 2
    #[inline]
    fn two() -> Self {
        Self::int(2)
    }

    //fp half
    /// Return the value 0.5
    #[inline]
    fn half() -> Self {
        Self::frac(1, 2)
    }

    //fp pi
    /// Return the value of PI
    #[inline]
    fn pi() -> Self {
        <Self as num_traits::FloatConst>::PI()
    }

    //fp tau
    /// Return the value of 2*PI
    #[inline]
    fn tau() -> Self {
        <Self as num_traits::FloatConst>::TAU()
    }

    //mp approx_eq
    /// Compare two scalars for equality within the policy epsilon
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < Self::epsilon()
    }

    //mp approx_zero
    /// Return true if the scalar is zero within the policy epsilon
    #[inline]
    fn approx_zero(self) -> bool {
        self.abs() < Self::epsilon()
    }

    //mp clamped
    /// Clamp the scalar into the inclusive range [min, max]
    #[inline]
    fn clamped(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

//ti Num for f32/f64/i32/i64/isize
impl Num for f32 {}
impl Num for f64 {}
impl Num for i32 {}
impl Num for i64 {}
impl Num for isize {}

//ti Float for f32/f64
impl Float for f32 {}
impl Float for f64 {}

//a Point3
//tt Point3
/// The [Point3] trait is the capability a 3D position type must offer
/// to the geometry built on top of the vectors: planes, spheres,
/// triangles and the bulk point kernel all operate on "something with
/// x, y and z".
///
/// It is implemented by [crate::Vec3] and by [crate::Vec4]; the only
/// difference the two expose through this trait is what happens to
/// components *beyond* z. A [crate::Vec4] rebuilt through
/// [Point3::with_coords] keeps its w untouched, which is how the
/// w-preservation contract of the 4D operations is met without a
/// second copy of every algorithm.
pub trait Point3<F: Float>: Copy + std::fmt::Debug {
    //mp coords
    /// Return the x, y and z components
    fn coords(&self) -> [F; 3];

    //mp with_coords
    /// Build a copy of this point with the given x, y and z; any
    /// further components (a w) are carried over from `self`
    #[must_use]
    fn with_coords(&self, coords: [F; 3]) -> Self;

    //mp translated
    /// The point moved by a delta
    #[must_use]
    #[inline]
    fn translated(&self, delta: &[F; 3]) -> Self {
        let c = self.coords();
        self.with_coords([c[0] + delta[0], c[1] + delta[1], c[2] + delta[2]])
    }

    //mp scaled
    /// The point scaled componentwise about the origin
    #[must_use]
    #[inline]
    fn scaled(&self, factors: &[F; 3]) -> Self {
        let c = self.coords();
        self.with_coords([c[0] * factors[0], c[1] * factors[1], c[2] * factors[2]])
    }

    //mp distance_to
    /// Euclidean distance to another point
    #[inline]
    fn distance_to(&self, other: &Self) -> F {
        vector::distance(&self.coords(), &other.coords())
    }

    //zz All done
}
