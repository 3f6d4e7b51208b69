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

@file    vector_op.rs
@brief   N-component vector operations over plain arrays
 */

//a Imports
use crate::{Float, Num};

//a Vector constructors
//fp zero
/// Create a zero vector of the correct size
///
/// # Example
///
/// ```
/// use gimbal::vector;
/// let a = vector::zero::<f32, 4>();
/// assert_eq!( a, [0., 0., 0., 0.]);
/// ```
pub fn zero<V: Num, const D: usize>() -> [V; D] {
    [V::zero(); D]
}

//mp set_zero
/// Set the vector in-place to be zero
pub fn set_zero<V: Num>(v: &mut [V]) {
    for c in v.iter_mut() {
        c.set_zero();
    }
}

//fp is_zero
/// Return true if every component of the vector is zero
pub fn is_zero<V: Num>(v: &[V]) -> bool {
    for c in v {
        if !c.is_zero() {
            return false;
        }
    }
    true
}

//a Combinations
//cp scale
/// Scale every element of a vector by a single scaling factor
pub fn scale<V: Num, const D: usize>(mut v: [V; D], s: V) -> [V; D] {
    for c in &mut v {
        *c = (*c) * s;
    }
    v
}

//cp reduce
/// Divide every element of a vector by a single factor
pub fn reduce<V: Num, const D: usize>(mut v: [V; D], s: V) -> [V; D] {
    for c in &mut v {
        *c = (*c) / s;
    }
    v
}

//cp add
/// Add another vector scaled by a value to a vector, returning the sum
///
/// # Example
///
/// ```
/// use gimbal::vector;
/// let a = [3., 1.];
/// let b = [2., 3.];
/// assert_eq!( vector::add( a, &b, 3.), [9., 10.]);
/// ```
pub fn add<V: Num, const D: usize>(mut v: [V; D], other: &[V; D], scale: V) -> [V; D] {
    for i in 0..D {
        v[i] = v[i] + other[i] * scale;
    }
    v
}

//cp sub
/// Subtract another vector scaled by a value from a vector
pub fn sub<V: Num, const D: usize>(mut v: [V; D], other: &[V; D], scale: V) -> [V; D] {
    for i in 0..D {
        v[i] = v[i] - other[i] * scale;
    }
    v
}

//cp comp_mult
/// Multiply two vectors componentwise
pub fn comp_mult<V: Num, const D: usize>(mut v: [V; D], s: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = v[i] * s[i];
    }
    v
}

//fp mix
/// Find the linear interpolation between two vectors by a parameter `t`
///
/// # Example
///
/// ```
/// use gimbal::vector;
/// let a = [3., 1.];
/// let b = [2., 3.];
/// assert_eq!( vector::mix( &a, &b, 0.),  [3., 1.]);
/// assert_eq!( vector::mix( &a, &b, 1.),  [2., 3.]);
/// assert_eq!( vector::mix( &a, &b, 0.5), [2.5, 2.]);
/// ```
pub fn mix<V: Float, const D: usize>(a: &[V; D], b: &[V; D], t: V) -> [V; D] {
    let mut v = zero();
    let omt = V::one() - t;
    for i in 0..D {
        v[i] = a[i] * omt + b[i] * t;
    }
    v
}

//cp normalize
/// Normalize (make unit length) a vector if possible
///
/// If its length is too close to 0 the result is the zero vector; a
/// null input is outside the contract of every caller in this crate,
/// so any deterministic result will do.
pub fn normalize<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    let l = length(&v);
    if l < V::epsilon() {
        set_zero(&mut v);
    } else {
        v = reduce(v, l);
    }
    v
}

//fp cross_product3
/// Return the cross product of two 3-component vectors, right-handed
///
/// # Example
///
/// ```
/// use gimbal::vector;
/// let x = [1., 0., 0.];
/// let y = [0., 1., 0.];
/// let z = vector::cross_product3(&x, &y);
/// assert_eq!( z, [0., 0., 1.] );
/// ```
pub fn cross_product3<V: Num>(x: &[V; 3], y: &[V; 3]) -> [V; 3] {
    let c0 = x[1] * y[2] - x[2] * y[1];
    let c1 = x[2] * y[0] - x[0] * y[2];
    let c2 = x[0] * y[1] - x[1] * y[0];
    [c0, c1, c2]
}

//fp is_parallel
/// Return true if two 3-component vectors are parallel: their cross
/// product is null within the policy epsilon
pub fn is_parallel<V: Float>(a: &[V; 3], b: &[V; 3]) -> bool {
    length(&cross_product3(a, b)) < V::epsilon()
}

//a Accessors
//mp length_sq
/// Return the length^2 of the vector
pub fn length_sq<V: Num>(v: &[V]) -> V {
    let mut r = V::zero();
    for c in v.iter() {
        r = r + (*c) * (*c)
    }
    r
}

//mp length
/// Return the length of the vector
///
/// # Example
///
/// ```
/// use gimbal::vector;
/// assert_eq!( vector::length(&[3., 4.]), 5. );
/// ```
pub fn length<V: Float>(v: &[V]) -> V {
    length_sq(v).sqrt()
}

//mp distance_sq
/// Return the square of the distance between two vectors
pub fn distance_sq<V: Num, const D: usize>(v: &[V; D], other: &[V; D]) -> V {
    let mut r = V::zero();
    for i in 0..D {
        let d = v[i] - other[i];
        r = r + d * d;
    }
    r
}

//mp distance
/// Return the distance between two vectors
pub fn distance<V: Float, const D: usize>(v: &[V; D], other: &[V; D]) -> V {
    distance_sq(v, other).sqrt()
}

//mp dot
/// Return the inner product of two vectors
///
/// # Example
///
/// ```
/// use gimbal::vector;
/// assert_eq!( vector::dot(&[1.,-1.], &[4., 1.]), 3. );
/// ```
pub fn dot<V: Num, const D: usize>(v: &[V; D], other: &[V; D]) -> V {
    let mut r = V::zero();
    for i in 0..D {
        r = r + v[i] * other[i];
    }
    r
}

//mp angle_between
/// Return the angle between two vectors in radians, in [0, PI]
///
/// Both vectors must be non-null.
pub fn angle_between<V: Float, const D: usize>(a: &[V; D], b: &[V; D]) -> V {
    let cos = dot(a, b) / (length(a) * length(b));
    cos.clamped(-V::one(), V::one()).acos()
}

//a Formatting
//mp fmt - format a vector for display
/// Format the vector as `(c0,c1,...)` for display
pub fn fmt<V: Num>(f: &mut std::fmt::Formatter, v: &[V]) -> std::fmt::Result {
    for (i, c) in v.iter().enumerate() {
        if i == 0 {
            write!(f, "({}", c)?;
        } else {
            write!(f, ",{}", c)?;
        }
    }
    write!(f, ")")
}
