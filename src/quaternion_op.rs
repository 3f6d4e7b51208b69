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

@file    quaternion_op.rs
@brief   Quaternion operations over [x, y, z, w] arrays
 */

//a Documentation
/*!
Quaternion operations over plain `[F; 4]` arrays stored as
`[x, y, z, w]`.

Two conventions fix everything else in this module and must not be
changed independently:

* a vector is rotated with the sandwich `v' = conj(q) * v~ * q`, where
  `*` is the Hamilton product and `v~` is the vector promoted to a
  pure quaternion; composing `a * b` therefore applies `a` first,
  matching the crate-wide row-vector matrix convention;

* Euler angles compose in the order Z, then X, then Y (yaw, pitch,
  roll), so the quaternion built from them is `qy * qx * qz`.
!*/

//a Imports
use crate::vector_op as vector;
use crate::Float;

//a Constructors
//fp identity
/// Create an identity quaternion
#[inline]
pub fn identity<V: Float>() -> [V; 4] {
    [V::zero(), V::zero(), V::zero(), V::one()]
}

//fp of_axis_angle
/// Find the quaternion for a rotation of an angle (radians) around an
/// axis
///
/// The axis should be a unit vector; a non-unit axis is normalized
/// here, and a null axis yields the identity.
pub fn of_axis_angle<V: Float>(axis: &[V; 3], angle: V) -> [V; 4] {
    let (s, c) = V::sin_cos(angle * V::half());
    let l = vector::length(axis);
    if l < V::epsilon() {
        identity()
    } else {
        let s = s / l;
        [s * axis[0], s * axis[1], s * axis[2], c]
    }
}

//fp as_axis_angle
/// Return the rotation axis and angle (radians) of a unit quaternion
///
/// The angle is in [0, 2*PI]; at the 0-angle singularity the axis is
/// arbitrary and the X axis is returned.
pub fn as_axis_angle<V: Float>(q: &[V; 4]) -> ([V; 3], V) {
    let angle = V::two() * q[3].clamped(-V::one(), V::one()).acos();
    let l = vector::length(&[q[0], q[1], q[2]]);
    if l < V::epsilon() {
        ([V::one(), V::zero(), V::zero()], angle)
    } else {
        ([q[0] / l, q[1] / l, q[2] / l], angle)
    }
}

//fp of_euler
/// Build the unit quaternion for three Euler angles (radians) applied
/// in the order Z, then X, then Y
pub fn of_euler<V: Float>(rx: V, ry: V, rz: V) -> [V; 4] {
    let (sx, cx) = V::sin_cos(rx * V::half());
    let (sy, cy) = V::sin_cos(ry * V::half());
    let (sz, cz) = V::sin_cos(rz * V::half());
    [
        cy * sx * cz + sy * cx * sz,
        sy * cx * cz - cy * sx * sz,
        cy * cx * sz - sy * sx * cz,
        cy * cx * cz + sy * sx * sz,
    ]
}

//fp to_euler
/// Recover the Euler angles (radians, Z-X-Y order) of a unit
/// quaternion, returned as (x, y, z)
///
/// At the X = +-PI/2 poles the Y/Z split is not unique; Y is reported
/// as zero and Z carries the whole in-plane rotation. The angles need
/// not match whatever values built the quaternion, but re-composing
/// them yields the same rotation.
pub fn to_euler<V: Float>(q: &[V; 4]) -> (V, V, V) {
    let [x, y, z, w] = *q;
    let pole = V::frac(999_999, 1_000_000);
    let sin_x = (V::two() * (w * x - y * z)).clamped(-V::one(), V::one());
    if sin_x.abs() > pole {
        let half_pi = V::pi() * V::half();
        let rx = if sin_x > V::zero() { half_pi } else { -half_pi };
        (rx, V::zero(), V::two() * V::atan2(z, w))
    } else {
        let rx = sin_x.asin();
        let ry = V::atan2(
            V::two() * (w * y + x * z),
            V::one() - V::two() * (x * x + y * y),
        );
        let rz = V::atan2(
            V::two() * (w * z + x * y),
            V::one() - V::two() * (x * x + z * z),
        );
        (rx, ry, rz)
    }
}

//a Mapping functions
//cp multiply
/// The Hamilton product of two quaternions; under the sandwich
/// convention the product applies `a` first, then `b`
#[inline]
pub fn multiply<V: Float>(a: &[V; 4], b: &[V; 4]) -> [V; 4] {
    let x = a[3] * b[0] + a[0] * b[3] + a[1] * b[2] - a[2] * b[1];
    let y = a[3] * b[1] + a[1] * b[3] + a[2] * b[0] - a[0] * b[2];
    let z = a[3] * b[2] + a[2] * b[3] + a[0] * b[1] - a[1] * b[0];
    let w = a[3] * b[3] - a[0] * b[0] - a[1] * b[1] - a[2] * b[2];
    [x, y, z, w]
}

//cp conjugate
/// The conjugate, which inverts a unit quaternion
#[inline]
pub fn conjugate<V: Float>(a: &[V; 4]) -> [V; 4] {
    [-a[0], -a[1], -a[2], a[3]]
}

//cp invert
/// The general inverse: the conjugate divided by the squared length
///
/// A null quaternion yields zero.
pub fn invert<V: Float>(a: &[V; 4]) -> [V; 4] {
    let l = vector::length_sq(a);
    let r_l = if l < V::epsilon() { V::zero() } else { V::one() / l };
    [-a[0] * r_l, -a[1] * r_l, -a[2] * r_l, a[3] * r_l]
}

//cp divide
/// Multiply one quaternion by the inverse of another
pub fn divide<V: Float>(a: &[V; 4], b: &[V; 4]) -> [V; 4] {
    multiply(a, &invert(b))
}

//cp normalize
/// Normalize the quaternion; a null quaternion stays zero
pub fn normalize<V: Float>(a: [V; 4]) -> [V; 4] {
    vector::normalize(a)
}

//a Interpolation
//fp nlerp
/// Normalized linear interpolation from one quaternion to another
pub fn nlerp<V: Float>(t: V, a: &[V; 4], b: &[V; 4]) -> [V; 4] {
    normalize(vector::mix(a, b, t))
}

//fp slerp
/// Spherical linear interpolation between two quaternions of any
/// length
///
/// The interpolation angle `beta` comes from the normalized dot
/// product; when `beta` is 0 or PI there is no unique great-circle
/// path and the first operand is returned.
pub fn slerp<V: Float>(t: V, a: &[V; 4], b: &[V; 4]) -> [V; 4] {
    let l2 = vector::length(a) * vector::length(b);
    if l2 < V::epsilon() {
        return *a;
    }
    slerp_weights(t, vector::dot(a, b) / l2).map_or(*a, |(wa, wb)| {
        vector::add(vector::scale(*a, wa), b, wb)
    })
}

//fp unit_slerp
/// Spherical linear interpolation between two unit quaternions
pub fn unit_slerp<V: Float>(t: V, a: &[V; 4], b: &[V; 4]) -> [V; 4] {
    slerp_weights(t, vector::dot(a, b)).map_or(*a, |(wa, wb)| {
        vector::add(vector::scale(*a, wa), b, wb)
    })
}

//fi slerp_weights
/// The two slerp blend weights, or None at the beta = 0 / PI
/// singularities
fn slerp_weights<V: Float>(t: V, cos_beta: V) -> Option<(V, V)> {
    let beta = cos_beta.clamped(-V::one(), V::one()).acos();
    let sin_beta = beta.sin();
    if sin_beta < V::epsilon() {
        None
    } else {
        Some((((V::one() - t) * beta).sin() / sin_beta, (t * beta).sin() / sin_beta))
    }
}

//a Operational functions
//fp dot
/// The four-component dot product of two quaternions
#[inline]
pub fn dot<V: Float>(a: &[V; 4], b: &[V; 4]) -> V {
    vector::dot(a, b)
}

//fp angle_between
/// The angle (radians) between the rotations of two unit quaternions,
/// in [0, PI]
pub fn angle_between<V: Float>(a: &[V; 4], b: &[V; 4]) -> V {
    let d = dot(a, b).abs().clamped(V::zero(), V::one());
    V::two() * d.acos()
}

//fp rotate_point3
/// Apply the rotation of a quaternion to a 3-component vector via the
/// `conj(q) * v~ * q` sandwich, expanded to its matrix form
///
/// The division by the squared length makes the result exact for any
/// non-null quaternion, not just unit ones.
pub fn rotate_point3<V: Float>(q: &[V; 4], v: &[V; 3]) -> [V; 3] {
    let m = to_rotation3(q);
    crate::matrix_op::transform_dir3(v, &m)
}

//fp to_rotation3
/// The 3-by-3 row-vector rotation matrix of a quaternion, scaled so a
/// non-unit quaternion still yields a pure rotation
pub fn to_rotation3<V: Float>(q: &[V; 4]) -> [V; 9] {
    let [x, y, z, w] = *q;
    let x2 = x * x;
    let y2 = y * y;
    let z2 = z * z;
    let w2 = w * w;
    let l2 = x2 + y2 + z2 + w2;
    let rl2 = V::one() / l2;
    let drl2 = V::two() * rl2;

    let mut m = [V::zero(); 9];
    m[0] = (w2 + x2 - y2 - z2) * rl2;
    m[4] = (w2 - x2 + y2 - z2) * rl2;
    m[8] = (w2 - x2 - y2 + z2) * rl2;

    m[1] = (x * y - z * w) * drl2;
    m[3] = (x * y + z * w) * drl2;

    m[2] = (x * z + y * w) * drl2;
    m[6] = (x * z - y * w) * drl2;

    m[5] = (y * z - x * w) * drl2;
    m[7] = (y * z + x * w) * drl2;
    m
}

//fp of_rotation3
/// Find the unit quaternion of a 3-by-3 matrix assuming it is purely a
/// rotation
pub fn of_rotation3<V: Float>(m: &[V; 9]) -> [V; 4] {
    fn safe_sqrt<V: Float>(x: V) -> V {
        if x < V::zero() {
            V::zero()
        } else {
            x.sqrt()
        }
    }
    let w = safe_sqrt(V::one() + m[0] + m[4] + m[8]) * V::half();
    let mut x = safe_sqrt(V::one() + m[0] - m[4] - m[8]) * V::half();
    let mut y = safe_sqrt(V::one() - m[0] + m[4] - m[8]) * V::half();
    let mut z = safe_sqrt(V::one() - m[0] - m[4] + m[8]) * V::half();

    // Off-diagonal differences carry the signs: m21-m12 = 4xw etc.
    if m[7] - m[5] < -V::epsilon() {
        x = -x;
    }
    if m[2] - m[6] < -V::epsilon() {
        y = -y;
    }
    if m[3] - m[1] < -V::epsilon() {
        z = -z;
    }
    [x, y, z, w]
}
