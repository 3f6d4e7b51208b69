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

@file    matrix_op.rs
@brief   Row-major matrix operations over plain arrays
 */

//a Documentation
/*!
Matrix operations over flat row-major arrays: `[F; 9]` is 3-by-3,
`[F; 12]` is 4-by-3 (an affine matrix whose implicit fourth column is
(0,0,0,1)), `[F; 16]` is 4-by-4.

Everything here follows the row-vector convention `v' = v * M`, so the
product `multiply(a, b)` is the matrix that applies `a` first and `b`
second.
!*/

//a Imports
use crate::{vector_op as vector, Float, Num};

//a Constructors
//fp identity3
/// Create a 3-by-3 identity matrix
pub fn identity3<V: Num>() -> [V; 9] {
    let mut r = [V::zero(); 9];
    r[0] = V::one();
    r[4] = V::one();
    r[8] = V::one();
    r
}

//fp identity4
/// Create a 4-by-4 identity matrix
pub fn identity4<V: Num>() -> [V; 16] {
    let mut r = [V::zero(); 16];
    r[0] = V::one();
    r[5] = V::one();
    r[10] = V::one();
    r[15] = V::one();
    r
}

//fp identity12
/// Create a 4-by-3 affine identity matrix
pub fn identity12<V: Num>() -> [V; 12] {
    let mut r = [V::zero(); 12];
    r[0] = V::one();
    r[4] = V::one();
    r[8] = V::one();
    r
}

//fp from_blocks12
/// Assemble a 4-by-3 affine matrix from a 3-by-3 linear block and a
/// translation row
pub fn from_blocks12<V: Num>(linear: &[V; 9], translation: &[V; 3]) -> [V; 12] {
    let mut r = [V::zero(); 12];
    r[..9].copy_from_slice(linear);
    r[9..].copy_from_slice(translation);
    r
}

//fp from_blocks16
/// Assemble a 4-by-4 matrix from a 3-by-3 linear block and a
/// translation row; the fourth column is (0,0,0,1)
pub fn from_blocks16<V: Num>(linear: &[V; 9], translation: &[V; 3]) -> [V; 16] {
    let mut r = [V::zero(); 16];
    for row in 0..3 {
        for col in 0..3 {
            r[row * 4 + col] = linear[row * 3 + col];
        }
    }
    r[12] = translation[0];
    r[13] = translation[1];
    r[14] = translation[2];
    r[15] = V::one();
    r
}

//fp linear_of16 / linear_of12
/// Extract the upper-left 3-by-3 block of a 4-by-4 matrix
pub fn linear_of16<V: Num>(m: &[V; 16]) -> [V; 9] {
    [m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]]
}

/// Extract the 3-by-3 linear block of a 4-by-3 affine matrix
pub fn linear_of12<V: Num>(m: &[V; 12]) -> [V; 9] {
    [m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]]
}

//a Transpose, determinant, inverse
//fp transpose3
/// Return the transpose of a 3-by-3 matrix
pub fn transpose3<V: Num>(m: &[V; 9]) -> [V; 9] {
    [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]]
}

//fp transpose4
/// Return the transpose of a 4-by-4 matrix
pub fn transpose4<V: Num>(m: &[V; 16]) -> [V; 16] {
    let mut r = [V::zero(); 16];
    for row in 0..4 {
        for col in 0..4 {
            r[col * 4 + row] = m[row * 4 + col];
        }
    }
    r
}

//fp determinant3
/// Find the determinant of a 3-by-3 matrix
pub fn determinant3<V: Num>(m: &[V; 9]) -> V {
    m[0] * (m[4] * m[8] - m[5] * m[7]) + m[1] * (m[5] * m[6] - m[3] * m[8])
        + m[2] * (m[3] * m[7] - m[4] * m[6])
}

//fp inverse3
/// Find the inverse of a 3-by-3 matrix
///
/// A singular input yields the zero matrix; inverting a singular
/// matrix is outside the callers' contract.
pub fn inverse3<V: Float>(m: &[V; 9]) -> [V; 9] {
    let mut r = [V::zero(); 9];
    let d = determinant3(m);
    if V::abs(d) <= V::epsilon() {
        return r;
    }
    let r_d = V::one() / d;

    r[0] = (m[4] * m[8] - m[5] * m[7]) * r_d;
    r[3] = (m[5] * m[6] - m[3] * m[8]) * r_d;
    r[6] = (m[3] * m[7] - m[4] * m[6]) * r_d;

    r[1] = (m[7] * m[2] - m[8] * m[1]) * r_d;
    r[4] = (m[8] * m[0] - m[6] * m[2]) * r_d;
    r[7] = (m[6] * m[1] - m[7] * m[0]) * r_d;

    r[2] = (m[1] * m[5] - m[2] * m[4]) * r_d;
    r[5] = (m[2] * m[3] - m[0] * m[5]) * r_d;
    r[8] = (m[0] * m[4] - m[1] * m[3]) * r_d;
    r
}

//fp determinant4
/// Find the determinant of a 4-by-4 matrix
pub fn determinant4<V: Num>(m: &[V; 16]) -> V {
    m[0] * (m[4 + 1] * (m[8 + 2] * m[12 + 3] - m[8 + 3] * m[12 + 2])
        + (m[4 + 2] * (m[8 + 3] * m[12 + 1] - m[8 + 1] * m[12 + 3]))
        + (m[4 + 3] * (m[8 + 1] * m[12 + 2] - m[8 + 2] * m[12 + 1])))
        - m[1] * (m[4 + 2] * (m[8 + 3] * m[12 + 0] - m[8 + 0] * m[12 + 3])
            + (m[4 + 3] * (m[8 + 0] * m[12 + 2] - m[8 + 2] * m[12 + 0]))
            + (m[4 + 0] * (m[8 + 2] * m[12 + 3] - m[8 + 3] * m[12 + 2])))
        + m[2] * (m[4 + 3] * (m[8 + 0] * m[12 + 1] - m[8 + 1] * m[12 + 0])
            + (m[4 + 0] * (m[8 + 1] * m[12 + 3] - m[8 + 3] * m[12 + 1]))
            + (m[4 + 1] * (m[8 + 3] * m[12 + 0] - m[8 + 0] * m[12 + 3])))
        - m[3] * (m[4 + 0] * (m[8 + 1] * m[12 + 2] - m[8 + 2] * m[12 + 1])
            + (m[4 + 1] * (m[8 + 2] * m[12 + 0] - m[8 + 0] * m[12 + 2]))
            + (m[4 + 2] * (m[8 + 0] * m[12 + 1] - m[8 + 1] * m[12 + 0])))
}

//fp inverse4
/// Find the inverse of a 4-by-4 matrix
///
/// A singular input yields the zero matrix.
pub fn inverse4<V: Float>(m: &[V; 16]) -> [V; 16] {
    let d = determinant4(m);
    let mut r = [V::zero(); 16];
    if V::abs(d) > V::epsilon() {
        let r_d = V::one() / d;

        for j in 0..4 {
            let a = ((j + 1) & 3) * 4;
            let b = ((j + 2) & 3) * 4;
            let c = ((j + 3) & 3) * 4;
            for i in 0..4 {
                let x = (i + 1) & 3;
                let y = (i + 2) & 3;
                let z = (i + 3) & 3;
                let sc = if (i + j) & 1 == 0 { V::one() } else { -V::one() };
                r[i * 4 + j] = ((m[a + x] * m[b + y] - m[b + x] * m[a + y]) * m[c + z]
                    + (m[a + y] * m[b + z] - m[b + y] * m[a + z]) * m[c + x]
                    + (m[a + z] * m[b + x] - m[b + z] * m[a + x]) * m[c + y])
                    * sc
                    * r_d;
            }
        }
    }
    r
}

//fp determinant12
/// Find the determinant of a 4-by-3 affine matrix, which is the
/// determinant of its linear block
pub fn determinant12<V: Num>(m: &[V; 12]) -> V {
    determinant3(&linear_of12(m))
}

//fp inverse12
/// Find the inverse of a 4-by-3 affine matrix
///
/// The linear block is inverted and the translation row rebuilt so
/// that the product with the original is the affine identity.
pub fn inverse12<V: Float>(m: &[V; 12]) -> [V; 12] {
    let inv_linear = inverse3(&linear_of12(m));
    let t = [m[9], m[10], m[11]];
    let t_inv = transform_dir3(&t, &inv_linear);
    from_blocks12(&inv_linear, &[-t_inv[0], -t_inv[1], -t_inv[2]])
}

//a Products
//fp multiply3
/// Multiply two 3-by-3 matrices; the result applies the left operand
/// first under the row-vector convention
pub fn multiply3<V: Num>(a: &[V; 9], b: &[V; 9]) -> [V; 9] {
    let mut r = [V::zero(); 9];
    for row in 0..3 {
        for col in 0..3 {
            let mut acc = V::zero();
            for k in 0..3 {
                acc = acc + a[row * 3 + k] * b[k * 3 + col];
            }
            r[row * 3 + col] = acc;
        }
    }
    r
}

//fp multiply4
/// Multiply two 4-by-4 matrices
pub fn multiply4<V: Num>(a: &[V; 16], b: &[V; 16]) -> [V; 16] {
    let mut r = [V::zero(); 16];
    for row in 0..4 {
        for col in 0..4 {
            let mut acc = V::zero();
            for k in 0..4 {
                acc = acc + a[row * 4 + k] * b[k * 4 + col];
            }
            r[row * 4 + col] = acc;
        }
    }
    r
}

//fp multiply12
/// Compose two 4-by-3 affine matrices, treating each as a 4-by-4 with
/// the implicit (0,0,0,1) column
pub fn multiply12<V: Num>(a: &[V; 12], b: &[V; 12]) -> [V; 12] {
    let mut r = [V::zero(); 12];
    for row in 0..4 {
        for col in 0..3 {
            let mut acc = V::zero();
            for k in 0..3 {
                acc = acc + a[row * 3 + k] * b[k * 3 + col];
            }
            if row == 3 {
                acc = acc + b[9 + col];
            }
            r[row * 3 + col] = acc;
        }
    }
    r
}

//fp multiply12_3
/// Multiply a 4-by-3 affine matrix by a 3-by-3 matrix; the linear
/// block and the translation row both pass through the 3-by-3
pub fn multiply12_3<V: Num>(a: &[V; 12], b: &[V; 9]) -> [V; 12] {
    let mut r = [V::zero(); 12];
    for row in 0..4 {
        for col in 0..3 {
            let mut acc = V::zero();
            for k in 0..3 {
                acc = acc + a[row * 3 + k] * b[k * 3 + col];
            }
            r[row * 3 + col] = acc;
        }
    }
    r
}

//fp multiply3_12
/// Multiply a 3-by-3 matrix by a 4-by-3 affine matrix; the result
/// picks up the affine operand's translation
pub fn multiply3_12<V: Num>(a: &[V; 9], b: &[V; 12]) -> [V; 12] {
    let mut r = [V::zero(); 12];
    for row in 0..3 {
        for col in 0..3 {
            let mut acc = V::zero();
            for k in 0..3 {
                acc = acc + a[row * 3 + k] * b[k * 3 + col];
            }
            r[row * 3 + col] = acc;
        }
    }
    r[9] = b[9];
    r[10] = b[10];
    r[11] = b[11];
    r
}

//a Vector transforms (row-vector on the left)
//fp transform_dir3
/// `v * M` for a 3-component vector and a 3-by-3 matrix
pub fn transform_dir3<V: Num>(v: &[V; 3], m: &[V; 9]) -> [V; 3] {
    let mut r = [V::zero(); 3];
    for col in 0..3 {
        r[col] = v[0] * m[col] + v[1] * m[3 + col] + v[2] * m[6 + col];
    }
    r
}

//fp transform_point12
/// `v * M` for a 3-component position and a 4-by-3 affine matrix; the
/// position's implicit w of 1 picks up the translation row
pub fn transform_point12<V: Num>(v: &[V; 3], m: &[V; 12]) -> [V; 3] {
    let mut r = [V::zero(); 3];
    for col in 0..3 {
        r[col] = v[0] * m[col] + v[1] * m[3 + col] + v[2] * m[6 + col] + m[9 + col];
    }
    r
}

//fp transform_vec4_12
/// `v * M` for a 4-component vector and a 4-by-3 affine matrix
///
/// The result's w equals the input w: a w=0 direction stays a
/// direction and a w=1 position picks up the translation.
pub fn transform_vec4_12<V: Num>(v: &[V; 4], m: &[V; 12]) -> [V; 4] {
    let mut r = [V::zero(); 4];
    for col in 0..3 {
        r[col] = v[0] * m[col] + v[1] * m[3 + col] + v[2] * m[6 + col] + v[3] * m[9 + col];
    }
    r[3] = v[3];
    r
}

//fp transform_vec4
/// `v * M` for a 4-component vector and a 4-by-4 matrix
pub fn transform_vec4<V: Num>(v: &[V; 4], m: &[V; 16]) -> [V; 4] {
    let mut r = [V::zero(); 4];
    for col in 0..4 {
        r[col] =
            v[0] * m[col] + v[1] * m[4 + col] + v[2] * m[8 + col] + v[3] * m[12 + col];
    }
    r
}

//fp transform_point16
/// `v * M` for a 3-component position and a 4-by-4 matrix, w taken as 1
pub fn transform_point16<V: Num>(v: &[V; 3], m: &[V; 16]) -> [V; 3] {
    let r = transform_vec4(&[v[0], v[1], v[2], V::one()], m);
    [r[0], r[1], r[2]]
}

//a Formatting
//mp fmt - format a matrix for display
/// Format the matrix as `[(row) (row) ...]` for display
pub fn fmt<V: Num>(f: &mut std::fmt::Formatter, m: &[V], cols: usize) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, row) in m.chunks(cols).enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        vector::fmt(f, row)?;
    }
    write!(f, "]")
}
