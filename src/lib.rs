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

@file    lib.rs
@brief   3D maths kernel and threading/timing runtime
 */

//a Documentation
#![warn(missing_docs)]
/*!

# gimbal

This library bundles the two foundations a simulation or graphics
codebase leans on everywhere: a 3D linear-algebra and geometry kernel
(vectors, quaternions, matrices with specialized roles, planes,
spheres, triangles, and a bulk point-transform kernel), and a small
threading and timing runtime (threads with cooperative interruption, a
mutex family with scoped locks, a monotonic stopwatch, and a
100-nanosecond-tick duration type).

The maths types are generic over the [Float] scalar, so `f32` and
`f64` are both first-class; the [Real] alias names the scalar selected
by the `single-precision` feature (off: `f64`). The `degrees` feature
switches every angle-taking API from radians to degrees.

## Conventions

Matrices are dense and row-major, and vectors multiply on the left:
`v' = v * M`. A product `a * b` therefore applies `a` first and `b`
second, for matrices, quaternions and space conversions alike. The
cross product is right-handed, and Euler angles compose in the order
Z, then X, then Y (yaw, pitch, roll).

Comparisons that must tolerate rounding go through the [approx] traits
which every maths type implements.

## Maths example

```
use gimbal::{Plane, Quaternion, Vec3, Intersection};

// Three coordinate planes meet in the origin
let yz = Plane::<f64>::plane_yz();
let zx = Plane::plane_zx();
let xy = Plane::plane_xy();
let mut meet = Vec3::zero();
assert_eq!(yz.intersection_point(&zx, &xy, &mut meet), Intersection::One);
assert!(meet.length() < 1.0e-12);

// A quarter turn about Z, built from Euler angles, moves the plane
// x = 1 onto a plane one unit along the rotated normal
let quarter = std::f64::consts::FRAC_PI_2;
let q = Quaternion::from_euler(0.0, 0.0, quarter);
let x1 = Plane::new(1.0, 0.0, 0.0, -1.0);
let rotated = x1.rotate_q(&q);
assert!(rotated.contains(&rotated.point_projection(&Vec3::zero())));
```

## Runtime example

```
use gimbal::{this_thread, Mutex, ScopedLock, Thread, TimeSpan};

static COUNT: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(0);
static GUARD: Mutex = Mutex::new();

let mut worker = Thread::spawn(|| {
    this_thread::sleep(TimeSpan::from_milliseconds(1));
    let _lock = ScopedLock::new(&GUARD, true);
    COUNT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
});
worker.join();
assert_eq!(COUNT.load(std::sync::atomic::Ordering::Relaxed), 1);
```
!*/

//a Imports
mod matrix_op;
mod policy;
mod quaternion_op;
mod traits;
mod vector_op;

mod matrix;
mod orb;
mod plane;
mod quaternion;
mod ray;
mod relation;
mod rotation;
mod scaling;
mod space_conversion;
mod transformation;
mod translation;
mod triangle;
#[path = "vector.rs"]
mod vector_types;

mod mutex;
mod scoped_lock;
mod stopwatch;
mod thread;
mod time_span;

pub mod points;
pub mod this_thread;

//a Exports
pub use policy::{angle_to_rad, rad_to_angle, Real};
pub use traits::{Float, Num, Point3};

pub use matrix::{AffineStorage, Matrix3x3, Matrix4x3, Matrix4x4};
pub use orb::Sphere;
pub use plane::Plane;
pub use quaternion::Quaternion;
pub use ray::{LineSegment, Ray};
pub use relation::{Intersection, SpaceRelation};
pub use rotation::RotationMatrix3x3;
pub use scaling::ScalingMatrix3x3;
pub use space_conversion::SpaceConversionMatrix;
pub use transformation::{
    TransformationMatrix, TransformationMatrix4x3, TransformationMatrix4x4,
};
pub use translation::{TranslationMatrix, TranslationMatrix4x3, TranslationMatrix4x4};
pub use triangle::Triangle3D;
pub use vector_types::{Vec2, Vec3, Vec4};

pub use mutex::{Lockable, Mutex, RecursiveMutex, SharedMutex};
pub use scoped_lock::{ScopedLock, ScopedLockPair};
pub use stopwatch::{EnclosedBehavior, Stopwatch, StopwatchEnclosed};
pub use thread::{Thread, ThreadPriority};
pub use time_span::TimeSpan;

/// Vector functions module
///
/// N-component vector operations over plain `[F; N]` arrays, the layer
/// the [Vec2], [Vec3] and [Vec4] value types are built on.
pub mod vector {
    pub use super::vector_op::*;
}

/// Quaternion functions module
///
/// Quaternion operations over plain `[x, y, z, w]` arrays, the layer
/// the [Quaternion](crate::Quaternion) value type is built on.
pub mod quat {
    pub use super::quaternion_op::*;
}

/// Matrix functions module
///
/// Row-major matrix operations over plain arrays: `[F; 9]` (3-by-3),
/// `[F; 12]` (4-by-3 affine) and `[F; 16]` (4-by-4).
pub mod matrix_fn {
    pub use super::matrix_op::*;
}
