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

@file    policy.rs
@brief   Compile-time scalar and angle-unit policy
 */

//a Imports
use crate::Float;

//a Scalar precision policy
//tp Real
/// The policy scalar: `f64` by default, `f32` when the
/// `single-precision` feature is enabled.
///
/// The maths types stay generic over [Float], so both precisions are
/// always usable explicitly; [Real] is what the timing runtime and any
/// policy-following caller computes in.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// The policy scalar: `f32` under the `single-precision` feature.
#[cfg(feature = "single-precision")]
pub type Real = f32;

//a Angle-unit policy
//fp angle_to_rad
/// Convert an angle from the policy unit into radians.
///
/// With the `degrees` feature off this is the identity; with it on,
/// every angle-taking API in the crate expects degrees and routes
/// through this conversion.
#[inline]
pub fn angle_to_rad<F: Float>(angle: F) -> F {
    #[cfg(feature = "degrees")]
    {
        angle.to_radians()
    }
    #[cfg(not(feature = "degrees"))]
    {
        angle
    }
}

//fp rad_to_angle
/// Convert an angle from radians into the policy unit
#[inline]
pub fn rad_to_angle<F: Float>(angle: F) -> F {
    #[cfg(feature = "degrees")]
    {
        angle.to_degrees()
    }
    #[cfg(not(feature = "degrees"))]
    {
        angle
    }
}
