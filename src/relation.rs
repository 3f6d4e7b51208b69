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

@file    relation.rs
@brief   Classification results of the space-relation and intersection
         queries
 */

//a Imports
use serde::{Deserialize, Serialize};

//a Intersection
//tp Intersection
/// How many points an intersection query yields
///
/// This is a classified result, not an error: every variant is a
/// normal answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intersection {
    /// The entities do not intersect
    None,
    /// The entities intersect in exactly one point
    One,
    /// The entities intersect in infinitely many points
    Infinite,
}

//a SpaceRelation
//tp SpaceRelation
/// Where an entity lies relative to a plane
///
/// The positive side is the half-space the plane's normal points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceRelation {
    /// The entity lies in the plane
    Contained,
    /// The entity lies entirely in the half-space the normal points
    /// into
    PositiveSide,
    /// The entity lies entirely in the opposite half-space
    NegativeSide,
    /// The entity has parts on both sides of the plane
    BothSides,
}
