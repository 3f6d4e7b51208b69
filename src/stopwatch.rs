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

@file    stopwatch.rs
@brief   Monotonic stopwatch and its enclosed time-lapse variant
 */

//a Imports
use std::time::Instant;

use crate::policy::Real;
use crate::time_span::TimeSpan;

//a Constants
const NANOSECONDS_PER_MILLISECOND: u64 = 1_000_000;
const NANOSECONDS_PER_TICK: u64 = 100;

//a Stopwatch
//tp Stopwatch
/// A stopwatch over the monotonic clock: capture an instant with
/// [Stopwatch::set], read the elapsed time in several shapes
///
/// The reference instant comes from [std::time::Instant], which is
/// monotonic and unaffected by wall-clock adjustments; the OS tick
/// frequency is captured once by the standard library on first use, so
/// concurrent first reads are safe.
///
/// Reading the elapsed time before the first [Stopwatch::set] is a
/// programmer error: it is debug-asserted, and reads as zero elapsed
/// time in release builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stopwatch {
    reference: Option<Instant>,
}

//ip Stopwatch
impl Stopwatch {
    //fp new
    /// Create a stopwatch with no reference instant set
    pub fn new() -> Self {
        Self::default()
    }

    //mp set
    /// Capture the current monotonic instant as the new reference
    pub fn set(&mut self) {
        self.reference = Some(Instant::now());
    }

    //mp is_set
    /// True once [Stopwatch::set] has been called
    pub fn is_set(&self) -> bool {
        self.reference.is_some()
    }

    //fi elapsed_nanoseconds
    fn elapsed_nanoseconds(&self) -> u64 {
        debug_assert!(self.reference.is_some(), "The stopwatch has not been set");
        self.reference
            .map(|r| r.elapsed().as_nanos().min(u64::MAX as u128) as u64)
            .unwrap_or(0)
    }

    //mp elapsed_as_integer
    /// The elapsed time since the reference instant, in nanoseconds
    pub fn elapsed_as_integer(&self) -> u64 {
        self.elapsed_nanoseconds()
    }

    //mp elapsed_as_float
    /// The elapsed time in milliseconds as the policy scalar
    ///
    /// In single precision the fractional part is dropped to preserve
    /// range; in double precision it is kept.
    pub fn elapsed_as_float(&self) -> Real {
        #[cfg(feature = "single-precision")]
        {
            (self.elapsed_nanoseconds() / NANOSECONDS_PER_MILLISECOND) as Real
        }
        #[cfg(not(feature = "single-precision"))]
        {
            self.elapsed_nanoseconds() as Real / NANOSECONDS_PER_MILLISECOND as Real
        }
    }

    //mp elapsed_as_time_span
    /// The elapsed time as a [TimeSpan]
    pub fn elapsed_as_time_span(&self) -> TimeSpan {
        TimeSpan::from_ticks(self.elapsed_nanoseconds() / NANOSECONDS_PER_TICK)
    }

    //zz All done
}

//a EnclosedBehavior
//tp EnclosedBehavior
/// How [StopwatchEnclosed] maps elapsed time beyond its time lapse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnclosedBehavior {
    /// The progression is clamped into [0, 1]
    #[default]
    Clamped,
    /// The progression grows without bound
    Proportional,
    /// The progression wraps around, staying in [0, 1)
    Cyclic,
}

//a StopwatchEnclosed
//tp StopwatchEnclosed
/// A stopwatch that reports elapsed time as a proportion of a fixed
/// time lapse
///
/// Zero means no progress and one means exactly a full time lapse has
/// passed; what happens beyond one depends on the [EnclosedBehavior].
/// The lapse is held in milliseconds of the policy scalar, so in
/// single precision its resolution is the millisecond.
#[derive(Clone, Copy, Debug, Default)]
pub struct StopwatchEnclosed {
    stopwatch: Stopwatch,
    lapse_ms: Real,
    behavior: EnclosedBehavior,
}

//ip StopwatchEnclosed
impl StopwatchEnclosed {
    //fp new
    /// Create with a zero time lapse and the [EnclosedBehavior::Clamped]
    /// behavior; the lapse must be set before reading a progression
    pub fn new() -> Self {
        Self::default()
    }

    //fp with_lapse
    /// Create from a time-lapse length (which must be greater than
    /// zero) and a behavior
    pub fn with_lapse(lapse: TimeSpan, behavior: EnclosedBehavior) -> Self {
        let mut r = Self {
            stopwatch: Stopwatch::new(),
            lapse_ms: 0 as Real,
            behavior,
        };
        r.set_time_lapse(lapse);
        r
    }

    //mp set
    /// Capture the current monotonic instant as the new reference
    pub fn set(&mut self) {
        self.stopwatch.set();
    }

    //mp set_time_lapse
    /// Set the reference time lapse; it must be greater than zero
    pub fn set_time_lapse(&mut self, lapse: TimeSpan) {
        debug_assert!(
            lapse > TimeSpan::zero(),
            "The time lapse must be greater than zero"
        );
        self.lapse_ms = lapse.milliseconds() as Real;
    }

    //mp time_lapse
    /// The reference time lapse
    pub fn time_lapse(&self) -> TimeSpan {
        TimeSpan::from_milliseconds(self.lapse_ms as u64)
    }

    //mp set_behavior / behavior
    /// Set the progression behavior
    pub fn set_behavior(&mut self, behavior: EnclosedBehavior) {
        self.behavior = behavior;
    }
    /// The progression behavior
    pub fn behavior(&self) -> EnclosedBehavior {
        self.behavior
    }

    //mp progression
    /// The elapsed time as a proportion of the time lapse, adjusted
    /// by the behavior: in [0, 1] clamped, [0, inf) proportional, or
    /// [0, 1) cyclic
    pub fn progression(&self) -> Real {
        let raw = self.stopwatch.elapsed_as_float() / self.lapse_ms;
        match self.behavior {
            EnclosedBehavior::Clamped => raw.clamp(0 as Real, 1 as Real),
            EnclosedBehavior::Proportional => raw,
            EnclosedBehavior::Cyclic => raw.fract(),
        }
    }

    //mp percentage
    /// One hundred times [StopwatchEnclosed::progression]
    pub fn percentage(&self) -> Real {
        (100 as Real) * self.progression()
    }

    //mp elapsed_as_integer / elapsed_as_float / elapsed_as_time_span
    /// The elapsed time since the reference instant, in nanoseconds
    pub fn elapsed_as_integer(&self) -> u64 {
        self.stopwatch.elapsed_as_integer()
    }
    /// The elapsed time in milliseconds as the policy scalar
    pub fn elapsed_as_float(&self) -> Real {
        self.stopwatch.elapsed_as_float()
    }
    /// The elapsed time as a [TimeSpan]
    pub fn elapsed_as_time_span(&self) -> TimeSpan {
        self.stopwatch.elapsed_as_time_span()
    }

    //zz All done
}
