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

@file    time_span.rs
@brief   Duration value type with 100-nanosecond resolution
 */

//a Imports
use serde::{Deserialize, Serialize};

//a Constants
const TICKS_PER_MICROSECOND: u64 = 10;
const TICKS_PER_MILLISECOND: u64 = 1_000 * TICKS_PER_MICROSECOND;
const TICKS_PER_SECOND: u64 = 1_000 * TICKS_PER_MILLISECOND;
const TICKS_PER_MINUTE: u64 = 60 * TICKS_PER_SECOND;
const TICKS_PER_HOUR: u64 = 60 * TICKS_PER_MINUTE;
const TICKS_PER_DAY: u64 = 24 * TICKS_PER_HOUR;
const NANOSECONDS_PER_TICK: u64 = 100;

//a TimeSpan
//tp TimeSpan
/// A time span with an accuracy of hundreds of nanoseconds, stored as
/// an unsigned 64-bit tick count
///
/// The arithmetic saturates at the maximum representable span instead
/// of wrapping, and subtraction yields the absolute difference: a
/// [TimeSpan] never represents a negative duration, so chained
/// subtractions do not behave like signed arithmetic (3 - 5 is 2, and
/// (3 - 5) - 6 is 4).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSpan {
    ticks: u64,
}

//ip TimeSpan
impl TimeSpan {
    /// The longest representable time span
    pub const MAX: TimeSpan = TimeSpan { ticks: u64::MAX };

    //fp zero
    /// The zero-length time span
    #[inline]
    pub const fn zero() -> Self {
        Self { ticks: 0 }
    }

    //fp from_ticks
    /// A time span of a raw number of 100-nanosecond ticks
    #[inline]
    pub const fn from_ticks(ticks: u64) -> Self {
        Self { ticks }
    }

    //fp new
    /// Compose a time span from counts of every unit
    ///
    /// The composition saturates to [TimeSpan::MAX] when the total
    /// exceeds what 64 bits of ticks can hold.
    pub fn new(
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
        milliseconds: u64,
        microseconds: u64,
        hundreds_of_nanoseconds: u64,
    ) -> Self {
        let mul = |amount: u64, per: u64| amount.checked_mul(per).unwrap_or(u64::MAX);
        let ticks = mul(days, TICKS_PER_DAY)
            .saturating_add(mul(hours, TICKS_PER_HOUR))
            .saturating_add(mul(minutes, TICKS_PER_MINUTE))
            .saturating_add(mul(seconds, TICKS_PER_SECOND))
            .saturating_add(mul(milliseconds, TICKS_PER_MILLISECOND))
            .saturating_add(mul(microseconds, TICKS_PER_MICROSECOND))
            .saturating_add(hundreds_of_nanoseconds);
        Self { ticks }
    }

    //fp from_milliseconds
    /// A time span of a number of milliseconds
    pub fn from_milliseconds(milliseconds: u64) -> Self {
        Self::new(0, 0, 0, 0, milliseconds, 0, 0)
    }

    //fp from_duration
    /// The time span closest to a [std::time::Duration], saturating
    pub fn from_duration(duration: std::time::Duration) -> Self {
        let ticks = duration.as_nanos() / NANOSECONDS_PER_TICK as u128;
        Self {
            ticks: ticks.min(u64::MAX as u128) as u64,
        }
    }

    //mp to_duration
    /// The [std::time::Duration] of the same length
    pub fn to_duration(&self) -> std::time::Duration {
        let secs = self.ticks / TICKS_PER_SECOND;
        let nanos = (self.ticks % TICKS_PER_SECOND) * NANOSECONDS_PER_TICK;
        std::time::Duration::new(secs, nanos as u32)
    }

    //mp ticks
    /// The raw count of 100-nanosecond ticks
    #[inline]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    //mp days / hours / minutes / seconds / milliseconds / microseconds
    /// The number of complete days
    pub const fn days(&self) -> u32 {
        (self.ticks / TICKS_PER_DAY) as u32
    }
    /// The number of complete hours
    pub const fn hours(&self) -> u32 {
        (self.ticks / TICKS_PER_HOUR) as u32
    }
    /// The number of complete minutes
    pub const fn minutes(&self) -> u32 {
        (self.ticks / TICKS_PER_MINUTE) as u32
    }
    /// The number of complete seconds
    pub const fn seconds(&self) -> u64 {
        self.ticks / TICKS_PER_SECOND
    }
    /// The number of complete milliseconds
    pub const fn milliseconds(&self) -> u64 {
        self.ticks / TICKS_PER_MILLISECOND
    }
    /// The number of complete microseconds
    pub const fn microseconds(&self) -> u64 {
        self.ticks / TICKS_PER_MICROSECOND
    }
    /// The number of hundreds of nanoseconds, which is the tick count
    pub const fn hundreds_of_nanoseconds(&self) -> u64 {
        self.ticks
    }

    //zz All done
}

//ip Add/Sub for TimeSpan
impl std::ops::Add for TimeSpan {
    type Output = Self;
    /// Saturating addition
    fn add(self, other: Self) -> Self {
        Self {
            ticks: self.ticks.saturating_add(other.ticks),
        }
    }
}
impl std::ops::AddAssign for TimeSpan {
    fn add_assign(&mut self, other: Self) {
        self.ticks = self.ticks.saturating_add(other.ticks);
    }
}
impl std::ops::Sub for TimeSpan {
    type Output = Self;
    /// The absolute difference of the two spans
    fn sub(self, other: Self) -> Self {
        Self {
            ticks: self.ticks.abs_diff(other.ticks),
        }
    }
}
impl std::ops::SubAssign for TimeSpan {
    fn sub_assign(&mut self, other: Self) {
        self.ticks = self.ticks.abs_diff(other.ticks);
    }
}

//ip From<Duration> for TimeSpan and back
impl From<std::time::Duration> for TimeSpan {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_duration(duration)
    }
}
impl From<TimeSpan> for std::time::Duration {
    fn from(span: TimeSpan) -> Self {
        span.to_duration()
    }
}

//ip Display for TimeSpan
impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "TS({})", self.ticks)
    }
}

//a Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_and_accessors() {
        let ts = TimeSpan::new(1, 2, 3, 4, 5, 6, 7);
        assert_eq!(ts.days(), 1);
        assert_eq!(ts.hours(), 26);
        assert_eq!(ts.minutes(), 26 * 60 + 3);
        assert_eq!(
            ts.ticks(),
            TICKS_PER_DAY + 2 * TICKS_PER_HOUR + 3 * TICKS_PER_MINUTE + 4 * TICKS_PER_SECOND
                + 5 * TICKS_PER_MILLISECOND
                + 6 * TICKS_PER_MICROSECOND
                + 7
        );
    }

    #[test]
    fn composition_saturates() {
        let ts = TimeSpan::new(u64::MAX, 0, 0, 0, 0, 0, 1);
        assert_eq!(ts, TimeSpan::MAX);
    }

    #[test]
    fn addition_saturates() {
        let ts = TimeSpan::MAX + TimeSpan::from_ticks(1);
        assert_eq!(ts, TimeSpan::MAX);
        let mut ts = TimeSpan::from_ticks(u64::MAX - 2);
        ts += TimeSpan::from_ticks(100);
        assert_eq!(ts, TimeSpan::MAX);
    }

    #[test]
    fn subtraction_is_absolute_difference() {
        let three = TimeSpan::from_ticks(3);
        let five = TimeSpan::from_ticks(5);
        assert_eq!(three - five, TimeSpan::from_ticks(2));
        assert_eq!(five - three, TimeSpan::from_ticks(2));
        let six = TimeSpan::from_ticks(6);
        assert_eq!(three - five - six, TimeSpan::from_ticks(4));
    }

    #[test]
    fn comparisons_total_order() {
        assert!(TimeSpan::from_ticks(1) < TimeSpan::from_ticks(2));
        assert!(TimeSpan::from_ticks(2) <= TimeSpan::from_ticks(2));
        assert!(TimeSpan::MAX > TimeSpan::zero());
    }

    #[test]
    fn duration_round_trip() {
        let ts = TimeSpan::new(0, 0, 0, 2, 500, 0, 0);
        let d = ts.to_duration();
        assert_eq!(d, std::time::Duration::from_millis(2500));
        assert_eq!(TimeSpan::from_duration(d), ts);
    }
}
