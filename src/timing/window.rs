//! Timing windows: when a target may be observed.

use std::fmt;

use qtty::{Hour, Quantity, Second};

use super::error::TimingWindowError;
use super::interval::Interval;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_HOUR: i64 = MS_PER_SECOND * 60 * 60;

/// Converts epoch milliseconds to seconds on the scheduling axis.
pub fn ms_to_seconds(ms: i64) -> Quantity<Second> {
    Quantity::new(ms as f64 / MS_PER_SECOND as f64)
}

/// Converts a duration to whole milliseconds, truncating sub-millisecond parts.
pub fn to_ms(duration: Quantity<Hour>) -> i64 {
    (duration.to::<Second>().value() * MS_PER_SECOND as f64) as i64
}

/// A (possibly repeating) window during which an observation may be taken.
///
/// All times are integer milliseconds; `start` is an epoch timestamp. The
/// window is open over `[start, start + duration]` and then, `repeat` more
/// times, over the same span shifted by multiples of `period`.
///
/// - `duration == WINDOW_REMAINS_OPEN_FOREVER`: once open, never closes.
/// - `repeat == REPEAT_FOREVER`: repeats without limit.
/// - `repeat == REPEAT_NEVER`: a single occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimingWindow"))]
pub struct TimingWindow {
    start: i64,
    duration: i64,
    repeat: i32,
    period: i64,
}

impl TimingWindow {
    pub const WINDOW_REMAINS_OPEN_FOREVER: i64 = -1;
    pub const REPEAT_FOREVER: i32 = -1;
    pub const REPEAT_NEVER: i32 = 0;

    /// Length of a window created with [`starting_at`](Self::starting_at).
    pub const DEFAULT_DURATION_MS: i64 = 24 * MS_PER_HOUR;

    pub fn new(
        start: i64,
        duration: i64,
        repeat: i32,
        period: i64,
    ) -> Result<Self, TimingWindowError> {
        if repeat < Self::REPEAT_FOREVER {
            return Err(TimingWindowError::InvalidRepeat(repeat));
        }
        if duration < Self::WINDOW_REMAINS_OPEN_FOREVER {
            return Err(TimingWindowError::InvalidDuration(duration));
        }
        if period < 0 {
            return Err(TimingWindowError::InvalidPeriod(period));
        }
        Ok(Self {
            start,
            duration,
            repeat,
            period,
        })
    }

    /// A one-day, non-repeating window opening at `start`.
    pub const fn starting_at(start: i64) -> Self {
        Self {
            start,
            duration: Self::DEFAULT_DURATION_MS,
            repeat: Self::REPEAT_NEVER,
            period: 0,
        }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn duration(&self) -> i64 {
        self.duration
    }

    pub const fn repeat(&self) -> i32 {
        self.repeat
    }

    pub const fn period(&self) -> i64 {
        self.period
    }

    pub const fn remains_open_forever(&self) -> bool {
        self.duration == Self::WINDOW_REMAINS_OPEN_FOREVER
    }

    pub const fn repeats_forever(&self) -> bool {
        self.repeat == Self::REPEAT_FOREVER
    }

    /// A zero period makes every repetition coincide with the first one.
    const fn repeats(&self) -> bool {
        self.period > 0 && self.repeat != Self::REPEAT_NEVER
    }

    /// Index of the last occurrence, or `None` when unbounded.
    const fn last_index(&self) -> Option<u64> {
        if !self.repeats() {
            Some(0)
        } else if self.repeats_forever() {
            None
        } else {
            Some(self.repeat as u64)
        }
    }

    /// Returns `true` if the window is open at `at`.
    pub fn contains(&self, at: Quantity<Second>) -> bool {
        let t = at.value();
        let start = ms_to_seconds(self.start).value();
        if t < start {
            return false;
        }
        if self.remains_open_forever() {
            return true;
        }

        let offset = t - start;
        let period = ms_to_seconds(self.period).value();
        let index = if self.repeats() {
            let k = (offset / period).floor();
            match self.last_index() {
                Some(last) => k.min(last as f64),
                None => k,
            }
        } else {
            0.0
        };

        offset - index * period <= ms_to_seconds(self.duration).value()
    }

    /// Occurrences of this window clipped to `range`, in chronological order.
    pub fn occurrences(&self, range: Interval<Second>) -> Vec<Interval<Second>> {
        let start = ms_to_seconds(self.start).value();
        let range_start = range.start().value();
        let range_end = range.end().value();

        if self.remains_open_forever() {
            return if start <= range_end {
                vec![Interval::from_f64(start.max(range_start), range_end)]
            } else {
                Vec::new()
            };
        }

        let duration = ms_to_seconds(self.duration).value();
        let period = ms_to_seconds(self.period).value();
        let last = self.last_index();

        // Skip straight to the first occurrence that can reach the range.
        let mut k = if self.repeats() {
            ((range_start - start - duration) / period).floor().max(0.0) as u64
        } else {
            0
        };

        let mut out = Vec::new();
        loop {
            if last.is_some_and(|last| k > last) {
                break;
            }
            let open = start + k as f64 * period;
            if open > range_end {
                break;
            }
            if let Some(hit) = Interval::from_f64(open, open + duration).intersection(&range) {
                out.push(hit);
            }
            k += 1;
        }
        out
    }
}

impl fmt::Display for TimingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {} {}}}", self.start, self.duration, self.repeat, self.period)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTimingWindow {
    start: i64,
    duration: i64,
    repeat: i32,
    period: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimingWindow> for TimingWindow {
    type Error = TimingWindowError;

    fn try_from(raw: RawTimingWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.duration, raw.repeat, raw.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = MS_PER_HOUR;

    fn s(value: f64) -> Quantity<Second> {
        Quantity::new(value)
    }

    fn iv(start: f64, end: f64) -> Interval<Second> {
        Interval::from_f64(start, end)
    }

    #[test]
    fn rejects_invalid_fields() {
        assert_eq!(
            TimingWindow::new(0, HOUR, -2, 0),
            Err(TimingWindowError::InvalidRepeat(-2))
        );
        assert_eq!(
            TimingWindow::new(0, -5, 0, 0),
            Err(TimingWindowError::InvalidDuration(-5))
        );
        assert_eq!(
            TimingWindow::new(0, HOUR, 1, -1),
            Err(TimingWindowError::InvalidPeriod(-1))
        );
        assert!(TimingWindow::new(0, -1, -1, HOUR).is_ok());
    }

    #[test]
    fn starting_at_is_one_day_without_repeats() {
        let w = TimingWindow::starting_at(1_000);
        assert_eq!(w.start(), 1_000);
        assert_eq!(w.duration(), 24 * HOUR);
        assert_eq!(w.repeat(), TimingWindow::REPEAT_NEVER);
        assert_eq!(w.period(), 0);
    }

    #[test]
    fn display_lists_fields_in_braces() {
        let w = TimingWindow::new(10, 20, 3, 40).unwrap();
        assert_eq!(w.to_string(), "{10 20 3 40}");
    }

    #[test]
    fn single_window_contains() {
        let w = TimingWindow::new(0, HOUR, TimingWindow::REPEAT_NEVER, 0).unwrap();
        assert!(w.contains(s(0.0)));
        assert!(w.contains(s(3600.0)));
        assert!(!w.contains(s(3601.0)));
        assert!(!w.contains(s(-1.0)));
    }

    #[test]
    fn repeating_window_contains_each_occurrence() {
        // One hour open every three hours, twice more after the first.
        let w = TimingWindow::new(0, HOUR, 2, 3 * HOUR).unwrap();
        assert!(w.contains(s(1800.0)));
        assert!(!w.contains(s(2.0 * 3600.0)));
        assert!(w.contains(s(3.0 * 3600.0 + 10.0)));
        assert!(w.contains(s(6.0 * 3600.0 + 10.0)));
        assert!(!w.contains(s(9.0 * 3600.0 + 10.0)));
    }

    #[test]
    fn forever_repeating_window_never_runs_out() {
        let w = TimingWindow::new(0, HOUR, TimingWindow::REPEAT_FOREVER, 24 * HOUR).unwrap();
        assert!(w.contains(s(1000.0 * 86400.0 + 60.0)));
        assert!(!w.contains(s(1000.0 * 86400.0 + 7200.0)));
    }

    #[test]
    fn open_forever_window() {
        let w = TimingWindow::new(5_000, TimingWindow::WINDOW_REMAINS_OPEN_FOREVER, 0, 0).unwrap();
        assert!(!w.contains(s(4.0)));
        assert!(w.contains(s(1.0e9)));
        assert_eq!(w.occurrences(iv(0.0, 100.0)), vec![iv(5.0, 100.0)]);
    }

    #[test]
    fn occurrences_are_clipped_to_range() {
        let w = TimingWindow::new(0, HOUR, 2, 3 * HOUR).unwrap();
        let got = w.occurrences(iv(1800.0, 7.0 * 3600.0));
        assert_eq!(
            got,
            vec![
                iv(1800.0, 3600.0),
                iv(3.0 * 3600.0, 4.0 * 3600.0),
                iv(6.0 * 3600.0, 7.0 * 3600.0),
            ]
        );
    }

    #[test]
    fn occurrences_skip_ahead_for_late_ranges() {
        let w = TimingWindow::new(0, HOUR, TimingWindow::REPEAT_FOREVER, 24 * HOUR).unwrap();
        let day = 86400.0;
        let got = w.occurrences(iv(365.0 * day, 366.0 * day + 1.0));
        assert_eq!(
            got,
            vec![
                iv(365.0 * day, 365.0 * day + 3600.0),
                iv(366.0 * day, 366.0 * day + 1.0),
            ]
        );
    }

    #[test]
    fn occurrences_outside_range_are_empty() {
        let w = TimingWindow::starting_at(0);
        assert!(w.occurrences(iv(2.0 * 86400.0, 3.0 * 86400.0)).is_empty());
    }

    #[test]
    fn duration_conversion_to_ms() {
        assert_eq!(to_ms(Quantity::<Hour>::new(24.0)), TimingWindow::DEFAULT_DURATION_MS);
    }
}
