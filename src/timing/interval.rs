//! Closed time interval used to report timing-window occurrences.

use qtty::{Quantity, Unit};

/// Continuous range `[start, end]` during which a window is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: Quantity<U>, end: Quantity<U>) -> Self {
        assert!(start.value() <= end.value(), "Interval start must be <= end");
        Self { start, end }
    }

    pub const fn from_f64(start: f64, end: f64) -> Self {
        Self::new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    pub const fn overlaps(&self, other: &Interval<U>) -> bool {
        self.start.value() <= other.end.value() && other.start.value() <= self.end.value()
    }

    pub fn intersection(&self, other: &Interval<U>) -> Option<Interval<U>> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start.value().max(other.start.value());
        let end = self.end.value().min(other.end.value());
        Some(Interval::from_f64(start, end))
    }
}
