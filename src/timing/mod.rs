//! Timing windows restricting when an observation may be taken.
//!
//! An empty list of windows means the target is always observable.

pub mod error;
pub mod interval;
pub mod window;

pub use error::TimingWindowError;
pub use interval::Interval;
pub use window::TimingWindow;

use qtty::{Quantity, Second};

/// Returns `true` if `at` falls inside any window, or if there are none.
pub fn is_observable_at(windows: &[TimingWindow], at: Quantity<Second>) -> bool {
    windows.is_empty() || windows.iter().any(|w| w.contains(at))
}
