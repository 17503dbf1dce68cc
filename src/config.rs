//! Defaults applied when creating site-quality components.

use qtty::{Hour, Quantity};

use crate::conditions::Conditions;
use crate::elevation::ElevationConstraintType;
use crate::timing::window::to_ms;
use crate::timing::{TimingWindow, TimingWindowError};

/// Configuration for new [`SiteQuality`](crate::SiteQuality) components.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteQualityConfig {
    /// Conditions a fresh component starts with.
    pub default_conditions: Conditions,
    /// Elevation constraint a fresh component starts with.
    pub default_elevation_constraint: ElevationConstraintType,
    /// Length of timing windows created by [`timing_window_at`](Self::timing_window_at).
    pub default_window_duration: Quantity<Hour>,
}

impl SiteQualityConfig {
    /// A non-repeating window of the configured length opening at `start` (epoch ms).
    pub fn timing_window_at(&self, start: i64) -> Result<TimingWindow, TimingWindowError> {
        TimingWindow::new(
            start,
            to_ms(self.default_window_duration),
            TimingWindow::REPEAT_NEVER,
            0,
        )
    }
}

impl Default for SiteQualityConfig {
    fn default() -> Self {
        Self {
            default_conditions: Conditions::WORST,
            default_elevation_constraint: ElevationConstraintType::None,
            default_window_duration: Quantity::new(24.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconstrained() {
        let cfg = SiteQualityConfig::default();
        assert_eq!(cfg.default_conditions, Conditions::WORST);
        assert_eq!(cfg.default_elevation_constraint, ElevationConstraintType::None);
    }

    #[test]
    fn default_window_matches_starting_at() {
        let cfg = SiteQualityConfig::default();
        assert_eq!(cfg.timing_window_at(42), Ok(TimingWindow::starting_at(42)));
    }

    #[test]
    fn custom_window_duration() {
        let cfg = SiteQualityConfig {
            default_window_duration: Quantity::new(2.0),
            ..SiteQualityConfig::default()
        };
        let w = cfg.timing_window_at(0).unwrap();
        assert_eq!(w.duration(), 2 * 3_600_000);
    }

    #[test]
    fn negative_window_duration_is_rejected() {
        let cfg = SiteQualityConfig {
            default_window_duration: Quantity::new(-3.0),
            ..SiteQualityConfig::default()
        };
        assert!(matches!(
            cfg.timing_window_at(0),
            Err(TimingWindowError::InvalidDuration(_))
        ));
    }
}
