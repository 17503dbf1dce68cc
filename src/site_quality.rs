//! Site-quality component: the conditions, elevation constraint and timing
//! windows an observation requires.
//!
//! Every setter reports what it changed as a [`PropertyChange`] (and logs it
//! at `debug`), returning `None` when the new value equals the old one.

use std::fmt;

use qtty::{Quantity, Second};

use crate::band::{CloudCover, ImageQuality, SkyBackground, WaterVapor};
use crate::conditions::Conditions;
use crate::config::SiteQualityConfig;
use crate::elevation::ElevationConstraintType;
use crate::timing::{self, TimingWindow};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Properties of a [`SiteQuality`] that can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    CloudCover,
    ImageQuality,
    SkyBackground,
    WaterVapor,
    ElevationConstraintType,
    ElevationConstraintMin,
    ElevationConstraintMax,
    TimingWindows,
}

impl Property {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CloudCover => "CloudCover",
            Self::ImageQuality => "ImageQuality",
            Self::SkyBackground => "SkyBackground",
            Self::WaterVapor => "WaterVapor",
            Self::ElevationConstraintType => "ElevationConstraintType",
            Self::ElevationConstraintMin => "ElevationConstraintMin",
            Self::ElevationConstraintMax => "ElevationConstraintMax",
            Self::TimingWindows => "TimingWindows",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A property that changed, with old and new values rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub property: Property,
    pub old_value: String,
    pub new_value: String,
}

impl PropertyChange {
    fn new(property: Property, old: impl fmt::Display, new: impl fmt::Display) -> Self {
        let change = Self {
            property,
            old_value: old.to_string(),
            new_value: new.to_string(),
        };
        tracing::debug!(
            property = %change.property,
            old = %change.old_value,
            new = %change.new_value,
            "site quality property changed"
        );
        change
    }
}

/// Renders a window list as `[{..}, {..}]`.
struct Windows<'a>(&'a [TimingWindow]);

impl fmt::Display for Windows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, w) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{w}")?;
        }
        f.write_str("]")
    }
}

/// Scheduling-condition requirements of one observation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteQuality {
    conditions: Conditions,
    elevation_constraint_type: ElevationConstraintType,
    #[cfg_attr(feature = "serde", serde(default))]
    elevation_constraint_min: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    elevation_constraint_max: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    timing_windows: Vec<TimingWindow>,
}

impl Default for SiteQuality {
    fn default() -> Self {
        Self::from_config(&SiteQualityConfig::default())
    }
}

impl SiteQuality {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SiteQualityConfig) -> Self {
        Self {
            conditions: config.default_conditions,
            elevation_constraint_type: config.default_elevation_constraint,
            elevation_constraint_min: 0.0,
            elevation_constraint_max: 0.0,
            timing_windows: Vec::new(),
        }
    }

    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn conditions(&self) -> Conditions {
        self.conditions
    }

    pub fn cloud_cover(&self) -> CloudCover {
        self.conditions.cloud_cover()
    }

    pub fn image_quality(&self) -> ImageQuality {
        self.conditions.image_quality()
    }

    pub fn sky_background(&self) -> SkyBackground {
        self.conditions.sky_background()
    }

    pub fn water_vapor(&self) -> WaterVapor {
        self.conditions.water_vapor()
    }

    /// Replaces all four bands at once, reporting one change per dimension.
    pub fn set_conditions(&mut self, conditions: Conditions) -> Vec<PropertyChange> {
        [
            self.set_cloud_cover(conditions.cloud_cover()),
            self.set_image_quality(conditions.image_quality()),
            self.set_sky_background(conditions.sky_background()),
            self.set_water_vapor(conditions.water_vapor()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn set_cloud_cover(&mut self, cc: CloudCover) -> Option<PropertyChange> {
        let old = self.conditions.cloud_cover();
        (old != cc).then(|| {
            self.conditions = self.conditions.cc(cc);
            PropertyChange::new(Property::CloudCover, old, cc)
        })
    }

    pub fn set_image_quality(&mut self, iq: ImageQuality) -> Option<PropertyChange> {
        let old = self.conditions.image_quality();
        (old != iq).then(|| {
            self.conditions = self.conditions.iq(iq);
            PropertyChange::new(Property::ImageQuality, old, iq)
        })
    }

    pub fn set_sky_background(&mut self, sb: SkyBackground) -> Option<PropertyChange> {
        let old = self.conditions.sky_background();
        (old != sb).then(|| {
            self.conditions = self.conditions.sb(sb);
            PropertyChange::new(Property::SkyBackground, old, sb)
        })
    }

    pub fn set_water_vapor(&mut self, wv: WaterVapor) -> Option<PropertyChange> {
        let old = self.conditions.water_vapor();
        (old != wv).then(|| {
            self.conditions = self.conditions.wv(wv);
            PropertyChange::new(Property::WaterVapor, old, wv)
        })
    }

    pub fn elevation_constraint_type(&self) -> ElevationConstraintType {
        self.elevation_constraint_type
    }

    pub fn elevation_constraint_min(&self) -> f64 {
        self.elevation_constraint_min
    }

    pub fn elevation_constraint_max(&self) -> f64 {
        self.elevation_constraint_max
    }

    /// Changes the elevation constraint kind. The min/max values are kept.
    pub fn set_elevation_constraint_type(
        &mut self,
        kind: ElevationConstraintType,
    ) -> Option<PropertyChange> {
        let old = self.elevation_constraint_type;
        (old != kind).then(|| {
            self.elevation_constraint_type = kind;
            PropertyChange::new(Property::ElevationConstraintType, old, kind)
        })
    }

    pub fn set_elevation_constraint_min(&mut self, min: f64) -> Option<PropertyChange> {
        let old = self.elevation_constraint_min;
        (old != min).then(|| {
            self.elevation_constraint_min = min;
            PropertyChange::new(Property::ElevationConstraintMin, old, min)
        })
    }

    pub fn set_elevation_constraint_max(&mut self, max: f64) -> Option<PropertyChange> {
        let old = self.elevation_constraint_max;
        (old != max).then(|| {
            self.elevation_constraint_max = max;
            PropertyChange::new(Property::ElevationConstraintMax, old, max)
        })
    }

    /// Switches to `kind` and resets min/max to its default range.
    pub fn use_default_elevation_range(
        &mut self,
        kind: ElevationConstraintType,
    ) -> Vec<PropertyChange> {
        [
            self.set_elevation_constraint_type(kind),
            self.set_elevation_constraint_min(kind.default_min()),
            self.set_elevation_constraint_max(kind.default_max()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn timing_windows(&self) -> &[TimingWindow] {
        &self.timing_windows
    }

    /// Applies `edit` to the window list, reporting a change if it returns `true`.
    fn change_timing_windows(
        &mut self,
        edit: impl FnOnce(&mut Vec<TimingWindow>) -> bool,
    ) -> Option<PropertyChange> {
        let before = self.timing_windows.clone();
        if !edit(&mut self.timing_windows) || before == self.timing_windows {
            return None;
        }
        Some(PropertyChange::new(
            Property::TimingWindows,
            Windows(&before),
            Windows(&self.timing_windows),
        ))
    }

    pub fn set_timing_windows(&mut self, windows: Vec<TimingWindow>) -> Option<PropertyChange> {
        self.change_timing_windows(|list| {
            *list = windows;
            true
        })
    }

    pub fn add_timing_window(&mut self, window: TimingWindow) -> Option<PropertyChange> {
        self.change_timing_windows(|list| {
            list.push(window);
            true
        })
    }

    pub fn add_timing_windows(
        &mut self,
        windows: impl IntoIterator<Item = TimingWindow>,
    ) -> Option<PropertyChange> {
        self.change_timing_windows(|list| {
            let len = list.len();
            list.extend(windows);
            list.len() != len
        })
    }

    /// Removes the first window equal to `window`.
    pub fn remove_timing_window(&mut self, window: &TimingWindow) -> Option<PropertyChange> {
        self.change_timing_windows(|list| match list.iter().position(|w| w == window) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        })
    }

    /// `true` if the timing windows allow observing at `at` (seconds since epoch).
    pub fn is_observable_at(&self, at: Quantity<Second>) -> bool {
        timing::is_observable_at(&self.timing_windows, at)
    }
}
