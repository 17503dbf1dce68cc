//! Magnitude adjustments applied to guide-star limits under worse conditions.

use super::{CloudCover, ImageQuality, SkyBackground};

/// Which photometric bands a magnitude limit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandsList {
    /// R-like bands (R, r', UC). Image quality and sky background only
    /// affect limits expressed in these.
    R,
    Other,
}

/// A band that shifts the faintness limit of a guide star.
///
/// Adjustments are negative when conditions make faint stars unusable.
pub trait MagnitudeAdjuster {
    /// Magnitude offset for limits expressed in `bands`.
    fn adjustment(&self, bands: BandsList) -> f64;

    fn adjust_magnitude(&self, magnitude: f64, bands: BandsList) -> f64 {
        magnitude + self.adjustment(bands)
    }
}

impl MagnitudeAdjuster for CloudCover {
    fn adjustment(&self, _bands: BandsList) -> f64 {
        match self {
            Self::Percent20 | Self::Percent50 => 0.0,
            Self::Percent70 => -0.3,
            Self::Percent80 => -1.0,
            Self::Percent90 | Self::Any => -3.0,
        }
    }
}

impl MagnitudeAdjuster for ImageQuality {
    fn adjustment(&self, bands: BandsList) -> f64 {
        if bands != BandsList::R {
            return 0.0;
        }
        match self {
            Self::Percent20 => 0.5,
            Self::Percent70 => 0.0,
            Self::Percent85 => -0.5,
            Self::Any => -1.0,
        }
    }
}

impl MagnitudeAdjuster for SkyBackground {
    fn adjustment(&self, bands: BandsList) -> f64 {
        if bands != BandsList::R {
            return 0.0;
        }
        match self {
            Self::Percent20 | Self::Percent50 => 0.0,
            Self::Percent80 => -0.3,
            Self::Any => -0.5,
        }
    }
}
