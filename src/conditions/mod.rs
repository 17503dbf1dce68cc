//! Observing conditions: one band per site-quality dimension.

use std::fmt;
use std::str::FromStr;

use crate::band::{
    BandsList, CloudCover, ImageQuality, MagnitudeAdjuster, SiteQualityBand, SkyBackground,
    WaterVapor,
};

pub mod error;

pub use error::ParseConditionsError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Separator between dimensions in the canonical string.
pub const SEPARATOR: &str = ", ";

/// Immutable set of site-quality requirements.
///
/// A `Conditions` always holds exactly one band per dimension, in the fixed
/// order cloud cover, image quality, sky background, water vapor. A
/// dimension without a requirement holds its `Any` band. Updates go through
/// the `with_*` methods (or their short aliases), which return a new value
/// and leave the receiver untouched.
///
/// # Canonical form
///
/// `Display` renders the four bands joined by `", "`, which `FromStr`
/// reads back:
///
/// ```
/// use sitequal::band::{ImageQuality, WaterVapor};
/// use sitequal::Conditions;
///
/// let c = Conditions::WORST
///     .iq(ImageQuality::Percent70)
///     .wv(WaterVapor::Percent80);
/// assert_eq!(c.to_string(), "CCAny, IQ70, SBAny, WV80");
/// assert_eq!("CCAny, IQ70, SBAny, WV80".parse::<Conditions>(), Ok(c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conditions {
    cc: CloudCover,
    iq: ImageQuality,
    sb: SkyBackground,
    wv: WaterVapor,
}

impl Conditions {
    /// The tightest band in every dimension.
    pub const BEST: Conditions = Conditions::new(
        CloudCover::Percent20,
        ImageQuality::Percent20,
        SkyBackground::Percent20,
        WaterVapor::Percent20,
    );

    /// Typical requirements of a standard queue observation.
    pub const NOMINAL: Conditions = Conditions::new(
        CloudCover::Percent50,
        ImageQuality::Percent70,
        SkyBackground::Percent50,
        WaterVapor::Any,
    );

    /// No requirement in any dimension.
    pub const WORST: Conditions = Conditions::new(
        CloudCover::Any,
        ImageQuality::Any,
        SkyBackground::Any,
        WaterVapor::Any,
    );

    pub const fn new(
        cc: CloudCover,
        iq: ImageQuality,
        sb: SkyBackground,
        wv: WaterVapor,
    ) -> Self {
        Self { cc, iq, sb, wv }
    }

    pub const fn cloud_cover(&self) -> CloudCover {
        self.cc
    }

    pub const fn image_quality(&self) -> ImageQuality {
        self.iq
    }

    pub const fn sky_background(&self) -> SkyBackground {
        self.sb
    }

    pub const fn water_vapor(&self) -> WaterVapor {
        self.wv
    }

    /// Returns a copy with the cloud cover replaced.
    pub const fn with_cloud_cover(self, cc: CloudCover) -> Self {
        Self { cc, ..self }
    }

    /// Returns a copy with the image quality replaced.
    pub const fn with_image_quality(self, iq: ImageQuality) -> Self {
        Self { iq, ..self }
    }

    /// Returns a copy with the sky background replaced.
    pub const fn with_sky_background(self, sb: SkyBackground) -> Self {
        Self { sb, ..self }
    }

    /// Returns a copy with the water vapor replaced.
    pub const fn with_water_vapor(self, wv: WaterVapor) -> Self {
        Self { wv, ..self }
    }

    pub const fn cc(self, cc: CloudCover) -> Self {
        self.with_cloud_cover(cc)
    }

    pub const fn iq(self, iq: ImageQuality) -> Self {
        self.with_image_quality(iq)
    }

    pub const fn sb(self, sb: SkyBackground) -> Self {
        self.with_sky_background(sb)
    }

    pub const fn wv(self, wv: WaterVapor) -> Self {
        self.with_water_vapor(wv)
    }

    /// Percentiles in canonical dimension order.
    pub fn percentages(&self) -> [u8; 4] {
        [
            self.cc.percentage(),
            self.iq.percentage(),
            self.sb.percentage(),
            self.wv.percentage(),
        ]
    }

    /// `true` if every dimension of `self` is at least as demanding as the
    /// corresponding dimension of `other`.
    pub fn is_at_least_as_strict_as(&self, other: &Conditions) -> bool {
        self.percentages()
            .iter()
            .zip(other.percentages())
            .all(|(mine, theirs)| *mine <= theirs)
    }

    /// `true` if no dimension of `self` is more demanding than `other`.
    ///
    /// This is the check applied when actual conditions must be the same as
    /// or worse than the ones originally requested.
    pub fn is_no_stricter_than(&self, other: &Conditions) -> bool {
        other.is_at_least_as_strict_as(self)
    }

    /// Applies the cloud cover, image quality and sky background adjustments
    /// to a guide-star magnitude limit.
    pub fn adjust_magnitude(&self, magnitude: f64, bands: BandsList) -> f64 {
        let adjusters: [&dyn MagnitudeAdjuster; 3] = [&self.cc, &self.iq, &self.sb];
        adjusters
            .iter()
            .fold(magnitude, |m, adj| adj.adjust_magnitude(m, bands))
    }

    /// The canonical string, identical to `to_string()`.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::WORST
    }
}

impl fmt::Display for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.cc, self.iq, self.sb, self.wv
        )
    }
}

impl FromStr for Conditions {
    type Err = ParseConditionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(SEPARATOR).collect();
        let &[cc, iq, sb, wv] = tokens.as_slice() else {
            return Err(ParseConditionsError::WrongTokenCount {
                found: tokens.len(),
                input: s.to_string(),
            });
        };

        Ok(Self::new(
            parse_token(cc)?,
            parse_token(iq)?,
            parse_token(sb)?,
            parse_token(wv)?,
        ))
    }
}

fn parse_token<B: SiteQualityBand>(token: &str) -> Result<B, ParseConditionsError> {
    B::read(token).map_err(|source| ParseConditionsError::Band {
        dimension: B::DIMENSION,
        source,
    })
}
