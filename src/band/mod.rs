//! Site-quality bands: ordered percentile ladders with an `Any` sentinel.
//!
//! Every observing-condition dimension (cloud cover, image quality, sky
//! background, water vapor) is described by the same shape: a closed,
//! totally ordered set of percentile bands followed by an `Any` member that
//! imposes no constraint. The shared behaviour lives in [`SiteQualityBand`];
//! the four concrete enumerations in [`kinds`] are generated from a single
//! declaration so ordering, formatting and parsing are defined once.
//!
//! # Ordering
//!
//! Lower percentile means a stricter requirement (better conditions). `Any`
//! carries percentile 100 and therefore sorts after every real band:
//!
//! ```
//! use sitequal::band::{ImageQuality, SiteQualityBand};
//!
//! assert!(ImageQuality::Percent20 < ImageQuality::Percent70);
//! assert!(ImageQuality::Percent85.is_better_than(ImageQuality::Any));
//! assert_eq!(ImageQuality::Percent70.to_string(), "IQ70");
//! ```

pub mod error;
pub mod kinds;
pub mod magnitude;

pub use error::ParseBandError;
pub use kinds::{CloudCover, ImageQuality, SkyBackground, WaterVapor};
pub use magnitude::{BandsList, MagnitudeAdjuster};

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Token rendered (and accepted, case-insensitively) for the sentinel band.
pub const ANY_TOKEN: &str = "Any";

/// Percentile associated with the `Any` sentinel.
pub const ANY_PERCENTAGE: u8 = 100;

/// One of the four independent observing-constraint axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    CloudCover,
    ImageQuality,
    SkyBackground,
    WaterVapor,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 4] = [
        Dimension::CloudCover,
        Dimension::ImageQuality,
        Dimension::SkyBackground,
        Dimension::WaterVapor,
    ];

    /// The two-letter code prefixed to every band of this dimension.
    pub const fn code(self) -> &'static str {
        match self {
            Self::CloudCover => "CC",
            Self::ImageQuality => "IQ",
            Self::SkyBackground => "SB",
            Self::WaterVapor => "WV",
        }
    }

    /// Property name used when the dimension is stored or reported.
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::CloudCover => "CloudCover",
            Self::ImageQuality => "ImageQuality",
            Self::SkyBackground => "SkyBackground",
            Self::WaterVapor => "WaterVapor",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property_name())
    }
}

/// An ordered percentile band of one site-quality dimension.
///
/// Implementors are closed enumerations whose `ALL` slice lists every member
/// in ascending percentile order, ending with the `ANY` sentinel. Only
/// `percentage`, `name` and `display_value` are per-type data; everything
/// else is derived here.
///
/// # Invariants
///
/// - Exactly one member is the sentinel (`ANY`), with percentage 100.
/// - Non-sentinel percentages are strictly increasing along `ALL`.
/// - `Ord` agrees with `percentage()`.
pub trait SiteQualityBand:
    Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// The dimension this band belongs to.
    const DIMENSION: Dimension;

    /// Every member, best first.
    const ALL: &'static [Self];

    /// The unconstrained sentinel.
    const ANY: Self;

    /// Value used when nothing has been specified.
    const DEFAULT: Self = Self::ANY;

    /// Percentile of this band (`100` for `Any`).
    fn percentage(self) -> u8;

    /// Stable name used for persistence (e.g. `"PERCENT_70"`, `"ANY"`).
    fn name(self) -> &'static str;

    /// Human-oriented label (e.g. `"70%/Cirrus"`).
    fn display_value(self) -> &'static str;

    /// Whether this band should no longer be offered for new observations.
    fn is_obsolete(self) -> bool {
        false
    }

    /// Two-letter dimension code.
    fn code() -> &'static str {
        Self::DIMENSION.code()
    }

    fn is_any(self) -> bool {
        self == Self::ANY
    }

    /// Position within `ALL`; lower is better.
    fn rank(self) -> usize {
        Self::ALL
            .iter()
            .position(|b| *b == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Payload rendered after the dimension code: the percentile or `"Any"`.
    fn token(self) -> String {
        if self.is_any() {
            ANY_TOKEN.to_string()
        } else {
            self.percentage().to_string()
        }
    }

    /// The percentage as a decimal string, as used in observing sequences.
    fn sequence_value(self) -> String {
        self.percentage().to_string()
    }

    /// `true` if this band imposes a strictly tighter requirement than `other`.
    fn is_better_than(self, other: Self) -> bool {
        self < other
    }

    /// `true` if this band is at least as demanding as `other`.
    fn is_at_least_as_strict_as(self, other: Self) -> bool {
        self <= other
    }

    /// Finds the member with the given percentile.
    fn from_percentage(percentage: u8) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.percentage() == percentage)
    }

    /// Parses a canonical band token such as `"CC70"` or `"WVAny"`.
    ///
    /// The dimension code must match; the payload is either a percentile
    /// belonging to this dimension or `Any` (any case), which is treated as
    /// percentile 100. The percentile is read leniently (`"CC+20"` and
    /// `"CC020"` both give `CC20`); `Display` always writes the canonical form.
    fn read(s: &str) -> Result<Self, ParseBandError> {
        let code = Self::code();
        let tail = match s.strip_prefix(code) {
            Some(tail) if !tail.is_empty() => tail,
            Some(_) => return Err(ParseBandError::MissingValue(Self::DIMENSION)),
            None => {
                return Err(ParseBandError::WrongDimension {
                    expected: Self::DIMENSION,
                    found: s.to_string(),
                })
            }
        };

        let percentage = if tail.eq_ignore_ascii_case(ANY_TOKEN) {
            ANY_PERCENTAGE
        } else {
            tail.parse::<u8>()
                .map_err(|_| ParseBandError::InvalidPercentage {
                    dimension: Self::DIMENSION,
                    token: tail.to_string(),
                })?
        };

        Self::from_percentage(percentage).ok_or(ParseBandError::UnknownPercentage {
            dimension: Self::DIMENSION,
            percentage,
        })
    }

    /// Finds a member by persisted name or display value.
    fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.name() == name || b.display_value() == name)
    }

    /// Like [`lookup`](Self::lookup) but falls back to `default` for unknown names.
    fn lookup_or(name: &str, default: Self) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::warn!(
                dimension = %Self::DIMENSION,
                band = name,
                fallback = %default,
                "unknown site quality band name, using fallback"
            );
            default
        })
    }
}

/// Writes `band` in canonical form: the dimension code followed by its token.
pub(crate) fn write_band<B: SiteQualityBand>(band: B, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if band.is_any() {
        write!(f, "{}{}", B::code(), ANY_TOKEN)
    } else {
        write!(f, "{}{}", B::code(), band.percentage())
    }
}

/// Declares a band enumeration and wires it into [`SiteQualityBand`].
///
/// Members must be listed best first and the sentinel must be named `Any`.
/// Items after `extra` are spliced into the trait impl to override defaults.
macro_rules! site_quality_band {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident : $dim:path {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($name:literal, $pct:literal, $display:literal)
            ),+ $(,)?
        }
        $(extra { $($extra:tt)* })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::band::SiteQualityBand for $ty {
            const DIMENSION: $crate::band::Dimension = $dim;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const ANY: Self = Self::Any;

            fn percentage(self) -> u8 {
                match self {
                    $(Self::$variant => $pct,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            fn display_value(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                }
            }

            $($($extra)*)?
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                use $crate::band::SiteQualityBand;
                self.percentage().cmp(&other.percentage())
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <Self as $crate::band::SiteQualityBand>::DEFAULT
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::band::write_band(*self, f)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::band::ParseBandError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::band::SiteQualityBand>::read(s)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::band::SiteQualityBand::name(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<Self as $crate::band::SiteQualityBand>::lookup_or(
                    &name,
                    <Self as $crate::band::SiteQualityBand>::DEFAULT,
                ))
            }
        }
    };
}

pub(crate) use site_quality_band;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ladder<B: SiteQualityBand>() {
        let all = B::ALL;
        assert_eq!(all.iter().filter(|b| b.is_any()).count(), 1);
        assert_eq!(*all.last().unwrap(), B::ANY);
        assert_eq!(B::ANY.percentage(), ANY_PERCENTAGE);
        for pair in all.windows(2) {
            assert!(pair[0].percentage() < pair[1].percentage());
            assert!(pair[0] < pair[1]);
            assert!(pair[0].is_better_than(pair[1]));
        }
        for (i, b) in all.iter().enumerate() {
            assert_eq!(b.rank(), i);
        }
    }

    #[test]
    fn every_dimension_is_a_strict_ladder_ending_in_any() {
        assert_ladder::<CloudCover>();
        assert_ladder::<ImageQuality>();
        assert_ladder::<SkyBackground>();
        assert_ladder::<WaterVapor>();
    }

    #[test]
    fn sentinel_is_worse_than_every_real_band() {
        for b in CloudCover::ALL.iter().filter(|b| !b.is_any()) {
            assert!(b.is_better_than(CloudCover::Any));
            assert!(!CloudCover::Any.is_at_least_as_strict_as(*b));
        }
    }

    #[test]
    fn dimension_codes() {
        let codes: Vec<_> = Dimension::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["CC", "IQ", "SB", "WV"]);
        assert_eq!(CloudCover::code(), "CC");
        assert_eq!(WaterVapor::code(), "WV");
    }

    #[test]
    fn display_uses_code_and_token() {
        assert_eq!(CloudCover::Percent20.to_string(), "CC20");
        assert_eq!(SkyBackground::Percent80.to_string(), "SB80");
        assert_eq!(WaterVapor::Any.to_string(), "WVAny");
        assert_eq!(ImageQuality::Any.token(), "Any");
        assert_eq!(ImageQuality::Percent85.token(), "85");
    }

    #[test]
    fn read_accepts_canonical_tokens() {
        assert_eq!("CC70".parse::<CloudCover>(), Ok(CloudCover::Percent70));
        assert_eq!("IQAny".parse::<ImageQuality>(), Ok(ImageQuality::Any));
        assert_eq!(SkyBackground::read("SBany"), Ok(SkyBackground::Any));
        assert_eq!(WaterVapor::read("WV100"), Ok(WaterVapor::Any));
    }

    #[test]
    fn read_is_lenient_but_display_is_canonical() {
        let cc = CloudCover::read("CC+20").unwrap();
        assert_eq!(cc, CloudCover::Percent20);
        assert_eq!(cc.to_string(), "CC20");
        let iq = ImageQuality::read("IQ070").unwrap();
        assert_eq!(iq.to_string(), "IQ70");
    }

    #[test]
    fn read_rejects_foreign_or_malformed_tokens() {
        assert_eq!(
            CloudCover::read("IQ70"),
            Err(ParseBandError::WrongDimension {
                expected: Dimension::CloudCover,
                found: "IQ70".to_string(),
            })
        );
        assert_eq!(
            CloudCover::read("CC"),
            Err(ParseBandError::MissingValue(Dimension::CloudCover))
        );
        assert_eq!(
            ImageQuality::read("IQ50"),
            Err(ParseBandError::UnknownPercentage {
                dimension: Dimension::ImageQuality,
                percentage: 50,
            })
        );
        assert!(matches!(
            WaterVapor::read("WVlots"),
            Err(ParseBandError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn every_band_round_trips_through_its_string() {
        for b in CloudCover::ALL {
            assert_eq!(b.to_string().parse::<CloudCover>(), Ok(*b));
        }
        for b in SkyBackground::ALL {
            assert_eq!(b.to_string().parse::<SkyBackground>(), Ok(*b));
        }
    }

    #[test]
    fn lookup_by_name_or_display_value() {
        assert_eq!(CloudCover::lookup("PERCENT_70"), Some(CloudCover::Percent70));
        assert_eq!(CloudCover::lookup("70%/Cirrus"), Some(CloudCover::Percent70));
        assert_eq!(SkyBackground::lookup("Any/Bright"), Some(SkyBackground::Any));
        assert_eq!(WaterVapor::lookup("PERCENT_85"), None);
        assert_eq!(
            WaterVapor::lookup_or("bogus", WaterVapor::Percent50),
            WaterVapor::Percent50
        );
    }

    #[test]
    fn default_is_any() {
        assert_eq!(CloudCover::default(), CloudCover::Any);
        assert_eq!(ImageQuality::default(), ImageQuality::Any);
        assert_eq!(SkyBackground::default(), SkyBackground::Any);
        assert_eq!(WaterVapor::default(), WaterVapor::Any);
    }
}
