//! The four site-quality band ladders.
//!
//! | Dimension       | Bands                      |
//! |-----------------|----------------------------|
//! | `CloudCover`    | 20*, 50, 70, 80, 90*, Any  |
//! | `ImageQuality`  | 20, 70, 85, Any            |
//! | `SkyBackground` | 20, 50, 80, Any            |
//! | `WaterVapor`    | 20, 50, 80, Any            |
//!
//! Bands marked `*` are obsolete: still readable, no longer offered.

use super::{site_quality_band, Dimension, SiteQualityBand};

site_quality_band! {
    /// Fraction of nights with at most this much cloud.
    pub enum CloudCover: Dimension::CloudCover {
        Percent20 => ("PERCENT_20", 20, "20%"),
        Percent50 => ("PERCENT_50", 50, "50%/Clear"),
        Percent70 => ("PERCENT_70", 70, "70%/Cirrus"),
        Percent80 => ("PERCENT_80", 80, "80%/Cloudy"),
        Percent90 => ("PERCENT_90", 90, "90%"),
        Any => ("ANY", 100, "Any"),
    }
    extra {
        fn is_obsolete(self) -> bool {
            matches!(self, Self::Percent20 | Self::Percent90)
        }
    }
}

site_quality_band! {
    /// Seeing percentile.
    pub enum ImageQuality: Dimension::ImageQuality {
        Percent20 => ("PERCENT_20", 20, "20%/Best"),
        Percent70 => ("PERCENT_70", 70, "70%/Good"),
        Percent85 => ("PERCENT_85", 85, "85%/Poor"),
        Any => ("ANY", 100, "Any"),
    }
    extra {
        // Stored programs may still carry the pre-85% ladder names.
        fn lookup(name: &str) -> Option<Self> {
            match name {
                "50%" => Some(Self::Percent70),
                "80" => Some(Self::Percent85),
                _ => Self::ALL
                    .iter()
                    .copied()
                    .find(|b| b.name() == name || b.display_value() == name),
            }
        }
    }
}

site_quality_band! {
    /// Sky brightness percentile; darker skies are better.
    pub enum SkyBackground: Dimension::SkyBackground {
        Percent20 => ("PERCENT_20", 20, "20%/Darkest"),
        Percent50 => ("PERCENT_50", 50, "50%/Dark"),
        Percent80 => ("PERCENT_80", 80, "80%/Grey"),
        Any => ("ANY", 100, "Any/Bright"),
    }
}

site_quality_band! {
    pub enum WaterVapor: Dimension::WaterVapor {
        Percent20 => ("PERCENT_20", 20, "20%/Low"),
        Percent50 => ("PERCENT_50", 50, "50%/Median"),
        Percent80 => ("PERCENT_80", 80, "80%/High"),
        Any => ("ANY", 100, "Any"),
    }
}

impl SkyBackground {
    /// Faintest sky brightness (V mag per arcsec²) for this band.
    ///
    /// Smaller magnitudes are brighter; `Any` has no limit and reports 0.
    pub const fn max_brightness(self) -> f64 {
        match self {
            Self::Percent20 => 21.37,
            Self::Percent50 => 20.78,
            Self::Percent80 => 19.61,
            Self::Any => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_match_ladders() {
        let cc: Vec<u8> = CloudCover::ALL.iter().map(|b| b.percentage()).collect();
        assert_eq!(cc, [20, 50, 70, 80, 90, 100]);
        let iq: Vec<u8> = ImageQuality::ALL.iter().map(|b| b.percentage()).collect();
        assert_eq!(iq, [20, 70, 85, 100]);
        let sb: Vec<u8> = SkyBackground::ALL.iter().map(|b| b.percentage()).collect();
        assert_eq!(sb, [20, 50, 80, 100]);
        let wv: Vec<u8> = WaterVapor::ALL.iter().map(|b| b.percentage()).collect();
        assert_eq!(wv, [20, 50, 80, 100]);
    }

    #[test]
    fn only_outer_cloud_cover_bands_are_obsolete() {
        let obsolete: Vec<_> = CloudCover::ALL
            .iter()
            .filter(|b| b.is_obsolete())
            .copied()
            .collect();
        assert_eq!(obsolete, [CloudCover::Percent20, CloudCover::Percent90]);
        assert!(ImageQuality::ALL.iter().all(|b| !b.is_obsolete()));
    }

    #[test]
    fn display_values_and_sequence_values() {
        assert_eq!(CloudCover::Percent80.display_value(), "80%/Cloudy");
        assert_eq!(SkyBackground::Any.display_value(), "Any/Bright");
        assert_eq!(WaterVapor::Percent50.sequence_value(), "50");
        assert_eq!(ImageQuality::Any.sequence_value(), "100");
    }

    #[test]
    fn image_quality_honours_legacy_names() {
        assert_eq!(ImageQuality::lookup("50%"), Some(ImageQuality::Percent70));
        assert_eq!(ImageQuality::lookup("80"), Some(ImageQuality::Percent85));
        assert_eq!(ImageQuality::lookup("PERCENT_85"), Some(ImageQuality::Percent85));
        assert_eq!(
            ImageQuality::lookup_or("nope", ImageQuality::DEFAULT),
            ImageQuality::Any
        );
    }

    #[test]
    fn sky_background_brightness_decreases_with_percentile() {
        let brightness: Vec<f64> = SkyBackground::ALL
            .iter()
            .filter(|b| !b.is_any())
            .map(|b| b.max_brightness())
            .collect();
        assert!(brightness.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(SkyBackground::Any.max_brightness(), 0.0);
    }
}
