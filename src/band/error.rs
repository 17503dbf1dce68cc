use thiserror::Error;

use super::Dimension;

/// Errors produced when reading a band from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBandError {
    #[error("Expected a {expected} band starting with '{}', found '{found}'", .expected.code())]
    WrongDimension { expected: Dimension, found: String },

    #[error("{0} band has no value after its code")]
    MissingValue(Dimension),

    #[error("Invalid {dimension} percentage: '{token}'")]
    InvalidPercentage { dimension: Dimension, token: String },

    #[error("{dimension} has no {percentage}% band")]
    UnknownPercentage { dimension: Dimension, percentage: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_dimension_display() {
        let e = ParseBandError::WrongDimension {
            expected: Dimension::SkyBackground,
            found: "CC50".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Expected a SkyBackground band starting with 'SB', found 'CC50'"
        );
    }

    #[test]
    fn unknown_percentage_display() {
        let e = ParseBandError::UnknownPercentage {
            dimension: Dimension::ImageQuality,
            percentage: 50,
        };
        assert_eq!(e.to_string(), "ImageQuality has no 50% band");
    }

    #[test]
    fn missing_value_display() {
        let e = ParseBandError::MissingValue(Dimension::WaterVapor);
        assert_eq!(e.to_string(), "WaterVapor band has no value after its code");
    }
}
