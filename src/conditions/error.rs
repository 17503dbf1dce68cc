use thiserror::Error;

use crate::band::{Dimension, ParseBandError};

/// Errors produced when reading a canonical conditions string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseConditionsError {
    #[error("Expected 4 comma-separated bands, found {found} in '{input}'")]
    WrongTokenCount { found: usize, input: String },

    #[error("Invalid {dimension} token")]
    Band {
        dimension: Dimension,
        #[source]
        source: ParseBandError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wrong_token_count_display() {
        let e = ParseConditionsError::WrongTokenCount {
            found: 2,
            input: "CC50, IQ70".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Expected 4 comma-separated bands, found 2 in 'CC50, IQ70'"
        );
    }

    #[test]
    fn band_error_exposes_source() {
        let e = ParseConditionsError::Band {
            dimension: Dimension::WaterVapor,
            source: ParseBandError::MissingValue(Dimension::WaterVapor),
        };
        assert_eq!(e.to_string(), "Invalid WaterVapor token");
        assert!(e.source().is_some());
    }
}
