//! Elevation constraint kinds attached to a site-quality component.

use std::fmt;

/// How (and whether) an observation restricts target elevation.
///
/// | Kind        | Legal range  | Default range |
/// |-------------|--------------|---------------|
/// | `None`      | –            | –             |
/// | `HourAngle` | -5.5 .. 5.5  | -5.0 .. 5.0   |
/// | `Airmass`   | 1.0 .. 3.0   | 1.0 .. 2.0    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElevationConstraintType {
    #[default]
    None,
    HourAngle,
    Airmass,
}

impl ElevationConstraintType {
    pub const ALL: [ElevationConstraintType; 3] = [Self::None, Self::HourAngle, Self::Airmass];

    pub const fn display_value(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HourAngle => "Hour Angle",
            Self::Airmass => "Airmass",
        }
    }

    /// Persisted name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::HourAngle => "HOUR_ANGLE",
            Self::Airmass => "AIRMASS",
        }
    }

    pub const fn min(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::HourAngle => -5.5,
            Self::Airmass => 1.0,
        }
    }

    pub const fn max(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::HourAngle => 5.5,
            Self::Airmass => 3.0,
        }
    }

    pub const fn default_min(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::HourAngle => -5.0,
            Self::Airmass => 1.0,
        }
    }

    pub const fn default_max(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::HourAngle => 5.0,
            Self::Airmass => 2.0,
        }
    }

    /// `true` if `value` lies within the legal range of this kind.
    pub fn accepts(self, value: f64) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Finds a kind by persisted name, falling back to `None`.
    pub fn lookup_or_default(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or_else(|| {
                tracing::warn!(kind = name, "unknown elevation constraint type, using None");
                Self::default()
            })
    }
}

impl fmt::Display for ElevationConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ElevationConstraintType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ElevationConstraintType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::lookup_or_default(&name))
    }
}
