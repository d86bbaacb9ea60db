//! Seat preference value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preferred seat position for a preference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatPreference {
    NoPreference,
    NearWindow,
    NearCorridor,
}

impl SeatPreference {
    /// Returns the wire spelling of this preference.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoPreference => "NO_PREFERENCE",
            Self::NearWindow => "NEAR_WINDOW",
            Self::NearCorridor => "NEAR_CORRIDOR",
        }
    }
}

impl fmt::Display for SeatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatPreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO_PREFERENCE" => Ok(Self::NoPreference),
            "NEAR_WINDOW" => Ok(Self::NearWindow),
            "NEAR_CORRIDOR" => Ok(Self::NearCorridor),
            _ => Err(()),
        }
    }
}
