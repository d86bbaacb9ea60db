//! Loyalty program value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Loyalty status ladder, as spelled on the origin wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyStatus {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
}

impl LoyaltyStatus {
    /// Returns the wire spelling of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
            Self::Emerald => "EMERALD",
        }
    }
}

impl fmt::Display for LoyaltyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoyaltyStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BRONZE" => Ok(Self::Bronze),
            "SILVER" => Ok(Self::Silver),
            "GOLD" => Ok(Self::Gold),
            "PLATINUM" => Ok(Self::Platinum),
            "EMERALD" => Ok(Self::Emerald),
            _ => Err(()),
        }
    }
}

/// Immutable loyalty program membership embedded in a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    /// Loyalty program membership number.
    pub number: String,

    /// Current status in the program.
    pub status: LoyaltyStatus,

    /// Human-readable label for the status, as provided by the origin.
    pub status_ref_label: Option<String>,

    /// First day the membership is valid.
    pub validity_start_date: Option<NaiveDate>,

    /// Last day the membership is valid.
    pub validity_end_date: Option<NaiveDate>,
}
