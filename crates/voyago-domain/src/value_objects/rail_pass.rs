//! Rail pass value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rail pass product families, as spelled on the origin wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassType {
    Youth,
    Family,
    Senior,
    ProSecond,
    ProFirst,
    FromOuterSpace,
}

impl PassType {
    /// Returns the wire spelling of this pass type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Youth => "YOUTH",
            Self::Family => "FAMILY",
            Self::Senior => "SENIOR",
            Self::ProSecond => "PRO_SECOND",
            Self::ProFirst => "PRO_FIRST",
            Self::FromOuterSpace => "FROM_OUTER_SPACE",
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YOUTH" => Ok(Self::Youth),
            "FAMILY" => Ok(Self::Family),
            "SENIOR" => Ok(Self::Senior),
            "PRO_SECOND" => Ok(Self::ProSecond),
            "PRO_FIRST" => Ok(Self::ProFirst),
            "FROM_OUTER_SPACE" => Ok(Self::FromOuterSpace),
            _ => Err(()),
        }
    }
}

/// Immutable rail pass embedded in a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailPass {
    /// Pass number.
    pub number: String,

    /// Pass product family.
    pub pass_type: PassType,

    /// Human-readable label for the pass type, as provided by the origin.
    pub type_ref_label: Option<String>,

    /// First day the pass is valid.
    pub validity_start_date: Option<NaiveDate>,

    /// Last day the pass is valid.
    pub validity_end_date: Option<NaiveDate>,
}
