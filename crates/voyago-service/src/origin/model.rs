//! Wire representation of the upstream customer web service responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Customer profile as returned by the origin web service.
///
/// Loyalty programs and rail passes are not first-class on the wire;
/// they arrive as `misc` record groups of flat string field maps and are
/// promoted to domain values by the profile mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// Customer id at the system of record.
    pub id: String,

    /// Name and birth date block.
    #[serde(rename = "personalInformation", skip_serializing_if = "Option::is_none")]
    pub personal_information: Option<PersonalInformation>,

    /// Contact details block.
    #[serde(rename = "personalDetails", skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<PersonalDetails>,

    /// Typed record groups carrying loyalty and pass data.
    #[serde(default)]
    pub misc: Vec<MiscGroup>,
}

/// Name and birth date block of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInformation {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

/// Contact details block of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub email: Option<EmailAddress>,
    pub cell: Option<CellNumber>,
}

/// Email address wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub address: Option<String>,
}

/// Cell phone number wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellNumber {
    pub number: Option<String>,
}

/// A typed group of records in the `misc` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiscGroup {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<TypedValue>,
    #[serde(default)]
    pub records: Vec<MiscRecord>,
}

/// A single typed record with a flat string field map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiscRecord {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<TypedValue>,
    #[serde(default, rename = "map")]
    pub fields: HashMap<String, String>,
}

/// Wrapper for the `{"value": ...}` type descriptors the origin emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    pub value: String,
}

impl TypedValue {
    /// Creates a type descriptor with the given value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
