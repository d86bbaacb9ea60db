//! Pure transform from the origin wire profile to the [`Customer`] entity.
//!
//! The origin flattens loyalty programs and rail passes into generic
//! `misc` record groups of string fields. This mapper promotes them,
//! dropping records that are disabled, incomplete, or carry codes the
//! domain does not know.

use crate::origin::model::{CustomerProfile, MiscRecord};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::warn;
use voyago_domain::{Customer, LoyaltyProgram, LoyaltyStatus, PassType, RailPass};

const LOYALTY_PROGRAM_TYPE: &str = "LOYALTY";
const LOYALTY_NUMBER_FIELD: &str = "loyalty_number";
const LOYALTY_STATUS_FIELD: &str = "loyalty_status";
const LOYALTY_LABEL_FIELD: &str = "loyalty_status_label";
const LOYALTY_VALIDITY_START_FIELD: &str = "validity_start";
const LOYALTY_VALIDITY_END_FIELD: &str = "validity_end";
const LOYALTY_DISABLE_STATUS_FIELD: &str = "disable_status";

const RAIL_PASS_TYPE: &str = "PASS";
const PASS_NUMBER_FIELD: &str = "pass_number";
const PASS_PRODUCT_CODE_FIELD: &str = "new_product_code";
const PASS_PRODUCT_LABEL_FIELD: &str = "pass_label";
const PASS_VALIDITY_START_FIELD: &str = "pass_validity_start";
const PASS_VALIDITY_END_FIELD: &str = "pass_validity_end";
const PASS_ACTIVE_STATUS_FIELD: &str = "pass_is_active";

/// Field value marking a record as active.
const ACTIVE_FIELD_VALUE: &str = "000";

/// Maps an origin wire profile to the internal customer entity.
///
/// This is the only constructor of [`Customer`] values outside cache
/// deserialization.
#[must_use]
pub fn to_customer(profile: CustomerProfile) -> Customer {
    let mut customer = Customer {
        customer_id: profile.id.clone(),
        last_name: None,
        first_name: None,
        birth_date: None,
        phone_number: None,
        email: None,
        loyalty_program: None,
        rail_passes: Vec::new(),
    };

    if let Some(info) = &profile.personal_information {
        customer.first_name = info.first_name.clone();
        customer.last_name = info.last_name.clone();
        customer.birth_date = info.birthdate;
    }

    if let Some(details) = &profile.personal_details {
        customer.email = details.email.as_ref().and_then(|e| e.address.clone());
        customer.phone_number = details.cell.as_ref().and_then(|c| c.number.clone());
    }

    let loyalty_programs: Vec<LoyaltyProgram> = typed_record_fields(&profile, LOYALTY_PROGRAM_TYPE)
        .filter_map(map_loyalty_program)
        .collect();
    if loyalty_programs.len() > 1 {
        // one membership per customer is the rule; the data says otherwise
        warn!(
            "Customer id='{}' has {} loyalty programs, keeping the first",
            profile.id,
            loyalty_programs.len()
        );
    }
    customer.loyalty_program = loyalty_programs.into_iter().next();

    customer.rail_passes = typed_record_fields(&profile, RAIL_PASS_TYPE)
        .filter_map(map_rail_pass)
        .collect();

    customer
}

/// Iterates the field maps of records whose group and record type both
/// match `type_value`.
fn typed_record_fields<'a>(
    profile: &'a CustomerProfile,
    type_value: &'a str,
) -> impl Iterator<Item = &'a HashMap<String, String>> {
    profile
        .misc
        .iter()
        .filter(move |group| {
            group
                .group_type
                .as_ref()
                .is_some_and(|t| t.value == type_value)
        })
        .flat_map(|group| group.records.iter())
        .filter(move |record| {
            record
                .record_type
                .as_ref()
                .is_some_and(|t| t.value == type_value)
        })
        .map(|record: &MiscRecord| &record.fields)
}

fn map_loyalty_program(fields: &HashMap<String, String>) -> Option<LoyaltyProgram> {
    let number = fields.get(LOYALTY_NUMBER_FIELD).filter(|n| !n.trim().is_empty())?;
    if fields.get(LOYALTY_DISABLE_STATUS_FIELD).map(String::as_str) != Some(ACTIVE_FIELD_VALUE) {
        return None;
    }
    let status: LoyaltyStatus = fields.get(LOYALTY_STATUS_FIELD)?.parse().ok()?;

    Some(LoyaltyProgram {
        number: number.clone(),
        status,
        status_ref_label: fields.get(LOYALTY_LABEL_FIELD).cloned(),
        validity_start_date: parse_date_or_none(fields.get(LOYALTY_VALIDITY_START_FIELD)),
        validity_end_date: parse_date_or_none(fields.get(LOYALTY_VALIDITY_END_FIELD)),
    })
}

fn map_rail_pass(fields: &HashMap<String, String>) -> Option<RailPass> {
    let number = fields.get(PASS_NUMBER_FIELD).filter(|n| !n.trim().is_empty())?;
    if fields.get(PASS_ACTIVE_STATUS_FIELD).map(String::as_str) != Some(ACTIVE_FIELD_VALUE) {
        return None;
    }
    let pass_type: PassType = fields.get(PASS_PRODUCT_CODE_FIELD)?.parse().ok()?;

    Some(RailPass {
        number: number.clone(),
        pass_type,
        type_ref_label: fields.get(PASS_PRODUCT_LABEL_FIELD).cloned(),
        validity_start_date: parse_date_or_none(fields.get(PASS_VALIDITY_START_FIELD)),
        validity_end_date: parse_date_or_none(fields.get(PASS_VALIDITY_END_FIELD)),
    })
}

/// Lenient ISO date parsing; the origin sometimes sends garbage.
fn parse_date_or_none(maybe_date: Option<&String>) -> Option<NaiveDate> {
    maybe_date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
