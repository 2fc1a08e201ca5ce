//! Row transformation: text columns to typed field values
//!
//! Converts a row's payload columns against its record type's declared
//! layout. Date fields parse the fixed BPLAN format; an empty date is an
//! explicit NULL, while any other unparsable date text is fatal. Non-date
//! fields pass through as text and are coerced by the store's type
//! affinity.

use chrono::NaiveDateTime;

use crate::constants::BPLAN_DATE_FORMAT;
use crate::error::{BplanError, Result};
use crate::models::FieldValue;
use crate::schema::{FieldDef, RecordType};

/// Convert payload columns (tag/action already stripped) into typed values
/// in the record type's declared field order
pub fn transform_row(record_type: RecordType, payload: &[String]) -> Result<Vec<FieldValue>> {
    let fields = record_type.fields();
    if payload.len() != fields.len() {
        return Err(BplanError::invalid_format(format!(
            "{} record has {} payload column(s), layout declares {}",
            record_type,
            payload.len(),
            fields.len()
        )));
    }

    fields
        .iter()
        .zip(payload)
        .map(|(field, value)| transform_field(field, value))
        .collect()
}

fn transform_field(field: &FieldDef, value: &str) -> Result<FieldValue> {
    if !field.is_date() {
        return Ok(FieldValue::Text(value.to_string()));
    }

    if value.is_empty() {
        return Ok(FieldValue::Null);
    }

    match NaiveDateTime::parse_from_str(value, BPLAN_DATE_FORMAT) {
        Ok(dt) => Ok(FieldValue::Date(dt)),
        Err(_) => Err(BplanError::DateParse {
            field: field.name.to_string(),
            value: value.to_string(),
        }),
    }
}
