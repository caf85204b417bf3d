// Strict-mode checks run before aggregation, so malformed hours or dates fail
// the run instead of surfacing as NaN in the generated script.
use chrono::NaiveDate;
use shared::models::Record;
use shared::utils::parse_decimal;

use super::client_matches;
use crate::error::EngineError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks the `Hours` and `Date` of every record belonging to `client`.
/// Rows are numbered from 1, starting after the header.
pub fn validate_records(records: &[Record], client: &str) -> Result<(), EngineError> {
    for (idx, record) in records.iter().enumerate() {
        if !client_matches(record, client) {
            continue;
        }
        let row = idx + 1;

        if NaiveDate::parse_from_str(record.date.trim(), DATE_FORMAT).is_err() {
            return Err(EngineError::InvalidField {
                row,
                field: "Date",
                value: record.date.clone(),
            });
        }

        match parse_decimal(&record.hours) {
            Ok(hours) if hours.is_finite() => {}
            _ => {
                return Err(EngineError::InvalidField {
                    row,
                    field: "Hours",
                    value: record.hours.clone(),
                })
            }
        }
    }
    Ok(())
}
