// Per-client, per-date aggregation of timesheet records
pub mod daily_totals;
pub mod validation;

pub use daily_totals::{get_days, get_hours, get_hours_by_date, parse_hours};
pub use validation::validate_records;

use shared::models::Record;

/// Case-insensitive client match, as used by both filtering and validation.
pub fn client_matches(record: &Record, client: &str) -> bool {
    record.client.to_lowercase() == client.to_lowercase()
}

pub fn filter_by_client(records: &[Record], client: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| client_matches(r, client))
        .cloned()
        .collect()
}
