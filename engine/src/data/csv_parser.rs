use csv::ReaderBuilder;
use shared::models::Record;
use std::io::Read;
use std::path::Path;

use crate::error::EngineError;

pub struct TimesheetCsvParser;

impl TimesheetCsvParser {
    // CSV Header: Client,Date,Hours (extra columns are ignored, order does not matter)
    // Example Row: Acme,2024-01-05,"3,5"
    pub async fn load_records(file_path: &Path) -> Result<Vec<Record>, EngineError> {
        let contents = tokio::fs::read(file_path).await?;
        tracing::debug!(path = %file_path.display(), bytes = contents.len(), "Read timesheet file");
        Self::parse_records(file_path, contents.as_slice())
    }

    /// Decodes every row of `reader` into a `Record`. The first failing row aborts
    /// the whole parse; nothing decoded so far is returned.
    pub fn parse_records<R: Read>(file_path: &Path, reader: R) -> Result<Vec<Record>, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in rdr.deserialize::<Record>() {
            let record = result.map_err(|e| EngineError::parse_failure(file_path, e))?;
            records.push(record);
        }

        tracing::info!(path = %file_path.display(), records = records.len(), "Parsed timesheet");
        Ok(records)
    }
}
