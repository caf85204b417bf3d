// find file -> parse -> (validate) -> filter -> aggregate -> format
use crate::aggregation::{filter_by_client, get_hours_by_date, validate_records};
use crate::config::{PipelineSettings, Validation};
use crate::data::csv_parser::TimesheetCsvParser;
use crate::data::file_selector::select_latest_file;
use crate::error::EngineError;
use crate::script::ScriptFormatter;

/// Runs the whole pipeline once and returns the generated script.
pub async fn run(settings: &PipelineSettings) -> Result<String, EngineError> {
    tracing::info!(
        client = %settings.client,
        language = %settings.language,
        dir = %settings.base_dir.display(),
        "Generating hours script"
    );

    let file_name = select_latest_file(&settings.base_dir, &settings.extension)?;
    let records = TimesheetCsvParser::load_records(&settings.base_dir.join(&file_name)).await?;

    if settings.validation == Validation::Strict {
        validate_records(&records, &settings.client)?;
    }

    let client_records = filter_by_client(&records, &settings.client);
    if client_records.is_empty() {
        tracing::warn!(client = %settings.client, file = %file_name, "No records for client");
    }

    let totals = get_hours_by_date(&client_records);
    tracing::info!(records = client_records.len(), days = totals.len(), "Aggregated hours by date");

    let formatter = ScriptFormatter::with_class_prefix(settings.language, &settings.class_prefix);
    Ok(formatter.render(&totals))
}
