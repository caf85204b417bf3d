use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No .{extension} file found in '{}'", dir.display())]
    MissingInputFile { dir: PathBuf, extension: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse '{}' at line {line}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid {field} '{value}' in data row {row}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Wrong argument count: {0}")]
    InvalidArgumentCount(String),

    #[error("Incorrect language argument: {0}")]
    InvalidLanguageCode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    /// Builds a `ParseFailure`, taking the line number from the csv error position
    /// when it has one.
    pub fn parse_failure(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(0);
        EngineError::ParseFailure {
            path: path.into(),
            line,
            source,
        }
    }
}
