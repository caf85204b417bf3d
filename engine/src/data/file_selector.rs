// Picks the timesheet to process: the newest file with the expected extension
// in a single directory.
use chrono::{DateTime, Utc};
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub created: SystemTime,
}

/// Returns the name of the most recently created `*.{extension}` file in `dir`.
///
/// Only regular files directly inside `dir` are considered. When two files share
/// the newest timestamp the one seen first in the directory listing wins.
pub fn select_latest_file(dir: &Path, extension: &str) -> Result<String, EngineError> {
    let suffix = format!(".{}", extension);
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::debug!(name = ?raw, "Skipping entry with non UTF-8 name");
                continue;
            }
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        let metadata = fs::metadata(entry.path())?;
        if !metadata.is_file() {
            tracing::debug!(%name, "Skipping non-file entry");
            continue;
        }
        let created = creation_time(&metadata)?;
        let created_at: DateTime<Utc> = created.into();
        tracing::trace!(%name, %created_at, "Found candidate file");
        candidates.push(Candidate { name, created });
    }

    let count = candidates.len();
    match pick_latest(candidates) {
        Some(latest) => {
            let created_at: DateTime<Utc> = latest.created.into();
            tracing::info!(
                file = %latest.name,
                created = %created_at,
                candidates = count,
                "Selected input file"
            );
            Ok(latest.name)
        }
        None => Err(EngineError::MissingInputFile {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
    }
}

/// Keeps the first candidate unless a later one is strictly newer.
pub fn pick_latest<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().fold(None, |latest, candidate| match latest {
        Some(current) if candidate.created <= current.created => Some(current),
        _ => Some(candidate),
    })
}

// Not every filesystem records a birth time.
fn creation_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|e| {
        tracing::debug!(error = %e, "Creation time unavailable, using modification time");
        metadata.modified()
    })
}
