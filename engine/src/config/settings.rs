// Pipeline settings, built from the command line
use shared::models::Language;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use crate::script::DEFAULT_CLASS_PREFIX;

pub const DEFAULT_EXTENSION: &str = "csv";

/// How malformed `Hours` and `Date` values are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Keep going; bad values show up as NaN in the script.
    #[default]
    Permissive,
    /// Fail the run on the first bad value of the requested client.
    Strict,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub client: String,
    pub language: Language,
    pub base_dir: PathBuf,
    pub extension: String,
    pub class_prefix: String,
    pub validation: Validation,
}

impl PipelineSettings {
    pub fn new(client: &str) -> Self {
        PipelineSettings {
            client: client.to_string(),
            language: Language::default(),
            base_dir: default_base_dir(),
            extension: DEFAULT_EXTENSION.to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            validation: Validation::default(),
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}

impl From<Cli> for PipelineSettings {
    fn from(cli: Cli) -> Self {
        let mut settings = PipelineSettings::new(&cli.client)
            .with_language(cli.language.unwrap_or_default())
            .with_validation(if cli.strict { Validation::Strict } else { Validation::Permissive });
        if let Some(dir) = cli.dir {
            settings = settings.with_base_dir(dir);
        }
        settings
    }
}

/// The directory one level above the one holding the executable.
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
