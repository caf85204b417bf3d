use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use shared::models::Language;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;

use crate::error::EngineError;

const USAGE_HINT: &str = "usage: hourscript <CLIENT> [fi|en]";
const LANGUAGE_ARG: &str = "LANGUAGE";

#[derive(Parser, Debug)]
#[command(name = "hourscript", version)]
#[command(about = "Prints a script that fills an hours form from the newest timesheet CSV", long_about = None)]
pub struct Cli {
    /// Client whose hours are collected (matched ignoring case)
    #[arg(allow_hyphen_values = true)]
    pub client: String,

    /// Decimal style of the generated values: fi (3,5) or en (3.5)
    pub language: Option<Language>,

    /// Directory searched for the timesheet, instead of the one above the executable
    #[arg(long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Fail on hours or dates that cannot be parsed instead of emitting NaN
    #[arg(long)]
    pub strict: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses the full argument list, program name included.
    ///
    /// `--help` and `--version` print and exit the process like `Cli::parse` would.
    pub fn parse_args<I, T>(args: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
                let arg = context_string(&err, ContextKind::InvalidArg);
                let value = context_string(&err, ContextKind::InvalidValue);
                if arg.contains(LANGUAGE_ARG) {
                    EngineError::InvalidLanguageCode(format!("'{}', expected 'fi' or 'en'", value))
                } else {
                    EngineError::InvalidArgument(format!("'{}' for {}", value, arg))
                }
            }
            kind => EngineError::InvalidArgumentCount(format!("{} ({})", kind, USAGE_HINT)),
        })
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(value)) => value.clone(),
        _ => String::new(),
    }
}
