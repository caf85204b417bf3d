// Run configuration: command line parsing and the settings it produces
pub mod cli;
pub mod settings;

pub use cli::Cli;
pub use settings::{PipelineSettings, Validation};
