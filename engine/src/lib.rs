// Engine library root: turns a timesheet CSV into a form-filling script.

pub mod aggregation;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod script;

pub use error::EngineError;
