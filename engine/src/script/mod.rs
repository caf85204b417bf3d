// Rendering of daily totals into a browser console snippet
pub mod formatter;

pub use formatter::{get_day, ScriptFormatter, DEFAULT_CLASS_PREFIX};
