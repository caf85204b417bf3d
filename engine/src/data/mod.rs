// Input side of the pipeline: locating the timesheet and reading its rows.
pub mod csv_parser;
pub mod file_selector;
