//! Output formatting for parsed resumes

pub mod formatter;

pub use formatter::{suggested_json_filename, ConsoleFormatter, JsonFormatter, OutputFormatter};
