//! Resume parser library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod parsing;

pub use config::Config;
pub use error::{ResumeParserError, Result};
pub use parsing::pipeline::ResumePipeline;
pub use parsing::resume::ParsedResume;
pub use parsing::taxonomy::RoleTaxonomy;
