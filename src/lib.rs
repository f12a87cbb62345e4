pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod lines;
pub mod ops;
pub mod processor;

pub use case::{
    convert, to_camel_case, to_kebab_case, to_lower_case, to_snake_case, to_title_case,
    to_upper_case, tokenize, CaseStyle, Token,
};
pub use config::Config;
pub use error::MultitoolError;
pub use lines::{
    remove_duplicate_lines, remove_empty_lines, reverse_lines, sort_lines_az, sort_lines_za,
    transform_lines, trim_lines, LineOp,
};
pub use ops::Operation;
pub use processor::Processor;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub source: String,
    pub operation: Operation,
    pub output: String,
    pub changed: bool,
}
