use thiserror::Error;

/// Errors raised while turning user input into calculation inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date format: {input}. Expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("Invalid granularity: {value}. Valid values: {valid:?}")]
    InvalidGranularity { value: String, valid: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
