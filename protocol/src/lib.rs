use thiserror::Error;

pub mod fit;

pub use fit::{FitRequest, FitResponse, GREETING, RankedEntry, parse_fit_request};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}
