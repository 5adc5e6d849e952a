use cursor::{Col, Line};

/// A positioned error from the scanner or parser. The pipeline is
/// fail-fast, so one error aborts the run; there is no collection type.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("error (l. {line}, c. {col}): {message}")]
pub struct RabbitError {
    pub line: Line,
    pub col: Col,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, RabbitError>;
