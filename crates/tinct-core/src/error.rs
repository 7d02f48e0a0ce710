/// Rejection reasons for a textual color triple.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("field {index} is not a number: {token:?}")]
    NotANumber { index: usize, token: String },
    #[error("field {index} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },
}
