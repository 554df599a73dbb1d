use thiserror::Error;

/// Malformed item text in a submission. Not caught here; the form validation
/// layer turns it into a field-level message.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed datetime text {text:?}")]
    InvalidDateTime {
        text: String,
        source: chrono::ParseError,
    },
}

/// A stored item that could not be turned into display text.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("could not serialize item as JSON")]
    Json(#[from] serde_json::Error),
}
