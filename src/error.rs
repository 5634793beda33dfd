use thiserror::Error;

/// Broad classification of an extraction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The input could not be read
    Input,
    /// The input was not valid JSON
    Parse,
    /// The document was valid JSON but not the expected shape
    Shape,
}

/// Errors raised while reading a document or extracting lines from it
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected an object at `{path}`")]
    NotAnObject { path: String },

    #[error("missing field `{path}`")]
    MissingField { path: String },

    #[error("expected a sequence at `{path}`")]
    NotASequence { path: String },

    #[error("expected a string, number or boolean at `{path}`")]
    NotAScalar { path: String },
}

impl ExtractError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ExtractError::Read(_) => ErrorClass::Input,
            ExtractError::Parse(_) => ErrorClass::Parse,
            ExtractError::NotAnObject { .. }
            | ExtractError::MissingField { .. }
            | ExtractError::NotASequence { .. }
            | ExtractError::NotAScalar { .. } => ErrorClass::Shape,
        }
    }

    /// Location in the document where a shape error was detected
    pub fn path(&self) -> Option<&str> {
        match self {
            ExtractError::NotAnObject { path }
            | ExtractError::MissingField { path }
            | ExtractError::NotASequence { path }
            | ExtractError::NotAScalar { path } => Some(path),
            _ => None,
        }
    }
}
