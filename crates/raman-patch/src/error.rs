use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },
    #[error("Malformed input '{}': {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: InputError,
    },
    #[error("Missing field '{field}' in '{}'", .path.display())]
    MissingField { path: PathBuf, field: String },
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Serialize(serde_json::Error),
}

/// Why a document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PatchError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PatchError::InvalidArgument { .. })
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, PatchError::MalformedInput { .. })
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, PatchError::MissingField { .. })
    }

    /// True when the input file does not exist, as opposed to being unparsable.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PatchError::MalformedInput {
                source: InputError::Io(e),
                ..
            } if e.kind() == std::io::ErrorKind::NotFound
        )
    }
}
