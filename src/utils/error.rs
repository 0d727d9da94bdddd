use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Metadata store error: {message}")]
    MetadataError { message: String },
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
