use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("No encoder found for type '{type_name}'")]
    NoEncoderFound { type_name: String },

    #[error("Encoder for '{expected}' was given a value of type {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Failed to encode '{type_name}': {message}")]
    Encoder { type_name: String, message: String },
}

impl EncodingError {
    pub fn no_encoder(type_name: impl Into<String>) -> Self {
        Self::NoEncoderFound {
            type_name: type_name.into(),
        }
    }

    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn encoder(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encoder {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
