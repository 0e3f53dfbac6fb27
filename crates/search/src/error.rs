use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchPathError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SearchPathError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
