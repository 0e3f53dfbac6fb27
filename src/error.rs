use mql_codec::EncodingError;
use mql_expressions::ExpressionError;
use mql_search::SearchPathError;
use thiserror::Error;

/// Any error raised while building or rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MqlError {
    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),

    #[error("Search path error: {0}")]
    SearchPath(#[from] SearchPathError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

impl MqlError {
    /// True for errors caused by arguments rejected at construction time.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            MqlError::Expression(ExpressionError::InvalidArgument(_))
                | MqlError::SearchPath(SearchPathError::InvalidArgument(_))
        )
    }
}
