//! Answer extraction errors

use thiserror::Error;

pub type AnswerResult<T> = Result<T, AnswerError>;

/// Errors raised while reading answer documents
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("QALD document contains no questions")]
    NoQuestions,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
