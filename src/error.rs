use thiserror::Error;

use crate::models::QuestionId;

/// Reasons a question bank is rejected before any session is created.
#[derive(Debug, Error)]
pub enum QuestionSetError {
    #[error("question set is empty")]
    Empty,

    #[error("question id must be positive")]
    InvalidId,

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("question {id} has {count} options, at least 2 are required")]
    TooFewOptions { id: QuestionId, count: usize },

    #[error("question {id}: correct index {index} is out of range for {count} options")]
    CorrectIndexOutOfRange {
        id: QuestionId,
        index: usize,
        count: usize,
    },

    #[error("question {0} awards zero marks")]
    ZeroMarks(QuestionId),

    #[error("total marks exceed {}", u32::MAX)]
    TotalMarksOverflow,

    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
}
