use thiserror::Error;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CommentBody validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentBodyError {
    #[error("Comment body must not be empty")]
    Empty,

    #[error("Comment body too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid comment body: {0}")]
    InvalidBody(#[from] CommentBodyError),

    // Domain-level errors
    #[error("Subject is not allowed to perform this action")]
    Forbidden,

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
