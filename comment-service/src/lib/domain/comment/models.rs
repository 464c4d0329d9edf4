use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::comment::errors::CommentBodyError;
use crate::comment::errors::CommentIdError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Comment aggregate root entity.
///
/// The author reference is fixed at creation and never changes; it is what
/// the authorization policy checks ownership against. The author's username
/// is stored alongside it because usernames are immutable, which spares the
/// read path a join.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub author_username: Username,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new random comment ID.
    ///
    /// # Returns
    /// CommentId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a comment ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed CommentId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment body value object with validation.
///
/// Ensures the body is non-empty and within the 2000 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    const MAX_LENGTH: usize = 2000;

    /// Create a new validated comment body.
    ///
    /// # Arguments
    /// * `body` - Raw comment body string
    ///
    /// # Returns
    /// Validated CommentBody value object
    ///
    /// # Errors
    /// * `Empty` - Body is empty string
    /// * `TooLong` - Body exceeds 2000 characters
    pub fn new(body: String) -> Result<Self, CommentBodyError> {
        let length = body.len();
        if length == 0 {
            Err(CommentBodyError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CommentBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(body))
        }
    }

    /// Get body as string slice.
    ///
    /// # Returns
    /// Body string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_valid() {
        let body = CommentBody::new("Great post!".to_string()).unwrap();
        assert_eq!(body.as_str(), "Great post!");
    }

    #[test]
    fn test_body_empty() {
        let result = CommentBody::new("".to_string());
        assert!(matches!(result, Err(CommentBodyError::Empty)));
    }

    #[test]
    fn test_body_too_long() {
        let result = CommentBody::new("x".repeat(2001));
        assert!(matches!(result, Err(CommentBodyError::TooLong { .. })));
    }

    #[test]
    fn test_comment_id_round_trip() {
        let id = CommentId::new();
        let parsed = CommentId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }
}
