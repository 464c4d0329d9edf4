use async_trait::async_trait;
use auth::Claims;

use crate::comment::errors::CommentError;
use crate::comment::models::Comment;
use crate::comment::models::CommentBody;
use crate::comment::models::CommentId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Create a comment owned by the authenticated subject.
    ///
    /// Ownership is bound to the token subject, never to client-supplied
    /// data.
    ///
    /// # Arguments
    /// * `claims` - Verified claims of the creating subject
    /// * `body` - Validated comment body
    ///
    /// # Returns
    /// Created comment entity
    ///
    /// # Errors
    /// * `AuthorNotFound` - Token subject has no user record
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(&self, claims: &Claims, body: CommentBody)
        -> Result<Comment, CommentError>;

    /// Retrieve all comments in storage order.
    ///
    /// # Returns
    /// Vector of comments; empty when none exist
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_comments(&self) -> Result<Vec<Comment>, CommentError>;

    /// Delete a comment if the subject is authorized.
    ///
    /// # Arguments
    /// * `id` - Comment ID to delete
    /// * `claims` - Verified claims of the requesting subject
    ///
    /// # Returns
    /// True if the comment existed and was deleted, false if absent
    /// (idempotent-delete semantics)
    ///
    /// # Errors
    /// * `Forbidden` - Comment exists but the subject may not delete it
    /// * `DatabaseError` - Database operation failed
    async fn delete_comment(&self, id: &CommentId, claims: &Claims)
        -> Result<bool, CommentError>;
}

/// Persistence operations for the comment aggregate.
///
/// Implementations must never interpolate caller-supplied values into query
/// text; all values travel as bound parameters.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist new comment to storage.
    ///
    /// # Arguments
    /// * `comment` - Comment entity to create
    ///
    /// # Returns
    /// Created comment entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    /// Retrieve comment by identifier.
    ///
    /// # Arguments
    /// * `id` - Comment ID
    ///
    /// # Returns
    /// Optional comment entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    /// Retrieve all comments in storage order.
    ///
    /// # Returns
    /// Vector of all comments
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Comment>, CommentError>;

    /// Remove comment from storage.
    ///
    /// # Arguments
    /// * `id` - Comment ID to delete
    ///
    /// # Returns
    /// True if a row was removed, false if the comment was already gone
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &CommentId) -> Result<bool, CommentError>;
}
