use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use chrono::Utc;

use super::models::Comment;
use super::models::CommentBody;
use super::models::CommentId;
use super::policy;
use super::ports::CommentRepository;
use super::ports::CommentServicePort;
use crate::comment::errors::CommentError;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Concrete implementation of CommentServicePort.
///
/// Binds comment ownership to the authenticated subject and gates every
/// mutation through the authorization policy.
pub struct CommentService<CR, UR>
where
    CR: CommentRepository,
    UR: UserRepository,
{
    comment_repository: Arc<CR>,
    user_repository: Arc<UR>,
}

impl<CR, UR> CommentService<CR, UR>
where
    CR: CommentRepository,
    UR: UserRepository,
{
    /// Create a new comment service with injected dependencies.
    ///
    /// # Arguments
    /// * `comment_repository` - Comment persistence implementation
    /// * `user_repository` - User repository for author resolution
    ///
    /// # Returns
    /// Configured comment service instance
    pub fn new(comment_repository: Arc<CR>, user_repository: Arc<UR>) -> Self {
        Self {
            comment_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl<CR, UR> CommentServicePort for CommentService<CR, UR>
where
    CR: CommentRepository,
    UR: UserRepository,
{
    async fn create_comment(
        &self,
        claims: &Claims,
        body: CommentBody,
    ) -> Result<Comment, CommentError> {
        let author_id = UserId::from_string(&claims.sub)
            .map_err(|_| CommentError::AuthorNotFound(claims.sub.clone()))?;

        // Resolve the author record; the stored username rides along with
        // the comment so reads need no join.
        let author = self
            .user_repository
            .find_by_id(&author_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?
            .ok_or_else(|| CommentError::AuthorNotFound(claims.sub.clone()))?;

        let comment = Comment {
            id: CommentId::new(),
            author_id,
            author_username: author.username,
            body,
            created_at: Utc::now(),
        };

        let created = self.comment_repository.create(comment).await?;

        tracing::debug!(comment_id = %created.id, author_id = %created.author_id, "Comment created");

        Ok(created)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, CommentError> {
        self.comment_repository.list_all().await
    }

    async fn delete_comment(
        &self,
        id: &CommentId,
        claims: &Claims,
    ) -> Result<bool, CommentError> {
        let Some(comment) = self.comment_repository.find_by_id(id).await? else {
            // Absent is not an error: deleting twice is fine
            return Ok(false);
        };

        if !policy::can_delete(claims, &comment) {
            tracing::warn!(
                comment_id = %id,
                subject = %claims.sub,
                "Delete denied by authorization policy"
            );
            return Err(CommentError::Forbidden);
        }

        self.comment_repository.delete(id).await
    }
}
