use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::comment::errors::CommentError;
use crate::comment::models::Comment;
use crate::comment::models::CommentBody;
use crate::comment::models::CommentId;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Postgres-backed comment store.
///
/// Every query binds its values; caller-supplied strings never appear in
/// query text.
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: PgRow) -> Result<Comment, CommentError> {
        Ok(Comment {
            id: CommentId(
                row.try_get::<Uuid, _>("id")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            ),
            author_id: UserId(
                row.try_get::<Uuid, _>("author_id")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            ),
            author_username: Username::new(
                row.try_get("author_username")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            )
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            body: CommentBody::new(
                row.try_get("body")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            )?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, author_id, author_username, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.author_id.0)
        .bind(comment.author_username.as_str())
        .bind(comment.body.as_str())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query(
            r#"
            SELECT id, author_id, author_username, body, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        row.map(Self::map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, author_id, author_username, body, created_at
            FROM comments
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::map_row).collect()
    }

    async fn delete(&self, id: &CommentId) -> Result<bool, CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
