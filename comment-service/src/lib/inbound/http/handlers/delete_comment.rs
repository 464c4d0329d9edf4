use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::comment::models::CommentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let comment_id =
        CommentId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let deleted = state
        .comment_service
        .delete_comment(&comment_id, &subject.claims)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(ApiSuccess::new(StatusCode::NO_CONTENT, ()))
    } else {
        Err(ApiError::NotFound(format!("Comment not found: {}", id)))
    }
}
