use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CommentData;
use crate::comment::models::CommentBody;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let comment_body =
        CommentBody::new(body.body).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .comment_service
        .create_comment(&subject.claims, comment_body)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

/// HTTP request body for creating a comment (raw JSON)
///
/// Carries only the body text: the author is the token subject, never a
/// client-supplied field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    body: String,
}
