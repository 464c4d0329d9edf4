use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CommentData;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    state
        .comment_service
        .list_comments()
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            let comment_data: Vec<CommentData> = comments.iter().map(|c| c.into()).collect();
            ApiSuccess::new(StatusCode::OK, comment_data)
        })
}
