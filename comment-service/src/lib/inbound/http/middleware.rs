use auth::Claims;
use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Extension type carrying the verified claims of the request subject
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    pub claims: Claims,
}

/// Middleware that verifies bearer tokens and adds the subject's claims to
/// request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Verify signature and expiry
    let claims = state
        .authenticator
        .verify_token(token, Utc::now())
        .map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            let message = match e {
                TokenError::Expired => "Token has expired",
                _ => "Invalid token",
            };
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": message
                })),
            )
                .into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedSubject { claims });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Missing Authorization header"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
