use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Routes reachable without a token even when tokens are required.
const PUBLIC_PATHS: [&str; 2] = ["/login", "/health"];

/// Validates `Authorization: Bearer` when present and stores the claims
/// for handlers. A missing header is only an error when
/// `auth.require_token` is set.
pub async fn bearer_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if PUBLIC_PATHS.contains(&path) || req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let token = match bearer_token(req.headers()) {
        Some(Ok(token)) => Some(token.to_string()),
        Some(Err(e)) => return e.into_response(),
        None => None,
    };

    match token {
        Some(token) => match state.auth.verify_token(&token) {
            Ok(claims) => {
                tracing::debug!(username = %claims.username, "Bearer token accepted");
                req.extensions_mut().insert(claims);
            }
            Err(e) => return ApiError::from(e).into_response(),
        },
        None if state.require_token => {
            return ApiError::Unauthorized("missing bearer token".to_string()).into_response();
        }
        None => {}
    }

    next.run(req).await
}

fn bearer_token(headers: &HeaderMap) -> Option<Result<&str, ApiError>> {
    let value = headers.get(header::AUTHORIZATION)?;
    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("expected `Authorization: Bearer <token>`".to_string()));
    Some(token)
}
