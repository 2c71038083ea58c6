//! Optional session extractor.
//!
//! Fetches the current session from the bearer token, if one is present
//! and valid. Handlers receive `Option<Session>` and decide themselves
//! what an anonymous visitor sees; nothing here rejects the request.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;
use crate::services::Session;

/// Current session, extracted per-request from a trusted token.
pub struct OptionalSession(pub Option<Session>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
            .and_then(|token| state.session_service.current_session(token));

        Ok(OptionalSession(session))
    }
}
