//! Account creation handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::AccountResponse;
use crate::errors::AppResult;

/// Account signup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Account username (required, at most 100 characters)
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    #[schema(example = "johndoe", max_length = 100)]
    pub username: String,
    /// Account email address
    #[validate(length(min = 1, message = "Email is required"), email(message = "Invalid email"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must have more than 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Response body for a successful signup
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    /// The created account, with the password stripped
    pub user: AccountResponse,
    /// Human-readable confirmation
    #[schema(example = "User created successfully")]
    pub message: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/user", post(create_account))
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Accounts",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created successfully", body = SignupResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email or username already exists")
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let account = state
        .account_service
        .signup(payload.username, payload.email, payload.password)
        .await?;

    let response = SignupResponse {
        user: AccountResponse::from(account),
        message: "User created successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
