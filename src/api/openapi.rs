//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::account_handler;
use crate::domain::AccountResponse;

/// OpenAPI documentation for the signup API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup API",
        version = "0.1.0",
        description = "User signup API with Axum, SeaORM, and a session-gated dashboard",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        account_handler::create_account,
    ),
    components(
        schemas(
            AccountResponse,
            account_handler::SignupRequest,
            account_handler::SignupResponse,
        )
    ),
    tags(
        (name = "Accounts", description = "Account signup operations")
    )
)]
pub struct ApiDoc;
