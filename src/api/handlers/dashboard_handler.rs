//! Dashboard page handler.

use axum::{response::Html, routing::get, Router};

use crate::api::extractors::OptionalSession;
use crate::api::AppState;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Render the dashboard greeting.
///
/// No access control here: an anonymous visitor gets the greeting with an
/// empty name instead of a redirect.
pub async fn dashboard(OptionalSession(session): OptionalSession) -> Html<String> {
    let username = session.map(|s| s.user.username).unwrap_or_default();

    Html(format!(
        "<div>welcome Back {}, Dashboard Loading</div>",
        username
    ))
}
