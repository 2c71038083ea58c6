//! Custom axum extractors.

mod session;
mod validated_json;

pub use session::OptionalSession;
pub use validated_json::ValidatedJson;
