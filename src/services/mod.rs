//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod account_service;
mod session_service;

pub use account_service::{AccountManager, AccountService};
pub use session_service::{Claims, Session, SessionManager, SessionService, SessionUser};
