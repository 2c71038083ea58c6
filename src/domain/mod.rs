//! Domain layer - Core business entities and logic.

mod account;
mod password;

pub use account::{Account, AccountResponse};
pub use password::Password;
