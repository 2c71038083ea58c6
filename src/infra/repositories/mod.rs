//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod account_repository;
pub(crate) mod entities;

pub use account_repository::{AccountRepository, AccountStore};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
