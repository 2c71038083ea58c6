//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the account entity

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{AccountRepository, AccountStore};
