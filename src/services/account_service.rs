//! Account service - Handles account creation business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Account, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a new account after checking email and username uniqueness.
    async fn signup(&self, username: String, email: String, password: String)
        -> AppResult<Account>;
}

/// Concrete implementation of AccountService.
pub struct AccountManager<R: AccountRepository> {
    repo: Arc<R>,
}

impl<R: AccountRepository> AccountManager<R> {
    /// Create new account service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: AccountRepository> AccountService for AccountManager<R> {
    async fn signup(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<Account> {
        // Input shape is validated by the handler's ValidatedJson extractor.
        // The email check runs first so a payload that collides on both
        // fields reports the email conflict.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = Password::new(&password)?.into_string();

        // The insert itself can still lose a race against a concurrent
        // signup; the repository maps the unique violation to the same 409.
        self.repo.create(username, email, password_hash).await
    }
}
