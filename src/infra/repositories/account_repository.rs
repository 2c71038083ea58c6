//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::Account;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Find account by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Create a new account
    async fn create(&self, username: String, email: String, password_hash: String)
        -> AppResult<Account>;
}

/// Concrete implementation of AccountRepository over SeaORM
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<Account> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_unique_violation)?;
        Ok(Account::from(model))
    }
}

/// Uniqueness is ultimately enforced by the unique indexes on `email` and
/// `username`: two racing signups can both pass the pre-insert lookups, but
/// only one insert succeeds. The loser's constraint violation is reported as
/// the same conflict the lookup would have produced.
fn map_unique_violation(err: sea_orm::DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if detail.contains("email") {
            return AppError::conflict("Email already exists");
        }
        if detail.contains("username") {
            return AppError::conflict("Username already exists");
        }
        return AppError::conflict("Account already exists");
    }
    AppError::from(err)
}
