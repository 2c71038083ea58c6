//! Account domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(id: Uuid, username: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Account response (safe to return to client, never carries the password)
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountResponse {
    /// Unique account identifier
    pub id: Uuid,
    /// Account username
    pub username: String,
    /// Account email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            created_at: account.created_at,
        }
    }
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}
