//! Session service - Issues and retrieves authenticated sessions.
//!
//! Token signing and verification are delegated to jsonwebtoken (HS256).
//! Retrieval is deliberately forgiving: a missing, malformed, or expired
//! token simply means there is no current session.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::domain::Account;
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// The visitor an active session belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Server-side representation of an authenticated visitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
}

/// Session service trait for dependency injection.
pub trait SessionService: Send + Sync {
    /// Issue a session token for an account.
    fn issue_token(&self, account: &Account) -> AppResult<String>;

    /// Fetch the session a token represents, if any.
    ///
    /// Returns `None` for invalid or expired tokens rather than an error;
    /// pages gated on a session render anonymously in that case.
    fn current_session(&self, token: &str) -> Option<Session>;
}

/// Concrete implementation of SessionService backed by signed JWTs.
pub struct SessionManager {
    config: Config,
}

impl SessionManager {
    /// Create new session service instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl SessionService for SessionManager {
    fn issue_token(&self, account: &Account) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(token)
    }

    fn current_session(&self, token: &str) -> Option<Session> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )
        .ok()?;

        let claims = token_data.claims;
        Some(Session {
            user: SessionUser {
                id: claims.sub,
                username: claims.username,
                email: claims.email,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-testing-only-32chars");
        Config::from_env()
    }

    fn test_account() -> Account {
        Account::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        )
    }

    #[test]
    fn test_issued_token_round_trips() {
        let service = SessionManager::new(test_config());
        let account = test_account();

        let token = service.issue_token(&account).unwrap();
        let session = service.current_session(&token).unwrap();

        assert_eq!(session.user.id, account.id);
        assert_eq!(session.user.username, "alice");
        assert_eq!(session.user.email, "alice@example.com");
    }

    #[test]
    fn test_garbage_token_yields_no_session() {
        let service = SessionManager::new(test_config());
        assert!(service.current_session("not-a-token").is_none());
    }

    #[test]
    fn test_expired_token_yields_no_session() {
        let config = test_config();
        let service = SessionManager::new(config.clone());
        let account = test_account();

        let now = Utc::now();
        let claims = Claims {
            sub: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret_bytes()),
        )
        .unwrap();

        assert!(service.current_session(&token).is_none());
    }
}
