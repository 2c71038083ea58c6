//! Signup form - client-side validation and submission.
//!
//! Mirrors the server's constraint set so a bad form never reaches the
//! network, and adds the confirm-password check that only exists on the
//! client.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::SIGN_IN_ROUTE;
use crate::errors::{AppError, AppResult};

/// The four signup form fields.
///
/// Only `{username, email, password}` are sent on submission;
/// the confirmation never leaves the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Email is required"), email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must have more than 8 characters"))]
    pub password: String,
    #[validate(
        length(min = 1, message = "Password confirmation is required"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    #[serde(rename = "confirmPassword", skip_serializing)]
    pub confirm_password: String,
}

/// Where the client navigates after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Successful registration: go to the sign-in view
    SignIn,
    /// Submission failed: stay put (failure is only logged, not surfaced)
    Stay,
}

impl Navigation {
    /// Route the navigation points at, if any.
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Navigation::SignIn => Some(SIGN_IN_ROUTE),
            Navigation::Stay => None,
        }
    }
}

/// HTTP client for the signup endpoint.
pub struct SignupClient {
    http: reqwest::Client,
    base_url: String,
}

impl SignupClient {
    /// Create a client against a server base URL (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Validate and submit the form.
    ///
    /// An invalid form returns a validation error without touching the
    /// network. A server rejection is logged and reported as
    /// `Navigation::Stay`; no error detail is surfaced to the visitor.
    pub async fn submit(&self, form: &SignupForm) -> AppResult<Navigation> {
        form.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let url = format!("{}/api/user", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Signup request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(Navigation::SignIn)
        } else {
            tracing::warn!(status = %response.status(), "Registration failed");
            Ok(Navigation::Stay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_navigation_routes() {
        assert_eq!(Navigation::SignIn.route(), Some("/sign-in"));
        assert_eq!(Navigation::Stay.route(), None);
    }

    #[test]
    fn test_bad_email_and_short_password_flagged() {
        let form = SignupForm {
            username: "ab".to_string(),
            email: "bad".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        // A two-character username is fine
        assert!(!fields.contains_key("username"));
    }

    #[test]
    fn test_mismatched_confirmation_flagged_on_confirm_field() {
        let form = SignupForm {
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgx".to_string(),
            ..valid_form()
        };

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("confirm_password"));
        assert!(!fields.contains_key("password"));
    }

    #[test]
    fn test_confirmation_never_serialized() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert!(json.get("confirmPassword").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["password"], "password123");
    }

    #[tokio::test]
    async fn test_invalid_form_rejected_before_any_network_call() {
        // Unroutable base URL: if submit tried the network this would
        // fail with an internal error, not a validation error.
        let client = SignupClient::new("http://127.0.0.1:1");
        let form = SignupForm {
            username: "ab".to_string(),
            email: "bad".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };

        let err = client.submit(&form).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
