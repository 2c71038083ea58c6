//! Client-side signup flow - form validation and endpoint submission.

mod signup_form;

pub use signup_form::{Navigation, SignupClient, SignupForm};
