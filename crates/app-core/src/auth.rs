//! Credential forms and validation
//!
//! Both auth screens share the same shape: an immutable form value replaced
//! on each edit, and a pure validator that reports the first failing rule in
//! a fixed priority order. Nothing here touches the network or disk; the
//! success paths are stubs wired up by the screens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// A failed validation rule, carrying its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// One or more required login fields are empty
    #[error("Please fill in all fields")]
    MissingFields,

    /// Signup name field is empty
    #[error("Please enter your full name")]
    NameRequired,

    /// Signup email field is empty
    #[error("Please enter your email")]
    EmailRequired,

    /// Signup password field is empty
    #[error("Please create a password")]
    PasswordRequired,

    /// Signup confirmation field is empty
    #[error("Please confirm your password")]
    ConfirmationRequired,

    /// Email does not look like an address
    #[error("Please enter a valid email address")]
    MalformedEmail,

    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// Confirmation does not equal the password
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Terms checkbox is unchecked
    #[error("Please accept the terms and conditions")]
    TermsNotAccepted,
}

/// A blocking dialog (title + message) requiring explicit dismissal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub message: String,
}

impl Alert {
    /// Create an alert
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }

    /// An error alert for a failed validation rule
    pub fn error(error: ValidationError) -> Self {
        Self::new("Error", error.to_string())
    }
}

/// The email shape both screens accept: an `@` and a `.` must be present.
fn email_is_well_formed(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

fn password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

// =============================================================================
// Login
// =============================================================================

/// Login form state
///
/// Edits replace the whole value; validation is a pure function of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Outcome of a login submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginSubmit {
    /// Submission blocked; the alert carries the first failing rule
    Blocked(ValidationError),
    /// All rules passed (success is simulated; no request is sent)
    Accepted,
}

impl LoginForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the email field
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Replace the password field
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Validate the form, reporting the first failing rule.
    ///
    /// Login only requires both fields to be non-empty; the email shape is
    /// not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    /// Run a submission attempt
    pub fn submit(&self) -> LoginSubmit {
        match self.validate() {
            Err(error) => {
                tracing::debug!(%error, "login submission blocked");
                LoginSubmit::Blocked(error)
            }
            Ok(()) => {
                tracing::info!(email = %self.email, "login accepted (stub)");
                LoginSubmit::Accepted
            }
        }
    }
}

// =============================================================================
// Signup
// =============================================================================

/// Signup form state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignupForm {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Terms-of-service checkbox
    pub accept_terms: bool,
}

/// Outcome of a signup submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupSubmit {
    /// Submission blocked; carries the first failing rule
    Blocked(ValidationError),
    /// Account "created"; the acknowledgment must be dismissed before the
    /// screen navigates back to login
    Accepted(Alert),
}

impl SignupForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name field
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the email field
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Replace the password field
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Replace the confirmation field
    pub fn with_confirm_password(mut self, confirm: impl Into<String>) -> Self {
        self.confirm_password = confirm.into();
        self
    }

    /// Replace the terms checkbox state
    pub fn with_accept_terms(mut self, accepted: bool) -> Self {
        self.accept_terms = accepted;
        self
    }

    /// Whether the submit control is interactive.
    ///
    /// The button is disabled whenever the terms are unaccepted, no matter
    /// what the other fields hold.
    pub fn submit_enabled(&self) -> bool {
        self.accept_terms
    }

    /// Validate the form, reporting the first failing rule.
    ///
    /// Rule order: empty name, empty email, empty password, empty
    /// confirmation, email shape, password length, confirmation equality,
    /// terms acceptance.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        if self.confirm_password.is_empty() {
            return Err(ValidationError::ConfirmationRequired);
        }
        if !email_is_well_formed(&self.email) {
            return Err(ValidationError::MalformedEmail);
        }
        if password_too_short(&self.password) {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.confirm_password != self.password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }

    /// Inline hint under the password input.
    ///
    /// Shown only while the password is non-empty and short, matching the
    /// as-you-type rendering of the screen.
    pub fn password_hint(&self) -> Option<ValidationError> {
        if !self.password.is_empty() && password_too_short(&self.password) {
            Some(ValidationError::PasswordTooShort)
        } else {
            None
        }
    }

    /// Inline hint under the confirmation input.
    pub fn confirmation_hint(&self) -> Option<ValidationError> {
        if !self.confirm_password.is_empty() && self.confirm_password != self.password {
            Some(ValidationError::PasswordMismatch)
        } else {
            None
        }
    }

    /// Run a submission attempt
    pub fn submit(&self) -> SignupSubmit {
        match self.validate() {
            Err(error) => {
                tracing::debug!(%error, "signup submission blocked");
                SignupSubmit::Blocked(error)
            }
            Ok(()) => {
                tracing::info!(email = %self.email, "signup accepted (stub)");
                SignupSubmit::Accepted(Alert::new("Success", "Account created successfully!"))
            }
        }
    }
}

// =============================================================================
// Auxiliary flows
// =============================================================================

/// External identity providers offered on the auth screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProvider {
    /// Google sign-in
    Google,
}

impl IdentityProvider {
    /// Display name for buttons and logs
    pub fn name(&self) -> &'static str {
        match self {
            IdentityProvider::Google => "Google",
        }
    }
}

/// Result of pressing a provider button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderLogin {
    /// The provider integration is not wired up; the press is a no-op
    NotConfigured,
}

/// Stubbed provider sign-in: logs the press, navigates nowhere.
pub fn provider_login(provider: IdentityProvider) -> ProviderLogin {
    tracing::info!(provider = provider.name(), "provider sign-in pressed (not configured)");
    ProviderLogin::NotConfigured
}

/// Prompt produced by the "Forgot Password?" link.
pub fn forgot_password_prompt() -> Alert {
    Alert::new("Forgot Password", "Password reset link will be sent to your email")
}
