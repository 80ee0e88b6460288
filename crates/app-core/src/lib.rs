//! Core application logic for LinkUp
//!
//! This crate contains the credential form state and the validation rules
//! shared by the login and signup screens.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;

pub use auth::{
    Alert, IdentityProvider, LoginForm, LoginSubmit, ProviderLogin, SignupForm,
    SignupSubmit, ValidationError, MIN_PASSWORD_LEN,
};
