//! LinkUp
//!
//! A mobile-style application front-end: credential flows (login, signup), a
//! token-gated tab area, theming, and navigation. This crate re-exports the
//! workspace members for integration tests and host shells.

#![warn(clippy::all)]

pub use app_core;
pub use app_state;
pub use app_ui;
pub use i18n;
pub use storage;
