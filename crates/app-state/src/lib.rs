//! Application state management for LinkUp
//!
//! This crate owns the session gate: the boundary check between the
//! unauthenticated auth screens and the token-gated tab area.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;

pub use session::{GateDecision, GateTask, LoginRedirect, SessionGate};
