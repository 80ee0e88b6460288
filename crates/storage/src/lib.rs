//! Storage layer for LinkUp
//!
//! This crate provides on-device key-value persistence and the
//! authentication-token slot read by the session gate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth_token;
pub mod kv;

pub use auth_token::{TokenSource, TokenStore, TOKEN_KEY};
pub use kv::{KvConfig, KvError, KvStore};
