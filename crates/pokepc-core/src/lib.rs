//! Core types and trait definitions for the Pokemon PC collection server.
//!
//! This crate is deliberately free of HTTP dependencies. All other crates
//! depend on it; it depends on nothing beyond the password-hashing
//! primitives.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod creature;
pub mod error;
pub mod password;
pub mod store;
pub mod user;

pub use error::{Error, Result};
