//! Error types for `pokepc-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("username already exists: {0}")]
  DuplicateUsername(String),

  #[error("invalid credentials")]
  InvalidCredentials,

  /// A storage-backend failure unrelated to the request itself.
  #[error("store backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
