//! Error type for `pokepc-store-memory`.

use thiserror::Error;

/// A writer panicked while holding the store lock. Surfaced to callers as
/// [`pokepc_core::Error::Backend`].
#[derive(Debug, Error)]
#[error("store lock poisoned")]
pub struct LockPoisoned;
