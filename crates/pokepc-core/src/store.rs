//! The store traits implemented by storage backends.
//!
//! `pokepc-store-memory` implements both traits. The web layer depends on
//! these abstractions, not on any concrete backend, so handlers bound only
//! the trait they actually touch.
//!
//! Domain failures ([`DuplicateUsername`](crate::Error::DuplicateUsername),
//! [`InvalidCredentials`](crate::Error::InvalidCredentials)) travel as
//! [`crate::Error`] variants handlers can match on; backend faults are
//! wrapped in [`Backend`](crate::Error::Backend).

use std::future::Future;

use crate::{
  Result,
  creature::{Creature, CreatureId, NewCreature},
  user::{User, UserId},
};

// ─── Credential store ────────────────────────────────────────────────────────

/// Abstraction over the account store.
///
/// Accounts are append-only: there are no update or delete operations.
///
/// All methods return `Send` futures so the traits can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CredentialStore: Send + Sync {
  /// Create an account. Fails with
  /// [`DuplicateUsername`](crate::Error::DuplicateUsername) if the username
  /// is already present; otherwise derives the password hash, assigns the
  /// next user id, and returns the stored [`User`].
  fn register<'a>(
    &'a self,
    username: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<User>> + Send + 'a;

  /// Verify credentials. Fails with
  /// [`InvalidCredentials`](crate::Error::InvalidCredentials) if the
  /// username is absent or the derived hash does not match the stored one.
  fn authenticate<'a>(
    &'a self,
    username: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<User>> + Send + 'a;
}

// ─── Collection store ────────────────────────────────────────────────────────

/// Abstraction over the creature-record store.
pub trait CollectionStore: Send + Sync {
  /// Assign the next record id and store `input` unconditionally. The
  /// owner id is not checked against the credential store.
  fn add_creature(
    &self,
    input: NewCreature,
  ) -> impl Future<Output = Result<Creature>> + Send + '_;

  /// All records owned by `owner`, ascending by dex number. Records with
  /// equal dex keep their insertion order.
  fn list_by_owner(
    &self,
    owner: UserId,
  ) -> impl Future<Output = Result<Vec<Creature>>> + Send + '_;

  /// Remove the record only if it exists and is owned by `owner`;
  /// otherwise a no-op. Returns whether a deletion occurred.
  fn delete_creature(
    &self,
    id: CreatureId,
    owner: UserId,
  ) -> impl Future<Output = Result<bool>> + Send + '_;
}
