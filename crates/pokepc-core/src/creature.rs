//! Creature records — the unit of a user's collection.

use crate::user::UserId;

/// Process-wide auto-increment record identifier, starting at 1. Never
/// reused, even after deletion.
pub type CreatureId = u64;

/// A stored creature record. Created on add, removed on delete, never
/// otherwise mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
  pub id:    CreatureId,
  /// Dex number the collection page sorts by.
  pub dex:   u32,
  pub name:  String,
  pub level: u32,
  pub type1: String,
  /// Second type tag; absent for single-typed creatures.
  pub type2: Option<String>,
  /// Owning user id. Not checked against the credential store.
  pub owner: UserId,
}

/// Input to [`crate::store::CollectionStore::add_creature`].
/// The id is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewCreature {
  pub dex:   u32,
  pub name:  String,
  pub level: u32,
  pub type1: String,
  pub type2: Option<String>,
  pub owner: UserId,
}
