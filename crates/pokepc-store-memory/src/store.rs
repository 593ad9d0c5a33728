//! [`MemoryStore`] — the in-memory implementation of both store traits.

use std::{
  collections::{BTreeMap, HashMap},
  sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use pokepc_core::{
  Error, Result,
  creature::{Creature, CreatureId, NewCreature},
  password,
  store::{CollectionStore, CredentialStore},
  user::{User, UserId},
};

use crate::error::LockPoisoned;

// ─── Store ───────────────────────────────────────────────────────────────────

/// Both Pokemon PC stores in one process-lifetime value.
///
/// Cloning is cheap — the inner state is reference-counted and shared.
/// Every trait method acquires the lock exactly once, so check-then-write
/// sequences (signup uniqueness, owner-scoped delete) are atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

struct Inner {
  /// Accounts keyed by username; usernames are unique and case-sensitive.
  users:            HashMap<String, User>,
  /// Records keyed by id. `BTreeMap` iteration is id order, which is
  /// insertion order because ids are monotonic.
  creatures:        BTreeMap<CreatureId, Creature>,
  next_user_id:     UserId,
  next_creature_id: CreatureId,
}

impl Default for Inner {
  fn default() -> Self {
    Self {
      users:            HashMap::new(),
      creatures:        BTreeMap::new(),
      next_user_id:     1,
      next_creature_id: 1,
    }
  }
}

impl MemoryStore {
  /// Create an empty store.
  pub fn new() -> Self {
    Self::default()
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
    self
      .inner
      .read()
      .map_err(|_| Error::Backend(Box::new(LockPoisoned)))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
    self
      .inner
      .write()
      .map_err(|_| Error::Backend(Box::new(LockPoisoned)))
  }
}

// ─── CredentialStore ─────────────────────────────────────────────────────────

impl CredentialStore for MemoryStore {
  async fn register(&self, username: &str, password: &str) -> Result<User> {
    let mut inner = self.write()?;

    if inner.users.contains_key(username) {
      return Err(Error::DuplicateUsername(username.to_string()));
    }

    let user = User {
      id:            inner.next_user_id,
      username:      username.to_string(),
      password_hash: password::hash(password),
    };
    inner.next_user_id += 1;
    inner.users.insert(user.username.clone(), user.clone());

    Ok(user)
  }

  async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
    let inner = self.read()?;

    let user = inner
      .users
      .get(username)
      .ok_or(Error::InvalidCredentials)?;

    if !password::verify(password, &user.password_hash) {
      return Err(Error::InvalidCredentials);
    }

    Ok(user.clone())
  }
}

// ─── CollectionStore ─────────────────────────────────────────────────────────

impl CollectionStore for MemoryStore {
  async fn add_creature(&self, input: NewCreature) -> Result<Creature> {
    let mut inner = self.write()?;

    let creature = Creature {
      id:    inner.next_creature_id,
      dex:   input.dex,
      name:  input.name,
      level: input.level,
      type1: input.type1,
      type2: input.type2,
      owner: input.owner,
    };
    inner.next_creature_id += 1;
    inner.creatures.insert(creature.id, creature.clone());

    Ok(creature)
  }

  async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Creature>> {
    let inner = self.read()?;

    let mut records: Vec<Creature> = inner
      .creatures
      .values()
      .filter(|c| c.owner == owner)
      .cloned()
      .collect();
    // Stable sort: equal dex numbers keep insertion order.
    records.sort_by_key(|c| c.dex);

    Ok(records)
  }

  async fn delete_creature(&self, id: CreatureId, owner: UserId) -> Result<bool> {
    let mut inner = self.write()?;

    let owned = inner.creatures.get(&id).is_some_and(|c| c.owner == owner);
    if owned {
      inner.creatures.remove(&id);
    }

    Ok(owned)
  }
}
