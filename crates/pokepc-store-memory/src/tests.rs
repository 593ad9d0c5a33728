//! Tests for `MemoryStore` covering both store traits.

use pokepc_core::{
  creature::NewCreature,
  store::{CollectionStore, CredentialStore},
  user::UserId,
};

use crate::MemoryStore;

fn creature(owner: UserId, dex: u32, name: &str) -> NewCreature {
  NewCreature {
    dex,
    name: name.to_string(),
    level: 5,
    type1: "Electric".to_string(),
    type2: None,
    owner,
  }
}

// ─── Registration ────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_assigns_sequential_ids() {
  let s = MemoryStore::new();

  let ash = s.register("ash", "pikachu123").await.unwrap();
  let misty = s.register("misty", "staryu456").await.unwrap();

  assert_eq!(ash.id, 1);
  assert_eq!(misty.id, 2);
  assert_eq!(ash.username, "ash");
}

#[tokio::test]
async fn duplicate_username_rejected_and_first_user_kept() {
  let s = MemoryStore::new();

  let first = s.register("ash", "pikachu123").await.unwrap();
  let err = s.register("ash", "other").await.unwrap_err();
  assert!(matches!(
    err,
    pokepc_core::Error::DuplicateUsername(ref name) if name == "ash"
  ));

  // The original registration is unaffected.
  let user = s.authenticate("ash", "pikachu123").await.unwrap();
  assert_eq!(user.id, first.id);
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
  let s = MemoryStore::new();

  s.register("ash", "pikachu123").await.unwrap();
  s.register("Ash", "pikachu123").await.unwrap();

  let err = s.authenticate("ASH", "pikachu123").await.unwrap_err();
  assert!(matches!(err, pokepc_core::Error::InvalidCredentials));
}

// ─── Authentication ──────────────────────────────────────────────────────────

#[tokio::test]
async fn authenticate_with_correct_password() {
  let s = MemoryStore::new();
  s.register("ash", "pikachu123").await.unwrap();

  let user = s.authenticate("ash", "pikachu123").await.unwrap();
  assert_eq!(user.username, "ash");
}

#[tokio::test]
async fn authenticate_wrong_password_fails() {
  let s = MemoryStore::new();
  s.register("ash", "pikachu123").await.unwrap();

  let err = s.authenticate("ash", "raichu").await.unwrap_err();
  assert!(matches!(err, pokepc_core::Error::InvalidCredentials));
}

#[tokio::test]
async fn authenticate_unknown_username_fails() {
  let s = MemoryStore::new();

  let err = s.authenticate("ghost", "whatever").await.unwrap_err();
  assert!(matches!(err, pokepc_core::Error::InvalidCredentials));
}

// ─── Adding records ──────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_round_trip() {
  let s = MemoryStore::new();

  s.add_creature(creature(1, 25, "Pikachu")).await.unwrap();

  let records = s.list_by_owner(1).await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].dex, 25);
  assert_eq!(records[0].name, "Pikachu");
  assert_eq!(records[0].level, 5);
  assert_eq!(records[0].type1, "Electric");
  assert_eq!(records[0].type2, None);
  assert_eq!(records[0].owner, 1);
}

#[tokio::test]
async fn add_accepts_unknown_owner() {
  // No referential integrity: the owner id is never checked against the
  // credential store.
  let s = MemoryStore::new();

  let stored = s.add_creature(creature(999, 1, "Bulbasaur")).await.unwrap();
  assert_eq!(stored.owner, 999);
  assert_eq!(s.list_by_owner(999).await.unwrap().len(), 1);
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_sorts_ascending_by_dex() {
  let s = MemoryStore::new();

  s.add_creature(creature(1, 50, "Diglett")).await.unwrap();
  s.add_creature(creature(1, 10, "Caterpie")).await.unwrap();
  s.add_creature(creature(1, 25, "Pikachu")).await.unwrap();

  let dexes: Vec<u32> =
    s.list_by_owner(1).await.unwrap().iter().map(|c| c.dex).collect();
  assert_eq!(dexes, [10, 25, 50]);
}

#[tokio::test]
async fn equal_dex_keeps_insertion_order() {
  let s = MemoryStore::new();

  let first = s.add_creature(creature(1, 25, "Pikachu")).await.unwrap();
  let second = s.add_creature(creature(1, 25, "Pikachu Two")).await.unwrap();

  let ids: Vec<_> =
    s.list_by_owner(1).await.unwrap().iter().map(|c| c.id).collect();
  assert_eq!(ids, [first.id, second.id]);
}

#[tokio::test]
async fn list_is_scoped_to_owner() {
  let s = MemoryStore::new();

  s.add_creature(creature(1, 25, "Pikachu")).await.unwrap();
  s.add_creature(creature(2, 7, "Squirtle")).await.unwrap();

  let records = s.list_by_owner(1).await.unwrap();
  assert_eq!(records.len(), 1);
  assert!(records.iter().all(|c| c.owner == 1));
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_owner_removes_record() {
  let s = MemoryStore::new();

  let stored = s.add_creature(creature(1, 25, "Pikachu")).await.unwrap();

  assert!(s.delete_creature(stored.id, 1).await.unwrap());
  assert!(s.list_by_owner(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_with_wrong_owner_is_a_no_op() {
  let s = MemoryStore::new();

  let stored = s.add_creature(creature(1, 25, "Pikachu")).await.unwrap();

  assert!(!s.delete_creature(stored.id, 2).await.unwrap());
  assert_eq!(s.list_by_owner(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_missing_record_is_a_no_op() {
  let s = MemoryStore::new();
  assert!(!s.delete_creature(42, 1).await.unwrap());
}

#[tokio::test]
async fn record_ids_are_never_reused() {
  let s = MemoryStore::new();

  let first = s.add_creature(creature(1, 1, "Bulbasaur")).await.unwrap();
  s.delete_creature(first.id, 1).await.unwrap();

  let second = s.add_creature(creature(1, 4, "Charmander")).await.unwrap();
  assert!(second.id > first.id);
}
