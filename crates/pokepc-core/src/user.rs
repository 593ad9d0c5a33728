//! User — the account record created at signup.

/// Process-wide auto-increment user identifier, starting at 1. Never reused.
pub type UserId = u64;

/// An account. Created on signup; never mutated or deleted afterwards.
#[derive(Debug, Clone)]
pub struct User {
  pub id:            UserId,
  /// Unique at signup time, case-sensitive.
  pub username:      String,
  /// `"{salt}:{derivedHex}"` string produced by [`crate::password::hash`].
  pub password_hash: String,
}
