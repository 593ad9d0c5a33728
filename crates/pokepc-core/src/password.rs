//! Salted password hashing.
//!
//! Credentials are stored as `"{salt}:{derivedHex}"`: `salt` is 16 random
//! bytes hex-encoded to 32 characters, `derivedHex` is a 64-byte key from
//! PBKDF2-HMAC-SHA-512 at 10 000 rounds, derived over the bytes of the salt
//! *string* (not the raw salt bytes).
//!
//! Verification compares hex strings directly; constant-time comparison is
//! out of scope for this server.

use pbkdf2::pbkdf2_hmac;
use rand_core::{OsRng, RngCore};
use sha2::Sha512;

/// Fixed iteration count for the key derivation.
const ROUNDS: u32 = 10_000;
/// Derived key length in bytes; hex-encodes to 128 characters.
const KEY_LEN: usize = 64;
/// Raw salt length in bytes; hex-encodes to 32 characters.
const SALT_LEN: usize = 16;

/// Hash `password` under a fresh random salt.
pub fn hash(password: &str) -> String {
  let mut salt_bytes = [0u8; SALT_LEN];
  OsRng.fill_bytes(&mut salt_bytes);
  let salt = hex::encode(salt_bytes);
  let derived = derive(password, &salt);
  format!("{salt}:{derived}")
}

/// Check `password` against a stored `"{salt}:{derivedHex}"` string.
///
/// A stored value without a `:` separator never verifies.
pub fn verify(password: &str, stored: &str) -> bool {
  match stored.split_once(':') {
    Some((salt, derived_hex)) => derive(password, salt) == derived_hex,
    None => false,
  }
}

fn derive(password: &str, salt: &str) -> String {
  let mut out = [0u8; KEY_LEN];
  pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), ROUNDS, &mut out);
  hex::encode(out)
}
