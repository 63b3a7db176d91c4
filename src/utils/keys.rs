//! One-way hashed storage keys.
//!
//! Per-user persisted values (last-sync timestamp, page size, pinned set)
//! are stored under a hash of `(logical name, email)` so the raw email
//! never appears in client storage.

use sha2::{Digest, Sha256};

/// Derive the storage key for a logical value name scoped to a user.
///
/// Deterministic for fixed inputs; distinct names or emails produce
/// distinct keys.
pub fn hash_key(name: &str, email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(b":");
    hasher.update(email.as_bytes());
    format!("{:x}", hasher.finalize())
}
