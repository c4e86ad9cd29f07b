//! Identifiers used throughout FairShare.
//!
//! Comparable records are transient — created per query, discarded after
//! the caller consumes the result — so their ids carry no meaning across
//! queries. Within a query, ids are derived deterministically so that the
//! same seed (or the same provider payload) yields the same records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a single comparable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ComparableId(pub Uuid);

impl ComparableId {
    /// Fresh random id. Uses UUIDv7 for time-ordered sorting.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Deterministic `ComparableId` from a record's slot and value bits.
    ///
    /// Two queries over identical inputs produce the **exact same** ids,
    /// which keeps same-seed synthesis and repeated adapter mappings
    /// byte-identical.
    #[must_use]
    pub fn deterministic(slot: u64, value_bits: u64) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"fairshare:comparable_id:v2:");
        hasher.update(slot.to_le_bytes());
        hasher.update(value_bits.to_le_bytes());
        let hash = hasher.finalize();
        let bytes: [u8; 16] = hash[..16].try_into().expect("SHA-256 produces 32 bytes");
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for ComparableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComparableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmp:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparable_id_uniqueness() {
        let a = ComparableId::new();
        let b = ComparableId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn comparable_id_deterministic() {
        let a = ComparableId::deterministic(3, 1450.0_f64.to_bits());
        let b = ComparableId::deterministic(3, 1450.0_f64.to_bits());
        assert_eq!(a, b);
        let c = ComparableId::deterministic(4, 1450.0_f64.to_bits());
        assert_ne!(a, c);
    }

    #[test]
    fn comparable_id_display_prefix() {
        let id = ComparableId::new();
        assert!(format!("{id}").starts_with("cmp:"));
    }

    #[test]
    fn serde_roundtrip() {
        let id = ComparableId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: ComparableId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
