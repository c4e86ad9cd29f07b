//! Comparable records: the peer data points backing an estimate.
//!
//! Records are transient — synthesized or provider-mapped per query and
//! discarded once the caller consumes the result. The one ordering
//! guarantee the engine upholds is similarity-descending presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ComparableId, PropertyCategory};

/// A single peer data point supporting an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableRecord {
    /// Opaque per-record id. Deterministic within a query.
    pub id: ComparableId,
    /// The record's value (e.g. monthly rent).
    pub value: f64,
    /// Similarity score in `[0, 100]`; higher means a closer match.
    pub similarity: f64,
    /// Distance from the query location in miles. Always positive for
    /// synthesized records.
    pub distance_miles: f64,
    /// When this record was last observed.
    pub last_seen: DateTime<Utc>,
    /// Property category of the peer.
    pub category: PropertyCategory,
    /// Bedroom count of the peer.
    pub bedrooms: u32,
    /// Privacy-safe rendering of `value`, produced by the disclosure
    /// engine (exact or fuzzy-banded depending on the peer-group size).
    pub display_value: String,
}

impl ComparableRecord {
    /// Relative-time label for `last_seen` against an explicit `now`.
    ///
    /// The clock is a parameter, never read globally, so rendering stays
    /// pure and testable.
    #[must_use]
    pub fn recency_label(&self, now: DateTime<Utc>) -> String {
        let days = (now - self.last_seen).num_days().max(0);
        match days {
            0 => "today".to_string(),
            1 => "yesterday".to_string(),
            2..=6 => format!("{days} days ago"),
            7..=13 => "1 week ago".to_string(),
            14..=29 => format!("{} weeks ago", days / 7),
            30..=59 => "1 month ago".to_string(),
            _ => format!("{} months ago", days / 30),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ComparableRecord {
    pub fn dummy(similarity: f64) -> Self {
        Self {
            id: ComparableId::new(),
            value: 1500.0,
            similarity,
            distance_miles: 1.2,
            last_seen: Utc::now(),
            category: PropertyCategory::Apartment,
            bedrooms: 2,
            display_value: "$1500".to_string(),
        }
    }
}
