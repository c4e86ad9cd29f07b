//! Provider payload shapes for adapter mode.
//!
//! An external provider hands back a point estimate, range bounds, and a
//! list of raw comparables. Optional fields that the provider omits are
//! recovered with documented defaults by the adapter — a missing field is
//! never an error. The defaults live in [`crate::constants`]:
//! bedrooms 2, size 950 sq ft, distance 0.0, last seen = the caller's
//! explicit "now", category Apartment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PropertyCategory;

/// One raw comparable as delivered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderComparable {
    /// The record's value (e.g. monthly rent).
    pub value: f64,
    /// Match correlation in `[0, 1]`. Scaled to a 0–100 similarity score.
    pub correlation: f64,
    /// Distance in miles. Default 0.0 when omitted.
    #[serde(default)]
    pub distance_miles: Option<f64>,
    /// Last observation time. Defaults to the caller's "now" when omitted.
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    /// Property category. Default Apartment when omitted.
    #[serde(default)]
    pub category: Option<PropertyCategory>,
    /// Bedroom count. Default 2 when omitted.
    #[serde(default)]
    pub bedrooms: Option<u32>,
}

/// A full provider response for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPayload {
    /// Provider's point estimate.
    pub point_estimate: f64,
    /// Provider's low bound, carried verbatim into the result.
    pub range_low: f64,
    /// Provider's high bound, carried verbatim into the result.
    pub range_high: f64,
    /// Bedroom count context. Default 2 when omitted.
    #[serde(default)]
    pub bedrooms: Option<u32>,
    /// Unit size context in square feet. Default 950 when omitted.
    #[serde(default)]
    pub size_sqft: Option<f64>,
    /// Raw comparables backing the estimate.
    pub comparables: Vec<ProviderComparable>,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ProviderPayload {
    /// A payload with `count` comparables at stepwise-decreasing
    /// correlations. Fully deterministic.
    pub fn dummy(count: usize) -> Self {
        let comparables = (0..count)
            .map(|i| ProviderComparable {
                value: 1400.0 + (i as f64) * 25.0,
                correlation: 0.99 - (i as f64) * 0.01,
                distance_miles: Some(0.5 + (i as f64) * 0.3),
                last_seen: None,
                category: Some(PropertyCategory::Apartment),
                bedrooms: Some(2),
            })
            .collect();
        Self {
            point_estimate: 1525.0,
            range_low: 1380.0,
            range_high: 1690.0,
            bedrooms: Some(2),
            size_sqft: Some(950.0),
            comparables,
        }
    }
}
