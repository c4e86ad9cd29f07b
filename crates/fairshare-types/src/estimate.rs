//! Estimate result model.
//!
//! A [`MarketEstimate`] is the full result of one query: point estimate,
//! range, per-unit breakdowns, a confidence tier, and the ranked
//! comparable set. It is a value type, created and owned entirely within
//! a single query's execution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ComparableRecord, constants};

/// Coarse label for how many comparable records back an estimate.
///
/// Variant order matters: `Low < Medium < High`, so the derived `Ord`
/// makes confidence monotonic in comparable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// The tier backing `count` comparable records.
    ///
    /// One canonical table is used for both synthesized and
    /// provider-mapped estimates: 12 or more records is High, 8 to 11 is
    /// Medium, fewer than 8 is Low.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count >= constants::HIGH_CONFIDENCE_MIN_COMPARABLES {
            Self::High
        } else if count >= constants::MEDIUM_CONFIDENCE_MIN_COMPARABLES {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Where an estimate's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstimateSource {
    /// Synthesized from the mock model; range is the fixed 0.85/1.15 band.
    Synthetic,
    /// Mapped from an external provider; range carried verbatim.
    Provider,
}

impl std::fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synthetic => write!(f, "SYNTHETIC"),
            Self::Provider => write!(f, "PROVIDER"),
        }
    }
}

/// Complete result of one estimate query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEstimate {
    /// Central point estimate.
    pub estimated_value: f64,
    /// Low end of the range. `low_estimate <= estimated_value`.
    pub low_estimate: f64,
    /// High end of the range. `estimated_value <= high_estimate`.
    pub high_estimate: f64,
    /// Estimate per unit of size (e.g. $/sq ft).
    pub per_unit: f64,
    /// Estimate per group member (e.g. $/bedroom).
    pub per_group: f64,
    /// Confidence tier backing the estimate.
    pub confidence: ConfidenceTier,
    /// Number of comparable records the estimate rests on.
    pub comparable_count: usize,
    /// Comparable records, sorted by similarity descending.
    pub comparables: Vec<ComparableRecord>,
    /// Whether the numbers are synthesized or provider-given.
    pub source: EstimateSource,
    /// The explicit "now" the query was evaluated against.
    pub generated_at: DateTime<Utc>,
}

impl MarketEstimate {
    /// Whether a value falls inside the estimate range.
    #[must_use]
    pub fn range_contains(&self, value: f64) -> bool {
        value >= self.low_estimate && value <= self.high_estimate
    }

    /// Width of the estimate range (uncertainty measure).
    #[must_use]
    pub fn range_width(&self) -> f64 {
        self.high_estimate - self.low_estimate
    }
}
