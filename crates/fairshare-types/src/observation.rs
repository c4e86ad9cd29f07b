//! Observation model: a single numeric measurement tied to its peer group.
//!
//! An observation is constructed fresh per query and has no identity
//! beyond its value. The quantity kind determines how the value is fuzzed
//! and rendered; the peer-group size determines whether it may be shown
//! exactly at all.

use serde::{Deserialize, Serialize};

use crate::{DisclosurePolicy, FuzzStrategy, constants};

/// The kind of quantity an observation measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum QuantityKind {
    /// A metered usage total (e.g. kWh for a billing period).
    Usage,
    /// A per-day average derived from a usage total.
    DailyAverage,
    /// A currency-per-unit rate (e.g. $/kWh).
    Rate,
    /// A whole currency amount (e.g. a monthly rent).
    Currency,
}

impl QuantityKind {
    /// Select the fuzz strategy for a value of this kind.
    ///
    /// Usage and currency quantities round to a value-proportional bucket,
    /// daily averages to a unit bucket, and rates take a direct
    /// multiplicative band with no bucket rounding.
    #[must_use]
    pub fn fuzz_strategy(self, value: f64, policy: &DisclosurePolicy) -> FuzzStrategy {
        match self {
            Self::Usage | Self::Currency => FuzzStrategy::Bucket {
                unit: (value * constants::USAGE_BUCKET_FRACTION).max(constants::MIN_USAGE_BUCKET),
            },
            Self::DailyAverage => FuzzStrategy::Bucket {
                unit: constants::DAILY_AVERAGE_BUCKET,
            },
            Self::Rate => FuzzStrategy::Multiplicative {
                band: policy.fuzz_band_percent,
            },
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => write!(f, "USAGE"),
            Self::DailyAverage => write!(f, "DAILY_AVERAGE"),
            Self::Rate => write!(f, "RATE"),
            Self::Currency => write!(f, "CURRENCY"),
        }
    }
}

/// A single numeric measurement and the size of its peer group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The measured value.
    pub value: f64,
    /// Number of peers sharing this observation's grouping key.
    /// Zero is valid: it simply fails the disclosure threshold.
    pub group_count: u32,
    /// The kind of quantity, which selects fuzzing and precision.
    pub kind: QuantityKind,
    /// Unit label used in rendering (e.g. "kWh"). Ignored for currency.
    pub unit: String,
}

impl Observation {
    #[must_use]
    pub fn new(value: f64, group_count: u32, kind: QuantityKind, unit: impl Into<String>) -> Self {
        Self {
            value,
            group_count,
            kind,
            unit: unit.into(),
        }
    }

    /// A metered usage observation (e.g. `450 kWh` among 7 peers).
    #[must_use]
    pub fn usage(value: f64, group_count: u32, unit: impl Into<String>) -> Self {
        Self::new(value, group_count, QuantityKind::Usage, unit)
    }

    /// A daily-average observation.
    #[must_use]
    pub fn daily_average(value: f64, group_count: u32, unit: impl Into<String>) -> Self {
        Self::new(value, group_count, QuantityKind::DailyAverage, unit)
    }

    /// A currency-per-unit rate observation (e.g. `$0.14/kWh`).
    #[must_use]
    pub fn rate(value: f64, group_count: u32, unit: impl Into<String>) -> Self {
        Self::new(value, group_count, QuantityKind::Rate, unit)
    }

    /// A whole currency observation (e.g. a monthly rent).
    #[must_use]
    pub fn currency(value: f64, group_count: u32) -> Self {
        Self::new(value, group_count, QuantityKind::Currency, "")
    }
}
