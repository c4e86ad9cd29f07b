//! Configuration for the estimate engine.
//!
//! Each `(min, max)` field specifies a uniform sampling range. The engine
//! draws within these ranges through one injected sampler, so a fixed
//! seed reproduces a query exactly.

use serde::{Deserialize, Serialize};

use crate::{DisclosurePolicy, constants};

/// Synthesis knobs for the estimate engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateConfig {
    // ----- Base model -----
    /// Anchor value for a one-bedroom unit.
    pub base_value: f64,
    /// Added per bedroom beyond the first.
    pub bedroom_step: f64,
    /// Reference unit size for size normalization, and the size assumed
    /// when a query omits its hint.
    pub reference_size_sqft: f64,
    /// Bedroom count assumed when a query omits its hint.
    pub default_bedrooms: u32,

    // ----- Sampling ranges -----
    /// Bounded jitter applied once to the point estimate.
    pub jitter_range: (f64, f64),
    /// Spread of comparable values around the estimate.
    pub comparable_spread_range: (f64, f64),
    /// Similarity scores assigned to synthesized comparables.
    pub similarity_range: (f64, f64),
    /// How many comparables one query synthesizes (inclusive).
    pub comparable_count_range: (u32, u32),

    // ----- Output shaping -----
    /// Low/high range factors applied to the point estimate.
    pub estimate_band: (f64, f64),
    /// Policy used to render per-comparable display values.
    pub disclosure: DisclosurePolicy,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            // Base model (one-bedroom anchor plus per-bedroom step)
            base_value: 1450.0,
            bedroom_step: 375.0,
            reference_size_sqft: constants::DEFAULT_SIZE_SQFT,
            default_bedrooms: constants::DEFAULT_BEDROOMS,

            // Sampling ranges
            jitter_range: (0.95, 1.05),
            comparable_spread_range: (0.80, 1.20),
            similarity_range: (95.0, 99.9),
            comparable_count_range: (8, 15),

            // Output shaping
            estimate_band: (
                constants::ESTIMATE_LOW_FACTOR,
                constants::ESTIMATE_HIGH_FACTOR,
            ),
            disclosure: DisclosurePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let cfg = EstimateConfig::default();
        assert!(cfg.base_value > 0.0);
        assert!(cfg.bedroom_step > 0.0);
        assert!(cfg.jitter_range.0 < 1.0 && cfg.jitter_range.1 > 1.0);
        assert!(cfg.comparable_spread_range.0 < cfg.comparable_spread_range.1);
        assert!(cfg.similarity_range.1 <= 100.0);
        assert!(cfg.comparable_count_range.0 <= cfg.comparable_count_range.1);
        assert!(cfg.estimate_band.0 < 1.0 && cfg.estimate_band.1 > 1.0);
    }

    #[test]
    fn default_size_matches_reference() {
        let cfg = EstimateConfig::default();
        assert!((cfg.reference_size_sqft - 950.0).abs() < f64::EPSILON);
        assert_eq!(cfg.default_bedrooms, 2);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = EstimateConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EstimateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
