//! Synthetic estimate computation.
//!
//! The pipeline: anchor a base value on bedroom count, normalize for
//! size, apply the category multiplier, jitter once, then derive the
//! range, per-unit breakdowns, confidence tier, and the ranked
//! comparable set.
//!
//! ## Determinism
//!
//! The jitter draw and comparable sampling are the only stochastic
//! steps, and both flow through the caller's [`QuerySampler`]. Given the
//! same parameters, config, seed, and `now`, this function produces the
//! **exact same** [`MarketEstimate`] on every call.

use chrono::{DateTime, Utc};
use fairshare_types::{
    ConfidenceTier, EstimateConfig, EstimateSource, MarketEstimate, Result, SearchParameters,
};

use crate::{sampler::QuerySampler, synth::synthesize_comparables};

/// Compute a full market estimate from search parameters.
///
/// # Errors
/// `InvalidParameter` when a constraint is out of domain (non-positive
/// radius or lookback, non-positive size hint). The call is rejected
/// whole; nothing is clamped.
pub fn synthesize_estimate(
    params: &SearchParameters,
    config: &EstimateConfig,
    sampler: &mut QuerySampler,
    now: DateTime<Utc>,
) -> Result<MarketEstimate> {
    params.validate()?;

    let bedrooms = params.bedrooms.unwrap_or(config.default_bedrooms);
    let size = params.size_sqft.unwrap_or(config.reference_size_sqft);

    // 1. Base value anchored by bedroom count
    let mut value =
        config.base_value + f64::from(bedrooms.saturating_sub(1)) * config.bedroom_step;

    // 2. Size normalization, only when the caller hinted a size
    if params.size_sqft.is_some() {
        value *= size / config.reference_size_sqft;
    }

    // 3. Category multiplier
    value *= params.category.value_multiplier();

    // 4. Bounded jitter — the single stochastic step in the estimate
    value *= sampler.uniform(config.jitter_range);

    // 5–6. Range and per-unit breakdowns
    let low_estimate = value * config.estimate_band.0;
    let high_estimate = value * config.estimate_band.1;
    let per_unit = value / size;
    let per_group = value / f64::from(bedrooms.max(1));

    // 7. Comparable set and confidence
    let comparable_count = sampler.count_between(config.comparable_count_range);
    let confidence = ConfidenceTier::for_count(comparable_count);
    let comparables = synthesize_comparables(
        value,
        comparable_count,
        params,
        config,
        bedrooms,
        sampler,
        now,
    );

    tracing::info!(
        category = %params.category,
        bedrooms,
        estimate = value,
        comparables = comparable_count,
        confidence = %confidence,
        "Estimate synthesis complete"
    );

    Ok(MarketEstimate {
        estimated_value: value,
        low_estimate,
        high_estimate,
        per_unit,
        per_group,
        confidence,
        comparable_count,
        comparables,
        source: EstimateSource::Synthetic,
        generated_at: now,
    })
}
