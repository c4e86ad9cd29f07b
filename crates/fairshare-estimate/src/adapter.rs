//! Provider adapter: maps an external response into a [`MarketEstimate`].
//!
//! The provider's point estimate and range bounds are carried verbatim —
//! the adapter never repairs or reorders provider-given numbers. Missing
//! optional fields recover to documented defaults (bedrooms 2, size 950,
//! distance 0.0, last seen = `now`, category Apartment) and are logged,
//! never surfaced as errors.
//!
//! Mapping is idempotent: the same payload and the same explicit `now`
//! produce byte-identical output. There is no hidden clock read.

use chrono::{DateTime, Utc};
use fairshare_disclosure::disclose;
use fairshare_types::{
    ComparableId, ComparableRecord, ConfidenceTier, DisclosurePolicy, EstimateSource,
    MarketEstimate, Observation, PropertyCategory, ProviderPayload,
    constants::{DEFAULT_BEDROOMS, DEFAULT_SIZE_SQFT},
};

use crate::synth::rank_comparables;

/// Map a provider response into the engine's result shape.
///
/// Per-record similarity is the provider correlation scaled to `[0, 100]`.
/// The confidence tier comes from the same canonical table the synthetic
/// path uses.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn map_provider_response(payload: &ProviderPayload, now: DateTime<Utc>) -> MarketEstimate {
    let bedrooms = payload.bedrooms.unwrap_or_else(|| {
        tracing::warn!(
            default = DEFAULT_BEDROOMS,
            "Provider payload missing bedrooms; using default"
        );
        DEFAULT_BEDROOMS
    });
    let size = payload.size_sqft.unwrap_or_else(|| {
        tracing::warn!(
            default = DEFAULT_SIZE_SQFT,
            "Provider payload missing size_sqft; using default"
        );
        DEFAULT_SIZE_SQFT
    });

    let count = payload.comparables.len();
    let policy = DisclosurePolicy::default();

    let mut comparables: Vec<ComparableRecord> = payload
        .comparables
        .iter()
        .enumerate()
        .map(|(slot, raw)| {
            let shown = disclose(&Observation::currency(raw.value, count as u32), &policy);
            ComparableRecord {
                id: ComparableId::deterministic(slot as u64, raw.value.to_bits()),
                value: raw.value,
                similarity: (raw.correlation * 100.0).clamp(0.0, 100.0),
                distance_miles: raw.distance_miles.unwrap_or(0.0),
                last_seen: raw.last_seen.unwrap_or(now),
                category: raw.category.unwrap_or(PropertyCategory::Apartment),
                bedrooms: raw.bedrooms.unwrap_or(DEFAULT_BEDROOMS),
                display_value: shown.rendered().to_string(),
            }
        })
        .collect();
    rank_comparables(&mut comparables);

    tracing::debug!(comparables = count, "Provider response mapped");

    MarketEstimate {
        estimated_value: payload.point_estimate,
        low_estimate: payload.range_low,
        high_estimate: payload.range_high,
        per_unit: payload.point_estimate / size,
        per_group: payload.point_estimate / f64::from(bedrooms.max(1)),
        confidence: ConfidenceTier::for_count(count),
        comparable_count: count,
        comparables,
        source: EstimateSource::Provider,
        generated_at: now,
    }
}
