//! Integration test: full query cycle
//!
//! Drives the whole surface the way the display layer does: search
//! parameters in, estimate plus ranked comparables out, then disclosure
//! and narrative rendering on top of the result.

use chrono::{TimeZone, Utc};
use fairshare_disclosure::{disclose, percentile_narrative};
use fairshare_estimate::{QuerySampler, map_provider_response, synthesize_estimate};
use fairshare_types::{
    ConfidenceTier, DisclosurePolicy, EstimateConfig, EstimateSource, MarketEstimate, Observation,
    PropertyCategory, ProviderPayload, SearchParameters,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn run_query(seed: u64) -> MarketEstimate {
    let params = SearchParameters::dummy_rental();
    let config = EstimateConfig::default();
    let mut sampler = QuerySampler::from_seed(seed);
    synthesize_estimate(&params, &config, &mut sampler, fixed_now()).unwrap()
}

#[test]
fn synthetic_query_end_to_end() {
    let now = fixed_now();
    let result = run_query(42);

    // Range invariants
    assert!(result.low_estimate <= result.estimated_value);
    assert!(result.estimated_value <= result.high_estimate);
    assert!(result.range_contains(result.estimated_value));

    // Ordering guarantee across the whole set
    for pair in result.comparables.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }

    // Every comparable arrives display-ready
    for record in &result.comparables {
        assert!(!record.display_value.is_empty());
        // 8+ peers clears the threshold: exact dollar values
        assert!(record.display_value.starts_with('$'));
        // All records are at least a day old, so never "today"
        assert_ne!(record.recency_label(now), "today");
    }

    assert_eq!(result.source, EstimateSource::Synthetic);
    assert_eq!(result.generated_at, now);
}

#[test]
fn narrative_rides_on_the_comparable_count() {
    let result = run_query(42);
    // At least 8 comparables back any synthetic estimate, well over the
    // 5-sample narrative floor.
    let phrase = percentile_narrative(82, result.comparable_count).unwrap();
    assert!(phrase.contains("higher than 82%"));
}

#[test]
fn aggregate_values_flow_through_disclosure() {
    let result = run_query(42);
    let policy = DisclosurePolicy::default();

    // Peer-group size is the comparable count; 8+ discloses exactly.
    #[allow(clippy::cast_possible_truncation)]
    let group = result.comparable_count as u32;
    let shown = disclose(&Observation::currency(result.estimated_value, group), &policy);
    assert!(shown.is_exact());

    // The same value against a thin peer group comes back banded.
    let thin = disclose(&Observation::currency(result.estimated_value, 2), &policy);
    assert!(!thin.is_exact());
    assert!(thin.rendered().starts_with('~'));
}

#[test]
fn provider_query_end_to_end() {
    let now = fixed_now();
    let payload = ProviderPayload::dummy(12);
    let result = map_provider_response(&payload, now);

    assert_eq!(result.source, EstimateSource::Provider);
    assert_eq!(result.confidence, ConfidenceTier::High);
    assert_eq!(result.comparable_count, 12);
    for pair in result.comparables.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    for record in &result.comparables {
        assert_eq!(record.category, PropertyCategory::Apartment);
        assert!(!record.display_value.is_empty());
    }
}

#[test]
fn thin_provider_response_suppresses_narrative() {
    let result = map_provider_response(&ProviderPayload::dummy(3), fixed_now());
    assert_eq!(result.confidence, ConfidenceTier::Low);
    assert_eq!(percentile_narrative(82, result.comparable_count), None);
}

#[test]
fn result_survives_serialization() {
    let result = run_query(42);
    let json = serde_json::to_string(&result).unwrap();
    let back: MarketEstimate = serde_json::from_str(&json).unwrap();
    assert_eq!(result.comparable_count, back.comparable_count);
    assert_eq!(result.confidence, back.confidence);
    assert_eq!(result.comparables.len(), back.comparables.len());
    assert_eq!(result.comparables[0].id, back.comparables[0].id);
}
