//! Comparable synthesis and ranking.
//!
//! Synthesized comparables scatter around the point estimate; their one
//! presentation guarantee is similarity-descending order.

use chrono::{DateTime, Duration, Utc};
use fairshare_disclosure::disclose;
use fairshare_types::{
    ComparableId, ComparableRecord, EstimateConfig, Observation, SearchParameters,
};

use crate::sampler::QuerySampler;

/// Sort comparables by similarity descending.
///
/// The sort is stable, so records with equal similarity keep their
/// insertion order. After this call, `result[i].similarity >=
/// result[j].similarity` for every `i < j`.
pub fn rank_comparables(records: &mut [ComparableRecord]) {
    records.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}

/// Generate `count` peer records scattered around `estimate`, ranked.
///
/// Record ids are derived from slot and value, so a fixed sampler seed
/// reproduces the records byte for byte. Display strings come from the
/// disclosure engine with the comparable count as the peer-group size.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn synthesize_comparables(
    estimate: f64,
    count: usize,
    params: &SearchParameters,
    config: &EstimateConfig,
    bedrooms: u32,
    sampler: &mut QuerySampler,
    now: DateTime<Utc>,
) -> Vec<ComparableRecord> {
    let mut records = Vec::with_capacity(count);
    for slot in 0..count {
        let value = estimate * sampler.uniform(config.comparable_spread_range);
        let similarity = sampler.uniform(config.similarity_range);
        let distance_miles = sampler.distance_within(params.radius_miles);
        let age = sampler.age_days(params.lookback_days);
        let shown = disclose(
            &Observation::currency(value, count as u32),
            &config.disclosure,
        );
        records.push(ComparableRecord {
            id: ComparableId::deterministic(slot as u64, value.to_bits()),
            value,
            similarity,
            distance_miles,
            last_seen: now - Duration::days(age),
            category: params.category,
            bedrooms,
            display_value: shown.rendered().to_string(),
        });
    }
    rank_comparables(&mut records);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_sorts_similarity_descending() {
        let mut records = vec![
            ComparableRecord::dummy(97.2),
            ComparableRecord::dummy(99.1),
            ComparableRecord::dummy(95.0),
        ];
        rank_comparables(&mut records);
        let similarities: Vec<f64> = records.iter().map(|r| r.similarity).collect();
        assert_eq!(similarities, vec![99.1, 97.2, 95.0]);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let mut first = ComparableRecord::dummy(97.0);
        first.value = 1400.0;
        let mut second = ComparableRecord::dummy(97.0);
        second.value = 1600.0;

        let mut records = vec![ComparableRecord::dummy(99.0), first, second];
        rank_comparables(&mut records);
        // The two 97.0 records keep their insertion order.
        assert!((records[1].value - 1400.0).abs() < f64::EPSILON);
        assert!((records[2].value - 1600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn synthesized_records_stay_in_their_ranges() {
        let params = SearchParameters::dummy_rental();
        let config = EstimateConfig::default();
        let mut sampler = QuerySampler::from_seed(17);
        let now = Utc::now();
        let estimate = 1800.0;

        let records =
            synthesize_comparables(estimate, 12, &params, &config, 2, &mut sampler, now);
        assert_eq!(records.len(), 12);
        for record in &records {
            assert!(record.value >= estimate * 0.80 && record.value <= estimate * 1.20);
            assert!(record.similarity >= 95.0 && record.similarity <= 99.9);
            assert!(record.distance_miles > 0.0);
            assert!(record.distance_miles <= params.radius_miles);
            let age_days = (now - record.last_seen).num_days();
            assert!(age_days >= 1 && age_days <= i64::from(params.lookback_days));
            assert_eq!(record.category, params.category);
            assert_eq!(record.bedrooms, 2);
        }
    }

    #[test]
    fn synthesized_records_come_ranked() {
        let params = SearchParameters::dummy_rental();
        let config = EstimateConfig::default();
        let mut sampler = QuerySampler::from_seed(23);
        let records =
            synthesize_comparables(1500.0, 10, &params, &config, 2, &mut sampler, Utc::now());
        for pair in records.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn display_values_are_exact_above_threshold() {
        // 12 peers clears the k-anonymity threshold of 5, so every
        // record shows its exact dollar value.
        let params = SearchParameters::dummy_rental();
        let config = EstimateConfig::default();
        let mut sampler = QuerySampler::from_seed(5);
        let records =
            synthesize_comparables(1500.0, 12, &params, &config, 2, &mut sampler, Utc::now());
        for record in &records {
            assert!(record.display_value.starts_with('$'), "{}", record.display_value);
            assert!(!record.display_value.contains('~'));
        }
    }

    #[test]
    fn same_seed_reproduces_records_exactly() {
        let params = SearchParameters::dummy_rental();
        let config = EstimateConfig::default();
        let now = Utc::now();

        let mut a = QuerySampler::from_seed(99);
        let mut b = QuerySampler::from_seed(99);
        let records_a = synthesize_comparables(1500.0, 9, &params, &config, 2, &mut a, now);
        let records_b = synthesize_comparables(1500.0, 9, &params, &config, 2, &mut b, now);
        assert_eq!(records_a, records_b);
    }
}
