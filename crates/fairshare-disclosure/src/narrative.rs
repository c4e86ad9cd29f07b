//! Percentile narratives: "how do I compare to my peers" phrasing.

use fairshare_types::constants::{
    HIGH_PERCENTILE_MIN, LOW_PERCENTILE_MAX, MIN_NARRATIVE_SAMPLE, PERCENTILE_DISPLAY_CAP,
};

/// Render a percentile into a comparison phrase, or `None` when the
/// sample is too small to support any claim.
///
/// The percentile is capped at 99 for display; "higher than 100%" is a
/// claim no sample can back. Percentiles at or below 25 read as "lower
/// than", at or above 75 as "higher than", and the middle band as
/// "around average".
#[must_use]
pub fn percentile_narrative(percentile: u32, sample_size: usize) -> Option<String> {
    if sample_size < MIN_NARRATIVE_SAMPLE {
        return None;
    }
    let p = percentile.min(PERCENTILE_DISPLAY_CAP);
    let phrase = if p <= LOW_PERCENTILE_MAX {
        format!("lower than {}% of similar homes nearby", 100 - p)
    } else if p >= HIGH_PERCENTILE_MIN {
        format!("higher than {p}% of similar homes nearby")
    } else {
        "around average for similar homes nearby".to_string()
    };
    Some(phrase)
}
