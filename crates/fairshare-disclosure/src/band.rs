//! Fuzzy band computation.
//!
//! When the peer group is too small, the true value is replaced by a
//! `[low, high]` band. Bucket-strategy bands widen the value by the fuzz
//! buffer and round outward to the bucket; multiplicative bands scale the
//! value directly.

use fairshare_types::{DisclosurePolicy, FuzzStrategy};

/// An obfuscated `[low, high]` band substituted for an exact value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzBand {
    pub low: f64,
    pub high: f64,
}

/// Compute the fuzzy band for a value under the given strategy.
///
/// Bucket bands always round outward (floor the low end, ceil the high
/// end), so the true value can never sit outside the band. The low end is
/// clamped to zero; measured quantities cannot be negative.
#[must_use]
pub fn compute_fuzz_band(value: f64, strategy: FuzzStrategy, policy: &DisclosurePolicy) -> FuzzBand {
    match strategy {
        FuzzStrategy::Bucket { unit } => {
            let buffer = value * policy.fuzz_band_percent;
            let low = (((value - buffer) / unit).floor() * unit).max(0.0);
            let high = ((value + buffer) / unit).ceil() * unit;
            FuzzBand { low, high }
        }
        FuzzStrategy::Multiplicative { band } => FuzzBand {
            low: value * (1.0 - band),
            high: value * (1.0 + band),
        },
    }
}
