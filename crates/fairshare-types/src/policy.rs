//! Disclosure policy: the k-anonymity threshold and fuzzing configuration.
//!
//! The policy is pure configuration. The disclosure engine consults it on
//! every call; there is no path to an exact value that bypasses the
//! threshold check.

use serde::{Deserialize, Serialize};

use crate::{FairshareError, Result, constants};

/// How a protected value gets obfuscated when the peer group is too small.
///
/// Two distinct strategies exist and are selected per quantity kind —
/// never by ad hoc per-field branches:
///
/// - `Bucket`: widen by the fuzz band, then floor/ceil to a rounding
///   bucket. Used for usage-like and currency quantities.
/// - `Multiplicative`: a direct ± band on the value, no bucket rounding.
///   Used for rate quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FuzzStrategy {
    Bucket { unit: f64 },
    Multiplicative { band: f64 },
}

/// Configuration for the disclosure engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisclosurePolicy {
    /// Minimum peer-group size required for exact disclosure.
    pub threshold: u32,
    /// Fraction of the value used as the fuzz buffer, in `(0, 1)`.
    pub fuzz_band_percent: f64,
}

impl DisclosurePolicy {
    /// Create a policy, rejecting out-of-domain values.
    ///
    /// # Errors
    /// `InvalidParameter` when `threshold == 0` or
    /// `fuzz_band_percent` is outside `(0, 1)`.
    pub fn new(threshold: u32, fuzz_band_percent: f64) -> Result<Self> {
        if threshold == 0 {
            return Err(FairshareError::invalid_parameter(
                "threshold",
                "must be positive",
            ));
        }
        if !(fuzz_band_percent > 0.0 && fuzz_band_percent < 1.0) {
            return Err(FairshareError::invalid_parameter(
                "fuzz_band_percent",
                format!("must be in (0, 1), got {fuzz_band_percent}"),
            ));
        }
        Ok(Self {
            threshold,
            fuzz_band_percent,
        })
    }
}

impl Default for DisclosurePolicy {
    fn default() -> Self {
        Self {
            threshold: constants::DEFAULT_DISCLOSURE_THRESHOLD,
            fuzz_band_percent: constants::DEFAULT_FUZZ_BAND_PERCENT,
        }
    }
}
