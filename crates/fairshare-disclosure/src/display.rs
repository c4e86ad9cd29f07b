//! Value rendering: the single entry point that decides exact vs. fuzzed.
//!
//! `disclose` is the **only** function callers use to turn an observation
//! into user-facing text — no side effects, no error conditions. A caller
//! with no value to show simply never invokes it.

use fairshare_types::{DisclosurePolicy, Observation, QuantityKind};

use crate::{band::compute_fuzz_band, threshold::meets_disclosure_threshold};

/// The rendered form of an observation.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    /// Peer group met the threshold; the true value is shown.
    Exact { rendered: String },
    /// Peer group was too small; an obfuscated band is shown instead.
    Fuzzed {
        low: f64,
        high: f64,
        rendered: String,
    },
}

impl DisplayValue {
    /// The display string, whichever form it took.
    #[must_use]
    pub fn rendered(&self) -> &str {
        match self {
            Self::Exact { rendered } | Self::Fuzzed { rendered, .. } => rendered,
        }
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact { .. })
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered())
    }
}

/// Decide whether an observation may be shown exactly, and render it.
///
/// Counts and usage totals render to integer precision, currency-per-unit
/// rates to two decimals. Fuzzed renderings always carry the `~` marker
/// and only ever show the band endpoints, never the true value.
#[must_use]
pub fn disclose(observation: &Observation, policy: &DisclosurePolicy) -> DisplayValue {
    let value = observation.value;
    let unit = observation.unit.as_str();

    if meets_disclosure_threshold(observation.group_count, policy) {
        let rendered = match observation.kind {
            QuantityKind::Usage | QuantityKind::DailyAverage => {
                if unit.is_empty() {
                    format!("{value:.0}")
                } else {
                    format!("{value:.0} {unit}")
                }
            }
            QuantityKind::Rate => format!("${value:.2}/{unit}"),
            QuantityKind::Currency => format!("${value:.0}"),
        };
        return DisplayValue::Exact { rendered };
    }

    let strategy = observation.kind.fuzz_strategy(value, policy);
    let band = compute_fuzz_band(value, strategy, policy);
    let rendered = match observation.kind {
        QuantityKind::Usage | QuantityKind::DailyAverage => {
            if unit.is_empty() {
                format!("~{:.0}-{:.0}", band.low, band.high)
            } else {
                format!("~{:.0}-{:.0} {unit}", band.low, band.high)
            }
        }
        QuantityKind::Rate => format!("~${:.2}-${:.2}/{unit}", band.low, band.high),
        QuantityKind::Currency => format!("~${:.0}-${:.0}", band.low, band.high),
    };
    DisplayValue::Fuzzed {
        low: band.low,
        high: band.high,
        rendered,
    }
}
