//! Domain-wide constants for the FairShare disclosure and estimate core.

/// Minimum peer-group size required before an exact value may be shown.
pub const DEFAULT_DISCLOSURE_THRESHOLD: u32 = 5;

/// Fuzz band applied around a protected value (fraction of the value).
pub const DEFAULT_FUZZ_BAND_PERCENT: f64 = 0.10;

/// Usage bucket is a fraction of the value, floored at [`MIN_USAGE_BUCKET`].
pub const USAGE_BUCKET_FRACTION: f64 = 0.05;

/// Smallest rounding bucket for usage-like quantities.
pub const MIN_USAGE_BUCKET: f64 = 10.0;

/// Rounding bucket for daily-average quantities.
pub const DAILY_AVERAGE_BUCKET: f64 = 1.0;

/// Minimum sample size before a percentile narrative may be produced.
pub const MIN_NARRATIVE_SAMPLE: usize = 5;

/// Percentiles are capped here for display ("higher than 100%" is nonsense).
pub const PERCENTILE_DISPLAY_CAP: u32 = 99;

/// Percentiles at or below this read as "lower than" narratives.
pub const LOW_PERCENTILE_MAX: u32 = 25;

/// Percentiles at or above this read as "higher than" narratives.
pub const HIGH_PERCENTILE_MIN: u32 = 75;

/// Comparable count at or above which an estimate is High confidence.
pub const HIGH_CONFIDENCE_MIN_COMPARABLES: usize = 12;

/// Comparable count at or above which an estimate is Medium confidence.
pub const MEDIUM_CONFIDENCE_MIN_COMPARABLES: usize = 8;

/// Bedroom count assumed when a query or payload omits it.
pub const DEFAULT_BEDROOMS: u32 = 2;

/// Unit size (square feet) assumed when a query or payload omits it.
/// Also the reference size for size normalization.
pub const DEFAULT_SIZE_SQFT: f64 = 950.0;

/// Low bound of a synthesized estimate range, as a factor of the estimate.
pub const ESTIMATE_LOW_FACTOR: f64 = 0.85;

/// High bound of a synthesized estimate range, as a factor of the estimate.
pub const ESTIMATE_HIGH_FACTOR: f64 = 1.15;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "FairShare";
