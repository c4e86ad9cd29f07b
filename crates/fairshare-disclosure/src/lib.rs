//! # fairshare-disclosure
//!
//! **Pure k-anonymity disclosure engine for FairShare.**
//!
//! Given a raw numeric observation and the size of its peer group, this
//! crate decides whether the true value may be shown and renders it into
//! a display string. It has:
//!
//! - **Zero side effects**: no I/O, no clocks, no randomness
//! - **Deterministic output**: same observation and policy -> same string
//! - **One gate**: no rendering path reaches an exact value without
//!   passing the threshold check
//! - **Two fuzz strategies**: bucket rounding for usage-like quantities,
//!   a direct multiplicative band for rates

pub mod band;
pub mod display;
pub mod narrative;
pub mod threshold;

pub use band::{FuzzBand, compute_fuzz_band};
pub use display::{DisplayValue, disclose};
pub use narrative::percentile_narrative;
pub use threshold::meets_disclosure_threshold;
