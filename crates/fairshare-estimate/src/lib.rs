//! # fairshare-estimate
//!
//! **Estimate synthesis engine for FairShare.**
//!
//! Turns search parameters (or, in adapter mode, a provider response)
//! into a point estimate, a confidence tier, and a ranked comparable set.
//! It has:
//!
//! - **Zero side effects**: no I/O, no global clock, no shared state
//! - **Injected randomness**: every stochastic draw flows through one
//!   caller-owned [`QuerySampler`]; a fixed seed reproduces a query
//!   exactly, on any machine
//! - **One ordering guarantee**: comparables are presented similarity
//!   descending, ties broken by insertion order
//! - **Fail-closed input**: out-of-domain parameters are rejected, never
//!   clamped; missing provider fields recover to documented defaults

pub mod adapter;
pub mod engine;
pub mod sampler;
pub mod synth;

pub use adapter::map_provider_response;
pub use engine::synthesize_estimate;
pub use sampler::QuerySampler;
pub use synth::rank_comparables;
