//! # fairshare-types
//!
//! Shared types, errors, and configuration for the **FairShare**
//! disclosure and estimate core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ComparableId`]
//! - **Observation model**: [`Observation`], [`QuantityKind`]
//! - **Disclosure policy**: [`DisclosurePolicy`], [`FuzzStrategy`]
//! - **Estimate model**: [`MarketEstimate`], [`ConfidenceTier`], [`EstimateSource`]
//! - **Comparable model**: [`ComparableRecord`]
//! - **Query model**: [`SearchParameters`], [`PropertyCategory`]
//! - **Provider payloads**: [`ProviderPayload`], [`ProviderComparable`]
//! - **Configuration**: [`EstimateConfig`]
//! - **Errors**: [`FairshareError`] with `FS_ERR_` prefix codes
//! - **Constants**: domain-wide thresholds and defaults

pub mod comparable;
pub mod config;
pub mod constants;
pub mod error;
pub mod estimate;
pub mod ids;
pub mod observation;
pub mod params;
pub mod policy;
pub mod provider;

// Re-export all primary types at crate root for ergonomic imports:
//   use fairshare_types::{Observation, DisclosurePolicy, MarketEstimate, ...};

pub use comparable::*;
pub use config::*;
pub use error::*;
pub use estimate::*;
pub use ids::*;
pub use observation::*;
pub use params::*;
pub use policy::*;
pub use provider::*;

// Constants are accessed via `fairshare_types::constants::FOO`
// (not re-exported to avoid name collisions).
