//! Search parameters for an estimate query.
//!
//! Validation is fail-closed: an out-of-domain parameter is rejected with
//! a specific error, never silently clamped.

use serde::{Deserialize, Serialize};

use crate::{FairshareError, Result};

/// The property category an estimate query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PropertyCategory {
    Studio,
    Apartment,
    Condo,
    Townhouse,
    House,
}

impl PropertyCategory {
    /// Category value multiplier applied to the base estimate.
    /// All multipliers fall in `[0.85, 1.15]`.
    #[must_use]
    pub fn value_multiplier(self) -> f64 {
        match self {
            Self::Studio => 0.85,
            Self::Apartment => 1.00,
            Self::Condo => 1.05,
            Self::Townhouse => 1.08,
            Self::House => 1.15,
        }
    }

    /// All categories, for table-driven tests and synthesis.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::Studio,
            Self::Apartment,
            Self::Condo,
            Self::Townhouse,
            Self::House,
        ]
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Studio => write!(f, "STUDIO"),
            Self::Apartment => write!(f, "APARTMENT"),
            Self::Condo => write!(f, "CONDO"),
            Self::Townhouse => write!(f, "TOWNHOUSE"),
            Self::House => write!(f, "HOUSE"),
        }
    }
}

/// Caller-supplied query constraints for an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Target property category.
    pub category: PropertyCategory,
    /// Bedroom count hint. Absent means the documented default applies.
    pub bedrooms: Option<u32>,
    /// Unit size hint in square feet. Absent means no size normalization.
    pub size_sqft: Option<f64>,
    /// Search radius in miles. Must be positive.
    pub radius_miles: f64,
    /// Lookback window in days. Must be positive.
    pub lookback_days: u32,
}

impl SearchParameters {
    /// Validate every constraint against its domain.
    ///
    /// # Errors
    /// `InvalidParameter` for the first check that fails. The engine
    /// rejects the whole query; it never clamps.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_miles.is_finite() || self.radius_miles <= 0.0 {
            return Err(FairshareError::invalid_parameter(
                "radius_miles",
                format!("must be positive, got {}", self.radius_miles),
            ));
        }
        if self.lookback_days == 0 {
            return Err(FairshareError::invalid_parameter(
                "lookback_days",
                "must be positive",
            ));
        }
        if let Some(size) = self.size_sqft {
            if !size.is_finite() || size <= 0.0 {
                return Err(FairshareError::invalid_parameter(
                    "size_sqft",
                    format!("must be positive when present, got {size}"),
                ));
            }
        }
        Ok(())
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl SearchParameters {
    pub fn dummy_rental() -> Self {
        Self {
            category: PropertyCategory::Apartment,
            bedrooms: Some(2),
            size_sqft: Some(950.0),
            radius_miles: 5.0,
            lookback_days: 90,
        }
    }
}
