//! TravelPreferences - What the traveler asked for
//!
//! Pure domain entity; built once by the onboarding flow and read once by
//! the itinerary service. Never mutated after submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::Pace;
use crate::domain::DomainError;

/// Six-axis 0-100 preference vector steering activity selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct VibeProfile {
    pub adventure: u8,
    pub culture: u8,
    pub relaxation: u8,
    pub foodie: u8,
    pub nightlife: u8,
    pub nature: u8,
}

impl VibeProfile {
    /// A flat mid-scale profile, used when the caller supplies none
    pub fn balanced() -> Self {
        Self {
            adventure: 50,
            culture: 50,
            relaxation: 50,
            foodie: 50,
            nightlife: 50,
            nature: 50,
        }
    }
}

/// Trip parameters collected by the onboarding flow
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub travelers: u32,
    #[serde(default)]
    pub pace: Pace,
    #[serde(default)]
    pub vibe: VibeProfile,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

impl TravelPreferences {
    /// Inclusive day count of the trip (a same-day trip is 1 day)
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Reject empty destinations and inverted date ranges.
    ///
    /// Callers must run this before building prompts; the prompt builders
    /// themselves assume valid input.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.destination.trim().is_empty() {
            return Err(DomainError::validation("destination is required"));
        }
        if self.end_date < self.start_date {
            return Err(DomainError::validation(
                "endDate must not be before startDate",
            ));
        }
        if self.travelers == 0 {
            return Err(DomainError::validation("travelers must be at least 1"));
        }
        Ok(())
    }
}
