//! Energy levels - per-activity and per-day effort labels

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Effort required by a single activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityEnergy {
    Low,
    Medium,
    High,
}

impl Default for ActivityEnergy {
    fn default() -> Self {
        Self::Medium
    }
}

/// Overall intensity of a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DayEnergy {
    Chill,
    Balanced,
    Intense,
}

impl Default for DayEnergy {
    fn default() -> Self {
        Self::Balanced
    }
}
