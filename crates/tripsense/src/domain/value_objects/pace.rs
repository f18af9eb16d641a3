//! Pace - Trip pacing preference

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How densely the traveler wants their days scheduled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Moderate,
    Fast,
}

impl Default for Pace {
    fn default() -> Self {
        Self::Moderate
    }
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pace::Slow => write!(f, "slow"),
            Pace::Moderate => write!(f, "moderate"),
            Pace::Fast => write!(f, "fast"),
        }
    }
}

impl std::str::FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(Pace::Slow),
            "moderate" => Ok(Pace::Moderate),
            "fast" => Ok(Pace::Fast),
            _ => Err(format!("Unknown pace: {}", s)),
        }
    }
}
