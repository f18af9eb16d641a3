//! ActivityCategory - Classification of itinerary activities

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of an activity, as labelled by the model.
///
/// The set is closed on the prompt side, but the wire side keeps a
/// catch-all variant so an off-script label from the provider degrades
/// to `Other` instead of failing the whole itinerary deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Attraction,
    Food,
    Transport,
    Accommodation,
    Entertainment,
    Shopping,
    Nature,
    Culture,
    Relaxation,
    #[serde(other)]
    Other,
}

impl Default for ActivityCategory {
    fn default() -> Self {
        Self::Attraction
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActivityCategory::Attraction => "attraction",
            ActivityCategory::Food => "food",
            ActivityCategory::Transport => "transport",
            ActivityCategory::Accommodation => "accommodation",
            ActivityCategory::Entertainment => "entertainment",
            ActivityCategory::Shopping => "shopping",
            ActivityCategory::Nature => "nature",
            ActivityCategory::Culture => "culture",
            ActivityCategory::Relaxation => "relaxation",
            ActivityCategory::Other => "other",
        };
        write!(f, "{}", label)
    }
}
