//! Itinerary - The generated trip plan
//!
//! The day/activity portion of these structs is produced wholesale by the
//! model, so every field is defensively defaulted: a syntactically valid
//! but incomplete payload still deserializes, and readers fall back at the
//! point of use instead of failing the whole document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::preferences::TravelPreferences;
use crate::domain::value_objects::{ActivityCategory, ActivityEnergy, DayEnergy};

/// Geographic placement of an activity
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// One scheduled activity within a day
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub location: Location,
    /// HH:MM, local time
    pub start_time: String,
    /// HH:MM, local time
    pub end_time: String,
    /// Minutes; the prompt asks for end - start but this is not enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub category: ActivityCategory,
    pub booking_required: bool,
    pub energy_level: ActivityEnergy,
    /// 0-100 fit to the requesting traveler's vibe profile, model-supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe_match: Option<f64>,
    pub tips: Vec<String>,
}

/// One day of the trip
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day index
    pub day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub energy_level: DayEnergy,
    pub activities: Vec<Activity>,
    pub total_cost: f64,
}

/// The full generated trip plan.
///
/// `destination`, `days`, `highlights` and `totalCost` come from the
/// provider; the identifier, share token, echoed preferences and
/// timestamps are attached by [`Itinerary::decorate`] on the generate
/// path. A modification response is passed through verbatim, so the
/// decoration fields stay optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub days: Vec<DayPlan>,
    pub highlights: Vec<String>,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<crate::domain::entities::preferences::VibeProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<Uuid>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Itinerary {
    /// Attach identifiers, timestamps and echoed preferences to a raw
    /// provider payload. Currency falls back to the preference currency
    /// ("USD" when the caller sent none).
    pub fn decorate(&mut self, preferences: &TravelPreferences) {
        let now = Utc::now();
        self.id = Some(Uuid::new_v4());
        self.share_token = Some(Uuid::new_v4());
        self.start_date = Some(preferences.start_date);
        self.end_date = Some(preferences.end_date);
        self.budget = Some(preferences.budget);
        self.travelers = Some(preferences.travelers);
        self.vibe = Some(preferences.vibe);
        self.currency = Some(preferences.currency.clone());
        self.is_public = false;
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }

    /// Iterate every activity across every day
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.days.iter().flat_map(|day| day.activities.iter())
    }
}
