//! API Models
//!
//! Request/response DTOs for the four itinerary operations. Request
//! fields mirror the client wire shape (camelCase); presence checks
//! happen in the handlers so a missing field becomes a 400 with a
//! message rather than a deserialization reject.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use tripsense::{Activity, Itinerary, Pace, TravelPreferences, VibeProfile};

use crate::error::ApiError;

// ============================================
// Generate
// ============================================

/// Body of `POST /generate-itinerary`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItineraryRequest {
    pub destination: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub budget: Option<f64>,
    pub travelers: Option<u32>,
    pub currency: Option<String>,
    pub pace: Option<Pace>,
    pub vibe: Option<VibeProfile>,
}

impl GenerateItineraryRequest {
    /// Check required fields and assemble validated preferences.
    pub fn into_preferences(self) -> Result<TravelPreferences, ApiError> {
        let destination = self.destination.filter(|d| !d.trim().is_empty());
        let (destination, start_date, end_date) =
            match (destination, self.start_date, self.end_date) {
                (Some(destination), Some(start_date), Some(end_date)) => {
                    (destination, start_date, end_date)
                }
                _ => return Err(ApiError::validation("Missing required fields")),
            };

        let preferences = TravelPreferences {
            destination,
            start_date,
            end_date,
            budget: self.budget.unwrap_or_default(),
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            travelers: self.travelers.unwrap_or(1),
            pace: self.pace.unwrap_or_default(),
            vibe: self.vibe.unwrap_or_else(VibeProfile::balanced),
        };
        preferences.validate()?;
        Ok(preferences)
    }
}

/// Body of a successful `POST /generate-itinerary`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItineraryResponse {
    pub itinerary: Itinerary,
    pub vibe_score: u32,
    pub success: bool,
}

// ============================================
// Modify
// ============================================

/// Body of `POST /modify-itinerary`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModifyItineraryRequest {
    /// The full current itinerary, re-submitted verbatim as context
    pub current_itinerary: Option<Value>,
    pub change_description: Option<String>,
}

// ============================================
// Optimize budget
// ============================================

/// Body of `POST /optimize-budget`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeBudgetRequest {
    pub itinerary: Option<Value>,
    pub target_budget: Option<f64>,
}

/// One activity swap proposed by the optimizer
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetChange {
    pub original: String,
    pub replacement: String,
    pub saved_amount: f64,
    pub reason: String,
}

/// Provider payload for the optimize operation; leniently typed, every
/// field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizationOutcome {
    pub optimized_itinerary: Option<Itinerary>,
    pub savings: Option<f64>,
    pub changes: Vec<BudgetChange>,
    pub savings_tips: Vec<String>,
}

/// Body of a successful `POST /optimize-budget`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeBudgetResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_itinerary: Option<Itinerary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
    pub changes: Vec<BudgetChange>,
    pub savings_tips: Vec<String>,
}

impl From<OptimizationOutcome> for OptimizeBudgetResponse {
    fn from(outcome: OptimizationOutcome) -> Self {
        Self {
            success: true,
            optimized_itinerary: outcome.optimized_itinerary,
            savings: outcome.savings,
            changes: outcome.changes,
            savings_tips: outcome.savings_tips,
        }
    }
}

// ============================================
// Plan B
// ============================================

/// Body of `POST /plan-b`
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlanBRequest {
    /// The activity that became unviable, verbatim
    pub activity: Option<Value>,
    pub reason: Option<String>,
}

/// Provider payload for the plan-B operation; leniently typed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlanBOutcome {
    pub alternatives: Vec<Activity>,
    pub explanation: Option<String>,
}

/// Body of a successful `POST /plan-b`
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanBResponse {
    pub success: bool,
    pub alternatives: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl From<PlanBOutcome> for PlanBResponse {
    fn from(outcome: PlanBOutcome) -> Self {
        Self {
            success: true,
            alternatives: outcome.alternatives,
            explanation: outcome.explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_destination_is_rejected() {
        let request = GenerateItineraryRequest {
            destination: None,
            start_date: Some("2025-06-01".parse().unwrap()),
            end_date: Some("2025-06-03".parse().unwrap()),
            budget: Some(3000.0),
            travelers: Some(2),
            currency: None,
            pace: None,
            vibe: None,
        };
        assert!(request.into_preferences().is_err());
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let request = GenerateItineraryRequest {
            destination: Some("Paris".to_string()),
            start_date: Some("2025-06-01".parse().unwrap()),
            end_date: Some("2025-06-03".parse().unwrap()),
            budget: None,
            travelers: None,
            currency: None,
            pace: None,
            vibe: None,
        };
        let preferences = request.into_preferences().unwrap();
        assert_eq!(preferences.currency, "USD");
        assert_eq!(preferences.travelers, 1);
        assert_eq!(preferences.vibe, VibeProfile::balanced());
    }

    #[test]
    fn inverted_date_range_is_rejected() {
        let request = GenerateItineraryRequest {
            destination: Some("Paris".to_string()),
            start_date: Some("2025-06-03".parse().unwrap()),
            end_date: Some("2025-06-01".parse().unwrap()),
            budget: None,
            travelers: None,
            currency: None,
            pace: None,
            vibe: None,
        };
        assert!(request.into_preferences().is_err());
    }

    #[test]
    fn optimization_outcome_tolerates_sparse_payload() {
        let outcome: OptimizationOutcome = serde_json::from_str("{}").unwrap();
        assert!(outcome.optimized_itinerary.is_none());
        assert!(outcome.changes.is_empty());
    }
}
