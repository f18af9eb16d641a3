//! Itinerary Routes - Generation and modification
//!
//! Each handler is stateless: validate presence, build the prompt, make
//! the single gateway call, decorate (generate only), respond.

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use tripsense::{
    generate_json, prompts, vibe_score, GenerationOptions, Itinerary,
};

use crate::error::ApiError;
use crate::models::{GenerateItineraryRequest, GenerateItineraryResponse, ModifyItineraryRequest};
use crate::AppState;

/// Generate a new itinerary from travel preferences
#[utoipa::path(
    post,
    path = "/generate-itinerary",
    request_body = GenerateItineraryRequest,
    responses(
        (status = 200, description = "Generated itinerary with vibe score", body = GenerateItineraryResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider failure", body = crate::error::ErrorResponse)
    ),
    tag = "Itinerary"
)]
pub async fn generate_itinerary(
    State(state): State<AppState>,
    Json(payload): Json<GenerateItineraryRequest>,
) -> Result<Json<GenerateItineraryResponse>, ApiError> {
    let preferences = payload.into_preferences()?;

    let prompt = prompts::generate_itinerary_prompt(&preferences);
    let options = GenerationOptions::with_temperature(0.7);
    let mut itinerary: Itinerary =
        generate_json(state.provider.as_ref(), &prompt, &options).await?;

    itinerary.decorate(&preferences);
    let vibe_score = vibe_score(&itinerary);

    tracing::info!(
        destination = %preferences.destination,
        days = itinerary.days.len(),
        vibe_score,
        "itinerary generated"
    );

    Ok(Json(GenerateItineraryResponse {
        itinerary,
        vibe_score,
        success: true,
    }))
}

/// Modify an existing itinerary from a free-text change request.
///
/// Whole-resource replacement semantics: the response is the complete
/// new itinerary from the provider, returned verbatim with no decoration
/// and no merge against the submitted one.
#[utoipa::path(
    post,
    path = "/modify-itinerary",
    request_body = ModifyItineraryRequest,
    responses(
        (status = 200, description = "Complete replacement itinerary", body = Itinerary),
        (status = 400, description = "Missing itinerary or change description", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider failure", body = crate::error::ErrorResponse)
    ),
    tag = "Itinerary"
)]
pub async fn modify_itinerary(
    State(state): State<AppState>,
    Json(payload): Json<ModifyItineraryRequest>,
) -> Result<Json<Itinerary>, ApiError> {
    let current = payload
        .current_itinerary
        .filter(Value::is_object)
        .ok_or_else(|| {
            ApiError::validation("Current itinerary and change description are required")
        })?;
    let change = payload
        .change_description
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| {
            ApiError::validation("Current itinerary and change description are required")
        })?;

    let prompt = prompts::modify_itinerary_prompt(&current, &change);
    let options = GenerationOptions::with_temperature(0.7);
    let replacement: Itinerary =
        generate_json(state.provider.as_ref(), &prompt, &options).await?;

    tracing::info!(
        destination = %replacement.destination,
        days = replacement.days.len(),
        "itinerary modified"
    );

    Ok(Json(replacement))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-itinerary", post(generate_itinerary))
        .route("/modify-itinerary", post(modify_itinerary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{state_with, MockProvider};
    use axum::http::StatusCode;
    use serde_json::json;

    fn paris_request() -> GenerateItineraryRequest {
        GenerateItineraryRequest {
            destination: Some("Paris".to_string()),
            start_date: Some("2025-06-01".parse().unwrap()),
            end_date: Some("2025-06-03".parse().unwrap()),
            budget: Some(3000.0),
            travelers: Some(2),
            currency: None,
            pace: None,
            vibe: Some(tripsense::VibeProfile {
                adventure: 80,
                culture: 70,
                relaxation: 30,
                foodie: 90,
                nightlife: 40,
                nature: 20,
            }),
        }
    }

    fn three_day_payload() -> String {
        let day = |n: u32, date: &str, matches: &[u32]| {
            json!({
                "day": n,
                "date": date,
                "theme": "Exploring",
                "energyLevel": "balanced",
                "activities": matches.iter().map(|m| json!({
                    "name": "Activity",
                    "description": "Something fun",
                    "location": {"lat": 48.85, "lng": 2.35, "address": "Somewhere", "city": "Paris", "country": "France"},
                    "startTime": "09:00",
                    "endTime": "11:00",
                    "duration": 120,
                    "cost": 30,
                    "currency": "USD",
                    "category": "attraction",
                    "bookingRequired": false,
                    "energyLevel": "medium",
                    "vibeMatch": m,
                    "tips": []
                })).collect::<Vec<_>>(),
                "totalCost": 30
            })
        };
        json!({
            "destination": "Paris",
            "days": [
                day(1, "2025-06-01", &[80]),
                day(2, "2025-06-02", &[100]),
                day(3, "2025-06-03", &[]),
            ],
            "highlights": ["Louvre"],
            "totalCost": 90
        })
        .to_string()
    }

    #[tokio::test]
    async fn generate_rejects_missing_destination_without_calling_provider() {
        let provider = MockProvider::returning("{}");
        let state = state_with(provider.clone());
        let mut request = paris_request();
        request.destination = None;

        let result = generate_itinerary(State(state), Json(request)).await;
        let err = result.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn generate_rejects_inverted_date_range() {
        let provider = MockProvider::returning("{}");
        let state = state_with(provider.clone());
        let mut request = paris_request();
        request.start_date = Some("2025-06-05".parse().unwrap());

        let result = generate_itinerary(State(state), Json(request)).await;
        assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn generate_decorates_and_scores_the_itinerary() {
        let provider = MockProvider::returning(&three_day_payload());
        let state = state_with(provider.clone());

        let response = generate_itinerary(State(state), Json(paris_request()))
            .await
            .unwrap()
            .0;

        assert!(response.success);
        // one DayPlan per calendar day in range
        assert_eq!(response.itinerary.days.len(), 3);
        assert!(response.itinerary.id.is_some());
        assert!(response.itinerary.share_token.is_some());
        assert_eq!(response.itinerary.currency.as_deref(), Some("USD"));
        assert_eq!(response.itinerary.budget, Some(3000.0));
        assert!(!response.itinerary.is_public);
        // mean of 80 and 100
        assert_eq!(response.vibe_score, 90);
        assert_eq!(provider.calls(), 1);
        assert_eq!(
            *provider.last_temperature.lock().unwrap(),
            Some(0.7)
        );
    }

    #[tokio::test]
    async fn generate_defaults_vibe_score_without_matches() {
        let payload = json!({
            "destination": "Paris",
            "days": [],
            "highlights": [],
            "totalCost": 0
        })
        .to_string();
        let provider = MockProvider::returning(&payload);
        let state = state_with(provider);

        let response = generate_itinerary(State(state), Json(paris_request()))
            .await
            .unwrap()
            .0;
        assert_eq!(response.vibe_score, 75);
    }

    #[tokio::test]
    async fn generate_accepts_fenced_provider_output() {
        let fenced = format!("```json\n{}\n```", three_day_payload());
        let provider = MockProvider::returning(&fenced);
        let state = state_with(provider);

        let response = generate_itinerary(State(state), Json(paris_request()))
            .await
            .unwrap()
            .0;
        assert_eq!(response.itinerary.days.len(), 3);
    }

    #[tokio::test]
    async fn generate_surfaces_provider_failure_as_500() {
        let provider = MockProvider::failing("No response from AI");
        let state = state_with(provider);

        let result = generate_itinerary(State(state), Json(paris_request())).await;
        assert_eq!(
            result.err().unwrap().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn generate_surfaces_unparseable_output_as_500() {
        let provider = MockProvider::returning("I'd be happy to plan your trip!");
        let state = state_with(provider);

        let result = generate_itinerary(State(state), Json(paris_request())).await;
        assert_eq!(
            result.err().unwrap().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn modify_preserves_destination_and_skips_decoration() {
        let provider = MockProvider::returning(&three_day_payload());
        let state = state_with(provider);

        let request = ModifyItineraryRequest {
            current_itinerary: Some(json!({"destination": "Paris", "days": []})),
            change_description: Some("add a wine tasting".to_string()),
        };
        let replacement = modify_itinerary(State(state), Json(request))
            .await
            .unwrap()
            .0;

        assert_eq!(replacement.destination, "Paris");
        // verbatim replacement: no identifiers attached
        assert!(replacement.id.is_none());
        assert!(replacement.created_at.is_none());
    }

    #[tokio::test]
    async fn modify_rejects_empty_change_description() {
        let provider = MockProvider::returning("{}");
        let state = state_with(provider.clone());

        let request = ModifyItineraryRequest {
            current_itinerary: Some(json!({"destination": "Paris"})),
            change_description: Some("   ".to_string()),
        };
        let result = modify_itinerary(State(state), Json(request)).await;
        assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn modify_rejects_missing_itinerary() {
        let provider = MockProvider::returning("{}");
        let state = state_with(provider.clone());

        let request = ModifyItineraryRequest {
            current_itinerary: None,
            change_description: Some("add a wine tasting".to_string()),
        };
        let result = modify_itinerary(State(state), Json(request)).await;
        assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }
}
