//! Plan B Route - Alternative activity suggestions

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use tripsense::{generate_json, prompts, GenerationOptions};

use crate::error::ApiError;
use crate::models::{PlanBOutcome, PlanBRequest, PlanBResponse};
use crate::AppState;

/// Suggest alternatives for an activity that became unviable
#[utoipa::path(
    post,
    path = "/plan-b",
    request_body = PlanBRequest,
    responses(
        (status = 200, description = "Alternative activities with explanation", body = PlanBResponse),
        (status = 400, description = "Missing activity or reason", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider failure", body = crate::error::ErrorResponse)
    ),
    tag = "PlanB"
)]
pub async fn plan_b(
    State(state): State<AppState>,
    Json(payload): Json<PlanBRequest>,
) -> Result<Json<PlanBResponse>, ApiError> {
    let activity = payload
        .activity
        .filter(Value::is_object)
        .ok_or_else(|| ApiError::validation("Missing required fields: activity and reason"))?;
    let reason = payload
        .reason
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| ApiError::validation("Missing required fields: activity and reason"))?;

    let prompt = prompts::plan_b_prompt(&activity, &reason);
    let options = GenerationOptions::with_temperature(0.8);
    let outcome: PlanBOutcome =
        generate_json(state.provider.as_ref(), &prompt, &options).await?;

    tracing::info!(
        alternatives = outcome.alternatives.len(),
        "plan B generated"
    );

    Ok(Json(outcome.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/plan-b", post(plan_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{state_with, MockProvider};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn rejects_missing_reason_without_calling_provider() {
        let provider = MockProvider::returning("{}");
        let state = state_with(provider.clone());

        let request = PlanBRequest {
            activity: Some(json!({"name": "Louvre"})),
            reason: None,
        };
        let result = plan_b(State(state), Json(request)).await;
        assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn uses_the_higher_plan_b_temperature() {
        let payload = json!({
            "alternatives": [
                {
                    "name": "Musée d'Orsay",
                    "description": "Impressionist masterpieces in a former station",
                    "cost": 16,
                    "category": "culture",
                    "energyLevel": "medium",
                    "vibeMatch": 82,
                    "tips": []
                }
            ],
            "explanation": "Same area, similar vibe, slightly cheaper"
        })
        .to_string();
        let provider = MockProvider::returning(&payload);
        let state = state_with(provider.clone());

        let request = PlanBRequest {
            activity: Some(json!({"name": "Louvre", "cost": 22})),
            reason: Some("closed for renovation".to_string()),
        };
        let response = plan_b(State(state), Json(request)).await.unwrap().0;

        assert!(response.success);
        assert_eq!(response.alternatives.len(), 1);
        assert_eq!(response.alternatives[0].name, "Musée d'Orsay");
        assert!(response.explanation.is_some());
        assert_eq!(*provider.last_temperature.lock().unwrap(), Some(0.8));
    }
}
