//! Budget Route - Itinerary cost optimization

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use tripsense::{generate_json, prompts, GenerationOptions};

use crate::error::ApiError;
use crate::models::{OptimizationOutcome, OptimizeBudgetRequest, OptimizeBudgetResponse};
use crate::AppState;

/// Optimize an itinerary toward a target budget.
///
/// Replacement semantics: the optimized itinerary in the response is a
/// complete new document, not a diff against the submitted one.
#[utoipa::path(
    post,
    path = "/optimize-budget",
    request_body = OptimizeBudgetRequest,
    responses(
        (status = 200, description = "Optimized itinerary with savings detail", body = OptimizeBudgetResponse),
        (status = 400, description = "Missing itinerary or target budget", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider failure", body = crate::error::ErrorResponse)
    ),
    tag = "Budget"
)]
pub async fn optimize_budget(
    State(state): State<AppState>,
    Json(payload): Json<OptimizeBudgetRequest>,
) -> Result<Json<OptimizeBudgetResponse>, ApiError> {
    let itinerary = payload
        .itinerary
        .filter(Value::is_object)
        .ok_or_else(|| ApiError::validation("Missing required fields"))?;
    let target_budget = payload
        .target_budget
        .filter(|b| *b > 0.0)
        .ok_or_else(|| ApiError::validation("Missing required fields"))?;

    let prompt = prompts::optimize_budget_prompt(&itinerary, target_budget);
    let options = GenerationOptions::with_temperature(0.7);
    let outcome: OptimizationOutcome =
        generate_json(state.provider.as_ref(), &prompt, &options).await?;

    tracing::info!(
        target_budget,
        savings = outcome.savings.unwrap_or(0.0),
        changes = outcome.changes.len(),
        "budget optimized"
    );

    Ok(Json(outcome.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/optimize-budget", post(optimize_budget))
}
