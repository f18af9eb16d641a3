//! TripSense API Client

use anyhow::{bail, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tripsense::{Activity, Itinerary, Pace, VibeProfile};

/// API Client for the TripSense server
pub struct TripSenseClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub travelers: u32,
    pub currency: String,
    pub pace: Pace,
    pub vibe: VibeProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub itinerary: Itinerary,
    pub vibe_score: u32,
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyRequest<'a> {
    current_itinerary: &'a Value,
    change_description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OptimizeRequest<'a> {
    itinerary: &'a Value,
    target_budget: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetChange {
    pub original: String,
    pub replacement: String,
    pub saved_amount: f64,
    pub reason: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub success: bool,
    pub optimized_itinerary: Option<Itinerary>,
    pub savings: Option<f64>,
    pub changes: Vec<BudgetChange>,
    pub savings_tips: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PlanBRequest<'a> {
    activity: &'a Value,
    reason: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlanBResponse {
    pub success: bool,
    pub alternatives: Vec<Activity>,
    pub explanation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl TripSenseClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Generate a new itinerary
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.post_json("/generate-itinerary", request).await
    }

    /// Request a whole-itinerary replacement for a free-text change
    pub async fn modify(&self, current_itinerary: &Value, change: &str) -> Result<Itinerary> {
        self.post_json(
            "/modify-itinerary",
            &ModifyRequest {
                current_itinerary,
                change_description: change,
            },
        )
        .await
    }

    /// Optimize an itinerary toward a target budget
    pub async fn optimize(&self, itinerary: &Value, target_budget: f64) -> Result<OptimizeResponse> {
        self.post_json(
            "/optimize-budget",
            &OptimizeRequest {
                itinerary,
                target_budget,
            },
        )
        .await
    }

    /// Request alternatives for one activity
    pub async fn plan_b(&self, activity: &Value, reason: &str) -> Result<PlanBResponse> {
        self.post_json("/plan-b", &PlanBRequest { activity, reason })
            .await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            bail!("API error ({}): {}", status.as_u16(), message);
        }

        Ok(resp.json().await?)
    }
}
