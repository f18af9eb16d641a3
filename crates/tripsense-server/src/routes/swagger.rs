//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use tripsense::{
    Activity, ActivityCategory, ActivityEnergy, DayEnergy, DayPlan, Itinerary, Location, Pace,
    TravelPreferences, VibeProfile,
};

use crate::error::ErrorResponse;
use crate::models::{
    BudgetChange, GenerateItineraryRequest, GenerateItineraryResponse, ModifyItineraryRequest,
    OptimizeBudgetRequest, OptimizeBudgetResponse, PlanBRequest, PlanBResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::itinerary::generate_itinerary,
        super::itinerary::modify_itinerary,
        super::budget::optimize_budget,
        super::plan_b::plan_b,
    ),
    components(schemas(
        // Domain
        Activity,
        ActivityCategory,
        ActivityEnergy,
        DayEnergy,
        DayPlan,
        Itinerary,
        Location,
        Pace,
        TravelPreferences,
        VibeProfile,
        // API
        BudgetChange,
        ErrorResponse,
        GenerateItineraryRequest,
        GenerateItineraryResponse,
        ModifyItineraryRequest,
        OptimizeBudgetRequest,
        OptimizeBudgetResponse,
        PlanBRequest,
        PlanBResponse,
    )),
    tags(
        (name = "Itinerary", description = "Itinerary generation and modification"),
        (name = "Budget", description = "Budget optimization"),
        (name = "PlanB", description = "Alternative activity suggestions")
    ),
    info(
        title = "TripSense AI API",
        description = "Personalized multi-day travel itineraries from a hosted LLM"
    )
)]
pub struct ApiDoc;
