//! TripSense Domain Library
//!
//! Core domain types and interfaces for the TripSense AI trip planner.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure trip-planning entities and logic
//!   - `entities/`: Core models (TravelPreferences, Itinerary, PackingList)
//!   - `value_objects/`: Immutable value types (ActivityCategory, Pace, ...)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `LlmProvider`: the single outbound seam to a hosted generative model
//!
//! - **Prompts** (`prompts/`): Deterministic natural-language prompt builders
//!
//! - **Services** (`services/`): Pure derivations over an itinerary
//!   (vibe score, packing list, budget breakdown)

pub mod domain;
pub mod ports;
pub mod prompts;
pub mod services;

// Re-export commonly used types
pub use domain::{
    Activity, ActivityCategory, ActivityEnergy, DayEnergy, DayPlan, DomainError, Itinerary,
    Location, Pace, PackingCategory, PackingItem, PackingList, Provider, TravelPreferences,
    VibeProfile,
};
pub use ports::{generate_json, strip_code_fences, GenerationOptions, LlmProvider};
pub use services::{
    budget_breakdown, build_packing_list, vibe_score, BudgetBreakdown, BudgetCategory,
    DEFAULT_VIBE_SCORE,
};
