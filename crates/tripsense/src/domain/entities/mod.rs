//! Entities
//!
//! Core trip-planning models. All wire JSON is camelCase to match the
//! shape the model is prompted to return.

pub mod itinerary;
pub mod packing;
pub mod preferences;

pub use itinerary::{Activity, DayPlan, Itinerary, Location};
pub use packing::{PackingCategory, PackingItem, PackingList};
pub use preferences::{TravelPreferences, VibeProfile};
