//! Domain Layer
//!
//! Pure trip-planning entities and value objects, free of I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{
    Activity, DayPlan, Itinerary, Location, PackingCategory, PackingItem, PackingList,
    TravelPreferences, VibeProfile,
};
pub use errors::DomainError;
pub use value_objects::{ActivityCategory, ActivityEnergy, DayEnergy, Pace, Provider};
