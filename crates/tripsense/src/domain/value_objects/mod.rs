//! Value Objects
//!
//! Immutable value types shared across entities.

pub mod category;
pub mod energy;
pub mod pace;
pub mod provider;

pub use category::ActivityCategory;
pub use energy::{ActivityEnergy, DayEnergy};
pub use pace::Pace;
pub use provider::Provider;
