//! Services
//!
//! Pure derivations over an itinerary: no I/O, deterministic output.

pub mod budget;
pub mod packing;
pub mod vibe;

pub use budget::{budget_breakdown, BudgetBreakdown, BudgetCategory, BudgetItem, FlexViews};
pub use packing::build_packing_list;
pub use vibe::{vibe_score, DEFAULT_VIBE_SCORE};
