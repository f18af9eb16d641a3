//! PackingList - Derived packing checklist
//!
//! Computed deterministically from the itinerary (see
//! [`crate::services::build_packing_list`]); never persisted server-side.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One item to pack, with the reason it made the list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PackingItem {
    pub name: String,
    pub quantity: u32,
    pub reason: String,
    pub checked: bool,
}

impl Default for PackingItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            reason: String::new(),
            checked: false,
        }
    }
}

impl PackingItem {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// A named group of packing items
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PackingCategory {
    pub name: String,
    pub essential: bool,
    pub items: Vec<PackingItem>,
}

/// The full checklist with progress counts
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PackingList {
    pub categories: Vec<PackingCategory>,
    pub total_items: usize,
    pub checked_items: usize,
}

impl PackingList {
    /// Build a list from categories, computing the progress counts
    pub fn from_categories(categories: Vec<PackingCategory>) -> Self {
        let total_items = categories.iter().map(|c| c.items.len()).sum();
        let checked_items = categories
            .iter()
            .map(|c| c.items.iter().filter(|i| i.checked).count())
            .sum();
        Self {
            categories,
            total_items,
            checked_items,
        }
    }
}
