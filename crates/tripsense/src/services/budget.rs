//! Budget Breakdown - Display arithmetic over activity costs
//!
//! Sums, percentages, and the 70%/100%/130% "flex view" multipliers used
//! for budget-scenario presentation. Pure arithmetic only; savings tips
//! come from the optimize operation, not from here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ActivityCategory, Itinerary};

/// One activity's contribution to a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetItem {
    pub name: String,
    pub cost: f64,
    pub day: u32,
    pub category: ActivityCategory,
}

/// Spend aggregated per activity category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetCategory {
    pub name: String,
    pub amount: f64,
    /// Share of total cost, 0-100
    pub percentage: f64,
    pub items: Vec<BudgetItem>,
}

/// Total cost under the three flex-view multipliers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct FlexViews {
    pub budget70: f64,
    pub budget100: f64,
    pub budget130: f64,
}

/// The full budget view for an itinerary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub total: f64,
    pub categories: Vec<BudgetCategory>,
    pub daily_average: f64,
    pub per_person_cost: f64,
    pub flex_views: FlexViews,
}

/// Aggregate activity costs into the budget dashboard view.
///
/// Traveler count falls back to 1 when the itinerary does not carry one.
pub fn budget_breakdown(itinerary: &Itinerary) -> BudgetBreakdown {
    let mut by_category: BTreeMap<String, (f64, Vec<BudgetItem>)> = BTreeMap::new();
    let mut total = 0.0;

    for day in &itinerary.days {
        for activity in &day.activities {
            total += activity.cost;
            let entry = by_category
                .entry(activity.category.to_string())
                .or_default();
            entry.0 += activity.cost;
            entry.1.push(BudgetItem {
                name: activity.name.clone(),
                cost: activity.cost,
                day: day.day,
                category: activity.category,
            });
        }
    }

    let categories = by_category
        .into_iter()
        .map(|(name, (amount, items))| BudgetCategory {
            name,
            amount,
            percentage: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
            items,
        })
        .collect();

    let day_count = itinerary.days.len().max(1) as f64;
    let travelers = itinerary.travelers.unwrap_or(1).max(1) as f64;

    BudgetBreakdown {
        total,
        categories,
        daily_average: (total / day_count).round(),
        per_person_cost: (total / travelers).round(),
        flex_views: FlexViews {
            budget70: (total * 0.7).round(),
            budget100: total,
            budget130: (total * 1.3).round(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, DayPlan};

    fn sample_itinerary() -> Itinerary {
        let activity = |name: &str, cost: f64, category: ActivityCategory| Activity {
            name: name.to_string(),
            cost,
            category,
            ..Default::default()
        };
        Itinerary {
            travelers: Some(2),
            days: vec![
                DayPlan {
                    day: 1,
                    activities: vec![
                        activity("Louvre", 60.0, ActivityCategory::Culture),
                        activity("Bistro lunch", 40.0, ActivityCategory::Food),
                    ],
                    ..Default::default()
                },
                DayPlan {
                    day: 2,
                    activities: vec![activity("Seine cruise", 100.0, ActivityCategory::Attraction)],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn totals_and_flex_views() {
        let breakdown = budget_breakdown(&sample_itinerary());
        assert_eq!(breakdown.total, 200.0);
        assert_eq!(breakdown.flex_views.budget70, 140.0);
        assert_eq!(breakdown.flex_views.budget100, 200.0);
        assert_eq!(breakdown.flex_views.budget130, 260.0);
    }

    #[test]
    fn daily_average_and_per_person() {
        let breakdown = budget_breakdown(&sample_itinerary());
        assert_eq!(breakdown.daily_average, 100.0);
        assert_eq!(breakdown.per_person_cost, 100.0);
    }

    #[test]
    fn percentages_sum_per_category() {
        let breakdown = budget_breakdown(&sample_itinerary());
        let culture = breakdown
            .categories
            .iter()
            .find(|c| c.name == "culture")
            .unwrap();
        assert_eq!(culture.amount, 60.0);
        assert!((culture.percentage - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_itinerary_is_all_zeroes() {
        let breakdown = budget_breakdown(&Itinerary::default());
        assert_eq!(breakdown.total, 0.0);
        assert!(breakdown.categories.is_empty());
        assert_eq!(breakdown.daily_average, 0.0);
    }
}
