//! Packing List Generation
//!
//! Deterministic checklist derived from the itinerary's length and the
//! set of activity categories it contains. Regenerated on demand; never
//! persisted server-side.

use std::collections::HashSet;

use crate::domain::{ActivityCategory, Itinerary, PackingCategory, PackingItem, PackingList};

/// Build a packing checklist for an itinerary.
///
/// Same itinerary, same list: the output depends only on day count,
/// activity names, and activity categories.
pub fn build_packing_list(itinerary: &Itinerary) -> PackingList {
    let categories = vec![
        PackingCategory {
            name: "Essential Documents".to_string(),
            essential: true,
            items: vec![
                PackingItem::new("Passport", "Required for international travel"),
                PackingItem::new("Travel insurance", "Protection for your trip"),
                PackingItem::new("Flight tickets", "Required for boarding"),
                PackingItem::new("Hotel confirmations", "Check-in documentation"),
                PackingItem::new("Emergency contacts", "Safety precaution"),
            ],
        },
        PackingCategory {
            name: "Clothing".to_string(),
            essential: true,
            items: clothing_items(itinerary),
        },
        PackingCategory {
            name: "Electronics".to_string(),
            essential: true,
            items: vec![
                PackingItem::new("Smartphone & charger", "Communication and navigation"),
                PackingItem::new("Power bank", "Keep devices charged on-the-go"),
                PackingItem::new(
                    "Universal adapter",
                    format!("For {} outlets", itinerary.destination),
                ),
                PackingItem::new("Camera", "Capture memories"),
                PackingItem::new("Headphones", "Entertainment during travel"),
            ],
        },
        PackingCategory {
            name: "Health & Toiletries".to_string(),
            essential: true,
            items: vec![
                PackingItem::new("Prescription medications", "Health requirement"),
                PackingItem::new("First aid kit", "Minor injuries and ailments"),
                PackingItem::new("Sunscreen", "Sun protection"),
                PackingItem::new("Toiletries", "Personal hygiene"),
                PackingItem::new("Hand sanitizer", "Hygiene on-the-go"),
            ],
        },
        PackingCategory {
            name: "Activity-Specific".to_string(),
            essential: false,
            items: activity_items(itinerary),
        },
        PackingCategory {
            name: "Money & Cards".to_string(),
            essential: true,
            items: vec![
                PackingItem::new("Credit cards", "Primary payment method"),
                PackingItem::new("Cash (local currency)", "For small purchases"),
                PackingItem::new("Emergency cash", "Backup payment"),
            ],
        },
    ];

    PackingList::from_categories(categories)
}

fn clothing_items(itinerary: &Itinerary) -> Vec<PackingItem> {
    let days = itinerary.days.len();
    let mut items = vec![
        PackingItem::new("T-shirts/tops", format!("{} days of wear", days)),
        PackingItem::new("Pants/shorts", format!("{} pairs", days.div_ceil(2))),
        PackingItem::new("Underwear", format!("{} pairs", days + 2)),
        PackingItem::new("Socks", format!("{} pairs", days)),
        PackingItem::new("Comfortable walking shoes", "Lots of walking activities"),
        PackingItem::new("Light jacket", "Weather changes"),
    ];

    let has_nature = itinerary
        .activities()
        .any(|a| a.category == ActivityCategory::Nature);
    if has_nature {
        items.push(PackingItem::new("Hiking boots", "Nature activities planned"));
        items.push(PackingItem::new("Rain jacket", "Outdoor protection"));
    }

    let has_swimming = itinerary.activities().any(|a| {
        let name = a.name.to_lowercase();
        name.contains("beach") || name.contains("pool")
    });
    if has_swimming {
        items.push(PackingItem::new("Swimwear", "Beach/pool activities"));
        items.push(PackingItem::new("Beach towel", "Swimming activities"));
    }

    items
}

fn activity_items(itinerary: &Itinerary) -> Vec<PackingItem> {
    let categories: HashSet<ActivityCategory> =
        itinerary.activities().map(|a| a.category).collect();
    let mut items = Vec::new();

    if categories.contains(&ActivityCategory::Culture) {
        items.push(PackingItem::new(
            "Modest clothing",
            "For visiting religious sites",
        ));
    }

    if categories.contains(&ActivityCategory::Nature) {
        items.push(PackingItem::new(
            "Backpack",
            "For hiking and outdoor activities",
        ));
        items.push(PackingItem::new("Water bottle", "Stay hydrated"));
    }

    if categories.contains(&ActivityCategory::Food) {
        items.push(PackingItem::new("Antacids", "In case of food sensitivity"));
    }

    items.push(PackingItem::new("Day bag", "For carrying essentials"));
    items.push(PackingItem::new(
        "Reusable shopping bag",
        "For purchases",
    ));

    items
}
