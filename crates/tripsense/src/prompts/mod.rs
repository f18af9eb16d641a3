//! Prompt Builders
//!
//! Pure functions that render trip context into the natural-language
//! instructions sent to the provider, each with a literal example of the
//! JSON shape the model must return. No I/O, no randomness: the same
//! input always yields the same prompt text.
//!
//! Callers are responsible for validating input first
//! ([`TravelPreferences::validate`]); these builders assume it is valid.

use serde_json::Value;

use crate::domain::{TravelPreferences, VibeProfile};

/// Render a prompt that asks for a brand-new itinerary.
pub fn generate_itinerary_prompt(preferences: &TravelPreferences) -> String {
    let days = preferences.duration_days();
    let travelers = preferences.travelers;
    let traveler_noun = if travelers > 1 { "travelers" } else { "traveler" };
    let person_noun = if travelers > 1 { "persons" } else { "person" };
    let vibe_description = vibe_description(&preferences.vibe);

    format!(
        r#"You are an expert travel planner AI. Create a detailed, personalized {days}-day itinerary for {destination}.

**Trip Details:**
- Destination: {destination}
- Dates: {start_long} to {end_long} ({days} days)
- Budget: {budget} {currency} (total for {travelers} {traveler_noun})
- Travelers: {travelers} {person_noun}
- Pace: {pace}

**Traveler Personality (Vibe Profile):**
{vibe_description}

**Requirements:**
1. Create a day-by-day itinerary with 3-5 activities per day
2. Balance energy levels throughout the trip (don't exhaust travelers!)
3. Include specific locations with addresses
4. Provide realistic time estimates and costs for each activity
5. Match activities to the traveler's vibe profile
6. Include meal recommendations (breakfast, lunch, dinner)
7. Add transportation between activities
8. Stay within the budget
9. Include local, authentic experiences (avoid pure tourist traps)
10. Add practical tips and insider knowledge

**For each activity, provide:**
- Name of the place/activity
- Detailed description (2-3 sentences)
- Full address with city
- Approximate coordinates (latitude, longitude)
- Start time and duration
- Cost per person (be realistic!)
- Category (attraction, food, transport, accommodation, entertainment, shopping, nature, culture, relaxation)
- Energy level required (low/medium/high)
- Vibe match score (0-100, how well it matches their personality)
- 2-3 insider tips
- Whether booking is required

**For each day, provide:**
- A theme or focus for the day
- Overall energy level (chill/balanced/intense)
- Total estimated cost for the day

**Return ONLY valid JSON in this exact format:**
{{
  "destination": "{destination}",
  "days": [
    {{
      "day": 1,
      "date": "{start_iso}",
      "theme": "Day theme here",
      "energyLevel": "balanced",
      "activities": [
        {{
          "name": "Activity name",
          "description": "Detailed description",
          "location": {{
            "lat": 0.0,
            "lng": 0.0,
            "address": "Full address",
            "city": "{destination}",
            "country": "Country name"
          }},
          "startTime": "09:00",
          "endTime": "11:00",
          "duration": 120,
          "cost": 0,
          "currency": "{currency}",
          "category": "attraction",
          "bookingRequired": false,
          "energyLevel": "medium",
          "vibeMatch": 85,
          "tips": ["Tip 1", "Tip 2"]
        }}
      ],
      "totalCost": 0
    }}
  ],
  "highlights": ["Unique highlight 1", "Unique highlight 2", "Unique highlight 3"],
  "totalCost": 0
}}

Make this itinerary special, personal, and memorable!"#,
        days = days,
        destination = preferences.destination,
        start_long = preferences.start_date.format("%b %d, %Y"),
        end_long = preferences.end_date.format("%b %d, %Y"),
        start_iso = preferences.start_date.format("%Y-%m-%d"),
        budget = preferences.budget,
        currency = preferences.currency,
        travelers = travelers,
        traveler_noun = traveler_noun,
        person_noun = person_noun,
        pace = preferences.pace,
        vibe_description = vibe_description,
    )
}

/// Render a prompt that asks for a complete replacement of an existing
/// itinerary, applying a free-text change request.
///
/// The current itinerary is embedded verbatim as JSON context and the
/// model is instructed to keep the destination and overall structure
/// intact - the response is a whole-resource replacement, not a patch.
pub fn modify_itinerary_prompt(current_itinerary: &Value, change_description: &str) -> String {
    let destination = current_itinerary
        .get("destination")
        .and_then(Value::as_str)
        .unwrap_or("");
    let context = to_pretty_json(current_itinerary);

    format!(
        r#"You are an expert travel planner AI. The traveler has requested changes to their itinerary.

**Current Itinerary:**
{context}

**Requested Changes:**
"{change_description}"

**Your Task:**
Modify the itinerary based on the traveler's request. Be intelligent about:
1. Understanding what they want (add activities, remove activities, change timing, swap locations, adjust pace, etc.)
2. Maintaining consistency (keep activities in logical order, respect time constraints)
3. Preserving the overall vibe and personality match
4. Keeping costs reasonable unless they explicitly ask for budget changes
5. Only modifying what's necessary - keep good activities that aren't affected
6. Adding realistic details for any new activities (locations, times, costs, tips)

**Important Guidelines:**
- If they want to add something, find the best day/time slot for it
- If they want to remove something, suggest what to do with the freed time
- If they want to change pace, adjust duration and number of activities
- If they want different types of activities, swap similar-category items
- If they mention specific places/experiences, incorporate them properly
- Keep all the JSON structure and fields intact

**Return the COMPLETE modified itinerary in this exact JSON format:**
{{
  "destination": "{destination}",
  "days": [
    {{
      "day": 1,
      "date": "YYYY-MM-DD",
      "theme": "Day theme",
      "energyLevel": "balanced",
      "activities": [
        {{
          "name": "Activity name",
          "description": "Detailed description",
          "location": {{
            "lat": 0.0,
            "lng": 0.0,
            "address": "Full address",
            "city": "City",
            "country": "Country"
          }},
          "startTime": "HH:MM",
          "endTime": "HH:MM",
          "duration": 120,
          "cost": 0,
          "currency": "USD",
          "category": "attraction",
          "bookingRequired": false,
          "energyLevel": "medium",
          "vibeMatch": 85,
          "tips": ["Tip 1", "Tip 2"]
        }}
      ],
      "totalCost": 0
    }}
  ],
  "highlights": ["Highlight 1", "Highlight 2", "Highlight 3"],
  "totalCost": 0
}}

Make the changes thoughtfully and maintain a high-quality, personalized travel experience!"#,
    )
}

/// Render a prompt that asks for a cost-reduced version of an itinerary.
pub fn optimize_budget_prompt(current_itinerary: &Value, target_budget: f64) -> String {
    let total_cost = current_itinerary
        .get("totalCost")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let context = to_pretty_json(current_itinerary);

    format!(
        r#"You are a budget optimization AI. The traveler has an itinerary that costs {total_cost} but wants to reduce it to {target_budget}.

**Current Itinerary:**
{context}

**Task:**
Optimize the itinerary to meet the target budget while:
1. Maintaining the same overall experience quality
2. Keeping the most important activities
3. Finding cheaper alternatives for expensive items
4. Suggesting free or low-cost alternatives
5. Maintaining the vibe and personality match

**Return JSON with:**
{{
  "optimizedItinerary": {{ /* modified itinerary */ }},
  "savings": 0,
  "changes": [
    {{
      "original": "Original activity name",
      "replacement": "New activity name",
      "savedAmount": 0,
      "reason": "Why this change makes sense"
    }}
  ],
  "savingsTips": ["Tip 1", "Tip 2"]
}}"#,
    )
}

/// Render a prompt that asks for alternative ("Plan B") activities when one
/// becomes unviable.
pub fn plan_b_prompt(activity: &Value, reason: &str) -> String {
    let context = to_pretty_json(activity);

    format!(
        r#"Generate 2-3 alternative activities for this situation:

**Original Activity:**
{context}

**Reason for change:** {reason}

**Requirements:**
- Provide activities that can happen at the same time slot
- Keep similar vibe and energy level
- Stay in same location/area if possible
- Match or be cheaper than original cost
- Explain why each alternative is good

**Return JSON:**
{{
  "alternatives": [
    {{
      "name": "Alternative activity",
      "description": "Description",
      "location": {{ /* same format */ }},
      "startTime": "same time",
      "duration": 0,
      "cost": 0,
      "category": "category",
      "energyLevel": "level",
      "vibeMatch": 0,
      "tips": []
    }}
  ],
  "explanation": "Why these alternatives work well"
}}"#,
    )
}

/// Render a prompt that asks for a trip-specific packing list.
///
/// The core packing path is the deterministic generator in
/// [`crate::services::build_packing_list`]; this builder exists for
/// clients that want a model-authored list instead.
pub fn packing_list_prompt(itinerary: &Value) -> String {
    let context = to_pretty_json(itinerary);

    format!(
        r#"Generate a smart, personalized packing list for this trip:

**Itinerary:**
{context}

**Create a packing list with:**
1. Clothing (based on activities and trip length)
2. Electronics (cameras, chargers, adapters)
3. Documents (passport, tickets, insurance)
4. Toiletries
5. Activity-specific items (hiking gear, swimwear, etc.)
6. Medicine and first aid
7. Miscellaneous

**For each item, explain why it's needed based on the itinerary.**

**Return JSON:**
{{
  "categories": [
    {{
      "name": "Category name",
      "essential": true,
      "items": [
        {{
          "name": "Item name",
          "quantity": 1,
          "reason": "Why this is needed for this specific trip",
          "checked": false
        }}
      ]
    }}
  ]
}}"#,
    )
}

/// Map the six numeric traits to qualitative descriptors using fixed
/// thresholds (>= 70 high, 40-69 moderate, otherwise low/opposite).
fn vibe_description(vibe: &VibeProfile) -> String {
    let mut traits = Vec::new();

    if vibe.adventure >= 70 {
        traits.push("Highly adventurous (loves thrills and new experiences)");
    } else if vibe.adventure >= 40 {
        traits.push("Moderately adventurous (open to some excitement)");
    } else {
        traits.push("Prefers safe, familiar experiences");
    }

    if vibe.culture >= 70 {
        traits.push("Culture enthusiast (museums, history, local traditions)");
    } else if vibe.culture >= 40 {
        traits.push("Some interest in cultural activities");
    }

    if vibe.relaxation >= 70 {
        traits.push("Values relaxation and downtime");
    } else if vibe.relaxation <= 30 {
        traits.push("Prefers packed schedules");
    }

    if vibe.foodie >= 70 {
        traits.push("Passionate foodie (wants authentic local cuisine)");
    } else if vibe.foodie >= 40 {
        traits.push("Enjoys good food but not the main focus");
    }

    if vibe.nightlife >= 70 {
        traits.push("Loves nightlife and evening entertainment");
    } else if vibe.nightlife <= 30 {
        traits.push("Prefers quiet evenings");
    }

    if vibe.nature >= 70 {
        traits.push("Nature lover (parks, hiking, outdoor activities)");
    } else if vibe.nature <= 30 {
        traits.push("Prefers urban environments");
    }

    traits
        .iter()
        .map(|t| format!("- {}", t))
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pace;
    use serde_json::json;

    fn paris_preferences() -> TravelPreferences {
        TravelPreferences {
            destination: "Paris".to_string(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-06-03".parse().unwrap(),
            budget: 3000.0,
            currency: "USD".to_string(),
            travelers: 2,
            pace: Pace::Moderate,
            vibe: VibeProfile {
                adventure: 80,
                culture: 70,
                relaxation: 30,
                foodie: 90,
                nightlife: 40,
                nature: 20,
            },
        }
    }

    #[test]
    fn generate_prompt_is_deterministic() {
        let preferences = paris_preferences();
        assert_eq!(
            generate_itinerary_prompt(&preferences),
            generate_itinerary_prompt(&preferences)
        );
    }

    #[test]
    fn generate_prompt_interpolates_trip_parameters() {
        let prompt = generate_itinerary_prompt(&paris_preferences());
        assert!(prompt.contains("Paris"));
        assert!(prompt.contains("3000"));
        assert!(prompt.contains("Travelers: 2 persons"));
        assert!(prompt.contains("3-day itinerary"));
        assert!(prompt.contains("Jun 01, 2025"));
        assert!(prompt.contains("\"date\": \"2025-06-01\""));
    }

    #[test]
    fn generate_prompt_singular_traveler() {
        let mut preferences = paris_preferences();
        preferences.travelers = 1;
        let prompt = generate_itinerary_prompt(&preferences);
        assert!(prompt.contains("Travelers: 1 person\n"));
        assert!(prompt.contains("for 1 traveler)"));
    }

    #[test]
    fn vibe_narrative_uses_fixed_thresholds() {
        let prompt = generate_itinerary_prompt(&paris_preferences());
        // adventure 80 -> high, relaxation 30 -> opposite, nightlife 40 -> no line,
        // nature 20 -> opposite
        assert!(prompt.contains("- Highly adventurous"));
        assert!(prompt.contains("- Culture enthusiast"));
        assert!(prompt.contains("- Prefers packed schedules"));
        assert!(prompt.contains("- Passionate foodie"));
        assert!(!prompt.contains("nightlife"));
        assert!(prompt.contains("- Prefers urban environments"));
    }

    #[test]
    fn modify_prompt_pins_the_destination() {
        let current = json!({"destination": "Kyoto", "days": [], "totalCost": 1200});
        let prompt = modify_itinerary_prompt(&current, "add a tea ceremony");
        assert!(prompt.contains("\"destination\": \"Kyoto\""));
        assert!(prompt.contains("add a tea ceremony"));
        assert!(prompt.contains("COMPLETE modified itinerary"));
    }

    #[test]
    fn optimize_prompt_carries_current_and_target_cost() {
        let current = json!({"destination": "Kyoto", "totalCost": 1200.0});
        let prompt = optimize_budget_prompt(&current, 800.0);
        assert!(prompt.contains("costs 1200"));
        assert!(prompt.contains("reduce it to 800"));
    }

    #[test]
    fn plan_b_prompt_embeds_activity_and_reason() {
        let activity = json!({"name": "Louvre", "cost": 22});
        let prompt = plan_b_prompt(&activity, "closed for renovation");
        assert!(prompt.contains("Louvre"));
        assert!(prompt.contains("closed for renovation"));
    }
}
