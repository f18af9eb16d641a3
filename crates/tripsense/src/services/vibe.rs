//! Vibe Score - Trip-level fit to the traveler's vibe profile
//!
//! A simple mean of the per-activity `vibeMatch` values the model
//! supplied, with a documented fallback when none are present. No
//! weighting by cost, duration, or day.

use crate::domain::Itinerary;

/// Returned when the itinerary has no days or no activity carries a
/// `vibeMatch` value.
pub const DEFAULT_VIBE_SCORE: u32 = 75;

/// Mean of all present activity `vibeMatch` values, rounded to the
/// nearest integer; [`DEFAULT_VIBE_SCORE`] when there are none.
pub fn vibe_score(itinerary: &Itinerary) -> u32 {
    let mut total = 0.0;
    let mut count = 0u32;

    for activity in itinerary.activities() {
        if let Some(vibe_match) = activity.vibe_match {
            total += vibe_match;
            count += 1;
        }
    }

    if count == 0 {
        return DEFAULT_VIBE_SCORE;
    }

    (total / count as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, DayPlan};

    fn itinerary_with_matches(matches: &[Option<f64>]) -> Itinerary {
        let activities = matches
            .iter()
            .map(|m| Activity {
                name: "Activity".to_string(),
                vibe_match: *m,
                ..Default::default()
            })
            .collect();
        Itinerary {
            days: vec![DayPlan {
                day: 1,
                activities,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn no_days_returns_default() {
        assert_eq!(vibe_score(&Itinerary::default()), DEFAULT_VIBE_SCORE);
    }

    #[test]
    fn no_matches_returns_default() {
        let itinerary = itinerary_with_matches(&[None, None]);
        assert_eq!(vibe_score(&itinerary), 75);
    }

    #[test]
    fn uniform_matches_return_that_value() {
        let itinerary = itinerary_with_matches(&[Some(90.0), Some(90.0), Some(90.0)]);
        assert_eq!(vibe_score(&itinerary), 90);
    }

    #[test]
    fn mean_is_rounded() {
        let itinerary = itinerary_with_matches(&[Some(80.0), Some(100.0)]);
        assert_eq!(vibe_score(&itinerary), 90);
    }

    #[test]
    fn activities_without_match_are_excluded_from_the_mean() {
        let itinerary = itinerary_with_matches(&[Some(60.0), None, Some(80.0)]);
        assert_eq!(vibe_score(&itinerary), 70);
    }

    #[test]
    fn spans_multiple_days() {
        let mut itinerary = itinerary_with_matches(&[Some(80.0)]);
        itinerary.days.push(DayPlan {
            day: 2,
            activities: vec![Activity {
                vibe_match: Some(100.0),
                ..Default::default()
            }],
            ..Default::default()
        });
        assert_eq!(vibe_score(&itinerary), 90);
    }
}
