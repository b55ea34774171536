//! Greedy day packing of selected attractions
//!
//! Attractions are grouped by area (areas in first-seen order) and flattened
//! into one sequence. A single cursor walks that sequence across all days: an
//! attraction that does not fit the current day is dropped, never deferred.

use tracing::debug;

use crate::models::{Attraction, DayItinerary, Pace, PlannedAttraction};

/// Hours a day may overrun its pace budget before an attraction is rejected
pub const DAILY_SLACK_HOURS: f64 = 1.0;

/// Title used for a day without attractions
pub const REST_DAY_TITLE: &str = "Rest day";

/// Flatten attractions so that each area's attractions are contiguous
fn group_by_area(attractions: &[Attraction]) -> Vec<&Attraction> {
    let mut groups: Vec<(&str, Vec<&Attraction>)> = Vec::new();

    for attraction in attractions {
        match groups.iter_mut().find(|(area, _)| *area == attraction.area) {
            Some((_, members)) => members.push(attraction),
            None => groups.push((attraction.area.as_str(), vec![attraction])),
        }
    }

    groups.into_iter().flat_map(|(_, members)| members).collect()
}

fn day_title(day: u32, areas: &[&str]) -> String {
    if areas.is_empty() {
        format!("Day {day}: {REST_DAY_TITLE}")
    } else {
        let shown: Vec<&str> = areas.iter().take(2).copied().collect();
        format!("Day {day}: {}", shown.join(" & "))
    }
}

/// Pack `attractions` into `total_days` days at the given pace
#[must_use]
pub fn build_itinerary(attractions: &[Attraction], total_days: u32, pace: Pace) -> Vec<DayItinerary> {
    let max_hours = pace.max_hours_per_day();
    let sequence = group_by_area(attractions);
    let mut cursor = 0;
    let mut itinerary = Vec::new();

    for day in 1..=total_days.max(1) {
        let mut hours_used = 0.0;
        let mut planned = Vec::new();
        let mut areas: Vec<&str> = Vec::new();

        while hours_used < max_hours && cursor < sequence.len() {
            let attraction = sequence[cursor];
            if hours_used + attraction.duration_hours <= max_hours + DAILY_SLACK_HOURS {
                hours_used += attraction.duration_hours;
                if !areas.contains(&attraction.area.as_str()) {
                    areas.push(attraction.area.as_str());
                }
                planned.push(PlannedAttraction::included(attraction.clone()));
            }
            cursor += 1;
        }

        debug!(
            "Day {}: {} attractions, {:.1}h of {:.1}h",
            day,
            planned.len(),
            hours_used,
            max_hours
        );

        itinerary.push(DayItinerary {
            day,
            title: day_title(day, &areas),
            attractions: planned,
        });
    }

    itinerary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use std::collections::HashSet;

    fn attraction(id: &str, hours: f64, area: &str) -> Attraction {
        Attraction::new(id, id, hours, 10, area)
    }

    fn ids(day: &DayItinerary) -> Vec<&str> {
        day.attractions.iter().map(|a| a.attraction.id.as_str()).collect()
    }

    #[test]
    fn test_five_two_hour_attractions_balanced() {
        let attractions: Vec<Attraction> =
            (1..=5).map(|i| attraction(&format!("a{i}"), 2.0, "Eixample")).collect();

        let itinerary = build_itinerary(&attractions, 2, Pace::Balanced);

        assert_eq!(itinerary.len(), 2);
        assert_eq!(ids(&itinerary[0]), vec!["a1", "a2", "a3"]);
        assert_eq!(ids(&itinerary[1]), vec!["a4", "a5"]);
        assert!(itinerary.iter().flat_map(|d| &d.attractions).all(|a| a.included));
    }

    #[test]
    fn test_areas_grouped_in_first_seen_order() {
        let attractions = vec![
            attraction("a", 1.0, "North"),
            attraction("b", 1.0, "South"),
            attraction("c", 1.0, "North"),
            attraction("d", 1.0, "East"),
            attraction("e", 1.0, "South"),
        ];

        let itinerary = build_itinerary(&attractions, 1, Pace::Balanced);

        assert_eq!(ids(&itinerary[0]), vec!["a", "c", "b", "e", "d"]);
        assert_eq!(itinerary[0].title, "Day 1: North & South");
    }

    #[test]
    fn test_oversized_attraction_is_dropped_not_deferred() {
        let attractions = vec![
            attraction("a", 3.0, "X"),
            attraction("too-long", 4.5, "X"),
            attraction("b", 1.0, "X"),
        ];

        let itinerary = build_itinerary(&attractions, 2, Pace::Chill);

        // 3h + 4.5h exceeds 4h + 1h slack, so "too-long" is skipped
        assert_eq!(ids(&itinerary[0]), vec!["a", "b"]);
        assert!(itinerary[1].attractions.is_empty());
        assert_eq!(itinerary[1].title, "Day 2: Rest day");
    }

    #[test]
    fn test_slack_hour_allows_overrun() {
        let attractions = vec![attraction("a", 5.0, "X"), attraction("b", 2.0, "X")];

        let itinerary = build_itinerary(&attractions, 2, Pace::Chill);

        assert_eq!(ids(&itinerary[0]), vec!["a"]);
        assert_eq!(ids(&itinerary[1]), vec!["b"]);
    }

    #[test]
    fn test_always_produces_requested_days() {
        let itinerary = build_itinerary(&[], 3, Pace::Intensive);
        assert_eq!(itinerary.len(), 3);
        assert_eq!(
            itinerary.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        assert_eq!(build_itinerary(&[], 0, Pace::Chill).len(), 1);
    }

    #[test]
    fn test_no_attraction_on_two_days() {
        for pace in [Pace::Chill, Pace::Balanced, Pace::Intensive] {
            let itinerary = build_itinerary(dataset::attractions(), 5, pace);
            let all: Vec<&str> = itinerary.iter().flat_map(|d| ids(d)).collect();
            let unique: HashSet<&str> = all.iter().copied().collect();
            assert_eq!(all.len(), unique.len());
        }
    }

    #[test]
    fn test_title_lists_at_most_two_areas() {
        let attractions = vec![
            attraction("a", 1.0, "A"),
            attraction("b", 1.0, "B"),
            attraction("c", 1.0, "C"),
        ];
        let itinerary = build_itinerary(&attractions, 1, Pace::Balanced);
        assert_eq!(itinerary[0].title, "Day 1: A & B");
    }
}
