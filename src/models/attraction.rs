//! Attraction model for sights and activities at a destination

use serde::{Deserialize, Serialize};

/// A sight or activity from the reference catalog
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    /// Stable identifier (e.g. "sagrada-familia")
    pub id: String,
    pub name: String,
    pub description: String,
    /// Visit duration in hours
    pub duration_hours: f64,
    /// Price per person in PLN
    pub price: u32,
    /// Neighbourhood used to group nearby attractions
    pub area: String,
    /// Interest tags (food, architecture, museums, ...)
    pub tags: Vec<String>,
}

impl Attraction {
    /// Create an attraction without tags
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration_hours: f64,
        price: u32,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            duration_hours,
            price,
            area: area.into(),
            tags: Vec::new(),
        }
    }

    /// Builder-style setter for the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style setter for the interest tags
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Whether any of this attraction's tags is in `interests`
    #[must_use]
    pub fn matches_any(&self, interests: &[String]) -> bool {
        self.tags.iter().any(|tag| interests.contains(tag))
    }
}

/// An attraction placed in a plan, with its inclusion flag
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlannedAttraction {
    pub attraction: Attraction,
    /// Whether the attraction counts toward the itinerary and the budget
    pub included: bool,
}

impl PlannedAttraction {
    #[must_use]
    pub fn included(attraction: Attraction) -> Self {
        Self {
            attraction,
            included: true,
        }
    }

    /// Cost of this entry for the whole group, zero when excluded
    #[must_use]
    pub fn cost_for(&self, travelers: u32) -> u32 {
        if self.included {
            self.attraction.price.saturating_mul(travelers)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_interest() {
        let attraction =
            Attraction::new("park-guell", "Park Güell", 2.0, 45, "Gràcia").with_tags(&[
                "architecture",
                "nature",
            ]);

        assert!(attraction.matches_any(&["nature".to_string()]));
        assert!(!attraction.matches_any(&["food".to_string(), "nightlife".to_string()]));
        assert!(!attraction.matches_any(&[]));
    }

    #[test]
    fn test_cost_respects_inclusion() {
        let mut planned =
            PlannedAttraction::included(Attraction::new("camp-nou", "Camp Nou Tour", 2.0, 100, "Les Corts"));
        assert_eq!(planned.cost_for(3), 300);

        planned.included = false;
        assert_eq!(planned.cost_for(3), 0);
    }
}
