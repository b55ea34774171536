//! Day-by-day itinerary model

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TripWizardError;
use crate::models::PlannedAttraction;

/// How packed each day should be
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Chill,
    #[default]
    Balanced,
    Intensive,
}

impl Pace {
    /// Attraction hours allowed per day
    #[must_use]
    pub fn max_hours_per_day(&self) -> f64 {
        match self {
            Pace::Chill => 4.0,
            Pace::Balanced => 6.0,
            Pace::Intensive => 8.0,
        }
    }
}

impl FromStr for Pace {
    type Err = TripWizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chill" => Ok(Pace::Chill),
            "balanced" => Ok(Pace::Balanced),
            "intensive" => Ok(Pace::Intensive),
            other => Err(TripWizardError::validation(format!(
                "Unknown pace '{other}'. Must be one of: chill, balanced, intensive"
            ))),
        }
    }
}

/// Attractions planned for a single day of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayItinerary {
    /// 1-based day number
    pub day: u32,
    /// Title such as "Day 2: Eixample & Gràcia"
    pub title: String,
    pub attractions: Vec<PlannedAttraction>,
}

impl DayItinerary {
    /// Hours of included attractions on this day
    #[must_use]
    pub fn included_hours(&self) -> f64 {
        self.attractions
            .iter()
            .filter(|a| a.included)
            .map(|a| a.attraction.duration_hours)
            .sum()
    }
}

impl Display for DayItinerary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "📅 {}", self.title)?;
        for planned in &self.attractions {
            let mark = if planned.included { "[x]" } else { "[ ]" };
            let a = &planned.attraction;
            writeln!(
                f,
                "   {mark} {} ({}) {}h, {} PLN  [{}]",
                a.name, a.area, a.duration_hours, a.price, a.id
            )?;
        }
        Ok(())
    }
}
