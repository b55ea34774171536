//! Generated plan and budget breakdown

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayItinerary, HotelOption, PlannedAttraction, TransportOption};

/// Cost of a trip split into its four components, in PLN
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetBreakdown {
    pub transport: u32,
    pub accommodation: u32,
    pub attractions: u32,
    pub food: u32,
    /// Always the sum of the four components
    pub total: u32,
}

impl BudgetBreakdown {
    #[must_use]
    pub fn new(transport: u32, accommodation: u32, attractions: u32, food: u32) -> Self {
        Self {
            transport,
            accommodation,
            attractions,
            food,
            total: transport
                .saturating_add(accommodation)
                .saturating_add(attractions)
                .saturating_add(food),
        }
    }

    /// Replace the attractions subtotal and recompute the total
    #[must_use]
    pub fn with_attractions(&self, attractions: u32) -> Self {
        Self::new(self.transport, self.accommodation, attractions, self.food)
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        *self == Self::new(self.transport, self.accommodation, self.attractions, self.food)
    }
}

impl Display for BudgetBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "💰 Budget")?;
        writeln!(f, "   Transport:     {:>7} PLN", self.transport)?;
        writeln!(f, "   Accommodation: {:>7} PLN", self.accommodation)?;
        writeln!(f, "   Attractions:   {:>7} PLN", self.attractions)?;
        writeln!(f, "   Food:          {:>7} PLN", self.food)?;
        writeln!(f, "   Total:         {:>7} PLN", self.total)
    }
}

/// The result of one plan generation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub destination: String,
    pub origin: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub transport: TransportOption,
    pub hotel: HotelOption,
    pub itinerary: Vec<DayItinerary>,
    pub total_budget: BudgetBreakdown,
}

impl GeneratedPlan {
    /// Nights between start and end, never negative
    #[must_use]
    pub fn nights(&self) -> u32 {
        u32::try_from((self.end_date - self.start_date).num_days()).unwrap_or(0)
    }

    /// Find an attraction in a day by its 0-based index and attraction id
    #[must_use]
    pub fn find_attraction(
        &self,
        day_index: usize,
        attraction_id: &str,
    ) -> Option<&PlannedAttraction> {
        self.itinerary
            .get(day_index)?
            .attractions
            .iter()
            .find(|a| a.attraction.id == attraction_id)
    }
}

impl Display for GeneratedPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "🗺️ {} → {}, {} - {} ({} nights, {} travelers)",
            self.origin,
            self.destination,
            self.start_date,
            self.end_date,
            self.nights(),
            self.travelers
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.transport)?;
        writeln!(f, "{}", self.hotel)?;
        writeln!(f)?;
        for day in &self.itinerary {
            write!(f, "{day}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.total_budget)
    }
}
