//! Wizard form data collected across the three steps
//!
//! Step 1 picks where and when, step 2 what the traveler likes and how fast
//! they want to go, step 3 the money side. Each step validates its own slice
//! before the wizard moves on.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AccommodationKind, HotelQuality, Pace, TransportPreference};
use crate::{Result, TripWizardError};

pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 10;
pub const MIN_BUDGET: u32 = 500;
pub const MAX_BUDGET: u32 = 50_000;

/// Whether the travel dates may shift
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Flexibility {
    Strict,
    #[default]
    Flexible,
}

impl FromStr for Flexibility {
    type Err = TripWizardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Flexibility::Strict),
            "flexible" => Ok(Flexibility::Flexible),
            other => Err(TripWizardError::validation(format!(
                "Unknown flexibility '{other}'. Must be one of: strict, flexible"
            ))),
        }
    }
}

/// Everything the wizard asks the traveler
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripFormData {
    // Step 1: destination and dates
    pub destination: String,
    pub origin: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub flexibility: Flexibility,
    pub travelers: u32,

    // Step 2: interests
    pub interests: Vec<String>,
    pub pace: Pace,

    // Step 3: budget
    pub budget_min: u32,
    pub budget_max: u32,
    pub accommodation: AccommodationKind,
    pub hotel_quality: HotelQuality,
    pub transport_preference: TransportPreference,
}

impl Default for TripFormData {
    fn default() -> Self {
        Self {
            destination: "Barcelona".to_string(),
            origin: "Kraków".to_string(),
            start_date: None,
            end_date: None,
            flexibility: Flexibility::Flexible,
            travelers: 2,
            interests: vec![
                "food".to_string(),
                "architecture".to_string(),
                "relaxed".to_string(),
            ],
            pace: Pace::Balanced,
            budget_min: 3000,
            budget_max: 4000,
            accommodation: AccommodationKind::Any,
            hotel_quality: HotelQuality::Any,
            transport_preference: TransportPreference::BestValue,
        }
    }
}

/// Partial form update; only the fields that are set are applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormUpdate {
    pub destination: Option<String>,
    pub origin: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub flexibility: Option<Flexibility>,
    pub travelers: Option<u32>,
    pub interests: Option<Vec<String>>,
    pub pace: Option<Pace>,
    pub budget_min: Option<u32>,
    pub budget_max: Option<u32>,
    pub accommodation: Option<AccommodationKind>,
    pub hotel_quality: Option<HotelQuality>,
    pub transport_preference: Option<TransportPreference>,
}

impl TripFormData {
    /// Merge a partial update into the form
    pub fn apply(&mut self, update: FormUpdate) {
        if let Some(v) = update.destination {
            self.destination = v;
        }
        if let Some(v) = update.origin {
            self.origin = v;
        }
        if let Some(v) = update.start_date {
            self.start_date = Some(v);
        }
        if let Some(v) = update.end_date {
            self.end_date = Some(v);
        }
        if let Some(v) = update.flexibility {
            self.flexibility = v;
        }
        if let Some(v) = update.travelers {
            self.travelers = v;
        }
        if let Some(v) = update.interests {
            self.interests = v;
        }
        if let Some(v) = update.pace {
            self.pace = v;
        }
        if let Some(v) = update.budget_min {
            self.budget_min = v;
        }
        if let Some(v) = update.budget_max {
            self.budget_max = v;
        }
        if let Some(v) = update.accommodation {
            self.accommodation = v;
        }
        if let Some(v) = update.hotel_quality {
            self.hotel_quality = v;
        }
        if let Some(v) = update.transport_preference {
            self.transport_preference = v;
        }
    }

    /// Step 1: destination, origin, dates and group size
    pub fn validate_trip(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(TripWizardError::validation("Destination is required"));
        }
        if self.origin.trim().is_empty() {
            return Err(TripWizardError::validation("Origin is required"));
        }
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(TripWizardError::validation(
                "Both start and end date are required",
            ));
        };
        if end < start {
            return Err(TripWizardError::validation(format!(
                "End date {end} is before start date {start}"
            )));
        }
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(TripWizardError::validation(format!(
                "Travelers must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}, got {}",
                self.travelers
            )));
        }
        Ok(())
    }

    /// Step 2: at least one interest
    pub fn validate_interests(&self) -> Result<()> {
        if self.interests.is_empty() {
            return Err(TripWizardError::validation(
                "Select at least one interest",
            ));
        }
        Ok(())
    }

    /// Step 3: budget range
    pub fn validate_budget(&self) -> Result<()> {
        if self.budget_min < MIN_BUDGET {
            return Err(TripWizardError::validation(format!(
                "Minimum budget must be at least {MIN_BUDGET} PLN"
            )));
        }
        if self.budget_max > MAX_BUDGET {
            return Err(TripWizardError::validation(format!(
                "Maximum budget cannot exceed {MAX_BUDGET} PLN"
            )));
        }
        if self.budget_min > self.budget_max {
            return Err(TripWizardError::validation(format!(
                "Minimum budget {} is above maximum budget {}",
                self.budget_min, self.budget_max
            )));
        }
        Ok(())
    }

    /// All three steps, in wizard order
    pub fn validate(&self) -> Result<()> {
        self.validate_trip()?;
        self.validate_interests()?;
        self.validate_budget()
    }
}
