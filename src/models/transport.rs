//! Transport option model

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TripWizardError;

/// How the traveler gets to the destination
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Bus,
    Train,
}

/// Which transport option the traveler wants ranked first
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransportPreference {
    Cheapest,
    Fastest,
    #[default]
    BestValue,
}

impl TransportPreference {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TransportPreference::Cheapest => "cheapest",
            TransportPreference::Fastest => "fastest",
            TransportPreference::BestValue => "best-value",
        }
    }
}

impl Display for TransportPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransportPreference {
    type Err = TripWizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cheapest" => Ok(TransportPreference::Cheapest),
            "fastest" => Ok(TransportPreference::Fastest),
            "best-value" | "best_value" | "bestvalue" => Ok(TransportPreference::BestValue),
            other => Err(TripWizardError::validation(format!(
                "Unknown transport preference '{other}'. Must be one of: cheapest, fastest, best-value"
            ))),
        }
    }
}

/// A bookable connection from the origin to the destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransportOption {
    pub id: String,
    pub mode: TransportMode,
    pub carrier: String,
    /// Local departure time, "HH:MM"
    pub departure_time: String,
    /// Local arrival time, "HH:MM"
    pub arrival_time: String,
    /// Human readable duration (e.g. "3h 15m")
    pub duration: String,
    /// One-way price per person in PLN
    pub price: u32,
    pub preference: TransportPreference,
}

impl Display for TransportOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.mode {
            TransportMode::Flight => "✈️",
            TransportMode::Bus => "🚌",
            TransportMode::Train => "🚆",
        };
        write!(
            f,
            "{icon} {} {} - {} ({}), {} PLN/person",
            self.carrier, self.departure_time, self.arrival_time, self.duration, self.price
        )
    }
}
