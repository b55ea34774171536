//! Candidate selection over the static catalog
//!
//! None of these functions fail. When a filter leaves nothing behind, the
//! caller gets the unfiltered data instead of an empty list.

use tracing::{debug, warn};

use crate::dataset;
use crate::models::{AccommodationKind, Attraction, HotelOption, HotelQuality, TransportOption, TransportPreference};

/// How many catalog attractions stand in for a destination without data
pub const FALLBACK_ATTRACTION_COUNT: usize = 8;

/// Total trip budget the traveler is willing to spend on accommodation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `price_per_night` lies in the per-night share of this range
    #[must_use]
    pub fn admits_nightly(&self, price_per_night: u32, nights: u32) -> bool {
        let nights = f64::from(nights);
        let price = f64::from(price_per_night);
        price >= f64::from(self.min) / nights && price <= f64::from(self.max) / nights
    }
}

/// Attractions for `destination` that match any of `interests`
#[must_use]
pub fn select_attractions(destination: &str, interests: &[String]) -> Vec<Attraction> {
    let catalog = dataset::attractions();

    if !dataset::is_supported_destination(destination) {
        warn!(
            "No attraction data for {}, using {} sample attractions",
            destination, FALLBACK_ATTRACTION_COUNT
        );
        return catalog.iter().take(FALLBACK_ATTRACTION_COUNT).cloned().collect();
    }

    if interests.is_empty() {
        return catalog.to_vec();
    }

    let matching: Vec<Attraction> = catalog
        .iter()
        .filter(|a| a.matches_any(interests))
        .cloned()
        .collect();

    if matching.is_empty() {
        debug!("No attraction matches {:?}, using full catalog", interests);
        return catalog.to_vec();
    }

    debug!(
        "Selected {} of {} attractions for {:?}",
        matching.len(),
        catalog.len(),
        interests
    );
    matching
}

/// Transport options with the preferred one first
#[must_use]
pub fn select_transport(preference: TransportPreference) -> Vec<TransportOption> {
    let mut options = dataset::transport_options().to_vec();
    // stable: non-matching options keep catalog order
    options.sort_by_key(|t| t.preference != preference);
    options
}

/// Hotels matching kind, quality and budget, cheapest first
#[must_use]
pub fn select_hotels(
    nights: u32,
    budget: BudgetRange,
    quality: HotelQuality,
    kind: AccommodationKind,
) -> Vec<HotelOption> {
    let catalog = dataset::hotel_options();

    let mut filtered: Vec<HotelOption> = catalog
        .iter()
        .map(|h| h.with_nights(nights))
        .filter(|h| h.is_kind(kind))
        .filter(|h| quality.min_rating().is_none_or(|min| h.rating >= min))
        .filter(|h| budget.admits_nightly(h.price_per_night, nights))
        .collect();

    if filtered.is_empty() {
        debug!(
            "No hotel matches {:?}/{:?} within {}-{} PLN for {} nights, offering all",
            kind, quality, budget.min, budget.max, nights
        );
        return catalog.iter().map(|h| h.with_nights(nights)).collect();
    }

    filtered.sort_by_key(|h| h.price_per_night);
    filtered
}
