//! Data models for the trip wizard
//!
//! This module contains the domain models organized by concern:
//! - Attraction: catalog sights and their planned, toggleable form
//! - Transport / Hotel: bookable options and the traveler's preferences
//! - Itinerary: pace and day buckets
//! - Plan: the generated plan and its budget breakdown
//! - Form: wizard input and per-step validation

pub mod attraction;
pub mod form;
pub mod hotel;
pub mod itinerary;
pub mod plan;
pub mod transport;

// Re-export all public types for convenient access
pub use attraction::{Attraction, PlannedAttraction};
pub use form::{Flexibility, FormUpdate, TripFormData};
pub use hotel::{AccommodationKind, HotelOption, HotelQuality};
pub use itinerary::{DayItinerary, Pace};
pub use plan::{BudgetBreakdown, GeneratedPlan};
pub use transport::{TransportMode, TransportOption, TransportPreference};
