//! Accommodation model

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TripWizardError;

/// Kind of accommodation the traveler asked for
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationKind {
    Apartment,
    Hotel,
    #[default]
    Any,
}

impl FromStr for AccommodationKind {
    type Err = TripWizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apartment" => Ok(AccommodationKind::Apartment),
            "hotel" => Ok(AccommodationKind::Hotel),
            "any" => Ok(AccommodationKind::Any),
            other => Err(TripWizardError::validation(format!(
                "Unknown accommodation type '{other}'. Must be one of: apartment, hotel, any"
            ))),
        }
    }
}

/// Minimum star rating the traveler accepts
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotelQuality {
    #[serde(rename = "3")]
    ThreeStars,
    #[serde(rename = "4")]
    FourStars,
    #[serde(rename = "5")]
    FiveStars,
    #[default]
    #[serde(rename = "any")]
    Any,
}

impl HotelQuality {
    /// Minimum rating, `None` for no constraint
    #[must_use]
    pub fn min_rating(&self) -> Option<u8> {
        match self {
            HotelQuality::ThreeStars => Some(3),
            HotelQuality::FourStars => Some(4),
            HotelQuality::FiveStars => Some(5),
            HotelQuality::Any => None,
        }
    }
}

impl FromStr for HotelQuality {
    type Err = TripWizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "3" => Ok(HotelQuality::ThreeStars),
            "4" => Ok(HotelQuality::FourStars),
            "5" => Ok(HotelQuality::FiveStars),
            "any" => Ok(HotelQuality::Any),
            other => Err(TripWizardError::validation(format!(
                "Unknown hotel quality '{other}'. Must be one of: 3, 4, 5, any"
            ))),
        }
    }
}

/// A place to stay at the destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelOption {
    pub id: String,
    pub name: String,
    pub area: String,
    /// Star rating, 1-5
    pub rating: u8,
    /// Price per night for the room in PLN
    pub price_per_night: u32,
    /// Price for the whole stay; derived, see [`HotelOption::with_nights`]
    pub total_price: u32,
    pub amenities: Vec<String>,
}

impl HotelOption {
    /// Copy of this option with the total price computed for `nights`
    #[must_use]
    pub fn with_nights(&self, nights: u32) -> Self {
        Self {
            total_price: self.price_per_night.saturating_mul(nights),
            ..self.clone()
        }
    }

    /// Name-based classification; the catalog has no accommodation type field.
    #[must_use]
    pub fn is_apartment(&self) -> bool {
        self.name.contains("Apartment") || self.name.contains("Loft")
    }

    /// Name-based classification, see [`HotelOption::is_apartment`].
    #[must_use]
    pub fn is_hotel(&self) -> bool {
        self.name.contains("Hotel") || self.name.contains("Generator")
    }

    #[must_use]
    pub fn is_kind(&self, kind: AccommodationKind) -> bool {
        match kind {
            AccommodationKind::Apartment => self.is_apartment(),
            AccommodationKind::Hotel => self.is_hotel(),
            AccommodationKind::Any => true,
        }
    }
}

impl Display for HotelOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "🏨 {} ({}) {} - {} PLN/night, {} PLN total",
            self.name,
            self.area,
            "★".repeat(self.rating as usize),
            self.price_per_night,
            self.total_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(name: &str) -> HotelOption {
        HotelOption {
            id: "h".to_string(),
            name: name.to_string(),
            area: "Eixample".to_string(),
            rating: 4,
            price_per_night: 450,
            total_price: 0,
            amenities: vec![],
        }
    }

    #[test]
    fn test_total_price_for_stay() {
        let stay = hotel("Hotel Jazz").with_nights(4);
        assert_eq!(stay.total_price, 1800);
        assert_eq!(stay.price_per_night, 450);
    }

    #[test]
    fn test_kind_heuristic() {
        assert!(hotel("El Born Loft").is_kind(AccommodationKind::Apartment));
        assert!(hotel("Generator Barcelona").is_kind(AccommodationKind::Hotel));
        assert!(!hotel("Generator Barcelona").is_kind(AccommodationKind::Apartment));
        assert!(hotel("Anything").is_kind(AccommodationKind::Any));
    }

    #[test]
    fn test_quality_parsing() {
        assert_eq!("4".parse::<HotelQuality>().unwrap().min_rating(), Some(4));
        assert_eq!("ANY".parse::<HotelQuality>().unwrap().min_rating(), None);
        assert!("6".parse::<HotelQuality>().is_err());
    }
}
