//! Static reference catalog
//!
//! Attractions, transport and hotels for the one destination with curated
//! data (Barcelona), plus the lists the wizard offers as suggestions. Built
//! once per process and never mutated.

use std::sync::LazyLock;

use crate::models::{Attraction, HotelOption, TransportMode, TransportOption, TransportPreference};

/// Destination whose catalog is complete
pub const SUPPORTED_DESTINATION: &str = "Barcelona";

pub const DESTINATIONS: &[&str] = &[
    "Barcelona",
    "Rome",
    "Paris",
    "Lisbon",
    "Prague",
    "Amsterdam",
    "Vienna",
    "Berlin",
];

pub const ORIGINS: &[&str] = &["Kraków", "Warsaw", "Berlin", "Vienna", "Prague"];

/// Interest tag offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const INTERESTS: &[Interest] = &[
    Interest { id: "food", label: "Food", icon: "🍽️" },
    Interest { id: "architecture", label: "Architecture", icon: "🏛️" },
    Interest { id: "museums", label: "Museums", icon: "🎨" },
    Interest { id: "relaxed", label: "Relaxed pace", icon: "🧘" },
    Interest { id: "nightlife", label: "Nightlife", icon: "🎉" },
    Interest { id: "nature", label: "Nature", icon: "🌿" },
];

static BARCELONA_ATTRACTIONS: LazyLock<Vec<Attraction>> = LazyLock::new(|| {
    vec![
        Attraction::new("sagrada-familia", "Sagrada Família", 2.5, 95, "Eixample")
            .with_description("Gaudí's iconic unfinished basilica")
            .with_tags(&["architecture", "museums"]),
        Attraction::new("park-guell", "Park Güell", 2.0, 45, "Gràcia")
            .with_description("Colorful mosaic park by Gaudí")
            .with_tags(&["architecture", "nature"]),
        Attraction::new("la-boqueria", "La Boqueria Market", 1.5, 0, "Gothic Quarter")
            .with_description("Famous food market on La Rambla")
            .with_tags(&["food"]),
        Attraction::new("casa-batllo", "Casa Batlló", 1.5, 140, "Eixample")
            .with_description("Gaudí's masterpiece on Passeig de Gràcia")
            .with_tags(&["architecture"]),
        Attraction::new("gothic-quarter", "Gothic Quarter Walk", 2.0, 0, "Gothic Quarter")
            .with_description("Medieval streets and hidden squares")
            .with_tags(&["architecture", "relaxed"]),
        Attraction::new("barceloneta", "Barceloneta Beach", 3.0, 0, "Barceloneta")
            .with_description("City beach with seafood restaurants")
            .with_tags(&["nature", "relaxed", "food"]),
        Attraction::new("picasso-museum", "Picasso Museum", 2.0, 55, "El Born")
            .with_description("Extensive collection of Picasso's early works")
            .with_tags(&["museums"]),
        Attraction::new("el-born", "El Born District", 2.5, 0, "El Born")
            .with_description("Trendy bars, boutiques and tapas spots")
            .with_tags(&["food", "nightlife"]),
        Attraction::new("montjuic", "Montjuïc Hill", 3.0, 30, "Montjuïc")
            .with_description("Castle, gardens and panoramic views")
            .with_tags(&["nature", "architecture"]),
        Attraction::new("flamenco-show", "Flamenco Show", 1.5, 120, "Gothic Quarter")
            .with_description("Traditional Spanish dance performance")
            .with_tags(&["nightlife"]),
        Attraction::new("camp-nou", "Camp Nou Tour", 2.0, 100, "Les Corts")
            .with_description("FC Barcelona stadium experience")
            .with_tags(&["museums"]),
        Attraction::new("tapas-tour", "Tapas Food Tour", 3.0, 85, "Various")
            .with_description("Guided culinary experience")
            .with_tags(&["food"]),
        Attraction::new("bunkers", "Bunkers del Carmel", 1.5, 0, "El Carmel")
            .with_description("Best sunset viewpoint in Barcelona")
            .with_tags(&["nature", "relaxed"]),
        Attraction::new("miro-museum", "Fundació Joan Miró", 1.5, 55, "Montjuïc")
            .with_description("Modern art museum on Montjuïc")
            .with_tags(&["museums"]),
        Attraction::new("gracia-neighborhood", "Gràcia Neighborhood", 2.0, 0, "Gràcia")
            .with_description("Bohemian quarter with local vibes")
            .with_tags(&["relaxed", "food"]),
    ]
});

static TRANSPORT_OPTIONS: LazyLock<Vec<TransportOption>> = LazyLock::new(|| {
    let option = |id: &str,
                  carrier: &str,
                  times: (&str, &str, &str),
                  price: u32,
                  preference: TransportPreference| TransportOption {
        id: id.to_string(),
        mode: TransportMode::Flight,
        carrier: carrier.to_string(),
        departure_time: times.0.to_string(),
        arrival_time: times.1.to_string(),
        duration: times.2.to_string(),
        price,
        preference,
    };

    vec![
        option(
            "flight-cheap",
            "Ryanair",
            ("06:15", "09:30", "3h 15m"),
            180,
            TransportPreference::Cheapest,
        ),
        option(
            "flight-fast",
            "LOT Polish Airlines",
            ("10:00", "12:45", "2h 45m"),
            420,
            TransportPreference::Fastest,
        ),
        option(
            "flight-value",
            "Vueling",
            ("08:30", "11:30", "3h"),
            280,
            TransportPreference::BestValue,
        ),
    ]
});

static HOTEL_OPTIONS: LazyLock<Vec<HotelOption>> = LazyLock::new(|| {
    let hotel = |id: &str, name: &str, area: &str, rating: u8, price_per_night: u32, amenities: &[&str]| {
        HotelOption {
            id: id.to_string(),
            name: name.to_string(),
            area: area.to_string(),
            rating,
            price_per_night,
            total_price: 0,
            amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        }
    };

    vec![
        hotel("hotel-budget", "Generator Barcelona", "Gràcia", 3, 280, &["WiFi", "Bar", "Terrace"]),
        hotel("hotel-mid", "Hotel Jazz", "Eixample", 4, 450, &["WiFi", "Pool", "Gym", "Restaurant"]),
        hotel(
            "hotel-luxury",
            "Hotel Arts Barcelona",
            "Barceloneta",
            5,
            1200,
            &["WiFi", "Pool", "Spa", "Beach Access", "Restaurant"],
        ),
        hotel("apartment-1", "Gothic Quarter Apartment", "Gothic Quarter", 4, 380, &["WiFi", "Kitchen", "Washer"]),
        hotel("apartment-2", "El Born Loft", "El Born", 4, 420, &["WiFi", "Kitchen", "Terrace", "Washer"]),
    ]
});

/// Attractions of the supported destination, in catalog order
#[must_use]
pub fn attractions() -> &'static [Attraction] {
    &BARCELONA_ATTRACTIONS
}

#[must_use]
pub fn transport_options() -> &'static [TransportOption] {
    &TRANSPORT_OPTIONS
}

/// Hotels with `total_price` left at zero; see [`HotelOption::with_nights`]
#[must_use]
pub fn hotel_options() -> &'static [HotelOption] {
    &HOTEL_OPTIONS
}

/// Name match ignoring case only; padded input is not the supported destination
#[must_use]
pub fn is_supported_destination(destination: &str) -> bool {
    destination.eq_ignore_ascii_case(SUPPORTED_DESTINATION)
}

fn suggest<'a>(candidates: &[&'a str], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(&query))
        .collect()
}

/// Destinations containing `query`, case-insensitive, in list order
#[must_use]
pub fn suggest_destinations(query: &str) -> Vec<&'static str> {
    suggest(DESTINATIONS, query)
}

/// Origins containing `query`, case-insensitive, in list order
#[must_use]
pub fn suggest_origins(query: &str) -> Vec<&'static str> {
    suggest(ORIGINS, query)
}

#[must_use]
pub fn find_interest(id: &str) -> Option<&'static Interest> {
    INTERESTS.iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(attractions().len(), 15);
        assert_eq!(transport_options().len(), 3);
        assert_eq!(hotel_options().len(), 5);
    }

    #[test]
    fn test_attraction_ids_unique() {
        let ids: HashSet<&str> = attractions().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), attractions().len());
    }

    #[test]
    fn test_attraction_tags_are_known_interests() {
        for attraction in attractions() {
            for tag in &attraction.tags {
                assert!(find_interest(tag).is_some(), "unknown tag {tag}");
            }
        }
    }

    #[test]
    fn test_supported_destination_case_insensitive() {
        assert!(is_supported_destination("barcelona"));
        assert!(is_supported_destination("BARCELONA"));
        assert!(!is_supported_destination(" Barcelona "));
        assert!(!is_supported_destination("Rome"));
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggest_destinations("r"), vec![
            "Barcelona",
            "Rome",
            "Paris",
            "Prague",
            "Amsterdam",
            "Berlin"
        ]);
        assert_eq!(suggest_origins("KRA"), vec!["Kraków"]);
        assert!(suggest_destinations("").is_empty());
        assert!(suggest_origins("Madrid").is_empty());
    }
}
