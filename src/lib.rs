//! `tripwizard` - Multi-step trip planning with mock itineraries
//!
//! This library provides the planning pipeline (candidate selection, day
//! packing, budget estimation), the wizard form model, and the session
//! state that keeps a generated plan between steps.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod planning;
pub mod progress;
pub mod session;
pub mod session_store;

// Re-export core types for public API
pub use config::TripWizardConfig;
pub use error::TripWizardError;
pub use models::{
    Attraction, BudgetBreakdown, DayItinerary, FormUpdate, GeneratedPlan, HotelOption, Pace,
    PlannedAttraction, TransportOption, TripFormData,
};
pub use planning::{
    BudgetRange, build_itinerary, estimate_total, generate_plan, select_attractions,
    select_hotels, select_transport, toggle_attraction,
};
pub use progress::LoadingProgress;
pub use session::TripSession;
pub use session_store::SessionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripWizardError>;
