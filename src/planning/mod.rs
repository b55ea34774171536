//! Planning module
//!
//! The planning pipeline run once per "generate plan" action:
//! - Selector: attractions, transport and hotels matching the form
//! - Itinerary: greedy packing of attractions into days
//! - Budget: cost breakdown, recalculated on every attraction toggle
//! - Generator: the three stages wired together

pub mod budget;
pub mod generator;
pub mod itinerary;
pub mod selector;

// Re-export commonly used items from submodules
pub use budget::{FOOD_PER_PERSON_PER_DAY, attractions_subtotal, estimate_total, toggle_attraction};
pub use generator::{generate_plan, generate_plan_on, nights_between};
pub use itinerary::build_itinerary;
pub use selector::{BudgetRange, select_attractions, select_hotels, select_transport};
