//! Budget estimation and recalculation

use tracing::{debug, info};

use crate::models::{BudgetBreakdown, DayItinerary, GeneratedPlan, HotelOption, TransportOption};

/// Estimated food spend per person per day, in PLN
pub const FOOD_PER_PERSON_PER_DAY: u32 = 120;

/// Sum of included attraction prices over the whole itinerary, for the group
#[must_use]
pub fn attractions_subtotal(itinerary: &[DayItinerary], travelers: u32) -> u32 {
    itinerary
        .iter()
        .flat_map(|day| &day.attractions)
        .map(|a| a.cost_for(travelers))
        .fold(0, u32::saturating_add)
}

/// Cost breakdown for a trip
///
/// Transport is always a round trip. Food is counted for `nights + 1` days.
/// Amounts saturate at `u32::MAX` instead of overflowing.
#[must_use]
pub fn estimate_total(
    transport: &TransportOption,
    hotel: &HotelOption,
    itinerary: &[DayItinerary],
    travelers: u32,
    nights: u32,
) -> BudgetBreakdown {
    let transport_total = transport.price.saturating_mul(travelers).saturating_mul(2);
    let accommodation_total = hotel.price_per_night.saturating_mul(nights);
    let attractions_total = attractions_subtotal(itinerary, travelers);
    let food_total = FOOD_PER_PERSON_PER_DAY
        .saturating_mul(travelers)
        .saturating_mul(nights.saturating_add(1));

    BudgetBreakdown::new(
        transport_total,
        accommodation_total,
        attractions_total,
        food_total,
    )
}

/// Flip one attraction's inclusion flag and recompute the budget
///
/// `day_index` is 0-based. An unknown day or attraction leaves the plan as
/// it is. The attractions subtotal is recomputed over every day, not only
/// the one that changed.
#[must_use]
pub fn toggle_attraction(mut plan: GeneratedPlan, day_index: usize, attraction_id: &str) -> GeneratedPlan {
    let position = plan.itinerary.get(day_index).and_then(|day| {
        day.attractions
            .iter()
            .position(|a| a.attraction.id == attraction_id)
    });
    let Some(position) = position else {
        debug!(
            "Attraction {} not found on day index {}, plan unchanged",
            attraction_id, day_index
        );
        return plan;
    };

    let planned = &mut plan.itinerary[day_index].attractions[position];
    planned.included = !planned.included;
    let included = planned.included;

    let attractions = attractions_subtotal(&plan.itinerary, plan.travelers);
    plan.total_budget = plan.total_budget.with_attractions(attractions);

    info!(
        "{} {} on day {}, total now {} PLN",
        if included { "Included" } else { "Excluded" },
        attraction_id,
        day_index + 1,
        plan.total_budget.total
    );
    plan
}
