//! Plan generation: selection, day packing and budget in one pass

use chrono::{Duration, Local, NaiveDate};
use tracing::{info, instrument};

use crate::models::{GeneratedPlan, TripFormData};
use crate::planning::budget::estimate_total;
use crate::planning::itinerary::build_itinerary;
use crate::planning::selector::{BudgetRange, select_attractions, select_hotels, select_transport};

/// Whole nights between two dates, zero when `end` is not after `start`
#[must_use]
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> u32 {
    u32::try_from((end - start).num_days()).unwrap_or(0)
}

/// Generate a plan for the form, with today as the fallback start date
#[must_use]
pub fn generate_plan(form: &TripFormData, default_trip_days: u32) -> GeneratedPlan {
    generate_plan_on(form, default_trip_days, Local::now().date_naive())
}

/// Generate a plan for the form
///
/// Missing dates default to `today` and `today + default_trip_days`. The
/// itinerary covers `nights + 1` days; the first ranked transport and hotel
/// are chosen.
#[must_use]
#[instrument(skip(form), fields(destination = %form.destination))]
pub fn generate_plan_on(form: &TripFormData, default_trip_days: u32, today: NaiveDate) -> GeneratedPlan {
    let start_date = form.start_date.unwrap_or(today);
    let end_date = form
        .end_date
        .unwrap_or_else(|| start_date + Duration::days(i64::from(default_trip_days)));
    let nights = nights_between(start_date, end_date);

    let attractions = select_attractions(&form.destination, &form.interests);
    let transports = select_transport(form.transport_preference);
    let hotels = select_hotels(
        nights,
        BudgetRange::new(form.budget_min, form.budget_max),
        form.hotel_quality,
        form.accommodation,
    );

    // both selections fall back to the full catalog, which is never empty
    let transport = transports[0].clone();
    let hotel = hotels[0].with_nights(nights);

    let itinerary = build_itinerary(&attractions, nights + 1, form.pace);
    let total_budget = estimate_total(&transport, &hotel, &itinerary, form.travelers, nights);

    info!(
        "Generated {}-day plan for {} travelers: {} / {}, {} PLN",
        itinerary.len(),
        form.travelers,
        transport.carrier,
        hotel.name,
        total_budget.total
    );

    GeneratedPlan {
        destination: form.destination.clone(),
        origin: form.origin.clone(),
        start_date,
        end_date,
        travelers: form.travelers,
        transport,
        hotel,
        itinerary,
        total_budget,
    }
}
