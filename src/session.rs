//! Planning session state
//!
//! A `TripSession` holds the wizard form and the last generated plan. It is
//! passed around explicitly and changed only through its methods.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{BudgetBreakdown, FormUpdate, GeneratedPlan, TripFormData};
use crate::planning;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSession {
    pub form: TripFormData,
    pub plan: Option<GeneratedPlan>,
}

impl TripSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a partial update into the form
    pub fn update_form(&mut self, update: FormUpdate) {
        self.form.apply(update);
    }

    pub fn set_plan(&mut self, plan: Option<GeneratedPlan>) {
        self.plan = plan;
    }

    /// Generate a plan from the current form and keep it
    pub fn generate(&mut self, default_trip_days: u32) -> &GeneratedPlan {
        let plan = planning::generate_plan(&self.form, default_trip_days);
        self.plan.insert(plan)
    }

    /// Toggle an attraction of the current plan; no-op without a plan
    ///
    /// Returns the budget after the toggle, if there is a plan.
    pub fn toggle_attraction(&mut self, day_index: usize, attraction_id: &str) -> Option<BudgetBreakdown> {
        let plan = self.plan.take()?;
        let plan = self
            .plan
            .insert(planning::toggle_attraction(plan, day_index, attraction_id));
        Some(plan.total_budget)
    }

    /// Back to the default form, plan dropped
    pub fn reset(&mut self) {
        info!("Resetting trip session");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session_with_plan() -> TripSession {
        let mut session = TripSession::new();
        session.update_form(FormUpdate {
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 7, 4),
            ..FormUpdate::default()
        });
        session.generate(4);
        session
    }

    #[test]
    fn test_toggle_without_plan_is_noop() {
        let mut session = TripSession::new();
        assert!(session.toggle_attraction(0, "park-guell").is_none());
        assert!(session.plan.is_none());
    }

    #[test]
    fn test_toggle_updates_stored_plan() {
        let mut session = session_with_plan();
        let plan = session.plan.clone().unwrap();
        let first = plan.itinerary[0].attractions[0].clone();

        let budget = session
            .toggle_attraction(0, &first.attraction.id)
            .unwrap();

        let stored = session.plan.as_ref().unwrap();
        assert!(!stored.itinerary[0].attractions[0].included);
        assert_eq!(
            budget.total,
            plan.total_budget.total - first.attraction.price * plan.travelers
        );
        assert_eq!(stored.total_budget, budget);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = session_with_plan();
        session.update_form(FormUpdate {
            destination: Some("Rome".to_string()),
            ..FormUpdate::default()
        });

        session.reset();

        assert_eq!(session, TripSession::default());
    }

    #[test]
    fn test_set_plan_replaces() {
        let mut session = session_with_plan();
        session.set_plan(None);
        assert!(session.plan.is_none());
    }
}
