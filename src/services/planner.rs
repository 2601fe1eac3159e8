use serde::Serialize;
use thiserror::Error;

use crate::{
    error::AppResult,
    models::{BudgetTier, Destination, DestinationId},
    services::{catalog::DestinationCatalog, scoring::round2},
};

/// Number of interest tags suggested as activities per stop
const ACTIVITIES_PER_STOP: usize = 3;

/// Error types for the itinerary planner
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("No destinations selected")]
    NoDestinations,
    #[error("Trip length must be at least 1 day")]
    NoDays,
    #[error("{days} days cannot cover {destinations} destinations")]
    TooFewDays { days: u32, destinations: usize },
    #[error("Unknown destination ids: {0:?}")]
    UnknownDestinations(Vec<DestinationId>),
}

/// One destination placed on the trip calendar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlannedStop {
    pub destination_id: DestinationId,
    pub destination: String,
    pub country: String,
    pub days: u32,
    pub start_day: u64,
    pub end_day: u64,
    pub estimated_cost: u64,
    pub activities: Vec<String>,
    pub budget_level: BudgetTier,
}

/// Result of planning a trip across the selected destinations
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripPlan {
    pub itinerary: Vec<PlannedStop>,
    pub total_days: u32,
    pub total_cost: u64,
    pub within_budget: bool,
    pub average_daily_cost: f64,
}

/// Splits a trip's days across chosen destinations and estimates its cost
pub struct Planner<'a> {
    destinations: &'a [Destination],
}

impl<'a> Planner<'a> {
    /// Creates a planner over destinations in visiting order
    pub fn new(destinations: &'a [Destination]) -> Self {
        Self { destinations }
    }

    /// Divides `total_days` evenly, giving the leftover days to the earliest stops,
    /// and prices each stop at its tier's daily cost
    pub fn plan(&self, total_days: u32, budget: Option<u64>) -> Result<TripPlan, PlanError> {
        if self.destinations.is_empty() {
            return Err(PlanError::NoDestinations);
        }
        if total_days == 0 {
            return Err(PlanError::NoDays);
        }

        let count = self.destinations.len();
        if (total_days as usize) < count {
            return Err(PlanError::TooFewDays {
                days: total_days,
                destinations: count,
            });
        }

        let days_per_destination = total_days / count as u32;
        let remaining_days = (total_days % count as u32) as usize;

        let mut itinerary = Vec::with_capacity(count);
        let mut total_cost: u64 = 0;
        // u64: day numbers of a u32::MAX day trip overflow u32
        let mut current_day: u64 = 1;

        for (i, destination) in self.destinations.iter().enumerate() {
            let days = days_per_destination + u32::from(i < remaining_days);
            let estimated_cost = u64::from(days) * destination.budget.daily_cost();

            itinerary.push(PlannedStop {
                destination_id: destination.id,
                destination: destination.name.clone(),
                country: destination.country.clone(),
                days,
                start_day: current_day,
                end_day: current_day + u64::from(days) - 1,
                estimated_cost,
                activities: destination.activities(ACTIVITIES_PER_STOP),
                budget_level: destination.budget,
            });

            total_cost += estimated_cost;
            current_day += u64::from(days);
        }

        let within_budget = budget.map_or(true, |budget| total_cost <= budget);

        if !within_budget {
            tracing::info!(total_cost, budget = ?budget, "Planned trip exceeds budget");
        }

        Ok(TripPlan {
            itinerary,
            total_days,
            total_cost,
            within_budget,
            average_daily_cost: round2(total_cost as f64 / f64::from(total_days)),
        })
    }
}

/// Resolves the selected ids against the catalog and plans the trip
///
/// Ids are visited in the order given; repeated ids are collapsed to their first
/// occurrence.
pub async fn plan_trip(
    catalog: &dyn DestinationCatalog,
    destination_ids: &[DestinationId],
    total_days: u32,
    budget: Option<u64>,
) -> AppResult<TripPlan> {
    let mut ordered_ids: Vec<DestinationId> = Vec::with_capacity(destination_ids.len());
    for id in destination_ids {
        if !ordered_ids.contains(id) {
            ordered_ids.push(*id);
        }
    }

    let mut selected = Vec::with_capacity(ordered_ids.len());
    let mut unknown = Vec::new();
    for id in ordered_ids {
        match catalog.get(id).await? {
            Some(destination) => selected.push(destination),
            None => unknown.push(id),
        }
    }

    if !unknown.is_empty() {
        tracing::warn!(unknown = ?unknown, "Plan requested for unknown destinations");
        return Err(PlanError::UnknownDestinations(unknown).into());
    }

    let plan = Planner::new(&selected).plan(total_days, budget)?;

    tracing::info!(
        stops = plan.itinerary.len(),
        total_days = plan.total_days,
        total_cost = plan.total_cost,
        within_budget = plan.within_budget,
        "Trip planned"
    );

    Ok(plan)
}
