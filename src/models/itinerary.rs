use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

use super::{BudgetTier, Destination, DestinationId};

/// Error types for itinerary edits
#[derive(Debug, Error, PartialEq)]
pub enum ItineraryError {
    #[error("Day count must be at least 1")]
    NoDays,
    #[error("Destination {0} is already in the itinerary")]
    DuplicateEntry(DestinationId),
    #[error("Destination {0} is not in the itinerary")]
    EntryNotFound(DestinationId),
    #[error("New order must list every itinerary destination exactly once")]
    InvalidOrder,
}

/// A destination chosen by the user with its day count and spend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryEntry {
    pub destination_id: DestinationId,
    pub name: String,
    pub country: String,
    pub budget_level: BudgetTier,
    pub days: u32,
    pub spend: u64,
}

impl ItineraryEntry {
    /// Creates an entry; without an explicit spend the tier's daily cost is used
    pub fn new(destination: &Destination, days: u32, spend: Option<u64>) -> Self {
        Self {
            destination_id: destination.id,
            name: destination.name.clone(),
            country: destination.country.clone(),
            budget_level: destination.budget,
            days,
            spend: spend.unwrap_or_else(|| u64::from(days) * destination.budget.daily_cost()),
        }
    }
}

/// A user-curated list of destinations tracked against day and budget caps
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub id: Uuid,
    pub max_days: u32,
    pub max_budget: Option<u64>,
    pub entries: Vec<ItineraryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn new(max_days: u32, max_budget: Option<u64>) -> Result<Self, ItineraryError> {
        if max_days == 0 {
            return Err(ItineraryError::NoDays);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            max_days,
            max_budget,
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Appends an entry; a destination may appear only once
    pub fn add_entry(&mut self, entry: ItineraryEntry) -> Result<(), ItineraryError> {
        if entry.days == 0 {
            return Err(ItineraryError::NoDays);
        }
        if self.contains(entry.destination_id) {
            return Err(ItineraryError::DuplicateEntry(entry.destination_id));
        }

        self.entries.push(entry);
        self.touch();
        Ok(())
    }

    pub fn remove_entry(
        &mut self,
        destination_id: DestinationId,
    ) -> Result<ItineraryEntry, ItineraryError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.destination_id == destination_id)
            .ok_or(ItineraryError::EntryNotFound(destination_id))?;

        let removed = self.entries.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Rearranges entries to follow `order`, which must be a permutation of the current entries
    pub fn reorder(&mut self, order: &[DestinationId]) -> Result<(), ItineraryError> {
        let distinct: HashSet<&DestinationId> = order.iter().collect();
        let is_permutation = order.len() == self.entries.len()
            && distinct.len() == order.len()
            && order.iter().all(|id| self.contains(*id));

        if !is_permutation {
            return Err(ItineraryError::InvalidOrder);
        }

        self.entries
            .sort_by_key(|e| order.iter().position(|id| *id == e.destination_id));
        self.touch();
        Ok(())
    }

    pub fn contains(&self, destination_id: DestinationId) -> bool {
        self.entries.iter().any(|e| e.destination_id == destination_id)
    }

    pub fn total_days(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.days)).sum()
    }

    /// Sum of entry spends, saturating at `u64::MAX`
    pub fn total_spend(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |total, e| total.saturating_add(e.spend))
    }

    pub fn within_days(&self) -> bool {
        self.total_days() <= u64::from(self.max_days)
    }

    pub fn within_budget(&self) -> bool {
        self.max_budget
            .map_or(true, |budget| self.total_spend() <= budget)
    }

    pub fn summary(&self) -> ItinerarySummary {
        let total_days = self.total_days();
        let total_spend = self.total_spend();

        let mut current_day: u64 = 1;
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                let start_day = current_day;
                current_day += u64::from(entry.days);
                ScheduledEntry {
                    entry: entry.clone(),
                    start_day,
                    end_day: current_day - 1,
                }
            })
            .collect();

        ItinerarySummary {
            id: self.id,
            max_days: self.max_days,
            max_budget: self.max_budget,
            entries,
            total_days,
            total_spend,
            remaining_days: u64::from(self.max_days).saturating_sub(total_days),
            remaining_budget: self
                .max_budget
                .map(|budget| budget.saturating_sub(total_spend)),
            within_days: self.within_days(),
            within_budget: self.within_budget(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// An itinerary entry placed on the trip calendar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduledEntry {
    #[serde(flatten)]
    pub entry: ItineraryEntry,
    pub start_day: u64,
    pub end_day: u64,
}

/// Snapshot of an itinerary with its running totals
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItinerarySummary {
    pub id: Uuid,
    pub max_days: u32,
    pub max_budget: Option<u64>,
    pub entries: Vec<ScheduledEntry>,
    pub total_days: u64,
    pub total_spend: u64,
    pub remaining_days: u64,
    pub remaining_budget: Option<u64>,
    pub within_days: bool,
    pub within_budget: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
