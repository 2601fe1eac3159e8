pub mod catalog;
pub mod itinerary;
pub mod planner;
pub mod recommendations;
pub mod scoring;

pub use catalog::{DestinationCatalog, InMemoryCatalog};
pub use itinerary::ItineraryStore;
pub use planner::{Planner, TripPlan};
pub use scoring::{Scorer, ScoringWeights};
