mod destination;
mod itinerary;
mod preference;

pub use destination::{
    BudgetTier, Destination, DestinationId, DestinationType, ScoredDestination, Season,
};
pub use itinerary::{Itinerary, ItineraryEntry, ItineraryError, ItinerarySummary, ScheduledEntry};
pub use preference::Preference;
