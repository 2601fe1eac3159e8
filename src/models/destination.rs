use serde::{Deserialize, Serialize};

/// Catalog identifier of a destination
pub type DestinationId = u32;

/// Price level of a destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    /// Estimated spend per day at this price level
    pub fn daily_cost(self) -> u64 {
        match self {
            BudgetTier::Low => 80,
            BudgetTier::Medium => 150,
            BudgetTier::High => 250,
        }
    }
}

/// Kind of trip a destination offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    City,
    Beach,
    Mixed,
    Nature,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// A catalog entry describing a place to visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: DestinationType,
    pub budget: BudgetTier,
    pub interests: Vec<String>,
    /// Rating on a five-point scale
    pub rating: f64,
    /// Seasons in which the destination is recommended
    #[serde(rename = "season")]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub description: String,
}

impl Destination {
    pub fn has_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    /// Checks whether the destination carries an interest tag, ignoring case
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests
            .iter()
            .any(|tag| tag.trim().eq_ignore_ascii_case(interest))
    }

    /// First few interest tags, used as suggested activities
    pub fn activities(&self, count: usize) -> Vec<String> {
        self.interests.iter().take(count).cloned().collect()
    }
}

/// A destination together with its preference score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    pub score: f64,
}
