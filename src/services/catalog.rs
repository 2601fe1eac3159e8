use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::{
    error::{AppError, AppResult},
    models::{BudgetTier, Destination, DestinationId, DestinationType, Season},
};

/// Source of destination reference data
///
/// Destinations are read-only once loaded. The service works against this trait so
/// the built-in list can be swapped for a catalog file, and handlers can be tested
/// against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DestinationCatalog: Send + Sync {
    /// All destinations in catalog order
    async fn list(&self) -> AppResult<Vec<Destination>>;

    /// Looks up a single destination by id
    async fn get(&self, id: DestinationId) -> AppResult<Option<Destination>>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Catalog held entirely in memory
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    destinations: Vec<Destination>,
    name: &'static str,
}

impl InMemoryCatalog {
    /// Builds a catalog, rejecting duplicate ids and ratings outside 0-5
    pub fn new(destinations: Vec<Destination>) -> AppResult<Self> {
        Self::with_name(destinations, "in_memory")
    }

    fn with_name(destinations: Vec<Destination>, name: &'static str) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for destination in &destinations {
            if !seen.insert(destination.id) {
                return Err(AppError::Catalog(format!(
                    "Duplicate destination id {}",
                    destination.id
                )));
            }
            if !destination.rating.is_finite() || !(0.0..=5.0).contains(&destination.rating) {
                return Err(AppError::Catalog(format!(
                    "Destination {} has rating {} outside 0-5",
                    destination.id, destination.rating
                )));
            }
        }

        Ok(Self { destinations, name })
    }

    /// The ten destinations shipped with the application
    pub fn builtin() -> Self {
        Self {
            destinations: builtin_destinations(),
            name: "builtin",
        }
    }

    /// Loads a catalog from a JSON array of destinations
    pub async fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let destinations: Vec<Destination> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        let catalog = Self::with_name(destinations, "json_file")?;
        anyhow::ensure!(
            !catalog.is_empty(),
            "Catalog file {} lists no destinations",
            path.display()
        );

        tracing::info!(
            path = %path.display(),
            destinations = catalog.len(),
            "Loaded destination catalog"
        );

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

#[async_trait::async_trait]
impl DestinationCatalog for InMemoryCatalog {
    async fn list(&self) -> AppResult<Vec<Destination>> {
        Ok(self.destinations.clone())
    }

    async fn get(&self, id: DestinationId) -> AppResult<Option<Destination>> {
        Ok(self.destinations.iter().find(|d| d.id == id).cloned())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[allow(clippy::too_many_arguments)]
fn destination(
    id: DestinationId,
    name: &str,
    country: &str,
    kind: DestinationType,
    budget: BudgetTier,
    interests: [&str; 3],
    rating: f64,
    seasons: [Season; 2],
    description: &str,
) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        country: country.to_string(),
        kind,
        budget,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        rating,
        seasons: seasons.to_vec(),
        description: description.to_string(),
    }
}

#[rustfmt::skip]
fn builtin_destinations() -> Vec<Destination> {
    use BudgetTier::*;
    use DestinationType::*;
    use Season::*;

    vec![
        destination(1, "Paris", "France", City, High, ["culture", "food", "art"], 4.8, [Spring, Fall], "City of Light and Romance"),
        destination(2, "Bali", "Indonesia", Beach, Medium, ["beach", "nature", "wellness"], 4.7, [Summer, Spring], "Tropical paradise with rich culture"),
        destination(3, "Tokyo", "Japan", City, High, ["culture", "food", "technology"], 4.9, [Spring, Fall], "Modern metropolis meets tradition"),
        destination(4, "Barcelona", "Spain", City, Medium, ["culture", "beach", "food"], 4.6, [Summer, Spring], "Vibrant city with stunning architecture"),
        destination(5, "Maldives", "Maldives", Beach, High, ["beach", "luxury", "diving"], 4.9, [Winter, Spring], "Ultimate luxury beach destination"),
        destination(6, "Prague", "Czech Republic", City, Low, ["culture", "history", "architecture"], 4.7, [Spring, Fall], "Medieval charm and Gothic beauty"),
        destination(7, "Thailand", "Thailand", Mixed, Low, ["beach", "culture", "food"], 4.8, [Winter, Spring], "Land of smiles and diverse experiences"),
        destination(8, "New York", "USA", City, High, ["culture", "food", "shopping"], 4.7, [Fall, Spring], "The city that never sleeps"),
        destination(9, "Iceland", "Iceland", Nature, High, ["nature", "adventure", "photography"], 4.8, [Summer, Winter], "Land of fire and ice"),
        destination(10, "Costa Rica", "Costa Rica", Nature, Medium, ["nature", "adventure", "wildlife"], 4.7, [Winter, Spring], "Eco-tourism paradise"),
    ]
}
