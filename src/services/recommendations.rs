use crate::{
    error::{AppError, AppResult},
    models::{Preference, ScoredDestination},
    services::{
        catalog::DestinationCatalog,
        scoring::{round2, Scorer},
    },
};

/// Ranks catalog destinations against the user's preferences
///
/// Every destination is scored, the list is sorted by score descending and cut to
/// `limit`. Destinations with equal scores keep their catalog order.
pub async fn get_recommendations(
    catalog: &dyn DestinationCatalog,
    scorer: &Scorer,
    preference: &Preference,
    limit: usize,
) -> AppResult<Vec<ScoredDestination>> {
    if limit == 0 {
        return Err(AppError::InvalidInput(
            "Limit must be at least 1".to_string(),
        ));
    }

    let destinations = catalog.list().await?;

    let mut scored: Vec<ScoredDestination> = destinations
        .into_iter()
        .map(|destination| {
            let score = round2(scorer.score(&destination, preference));
            ScoredDestination { destination, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);

    tracing::debug!(
        catalog = catalog.name(),
        returned = scored.len(),
        top_score = scored.first().map(|s| s.score),
        "Recommendations ranked"
    );

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, Destination, DestinationType, Season};
    use crate::services::catalog::{InMemoryCatalog, MockDestinationCatalog};

    fn destination(id: u32, kind: DestinationType, rating: f64) -> Destination {
        Destination {
            id,
            name: format!("Destination {}", id),
            country: "Testland".to_string(),
            kind,
            budget: BudgetTier::Medium,
            interests: vec!["food".to_string()],
            rating,
            seasons: vec![Season::Summer],
            description: String::new(),
        }
    }

    fn mock_catalog(destinations: Vec<Destination>) -> MockDestinationCatalog {
        let mut catalog = MockDestinationCatalog::new();
        catalog
            .expect_list()
            .returning(move || Ok(destinations.clone()));
        catalog.expect_name().return_const("mock");
        catalog
    }

    #[tokio::test]
    async fn test_sorted_by_score_descending() {
        let catalog = mock_catalog(vec![
            destination(1, DestinationType::City, 4.0),
            destination(2, DestinationType::Beach, 3.0),
            destination(3, DestinationType::City, 5.0),
        ]);
        let preference = Preference {
            kind: Some(DestinationType::Beach),
            ..Default::default()
        };

        let result = get_recommendations(&catalog, &Scorer::default(), &preference, 5)
            .await
            .unwrap();

        let ids: Vec<u32> = result.iter().map(|s| s.destination.id).collect();
        // Beach bonus lifts 30 + 15 above 40 but not above 50
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(result[1].score, 45.0);
    }

    #[tokio::test]
    async fn test_ties_keep_catalog_order() {
        let catalog = mock_catalog(vec![
            destination(7, DestinationType::City, 4.5),
            destination(3, DestinationType::City, 4.5),
            destination(5, DestinationType::City, 4.5),
        ]);

        let result = get_recommendations(&catalog, &Scorer::default(), &Preference::default(), 5)
            .await
            .unwrap();

        let ids: Vec<u32> = result.iter().map(|s| s.destination.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[tokio::test]
    async fn test_limit_truncates() {
        let catalog = InMemoryCatalog::builtin();
        let result = get_recommendations(&catalog, &Scorer::default(), &Preference::default(), 3)
            .await
            .unwrap();
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_zero_limit_rejected() {
        let catalog = MockDestinationCatalog::new();
        let result =
            get_recommendations(&catalog, &Scorer::default(), &Preference::default(), 0).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_catalog_error_propagates() {
        let mut catalog = MockDestinationCatalog::new();
        catalog
            .expect_list()
            .returning(|| Err(AppError::Catalog("unavailable".to_string())));

        let result =
            get_recommendations(&catalog, &Scorer::default(), &Preference::default(), 5).await;
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[tokio::test]
    async fn test_builtin_beach_lover() {
        let catalog = InMemoryCatalog::builtin();
        let preference = Preference {
            budget: Some(BudgetTier::Medium),
            kind: Some(DestinationType::Beach),
            season: Some(Season::Summer),
            interests: vec!["beach".to_string(), "nature".to_string()],
        };

        let result = get_recommendations(&catalog, &Scorer::default(), &preference, 5)
            .await
            .unwrap();

        // Bali: 47 + 20 + 15 + 10 + 2 * 15
        assert_eq!(result[0].destination.name, "Bali");
        assert_eq!(result[0].score, 122.0);
    }
}
