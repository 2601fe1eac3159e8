use crate::models::{Destination, Preference};

/// Weights of the additive scoring rubric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Multiplier turning the five-point rating into the base score
    pub rating: f64,
    pub budget_match: f64,
    pub type_match: f64,
    pub season_match: f64,
    /// Bonus per interest tag shared with the preference
    pub interest_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: 10.0,
            budget_match: 20.0,
            type_match: 15.0,
            season_match: 10.0,
            interest_match: 15.0,
        }
    }
}

/// Scores destinations against user preferences
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score before any preference bonus is applied
    pub fn base_score(&self, destination: &Destination) -> f64 {
        destination.rating * self.weights.rating
    }

    /// Base rating plus fixed bonuses for every criterion the destination satisfies
    ///
    /// An unset preference field never matches. Each distinct interest shared with the
    /// destination adds the interest bonus once.
    pub fn score(&self, destination: &Destination, preference: &Preference) -> f64 {
        let mut score = self.base_score(destination);

        if preference.budget == Some(destination.budget) {
            score += self.weights.budget_match;
        }

        if preference.kind == Some(destination.kind) {
            score += self.weights.type_match;
        }

        if preference
            .season
            .is_some_and(|season| destination.has_season(season))
        {
            score += self.weights.season_match;
        }

        let matching_interests = preference
            .normalized_interests()
            .iter()
            .filter(|interest| destination.has_interest(interest))
            .count();
        score += matching_interests as f64 * self.weights.interest_match;

        score
    }
}

/// Rounds to two decimal places for presentation
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, DestinationType, Season};

    fn bali() -> Destination {
        Destination {
            id: 2,
            name: "Bali".to_string(),
            country: "Indonesia".to_string(),
            kind: DestinationType::Beach,
            budget: BudgetTier::Medium,
            interests: vec![
                "beach".to_string(),
                "nature".to_string(),
                "wellness".to_string(),
            ],
            rating: 4.7,
            seasons: vec![Season::Summer, Season::Spring],
            description: String::new(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_all_criteria_match_adds_sixty() {
        let scorer = Scorer::default();
        let destination = bali();
        let preference = Preference {
            budget: Some(BudgetTier::Medium),
            kind: Some(DestinationType::Beach),
            season: Some(Season::Summer),
            interests: vec!["nature".to_string()],
        };

        let base = scorer.base_score(&destination);
        assert_close(scorer.score(&destination, &preference), base + 60.0);
    }

    #[test]
    fn test_no_criteria_match_is_base_rating() {
        let scorer = Scorer::default();
        let destination = bali();
        let preference = Preference {
            budget: Some(BudgetTier::High),
            kind: Some(DestinationType::City),
            season: Some(Season::Winter),
            interests: vec!["shopping".to_string()],
        };

        assert_close(scorer.score(&destination, &preference), 47.0);
    }

    #[test]
    fn test_empty_preference_is_base_rating() {
        let scorer = Scorer::default();
        assert_close(scorer.score(&bali(), &Preference::default()), 47.0);
    }

    #[test]
    fn test_each_criterion_bonus() {
        let scorer = Scorer::default();
        let destination = bali();
        let base = scorer.base_score(&destination);

        let budget = Preference {
            budget: Some(BudgetTier::Medium),
            ..Default::default()
        };
        assert_close(scorer.score(&destination, &budget), base + 20.0);

        let kind = Preference {
            kind: Some(DestinationType::Beach),
            ..Default::default()
        };
        assert_close(scorer.score(&destination, &kind), base + 15.0);

        let season = Preference {
            season: Some(Season::Spring),
            ..Default::default()
        };
        assert_close(scorer.score(&destination, &season), base + 10.0);
    }

    #[test]
    fn test_score_monotonic_in_matching_interests() {
        let scorer = Scorer::default();
        let destination = bali();
        let candidates = ["beach", "shopping", "nature", "history", "wellness"];

        let mut previous = scorer.score(&destination, &Preference::default());
        for count in 1..=candidates.len() {
            let preference = Preference {
                interests: candidates[..count].iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            };
            let score = scorer.score(&destination, &preference);
            assert!(score >= previous, "score dropped at {count} interests");
            previous = score;
        }

        assert_close(previous, 47.0 + 3.0 * 15.0);
    }

    #[test]
    fn test_duplicate_interests_count_once() {
        let scorer = Scorer::default();
        let preference = Preference {
            interests: vec!["Beach".to_string(), "beach ".to_string()],
            ..Default::default()
        };
        assert_close(scorer.score(&bali(), &preference), 47.0 + 15.0);
    }

    #[test]
    fn test_score_never_below_base() {
        let scorer = Scorer::default();
        let destination = bali();
        let preference = Preference {
            budget: Some(BudgetTier::Low),
            kind: None,
            season: Some(Season::Fall),
            interests: vec![],
        };
        assert!(scorer.score(&destination, &preference) >= scorer.base_score(&destination));
    }

    #[test]
    fn test_custom_weights() {
        let scorer = Scorer::new(ScoringWeights {
            rating: 1.0,
            ..Default::default()
        });
        let preference = Preference {
            budget: Some(BudgetTier::Medium),
            ..Default::default()
        };
        assert_close(scorer.score(&bali(), &preference), 4.7 + 20.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(48.00000000001), 48.0);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(7.0 / 3.0), 2.33);
    }
}
