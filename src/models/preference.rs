use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

use super::{BudgetTier, DestinationType, Season};

/// Preferences submitted by the user for one recommendation request
///
/// Every field is optional. The HTML form submits empty strings for fields the
/// user left unset; those are read as "no preference".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preference {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub budget: Option<BudgetTier>,
    #[serde(default, rename = "type", deserialize_with = "blank_as_none")]
    pub kind: Option<DestinationType>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub season: Option<Season>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Preference {
    /// Interests trimmed, lowercased and deduplicated, in submission order
    pub fn normalized_interests(&self) -> Vec<String> {
        let mut seen = Vec::with_capacity(self.interests.len());
        for interest in &self.interests {
            let interest = interest.trim().to_lowercase();
            if !interest.is_empty() && !seen.contains(&interest) {
                seen.push(interest);
            }
        }
        seen
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let lowered = value.to_lowercase();
            let de: StrDeserializer<'_, D::Error> = lowered.as_str().into_deserializer();
            T::deserialize(de).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_preference() {
        let json = r#"{"budget":"medium","type":"beach","season":"summer","interests":["nature","food"]}"#;
        let preference: Preference = serde_json::from_str(json).unwrap();

        assert_eq!(preference.budget, Some(BudgetTier::Medium));
        assert_eq!(preference.kind, Some(DestinationType::Beach));
        assert_eq!(preference.season, Some(Season::Summer));
        assert_eq!(preference.interests, vec!["nature", "food"]);
    }

    #[test]
    fn test_blank_fields_mean_no_preference() {
        let json = r#"{"budget":"","type":"  ","season":null}"#;
        let preference: Preference = serde_json::from_str(json).unwrap();
        assert_eq!(preference, Preference::default());
    }

    #[test]
    fn test_missing_fields_mean_no_preference() {
        let preference: Preference = serde_json::from_str("{}").unwrap();
        assert_eq!(preference, Preference::default());
    }

    #[test]
    fn test_values_are_case_insensitive() {
        let preference: Preference = serde_json::from_str(r#"{"budget":"High"}"#).unwrap();
        assert_eq!(preference.budget, Some(BudgetTier::High));
    }

    #[test]
    fn test_unknown_value_rejected() {
        let result = serde_json::from_str::<Preference>(r#"{"season":"monsoon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalized_interests() {
        let preference = Preference {
            interests: vec![
                " Food ".to_string(),
                "food".to_string(),
                "".to_string(),
                "Art".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(preference.normalized_interests(), vec!["food", "art"]);
    }
}
