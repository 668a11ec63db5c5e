use serde::{Deserialize, Serialize};

/// Weight assumed for the strongest option of a question.
pub const DEFAULT_MAX_OPTION_WEIGHT: u32 = 5;

/// Upper bound accepted for `max_option_weight`.
pub const MAX_OPTION_WEIGHT_LIMIT: u32 = 1000;

/// Scoring configuration.
///
/// Controls how raw category totals are normalized into a percentage match.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   max_option_weight: 5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Highest weight a single option gives one category (default: 5).
    /// The maximum attainable score is `question_count * max_option_weight`.
    #[serde(default)]
    pub max_option_weight: Option<u32>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_option_weight: Some(DEFAULT_MAX_OPTION_WEIGHT),
        }
    }
}

impl ScoringConfig {
    pub fn effective_max_option_weight(&self) -> u32 {
        self.max_option_weight.unwrap_or(DEFAULT_MAX_OPTION_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.max_option_weight, Some(5));
        assert_eq!(config.effective_max_option_weight(), 5);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.max_option_weight.is_none());
        assert_eq!(config.effective_max_option_weight(), 5);
    }

    #[test]
    fn test_scoring_config_parse() {
        let yaml = "max_option_weight: 10\n";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.effective_max_option_weight(), 10);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "base_score: 100\n";
        assert!(serde_saphyr::from_str::<ScoringConfig>(yaml).is_err());
    }
}
