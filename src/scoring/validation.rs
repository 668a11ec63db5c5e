use super::config::{ScoringConfig, MAX_OPTION_WEIGHT_LIMIT};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(weight) = config.max_option_weight {
        if weight == 0 {
            errors.push("scoring.max_option_weight: must be greater than zero".to_string());
        } else if weight > MAX_OPTION_WEIGHT_LIMIT {
            errors.push(format!(
                "scoring.max_option_weight: {} exceeds the limit of {}",
                weight, MAX_OPTION_WEIGHT_LIMIT
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
