use std::collections::HashSet;

use super::types::Category;
use super::Catalog;

/// Validate reference data at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog, max_option_weight: u32) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if catalog.questions.is_empty() {
        errors.push("questions: at least one question is required".to_string());
    }

    for (qi, question) in catalog.questions.iter().enumerate() {
        if question.options.is_empty() {
            errors.push(format!("questions[{}]: has no options", qi));
        }
        for (oi, option) in question.options.iter().enumerate() {
            for category in Category::ALL {
                let weight = option.points.get(category);
                if weight > max_option_weight {
                    errors.push(format!(
                        "questions[{}].options[{}].{}: weight {} exceeds maximum {}",
                        qi,
                        oi,
                        category.key(),
                        weight,
                        max_option_weight
                    ));
                }
            }
        }
    }

    // Exactly one metadata entry per category
    for category in Category::ALL {
        let count = catalog
            .streams
            .iter()
            .filter(|s| s.category == category)
            .count();
        if count != 1 {
            errors.push(format!(
                "streams.{}: expected exactly one entry, found {}",
                category.key(),
                count
            ));
        }
    }

    let mut seen_ids = HashSet::new();
    for (i, college) in catalog.colleges.iter().enumerate() {
        if !seen_ids.insert(college.id) {
            errors.push(format!("colleges[{}].id: duplicate id {}", i, college.id));
        }
        if !(0.0..=5.0).contains(&college.rating) {
            errors.push(format!(
                "colleges[{}].rating: {} is outside 0-5",
                i, college.rating
            ));
        }
        if college.fees.currency.trim().is_empty() {
            errors.push(format!("colleges[{}].fees.currency: must not be empty", i));
        }
        if !college.website.starts_with("https://") && !college.website.starts_with("http://") {
            errors.push(format!(
                "colleges[{}].website: '{}' is not an http(s) URL",
                i, college.website
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
