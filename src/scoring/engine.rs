use serde::Serialize;

use super::answers::AnswerSet;
use super::config::ScoringConfig;
use crate::catalog::{Catalog, Category, PointVector, StreamColor};
use crate::error::ValidationError;

/// A stream's computed match, merged with its static metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamResult {
    pub category: Category,
    pub stream: String,
    pub score: u32,
    pub percentage: u32,
    pub description: String,
    pub careers: Vec<String>,
    pub courses: Vec<String>,
    pub color: StreamColor,
}

/// Maximum attainable score per category, a normalization constant
/// independent of the actual answers. Saturates at `u32::MAX`.
pub fn max_score(catalog: &Catalog, config: &ScoringConfig) -> u32 {
    u32::try_from(catalog.question_count())
        .unwrap_or(u32::MAX)
        .saturating_mul(config.effective_max_option_weight())
}

/// Sum the point vectors of every selected option.
///
/// Fails before touching the totals if the answer set does not fit the question bank.
pub fn category_totals(catalog: &Catalog, answers: &AnswerSet) -> Result<PointVector, ValidationError> {
    answers.validate(&catalog.questions)?;

    let mut totals = PointVector::default();
    for (question, selection) in catalog.questions.iter().zip(answers.selections()) {
        for &option in selection {
            totals += question.options[option].points;
        }
    }
    Ok(totals)
}

pub fn percentage(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    (f64::from(score) / f64::from(max_score) * 100.0).round() as u32
}

/// Rank the four streams for an answer set, highest score first.
///
/// Ties keep the streams' definition order.
pub fn calculate_results(
    catalog: &Catalog,
    answers: &AnswerSet,
    config: &ScoringConfig,
) -> Result<Vec<StreamResult>, ValidationError> {
    let totals = category_totals(catalog, answers)?;
    let max = max_score(catalog, config);

    tracing::debug!(
        science = totals.science,
        commerce = totals.commerce,
        arts = totals.arts,
        vocational = totals.vocational,
        max_score = max,
        "category totals"
    );

    let mut results: Vec<StreamResult> = Category::ALL
        .iter()
        .filter_map(|&category| {
            let info = catalog.stream(category)?;
            let score = totals.get(category);
            Some(StreamResult {
                category,
                stream: category.display_name().to_string(),
                score,
                percentage: percentage(score, max),
                description: info.description.clone(),
                careers: info.careers.clone(),
                courses: info.courses.clone(),
                color: info.color,
            })
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pick, for each question, the option that gives `category` the full 5 points
    fn strongest_answers(category: Category) -> AnswerSet {
        let catalog = Catalog::builtin();
        AnswerSet::new(
            catalog
                .questions
                .iter()
                .map(|q| {
                    let idx = q
                        .options
                        .iter()
                        .position(|o| o.points.get(category) == 5)
                        .unwrap();
                    vec![idx]
                })
                .collect(),
        )
    }

    fn order(results: &[StreamResult]) -> Vec<Category> {
        results.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_max_score_default() {
        assert_eq!(max_score(Catalog::builtin(), &ScoringConfig::default()), 40);
    }

    #[test]
    fn test_all_science_answers() {
        let results = calculate_results(
            Catalog::builtin(),
            &strongest_answers(Category::Science),
            &ScoringConfig::default(),
        )
        .unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].category, Category::Science);
        assert_eq!(results[0].score, 40);
        assert_eq!(results[0].percentage, 100);
        assert_eq!(results[0].stream, "Science");
    }

    #[test]
    fn test_all_arts_answers_use_display_name() {
        let results = calculate_results(
            Catalog::builtin(),
            &strongest_answers(Category::Arts),
            &ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(results[0].category, Category::Arts);
        assert_eq!(results[0].stream, "Arts/Humanities");
        assert_eq!(results[0].score, 40);
    }

    #[test]
    fn test_empty_answers_keep_definition_order() {
        let results = calculate_results(
            Catalog::builtin(),
            &AnswerSet::default(),
            &ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(order(&results), Category::ALL.to_vec());
        assert!(results.iter().all(|r| r.score == 0 && r.percentage == 0));
    }

    #[test]
    fn test_tie_keeps_definition_order() {
        // Q1 option 2 (1,2,5,1) + Q2 option 1 (5,1,1,2): science 6, commerce 3, arts 6, vocational 3
        let answers = AnswerSet::new(vec![vec![1], vec![0]]);
        let results =
            calculate_results(Catalog::builtin(), &answers, &ScoringConfig::default()).unwrap();
        assert_eq!(
            order(&results),
            vec![
                Category::Science,
                Category::Arts,
                Category::Commerce,
                Category::Vocational
            ]
        );
        assert_eq!(results[0].score, 6);
        assert_eq!(results[1].score, 6);
    }

    #[test]
    fn test_multi_select_accumulates() {
        let answers = AnswerSet::new(vec![vec![0, 3]]);
        let totals = category_totals(Catalog::builtin(), &answers).unwrap();
        // (5,2,1,2) + (3,1,1,5)
        assert_eq!(totals, PointVector::new(8, 3, 2, 7));
    }

    #[test]
    fn test_percentage_rounding() {
        let answers = AnswerSet::new(vec![vec![0]]); // science 5 of 40
        let results =
            calculate_results(Catalog::builtin(), &answers, &ScoringConfig::default()).unwrap();
        for r in &results {
            let expected = (f64::from(r.score) / 40.0 * 100.0).round() as u32;
            assert_eq!(r.percentage, expected);
        }
        // 5/40 = 12.5% rounds half up
        assert_eq!(results[0].percentage, 13);
    }

    #[test]
    fn test_single_selection_scores_within_bounds() {
        let catalog = Catalog::builtin();
        for option in 0..4 {
            let answers = AnswerSet::new(vec![vec![option]; catalog.question_count()]);
            let results = calculate_results(catalog, &answers, &ScoringConfig::default()).unwrap();
            for r in &results {
                assert!(r.score <= 40, "{} scored {}", r.stream, r.score);
            }
        }
    }

    #[test]
    fn test_sorted_descending() {
        let answers = AnswerSet::new(vec![vec![2], vec![2], vec![2], vec![3]]);
        let results =
            calculate_results(Catalog::builtin(), &answers, &ScoringConfig::default()).unwrap();
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_invalid_answers_rejected() {
        let answers = AnswerSet::new(vec![vec![7]]);
        let err = calculate_results(Catalog::builtin(), &answers, &ScoringConfig::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::OptionOutOfRange { .. }));
    }

    #[test]
    fn test_custom_max_option_weight() {
        let config = ScoringConfig {
            max_option_weight: Some(10),
        };
        let results = calculate_results(
            Catalog::builtin(),
            &strongest_answers(Category::Commerce),
            &config,
        )
        .unwrap();
        assert_eq!(results[0].category, Category::Commerce);
        assert_eq!(results[0].percentage, 50);
    }

    #[test]
    fn test_max_score_saturates_on_huge_weight() {
        let config = ScoringConfig {
            max_option_weight: Some(1_000_000_000),
        };
        assert_eq!(max_score(Catalog::builtin(), &config), u32::MAX);

        let results = calculate_results(
            Catalog::builtin(),
            &strongest_answers(Category::Science),
            &config,
        )
        .unwrap();
        assert_eq!(results[0].percentage, 0);
    }

    #[test]
    fn test_percentage_zero_max() {
        assert_eq!(percentage(10, 0), 0);
    }
}
