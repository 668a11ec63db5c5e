use serde::{Deserialize, Serialize};

use crate::catalog::Question;
use crate::error::ValidationError;

/// Selected option indices (0-based) for each question, in question-bank order.
///
/// Entries may be empty, and the set may be shorter than the bank: trailing
/// questions without an entry count as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: Vec<Vec<usize>>,
}

impl AnswerSet {
    pub fn new(selections: Vec<Vec<usize>>) -> Self {
        Self { selections }
    }

    /// An answer set with an empty selection for each of `question_count` questions
    pub fn empty(question_count: usize) -> Self {
        Self {
            selections: vec![Vec::new(); question_count],
        }
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Selection for a question; missing entries read as no selection
    pub fn selection(&self, question: usize) -> &[usize] {
        self.selections
            .get(question)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selections(&self) -> &[Vec<usize>] {
        &self.selections
    }

    /// Replace the selection for one question, growing the set if needed
    pub fn set_selection(&mut self, question: usize, selection: Vec<usize>) {
        if self.selections.len() <= question {
            self.selections.resize(question + 1, Vec::new());
        }
        self.selections[question] = selection;
    }

    /// Number of questions with at least one selected option
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| !s.is_empty()).count()
    }

    /// Check the shape of the answer set against the question bank.
    pub fn validate(&self, questions: &[Question]) -> Result<(), ValidationError> {
        if self.selections.len() > questions.len() {
            return Err(ValidationError::TooManyAnswers {
                got: self.selections.len(),
                expected: questions.len(),
            });
        }

        for (qi, (selection, question)) in self.selections.iter().zip(questions).enumerate() {
            for (pos, &option) in selection.iter().enumerate() {
                if option >= question.options.len() {
                    return Err(ValidationError::OptionOutOfRange {
                        question: qi + 1,
                        option: option + 1,
                        available: question.options.len(),
                    });
                }
                if selection[..pos].contains(&option) {
                    return Err(ValidationError::DuplicateOption {
                        question: qi + 1,
                        option: option + 1,
                    });
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<Vec<usize>>> for AnswerSet {
    fn from(selections: Vec<Vec<usize>>) -> Self {
        Self::new(selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_shorter_set_is_valid() {
        let answers = AnswerSet::new(vec![vec![0], vec![1, 2]]);
        assert!(answers.validate(&Catalog::builtin().questions).is_ok());
        assert_eq!(answers.selection(5), &[] as &[usize]);
    }

    #[test]
    fn test_too_many_entries() {
        let answers = AnswerSet::new(vec![vec![0]; 9]);
        let err = answers.validate(&Catalog::builtin().questions).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManyAnswers {
                got: 9,
                expected: 8
            }
        );
    }

    #[test]
    fn test_option_out_of_range() {
        let answers = AnswerSet::new(vec![vec![0], vec![4]]);
        let err = answers.validate(&Catalog::builtin().questions).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OptionOutOfRange {
                question: 2,
                option: 5,
                available: 4
            }
        );
        assert_eq!(
            err.to_string(),
            "question 2: option 5 does not exist (question has 4 options)"
        );
    }

    #[test]
    fn test_duplicate_option() {
        let answers = AnswerSet::new(vec![vec![1, 3, 1]]);
        let err = answers.validate(&Catalog::builtin().questions).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateOption {
                question: 1,
                option: 2
            }
        );
    }

    #[test]
    fn test_set_selection_grows() {
        let mut answers = AnswerSet::default();
        answers.set_selection(2, vec![3]);
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.answered_count(), 1);
        assert_eq!(answers.selection(2), &[3]);
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let answers = AnswerSet::new(vec![vec![0], vec![], vec![1, 2]]);
        assert_eq!(serde_json::to_string(&answers).unwrap(), "[[0],[],[1,2]]");
    }
}
