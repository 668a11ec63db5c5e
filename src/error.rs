//! Validation errors raised at the boundary of the scoring engine and the
//! directory filter.
//!
//! These never come from the built-in data; they describe caller mistakes
//! (a malformed answer set, an unknown sort key) that must stop the
//! interaction instead of producing a plausible but wrong answer.
//! Question and option numbers in these errors are 1-based, as shown to students.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// More selection sets than questions in the bank.
    #[error("answer set has {got} entries but the quiz has only {expected} questions")]
    TooManyAnswers { got: usize, expected: usize },

    /// An option index beyond the question's option list.
    #[error("question {question}: option {option} does not exist (question has {available} options)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        available: usize,
    },

    /// The same option selected twice for one question.
    #[error("question {question}: option {option} selected more than once")]
    DuplicateOption { question: usize, option: usize },

    /// Tried to move past a question without selecting anything.
    #[error("question {question} has no selection yet")]
    Unanswered { question: usize },

    /// The quiz has already been completed.
    #[error("quiz is already complete")]
    QuizComplete,

    #[error("unknown sort key '{0}' (expected one of: name, fees, rating)")]
    UnknownSortKey(String),

    #[error("unknown filter value '{0}' (use 'all' to disable the filter)")]
    UnknownSentinel(String),
}
