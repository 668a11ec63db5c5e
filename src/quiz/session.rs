use crate::catalog::Question;
use crate::error::ValidationError;
use crate::scoring::AnswerSet;

/// Outcome of moving forward in the quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved to the question at this index
    Advanced(usize),
    /// The last question was answered; the answer set is final
    Completed(AnswerSet),
}

/// Tracks the current question and the answers collected so far.
///
/// The answer set starts empty, fills in one question at a time, and is
/// handed out once when the last question is confirmed.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: &'a [Question],
    current: usize,
    answers: AnswerSet,
    complete: bool,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self {
            questions,
            current: 0,
            answers: AnswerSet::empty(questions.len()),
            complete: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.questions.get(self.current)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Selected options for the current question
    pub fn current_selection(&self) -> &[usize] {
        self.answers.selection(self.current)
    }

    /// Completion percentage counting the current question as in progress
    pub fn progress_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 100;
        }
        (((self.current + 1) as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }

    /// Select an option, or deselect it if already selected
    pub fn toggle(&mut self, option: usize) -> Result<(), ValidationError> {
        if self.complete {
            return Err(ValidationError::QuizComplete);
        }
        let available = self.current_question().map(|q| q.options.len()).unwrap_or(0);
        if option >= available {
            return Err(ValidationError::OptionOutOfRange {
                question: self.current + 1,
                option: option + 1,
                available,
            });
        }

        let mut selection = self.current_selection().to_vec();
        if let Some(pos) = selection.iter().position(|&o| o == option) {
            selection.remove(pos);
        } else {
            selection.push(option);
        }
        self.answers.set_selection(self.current, selection);
        Ok(())
    }

    /// Replace the current question's selection wholesale
    pub fn select(&mut self, options: &[usize]) -> Result<(), ValidationError> {
        if self.complete {
            return Err(ValidationError::QuizComplete);
        }
        let available = self.current_question().map(|q| q.options.len()).unwrap_or(0);
        for (pos, &option) in options.iter().enumerate() {
            if option >= available {
                return Err(ValidationError::OptionOutOfRange {
                    question: self.current + 1,
                    option: option + 1,
                    available,
                });
            }
            if options[..pos].contains(&option) {
                return Err(ValidationError::DuplicateOption {
                    question: self.current + 1,
                    option: option + 1,
                });
            }
        }
        self.answers.set_selection(self.current, options.to_vec());
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        !self.complete && !self.current_selection().is_empty()
    }

    /// Confirm the current question. Refused while it has no selection.
    pub fn next(&mut self) -> Result<Step, ValidationError> {
        if self.complete {
            return Err(ValidationError::QuizComplete);
        }
        if !self.can_advance() {
            return Err(ValidationError::Unanswered {
                question: self.current + 1,
            });
        }

        if self.is_last_question() {
            self.complete = true;
            tracing::debug!(answered = self.answers.answered_count(), "quiz completed");
            return Ok(Step::Completed(self.answers.clone()));
        }

        self.current += 1;
        Ok(Step::Advanced(self.current))
    }

    /// Go back one question. Returns false when already at the first question.
    pub fn previous(&mut self) -> bool {
        if self.complete || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Discard all answers and start over
    pub fn retake(&mut self) {
        self.current = 0;
        self.answers = AnswerSet::empty(self.questions.len());
        self.complete = false;
    }
}
