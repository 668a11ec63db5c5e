pub mod prompt;
pub mod session;

pub use prompt::{parse_answer_spec, parse_selection, prompt_profile, run_quiz};
pub use session::{QuizSession, Step};
