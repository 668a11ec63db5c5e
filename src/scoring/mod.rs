pub mod answers;
pub mod config;
pub mod engine;
pub mod validation;

pub use answers::AnswerSet;
pub use config::*;
pub use engine::{calculate_results, category_totals, max_score, StreamResult};
pub use validation::validate_scoring;
