//! Static reference data: question bank, stream metadata, and the college list.

mod data;
pub mod types;
pub mod validation;

pub use types::{
    Category, College, CollegeType, Fee, PointVector, Question, QuizOption, StreamColor,
    StreamInfo,
};
pub use validation::validate_catalog;

use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    questions: data::questions(),
    streams: data::streams(),
    stream_courses: data::stream_courses(),
    colleges: data::colleges(),
});

/// Immutable datasets consumed by the scoring engine and the directory filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub streams: Vec<StreamInfo>,
    pub stream_courses: Vec<(Category, Vec<String>)>,
    pub colleges: Vec<College>,
}

impl Catalog {
    /// The built-in datasets, constructed once per process
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn stream(&self, category: Category) -> Option<&StreamInfo> {
        self.streams.iter().find(|s| s.category == category)
    }

    /// Courses the college picker offers for a stream (empty if none are mapped)
    pub fn courses_for_stream(&self, category: Category) -> &[String] {
        self.stream_courses
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, courses)| courses.as_slice())
            .unwrap_or(&[])
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
