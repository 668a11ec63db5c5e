pub mod criteria;
pub mod filter;

pub use criteria::{FilterCriteria, Selection, SortKey};
pub use filter::{available_courses, distinct_districts, filter_colleges, sort_colleges};
