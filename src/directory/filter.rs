use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use super::criteria::{FilterCriteria, SortKey};
use crate::catalog::{Catalog, Category, College};

/// Apply search, course and district filters, then sort.
/// The dataset itself is left untouched.
pub fn filter_colleges<'a>(colleges: &'a [College], criteria: &FilterCriteria) -> Vec<&'a College> {
    let search = criteria.search.to_lowercase();

    let mut filtered: Vec<&College> = colleges
        .iter()
        .filter(|college| {
            search.is_empty()
                || college.name.to_lowercase().contains(&search)
                || college.district.to_lowercase().contains(&search)
        })
        .filter(|college| match criteria.course.value() {
            Some(course) => college.offers_course(course),
            None => true,
        })
        .filter(|college| match criteria.district.value() {
            Some(district) => college.district == district,
            None => true,
        })
        .collect();

    sort_colleges(&mut filtered, criteria.sort);

    tracing::debug!(
        search = %criteria.search,
        course = %criteria.course,
        district = %criteria.district,
        sort = %criteria.sort,
        matched = filtered.len(),
        total = colleges.len(),
        "filtered colleges"
    );

    filtered
}

/// Stable sort: colleges that compare equal keep their dataset order
pub fn sort_colleges(colleges: &mut [&College], key: SortKey) {
    match key {
        SortKey::Fees => colleges.sort_by(|a, b| a.fees.annual.cmp(&b.fees.annual)),
        SortKey::Rating => colleges.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => colleges.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Case-insensitive ordering, with a case-sensitive tie-break so the result is total
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Distinct districts, ascending
pub fn distinct_districts(colleges: &[College]) -> Vec<&str> {
    colleges
        .iter()
        .map(|c| c.district.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Courses to offer in the course picker.
///
/// With a stream, the stream's course table; otherwise every course offered by
/// any college, in first-seen order.
pub fn available_courses(catalog: &Catalog, stream: Option<Category>) -> Vec<&str> {
    match stream {
        Some(category) => catalog
            .courses_for_stream(category)
            .iter()
            .map(String::as_str)
            .collect(),
        None => {
            let mut seen = HashSet::new();
            catalog
                .colleges
                .iter()
                .flat_map(|c| c.courses.iter())
                .map(String::as_str)
                .filter(|course| seen.insert(*course))
                .collect()
        }
    }
}
