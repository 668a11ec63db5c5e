use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Sentinel meaning "do not filter on this field".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Fees,
    #[default]
    Rating,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "fees" => Ok(SortKey::Fees),
            "rating" => Ok(SortKey::Rating),
            _ => Err(ValidationError::UnknownSortKey(s.trim().to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Fees => f.write_str("fees"),
            SortKey::Rating => f.write_str("rating"),
        }
    }
}

/// A filter that is either disabled or restricted to one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a picker value. `all` (and the legacy `all-courses` /
    /// `all-districts`) disable the filter; other `all-*` values are rejected.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let lower = trimmed.to_lowercase();
        match lower.as_str() {
            "" | ALL | "all-courses" | "all-districts" => Ok(Selection::All),
            _ if lower.starts_with("all-") => {
                Err(ValidationError::UnknownSentinel(trimmed.to_string()))
            }
            _ => Ok(Selection::Only(trimmed.to_string())),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(ALL))
    }
}

impl FromStr for Selection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selection::parse(s)
    }
}

/// Search text, course, district, and sort order used to narrow the college list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub course: Selection,
    pub district: Selection,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// True if any filter narrows the list (sort order does not count)
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.course.is_all() || !self.district.is_all()
    }

    /// Reset every filter and the sort order to their defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("Fees".parse::<SortKey>().unwrap(), SortKey::Fees);
        assert_eq!(" rating ".parse::<SortKey>().unwrap(), SortKey::Rating);
    }

    #[test]
    fn test_sort_key_unknown() {
        let err = "price".parse::<SortKey>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownSortKey("price".to_string()));
    }

    #[test]
    fn test_default_sort_is_rating() {
        assert_eq!(FilterCriteria::default().sort, SortKey::Rating);
    }

    #[test]
    fn test_selection_sentinels() {
        assert_eq!(Selection::parse("all").unwrap(), Selection::All);
        assert_eq!(Selection::parse("ALL").unwrap(), Selection::All);
        assert_eq!(Selection::parse("all-courses").unwrap(), Selection::All);
        assert_eq!(Selection::parse("all-districts").unwrap(), Selection::All);
        assert_eq!(Selection::parse("").unwrap(), Selection::All);
    }

    #[test]
    fn test_selection_value() {
        let selection = Selection::parse(" Jammu ").unwrap();
        assert_eq!(selection.value(), Some("Jammu"));
        assert_eq!(selection.to_string(), "Jammu");
    }

    #[test]
    fn test_selection_unknown_sentinel() {
        let err = Selection::parse("all-states").unwrap_err();
        assert_eq!(err, ValidationError::UnknownSentinel("all-states".to_string()));
    }

    #[test]
    fn test_has_active_filters() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.has_active_filters());

        criteria.sort = SortKey::Fees;
        assert!(!criteria.has_active_filters());

        criteria.search = " ".to_string();
        assert!(criteria.has_active_filters());

        criteria.search.clear();
        criteria.district = Selection::Only("Kathua".to_string());
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut criteria = FilterCriteria {
            search: "govt".to_string(),
            course: Selection::Only("BCA".to_string()),
            district: Selection::Only("Jammu".to_string()),
            sort: SortKey::Name,
        };
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
