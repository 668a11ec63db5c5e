use serde::{Deserialize, Serialize};

use crate::directory::{FilterCriteria, Selection, SortKey};
use crate::error::ValidationError;
use crate::profile::ClassLevel;
use crate::scoring::ScoringConfig;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// profile:
///   name: Asha
///   class_level: "12"
///   district: Srinagar
/// scoring:
///   max_option_weight: 5
/// directory:
///   sort: fees
///   district: all
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileDefaults>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<DirectoryConfig>,
}

/// Values used to pre-fill the profile
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_level: Option<ClassLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// Default college directory filters
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    /// "name", "fees" or "rating" (default: rating)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Course name or "all"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    /// District name or "all"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

impl DirectoryConfig {
    /// Starting filter criteria built from the configured defaults
    pub fn criteria(&self) -> Result<FilterCriteria, ValidationError> {
        Ok(FilterCriteria {
            search: String::new(),
            course: match &self.course {
                Some(c) => Selection::parse(c)?,
                None => Selection::All,
            },
            district: match &self.district {
                Some(d) => Selection::parse(d)?,
                None => Selection::All,
            },
            sort: match &self.sort {
                Some(s) => s.parse::<SortKey>()?,
                None => SortKey::default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
profile:
  name: Asha
  class_level: "10"
  district: Srinagar
scoring:
  max_option_weight: 5
directory:
  sort: fees
  course: BCA
  district: all
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let profile = config.profile.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.class_level, Some(ClassLevel::Tenth));
        assert_eq!(config.scoring.unwrap().max_option_weight, Some(5));

        let criteria = config.directory.unwrap().criteria().unwrap();
        assert_eq!(criteria.sort, SortKey::Fees);
        assert_eq!(criteria.course, Selection::Only("BCA".to_string()));
        assert_eq!(criteria.district, Selection::All);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = "queries: []\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_directory_criteria_defaults() {
        let criteria = DirectoryConfig::default().criteria().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_directory_criteria_bad_sort() {
        let directory = DirectoryConfig {
            sort: Some("cheapest".to_string()),
            ..Default::default()
        };
        assert_eq!(
            directory.criteria().unwrap_err(),
            ValidationError::UnknownSortKey("cheapest".to_string())
        );
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            profile: Some(ProfileDefaults {
                name: Some("Ravi".to_string()),
                class_level: Some(ClassLevel::Twelfth),
                district: Some("Kathua".to_string()),
            }),
            scoring: None,
            directory: Some(DirectoryConfig {
                sort: Some("name".to_string()),
                course: None,
                district: None,
            }),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
