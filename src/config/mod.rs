mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{Config, DirectoryConfig, ProfileDefaults};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::DISTRICTS;
use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/vidyarthi-saathi/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("vidyarthi-saathi"))
}

/// Get the default config file path (~/.config/vidyarthi-saathi/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            default_path
        }
    };

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Validate every section of the configuration.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(scoring) = &config.scoring {
        if let Err(scoring_errors) = validate_scoring(scoring) {
            errors.extend(scoring_errors);
        }
    }

    if let Some(directory) = &config.directory {
        if let Err(e) = directory.criteria() {
            errors.push(format!("directory: {}", e));
        }
    }

    if let Some(district) = config.profile.as_ref().and_then(|p| p.district.as_deref()) {
        if !DISTRICTS.contains(&district) {
            errors.push(format!("profile.district: unknown district '{}'", district));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringConfig;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "directory:\n  sort: name\n").unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(
            config.directory.unwrap().sort.as_deref(),
            Some("name")
        );
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "scoring: [not, a, map]\n").unwrap();

        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            profile: Some(ProfileDefaults {
                name: None,
                class_level: None,
                district: Some("Delhi".to_string()),
            }),
            scoring: Some(ScoringConfig {
                max_option_weight: Some(0),
            }),
            directory: Some(DirectoryConfig {
                sort: Some("popularity".to_string()),
                course: None,
                district: None,
            }),
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("scoring.max_option_weight"));
        assert!(errors[1].contains("unknown sort key 'popularity'"));
        assert!(errors[2].contains("profile.district"));
    }
}
