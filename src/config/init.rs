use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{Config, DirectoryConfig, ProfileDefaults};
use crate::directory::SortKey;
use crate::profile::{ClassLevel, DISTRICTS};
use crate::quiz::prompt::{prompt, prompt_with_default, prompt_yes_no};

/// Run the interactive init wizard to create a config file.
///
/// Returns the path written, or None if the student declined to overwrite
/// an existing file.
pub fn run_init_wizard<R: BufRead, W: Write>(
    default_path: PathBuf,
    input: &mut R,
    output: &mut W,
) -> Result<Option<PathBuf>> {
    writeln!(output)?;
    writeln!(output, "Vidyarthi Saathi Configuration Wizard")?;
    writeln!(output, "=====================================")?;
    writeln!(output)?;

    // 1. Profile defaults
    writeln!(output, "These answers pre-fill your profile before each quiz. Leave blank to skip.")?;
    let name = prompt(input, output, "Your name: ")?.filter(|n| !n.is_empty());

    let class_level = loop {
        let level = prompt_with_default(input, output, "Class level (10 or 12)", "12")?;
        match level.parse::<ClassLevel>() {
            Ok(l) => break l,
            Err(e) => writeln!(output, "  Invalid: {}. Try again.", e)?,
        }
    };

    let district = loop {
        let Some(d) = prompt(input, output, "Your district: ")? else {
            break None;
        };
        if d.is_empty() {
            break None;
        }
        match DISTRICTS.iter().find(|known| known.eq_ignore_ascii_case(&d)) {
            Some(known) => break Some(known.to_string()),
            None => writeln!(
                output,
                "  Unknown district '{}'. Choose one of: {}",
                d,
                DISTRICTS.join(", ")
            )?,
        }
    };

    // 2. Directory defaults
    writeln!(output)?;
    let sort = loop {
        let s = prompt_with_default(input, output, "Sort colleges by (name, fees, rating)", "rating")?;
        match s.parse::<SortKey>() {
            Ok(key) => break key,
            Err(e) => writeln!(output, "  Invalid: {}. Try again.", e)?,
        }
    };

    // 3. Config path
    writeln!(output)?;
    let path_str = prompt_with_default(
        input,
        output,
        "Where should the config be saved?",
        &default_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            input,
            output,
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            writeln!(output, "Aborted.")?;
            return Ok(None);
        }
    }

    // 4. Write config
    let config = Config {
        profile: Some(ProfileDefaults {
            name,
            class_level: Some(class_level),
            district,
        }),
        scoring: None,
        directory: Some(DirectoryConfig {
            sort: Some(sort.to_string()),
            course: None,
            district: None,
        }),
    };
    save_config(&config_path, &config)?;

    writeln!(output)?;
    writeln!(output, "Config written to {}", config_path.display())?;
    writeln!(output, "Run `vidyarthi-saathi quiz` to get started.")?;

    Ok(Some(config_path))
}

/// Write config YAML atomically, creating parent directories
fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_wizard_writes_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let mut input = Cursor::new("Asha\n11\n10\nDelhi\nsrinagar\nfees\n\n");
        let mut output = Vec::new();

        let written = run_init_wizard(path.clone(), &mut input, &mut output)
            .unwrap()
            .unwrap();
        assert_eq!(written, path);

        let config = load_config(Some(path)).unwrap();
        let profile = config.profile.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.class_level, Some(ClassLevel::Tenth));
        assert_eq!(profile.district.as_deref(), Some("Srinagar"));
        assert_eq!(config.directory.unwrap().sort.as_deref(), Some("fees"));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("invalid class level '11'"));
        assert!(text.contains("Unknown district 'Delhi'"));
    }

    #[test]
    fn test_wizard_keeps_existing_file_when_declined() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "{}\n").unwrap();

        let mut input = Cursor::new("\n\n\n\n\nn\n");
        let mut output = Vec::new();
        let written = run_init_wizard(path.clone(), &mut input, &mut output).unwrap();

        assert!(written.is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
