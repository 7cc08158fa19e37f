//! Configuration file support for dep-slim.
//!
//! Provides YAML-based configuration through `dep-slim.config.yml` files,
//! and the merge of file values with command-line flags.

use anyhow::{bail, Context};
use indexmap::IndexSet;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::adapters::outbound::filesystem::{DEFAULT_LOCKFILE_NAME, DEFAULT_MANIFEST_NAME};
use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-slim.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub dep_filters: Option<Vec<String>>,
    pub lockfile: Option<String>,
    pub manifest: Option<String>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub dep_filters: Vec<String>,
    pub lockfile: String,
    pub manifest: String,
    pub color: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Merge CLI flags over config values.
///
/// Scalars from the CLI win. Filter lists are concatenated (config first)
/// with duplicates removed.
pub fn merge_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => OutputFormat::from_str(name).map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let dep_filters: IndexSet<String> = config
        .dep_filters
        .into_iter()
        .flatten()
        .chain(args.filters.iter().cloned())
        .collect();

    let lockfile = args
        .lockfile
        .clone()
        .or(config.lockfile)
        .unwrap_or_else(|| DEFAULT_LOCKFILE_NAME.to_string());
    let manifest = args
        .manifest
        .clone()
        .or(config.manifest)
        .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());
    validate_file_name("lockfile", &lockfile)?;
    validate_file_name("manifest", &manifest)?;

    Ok(Settings {
        format,
        dep_filters: dep_filters.into_iter().collect(),
        lockfile,
        manifest,
        color: !args.no_color && config.color.unwrap_or(true),
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref filters) = config.dep_filters {
        for (i, filter) in filters.iter().enumerate() {
            if filter.trim().is_empty() {
                bail!(
                    "Invalid config: dep_filters[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a substring matched against package names (e.g., \"@acme/\").",
                    i
                );
            }
        }
    }

    if let Some(ref lockfile) = config.lockfile {
        validate_file_name("lockfile", lockfile)?;
    }
    if let Some(ref manifest) = config.manifest {
        validate_file_name("manifest", manifest)?;
    }
    Ok(())
}

/// Input files are looked up inside the project directory, so only bare names are accepted.
fn validate_file_name(field: &str, name: &str) -> Result<()> {
    let is_bare = !name.trim().is_empty()
        && !name.contains(['/', '\\'])
        && name != "."
        && name != "..";
    if !is_bare {
        bail!(
            "Invalid {} file name: '{}'\n\n\
             💡 Hint: Give a file name inside the project directory; use --path to select the directory.",
            field,
            name
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["dep-slim"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
dep_filters:
  - "@acme/"
  - lodash
lockfile: npm-shrinkwrap.json
color: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(
            config.dep_filters.as_deref(),
            Some(&["@acme/".to_string(), "lodash".to_string()][..])
        );
        assert_eq!(config.lockfile.as_deref(), Some("npm-shrinkwrap.json"));
        assert!(config.manifest.is_none());
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format"));
    }

    #[test]
    fn test_empty_filter_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "dep_filters:\n  - \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("dep_filters[0] must not be empty"));
    }

    #[test]
    fn test_lockfile_with_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "lockfile: ../other/package-lock.json\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid lockfile file name"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "format: json\nexclude_packages: [a]\ncheck_cve: true\n",
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("exclude_packages"));
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_merge_defaults() {
        let settings = merge_settings(&args(&[]), None).unwrap();
        assert_eq!(
            settings,
            Settings {
                format: OutputFormat::Table,
                dep_filters: vec![],
                lockfile: "package-lock.json".to_string(),
                manifest: "package.json".to_string(),
                color: true,
            }
        );
    }

    #[test]
    fn test_merge_cli_wins_over_config() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            lockfile: Some("npm-shrinkwrap.json".to_string()),
            ..Default::default()
        };
        let settings = merge_settings(
            &args(&["--format", "json", "--lockfile", "custom-lock.json"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.lockfile, "custom-lock.json");
    }

    #[test]
    fn test_merge_uses_config_when_cli_silent() {
        let config = ConfigFile {
            format: Some("md".to_string()),
            manifest: Some("app.json".to_string()),
            color: Some(false),
            ..Default::default()
        };
        let settings = merge_settings(&args(&[]), Some(config)).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.manifest, "app.json");
        assert!(!settings.color);
    }

    #[test]
    fn test_merge_filters_config_first_deduplicated() {
        let config = ConfigFile {
            dep_filters: Some(vec!["@acme/".to_string(), "lodash".to_string()]),
            ..Default::default()
        };
        let settings =
            merge_settings(&args(&["-F", "lodash", "-F", "react"]), Some(config)).unwrap();

        assert_eq!(settings.dep_filters, vec!["@acme/", "lodash", "react"]);
    }

    #[test]
    fn test_merge_no_color_flag() {
        let config = ConfigFile {
            color: Some(true),
            ..Default::default()
        };
        let settings = merge_settings(&args(&["--no-color"]), Some(config)).unwrap();
        assert!(!settings.color);
    }

    #[test]
    fn test_merge_rejects_cli_path_as_lockfile() {
        let result = merge_settings(&args(&["--lockfile", "sub/package-lock.json"]), None);
        assert!(result.is_err());
    }
}
