use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemadocError};

pub const CONFIG_FILE: &str = "schemadoc.toml";

/// Starter config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# schemadoc configuration file
# Location: ./schemadoc.toml
# Command-line flags take precedence over these values.

[output]
# Generated document
# file = "api.htm"

# Wrapper document carrying the INSERT_XSD / END_XSD markers.
# Omit to write the bare fragment to the output file.
# template = "template.htm"

[schemas]
# Root directory holding the category subdirectories
# dir = "resources/schemas"
"#;

/// Tool configuration, loaded from `schemadoc.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub schemas: SchemasConfig,
}

/// Output document settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Generated document path
    pub file: Option<PathBuf>,
    /// Wrapper document with splice markers
    pub template: Option<PathBuf>,
}

/// Schema source settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchemasConfig {
    /// Root directory holding the category subdirectories
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `path`; an absent file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| SchemadocError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Write the commented starter config unless `path` already exists.
    ///
    /// Returns `true` when the file was created.
    pub fn init(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert!(config.output.file.is_none());
        assert!(config.output.template.is_none());
        assert!(config.schemas.dir.is_none());
    }

    #[test]
    fn loads_configured_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[output]\nfile = \"out.htm\"\ntemplate = \"wrap.htm\"\n[schemas]\ndir = \"schemas\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.file, Some(PathBuf::from("out.htm")));
        assert_eq!(config.output.template, Some(PathBuf::from("wrap.htm")));
        assert_eq!(config.schemas.dir, Some(PathBuf::from("schemas")));
    }

    #[test]
    fn partial_config_fills_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[schemas]\ndir = \"schemas\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.output.file.is_none());
        assert_eq!(config.schemas.dir, Some(PathBuf::from("schemas")));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not [valid toml").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SchemadocError::ConfigParse { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn init_creates_starter_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        assert!(Config::init(&path).unwrap());
        assert!(!Config::init(&path).unwrap());

        // The starter must itself be loadable.
        let config = Config::load(&path).unwrap();
        assert!(config.schemas.dir.is_none());
    }
}
