//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use porous_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where documents are read from
    pub source: SourceSettings,

    /// Report settings
    pub extractor: ExtractorConfig,
}

/// MongoDB connection target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Server host or URI
    pub server: String,

    /// Database name
    pub database: String,

    /// Collection name
    pub collection: String,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".porous").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and validate a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.source.server = server.clone();
        }
        if let Some(database) = &cli.database {
            self.source.database = database.clone();
        }
        if let Some(collection) = &cli.collection {
            self.source.collection = collection.clone();
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            server: "localhost".to_string(),
            database: "test".to_string(),
            collection: "porous_materials".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.server, "localhost");
        assert_eq!(config.source.database, "test");
        assert_eq!(config.source.collection, "porous_materials");
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let file = config_file(
            "[source]\ndatabase = \"materials\"\n\n[extractor]\nprecision = 4\n",
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.source.database, "materials");
        assert_eq!(config.source.server, "localhost");
        assert_eq!(config.extractor.precision, 4);
        assert_eq!(config.extractor.component, "CO2");
    }

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_extractor_section() {
        let file = config_file("[extractor]\nmaterial_type = \"a,b\"\n");
        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let file = config_file("[source\n");
        assert!(matches!(Config::load(Some(file.path())), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = config_file(
            "[source]\nserver = \"db1\"\ndatabase = \"materials\"\ncollection = \"zeo\"\n",
        );
        let mut config = Config::load(Some(file.path())).unwrap();

        let cli = Cli::try_parse_from(["porous-extract", "-s", "db2", "-c", "mofs"]).unwrap();
        config.apply_cli(&cli);

        assert_eq!(config.source.server, "db2");
        assert_eq!(config.source.database, "materials");
        assert_eq!(config.source.collection, "mofs");
    }
}
