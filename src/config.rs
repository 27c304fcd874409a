use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::seo_analyzer::EngineConfig;

/// Configuration file structure that mirrors CLI arguments
/// All fields are optional to allow partial configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target keywords the pages should rank for
    pub keywords: Option<Vec<String>>,

    /// Brand name expected in page titles
    pub brand: Option<String>,

    /// Public URL the pages are served from
    pub base_url: Option<String>,

    /// The site publishes a sitemap
    pub sitemap: Option<bool>,

    /// Output format: text or json
    pub output: Option<String>,

    /// Save report to file
    pub save: Option<String>,

    /// Verbose output
    pub verbose: Option<bool>,

    /// Number of input files loaded concurrently
    pub concurrency: Option<usize>,
}

/// Configuration file format based on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                _ => None,
            })
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;

        let config = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Get the default configuration file paths to check (in order of priority)
    /// Returns paths in order: current directory, user config directory
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
            for ext in format.extensions() {
                paths.push(PathBuf::from(format!("pagescore.{}", ext)));
            }
        }

        // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(config_home) = config_home {
            let config_dir = config_home.join("pagescore");
            for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
                for ext in format.extensions() {
                    paths.push(config_dir.join(format!("config.{}", ext)));
                }
            }
        }

        paths
    }

    /// Try to load configuration from default paths
    /// Returns the first configuration file found, or None if no config exists
    pub fn from_default_paths() -> Result<Option<Self>> {
        for path in Self::default_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Using config file");
                return Ok(Some(Self::from_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Load the explicit `--config` file if given, otherwise search the default paths
    pub fn load(explicit: Option<&str>) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Ok(Some(Self::from_file(Path::new(path))?)),
            None => Self::from_default_paths(),
        }
    }

    /// Merge this configuration with CLI arguments
    /// CLI arguments take precedence over config file values
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        Cli {
            inputs: cli.inputs.clone(),
            keywords: if !cli.keywords.is_empty() {
                cli.keywords.clone()
            } else {
                self.keywords.clone().unwrap_or_default()
            },
            brand: cli.brand.clone().or_else(|| self.brand.clone()),
            base_url: cli.base_url.clone().or_else(|| self.base_url.clone()),
            sitemap: if cli.sitemap {
                cli.sitemap
            } else {
                self.sitemap.unwrap_or(cli.sitemap)
            },
            output: cli.output.clone().or_else(|| self.output.clone()),
            save: cli.save.clone().or_else(|| self.save.clone()),
            verbose: if cli.verbose {
                cli.verbose
            } else {
                self.verbose.unwrap_or(cli.verbose)
            },
            concurrency: cli.concurrency.or(self.concurrency),
            config: cli.config.clone(),
        }
    }
}

impl Cli {
    /// Engine settings derived from the (merged) arguments
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(&self.keywords, self.brand.as_deref().unwrap_or_default())
    }
}
