use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::cli::Cli;

const CONFIG_DIR_NAME: &str = "yt-transcript";
const CONFIG_FILE_NAME: &str = "config.yaml";

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transcript provider settings
    pub provider: ProviderConfig,

    /// Application settings
    pub app: AppConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Scheme and host that watch pages and the player API are fetched from
    pub base_url: String,

    /// Preferred caption languages, highest priority first
    pub languages: Vec<String>,

    /// User agent sent with every request
    pub user_agent: String,

    /// Accept-Language header value
    pub accept_language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Exit with status 1 when the provider fails
    pub fail_on_error: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            languages: vec!["en".to_string()],
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "en-US".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file, the user config file, or defaults.
    ///
    /// Nothing is written back to disk.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and validate a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());

        let content = fs_err::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider.languages.is_empty() {
            anyhow::bail!("At least one caption language must be configured");
        }

        if self.provider.languages.iter().any(|lang| lang.trim().is_empty()) {
            anyhow::bail!("Caption languages must not be blank");
        }

        let base = Url::parse(&self.provider.base_url)
            .with_context(|| format!("Invalid base URL: {}", self.provider.base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!("Base URL must use HTTP or HTTPS protocol");
        }

        Ok(())
    }

    /// Apply command-line overrides
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if !cli.languages.is_empty() {
            self.provider.languages = cli.languages.clone();
        }
        if cli.strict {
            self.app.fail_on_error = true;
        }
        self
    }
}
