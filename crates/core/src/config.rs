use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Connection settings for the hosting provider's API.
///
/// Everything except the access token has a sensible default, so a config
/// file only ever needs to carry the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub access_token: String,
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_version_path")]
    pub version_path: String,
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_host() -> String {
    "api.netlify.com".to_string()
}

fn default_version_path() -> String {
    "/api/v1/".to_string()
}

impl ClientConfig {
    /// Config with provider defaults for everything but the token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            scheme: default_scheme(),
            host: default_host(),
            version_path: default_version_path(),
        }
    }

    /// Base URL all endpoints hang off of: `{scheme}://{host}{version_path}`.
    ///
    /// `version_path` must carry its surrounding slashes (the default does).
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.version_path)
    }
}

/// Global configuration persisted in the user's home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub provider: ClientConfig,
}

/// Get path to global config file
pub fn config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| Error::ConfigParse("Could not determine home directory".to_string()))?;
    let config_dir = PathBuf::from(home).join(".sitekit");
    fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join("config.toml"))
}

/// Load global config, `None` if no config file exists yet.
pub fn load_config() -> Result<Option<GlobalConfig>> {
    let path = config_path()?;
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<Option<GlobalConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(parse_config_str(&contents)?))
}

/// Parse config from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<GlobalConfig> {
    let config: GlobalConfig = toml::from_str(content)?;
    Ok(config)
}

/// Save global config, returning the path it was written to.
pub fn save_config(config: &GlobalConfig) -> Result<PathBuf> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

fn save_config_to(config: &GlobalConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| Error::ConfigParse(e.to_string()))?;
    fs::write(path, contents)?;
    Ok(())
}
