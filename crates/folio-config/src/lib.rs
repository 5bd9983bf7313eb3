//! Configuration for the folio front end.
//!
//! Layered with figment: built-in defaults, then the TOML file at the
//! platform config directory, then `FOLIO_`-prefixed environment variables
//! (`__` separates nested keys, e.g. `FOLIO_API__URL`). The result is
//! translated into a `folio_core::PortfolioConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use folio_core::PortfolioConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Show create/delete forms and the contact inbox.
    #[serde(default)]
    pub admin: bool,

    #[serde(default)]
    pub api: ApiConfig,

    /// Copy for the hero and contact sections.
    #[serde(default)]
    pub owner: OwnerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Content store base URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "http://localhost:8000".into()
}
fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnerConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_headline")]
    pub headline: String,

    #[serde(default = "default_summary")]
    pub summary: String,

    /// Shown on the contact card when set.
    #[serde(default)]
    pub email: Option<String>,

    /// LinkedIn profile shown on the contact card when set.
    #[serde(default)]
    pub linkedin: Option<String>,

    /// Path or URL of a downloadable CV.
    #[serde(default)]
    pub cv: Option<String>,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            headline: default_headline(),
            summary: default_summary(),
            email: None,
            linkedin: None,
            cv: None,
        }
    }
}

fn default_name() -> String {
    "Portfolio".into()
}
fn default_headline() -> String {
    "Software Engineer & Creative Developer".into()
}
fn default_summary() -> String {
    "Building elegant solutions to complex problems.".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "folio", "folio").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("folio");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FOLIO_").split("__"))
}

/// Load the full Config from the default file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment_for(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build a `PortfolioConfig`. The admin flag is read once here.
    pub fn to_portfolio_config(&self) -> Result<PortfolioConfig, ConfigError> {
        let url: url::Url = self.api.url.parse().map_err(|_| ConfigError::Validation {
            field: "api.url".into(),
            reason: format!("invalid URL: {}", self.api.url),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api.url".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(PortfolioConfig::new(url)
            .with_admin(self.admin)
            .with_timeout(Duration::from_secs(self.api.timeout)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        figment::Jail::expect_with(|jail| {
            let config = load_config_from(&jail.directory().join("absent.toml")).unwrap();
            assert!(!config.admin);
            assert_eq!(config.api.url, "http://localhost:8000");
            assert_eq!(config.api.timeout, 30);
            assert_eq!(config.owner.headline, "Software Engineer & Creative Developer");
            Ok(())
        });
    }

    #[test]
    fn file_values_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    admin = true

                    [api]
                    url = "https://cms.example.com/api"

                    [owner]
                    name = "Ada"
                    email = "ada@example.com"
                "#,
            )?;
            let config = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert!(config.admin);
            assert_eq!(config.api.url, "https://cms.example.com/api");
            assert_eq!(config.api.timeout, 30);
            assert_eq!(config.owner.name, "Ada");
            assert_eq!(config.owner.email.as_deref(), Some("ada@example.com"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[api]\nurl = \"http://file:8000\"\n")?;
            jail.set_env("FOLIO_API__URL", "http://env:9000");
            jail.set_env("FOLIO_ADMIN", "true");
            let config = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(config.api.url, "http://env:9000");
            assert!(config.admin);
            Ok(())
        });
    }

    #[test]
    fn translation_validates_url() {
        let mut config = Config {
            admin: true,
            ..Config::default()
        };
        config.api.timeout = 5;

        let portfolio = config.to_portfolio_config().unwrap();
        assert!(portfolio.admin);
        assert_eq!(portfolio.timeout, Duration::from_secs(5));
        assert_eq!(portfolio.api_url.as_str(), "http://localhost:8000/");

        config.api.url = "not a url".into();
        assert!(matches!(
            config.to_portfolio_config(),
            Err(ConfigError::Validation { .. })
        ));

        config.api.url = "ftp://example.com".into();
        assert!(config.to_portfolio_config().is_err());
    }

    #[test]
    fn save_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.owner.name = "Grace".into();
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.owner.name, "Grace");
    }
}
