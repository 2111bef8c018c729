//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`CollectorDefaults`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `CLAWGEN_*` environment variables (`CLAWGEN_DEFAULTS__AUTHOR=...`)
//! 2. Config file (`--config` or the platform config directory)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use clawgen_core::{
    application::CollectorDefaults,
    domain::{TechStack, entities::project::DEFAULT_GATEWAY_URL},
};

use crate::error::{CliError, CliResult};

/// File name used when no platform config directory is available.
const FALLBACK_CONFIG: &str = ".clawgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults offered by prompts and used by `--quick`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: String,
    /// Description template; `{name}` and `{type}` are substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub gateway_url: String,
    pub tech_stack: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: "developer".into(),
            description: None,
            gateway_url: DEFAULT_GATEWAY_URL.into(),
            tech_stack: TechStack::default().as_str().into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("CLAWGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.clawgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("ai", "openclaw", "clawgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG))
    }

    /// Prompt defaults for a run targeting `root`.
    pub fn collector_defaults(&self, root: &Path) -> CliResult<CollectorDefaults> {
        let tech_stack =
            TechStack::from_str(&self.defaults.tech_stack).map_err(|e| CliError::ConfigError {
                message: format!("defaults.tech_stack: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(CollectorDefaults {
            basename: basename(root),
            author: self.defaults.author.clone(),
            description: self.defaults.description.clone(),
            gateway_url: self.defaults.gateway_url.clone(),
            tech_stack,
        })
    }

    /// Look up a dotted key, as shown by `config list`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.author" => Some(self.defaults.author.clone()),
            "defaults.description" => Some(self.defaults.description.clone().unwrap_or_default()),
            "defaults.gateway_url" => Some(self.defaults.gateway_url.clone()),
            "defaults.tech_stack" => Some(self.defaults.tech_stack.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }

    /// Every key accepted by [`Self::get`].
    pub const KEYS: [&'static str; 5] = [
        "defaults.author",
        "defaults.description",
        "defaults.gateway_url",
        "defaults.tech_stack",
        "output.no_color",
    ];
}

/// Final path component of `root`, resolved against the working directory
/// so that `.` names the directory it stands for.
fn basename(root: &Path) -> Option<String> {
    std::path::absolute(root)
        .ok()
        .and_then(|p| {
            p.components()
                .filter(|c| matches!(c, std::path::Component::Normal(_)))
                .next_back()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_author_is_developer() {
        assert_eq!(AppConfig::default().defaults.author, "developer");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nauthor = \"ada\"\ntech_stack = \"vite-react\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.author, "ada");
        assert_eq!(cfg.defaults.tech_stack, "vite-react");
        assert_eq!(cfg.defaults.gateway_url, DEFAULT_GATEWAY_URL);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&tmp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn collector_defaults_use_the_directory_name() {
        let defaults = AppConfig::default()
            .collector_defaults(Path::new("/work/weather-bot"))
            .unwrap();
        assert_eq!(defaults.basename.as_deref(), Some("weather-bot"));
        assert_eq!(defaults.tech_stack, TechStack::NextJs);
    }

    #[test]
    fn basename_ignores_trailing_dots() {
        assert_eq!(basename(Path::new("/work/app/.")).as_deref(), Some("app"));
    }

    #[test]
    fn unknown_tech_stack_is_a_config_error() {
        let mut cfg = AppConfig::default();
        cfg.defaults.tech_stack = "angular".into();
        assert!(matches!(
            cfg.collector_defaults(Path::new("/x")),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert!(cfg.get("does.not.exist").is_none());
    }
}
