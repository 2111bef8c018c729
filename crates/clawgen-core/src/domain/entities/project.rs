//! Project identity: the normalized name, basics, gateway link and modules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::Database;

/// Fallback name when nothing usable can be derived.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Default OpenClaw gateway address.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:18789";

/// Lower-case `raw`, collapse every run of characters outside `[a-z0-9]` into
/// one hyphen and trim hyphens from both ends.
///
/// Idempotent: `normalize_name(&normalize_name(x)) == normalize_name(x)`.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for c in raw.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// `"weather-bot"` -> `"Weather Bot"`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A normalized, non-empty kebab-case project identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Normalize `raw` and reject names that normalize to nothing.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_name(raw);
        if normalized.is_empty() {
            return Err(DomainError::InvalidProjectName {
                raw: raw.to_string(),
                reason: "contains no letters or digits".into(),
            });
        }
        Ok(Self(normalized))
    }

    /// Name derived from a directory basename, falling back to
    /// [`DEFAULT_PROJECT_NAME`].
    pub fn from_basename(basename: Option<&str>) -> Self {
        basename
            .and_then(|b| Self::parse(b).ok())
            .unwrap_or_else(|| Self(DEFAULT_PROJECT_NAME.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn title(&self) -> String {
        title_case(&self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project basics. Every field is optional until collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: Option<ProjectName>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl ProjectInfo {
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.description.is_some() && self.author.is_some()
    }
}

/// Connection details for the OpenClaw gateway.
///
/// An empty `token` means the gateway accepts unauthenticated calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    pub url: String,
    #[serde(default)]
    pub token: String,
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Capability toggles selected during `init`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modules {
    pub skill: bool,
    pub plugin: bool,
    pub web: bool,
    pub oauth: bool,
    #[serde(default)]
    pub database: Database,
}

impl Modules {
    /// Human labels of the enabled modules, in a fixed order.
    pub fn enabled(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.skill {
            out.push("skill".to_string());
        }
        if self.plugin {
            out.push("plugin".to_string());
        }
        if self.web {
            out.push("web".to_string());
        }
        if self.oauth {
            out.push("oauth".to_string());
        }
        if self.database.is_enabled() {
            out.push(format!("database ({})", self.database));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_runs_and_trims() {
        assert_eq!(normalize_name("My  Cool_App!!"), "my-cool-app");
        assert_eq!(normalize_name("--Weather Bot--"), "weather-bot");
        assert_eq!(normalize_name("notes2"), "notes2");
        assert_eq!(normalize_name("Café Über"), "caf-ber");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["A b C", "__x__", "already-fine", "  ", "Ωmega 7", "a--b"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn empty_normalization_is_rejected() {
        assert!(matches!(
            ProjectName::parse("!!!"),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(ProjectName::parse("").is_err());
    }

    #[test]
    fn basename_falls_back_to_default() {
        assert_eq!(ProjectName::from_basename(Some("out")).as_str(), "out");
        assert_eq!(
            ProjectName::from_basename(Some("...")).as_str(),
            DEFAULT_PROJECT_NAME
        );
        assert_eq!(ProjectName::from_basename(None).as_str(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn deserialization_normalizes_and_validates() {
        let name: ProjectName = serde_json::from_str("\"Weather Bot\"").unwrap();
        assert_eq!(name.as_str(), "weather-bot");
        assert!(serde_json::from_str::<ProjectName>("\"???\"").is_err());
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("weather-bot"), "Weather Bot");
        assert_eq!(title_case("notes2-skill"), "Notes2 Skill");
    }

    #[test]
    fn modules_list_enabled_in_order() {
        let modules = Modules {
            web: true,
            oauth: true,
            database: Database::Sqlite,
            ..Modules::default()
        };
        assert_eq!(modules.enabled(), ["web", "oauth", "database (sqlite)"]);
    }
}
