use std::collections::BTreeMap;

use crate::domain::entities::options::ScaffoldConfig;
use crate::domain::entities::project::ProjectName;

/// Variables available to file templates as `{{NAME}}` placeholders.
///
/// Standard variables derived from the project name:
///
/// | Variable | `weather-bot` |
/// |----------|---------------|
/// | `PROJECT_NAME` | `weather-bot` |
/// | `PROJECT_TITLE` | `Weather Bot` |
/// | `PROJECT_NAME_SNAKE` | `weather_bot` |
/// | `PROJECT_NAME_PASCAL` | `WeatherBot` |
///
/// The map is ordered so rendering never depends on hash iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(name: &ProjectName) -> Self {
        let mut variables = BTreeMap::new();
        let title = name.title();
        variables.insert("PROJECT_NAME".to_string(), name.to_string());
        variables.insert(
            "PROJECT_NAME_SNAKE".to_string(),
            name.as_str().replace('-', "_"),
        );
        variables.insert("PROJECT_NAME_PASCAL".to_string(), title.replace(' ', ""));
        variables.insert("PROJECT_TITLE".to_string(), title);
        Self { variables }
    }

    /// Context carrying the project basics and gateway settings of `config`.
    pub fn for_config(config: &ScaffoldConfig) -> Self {
        Self::new(&config.name)
            .with_variable("DESCRIPTION", config.description.as_str())
            .with_variable("AUTHOR", config.author.as_str())
            .with_variable("GATEWAY_URL", config.gateway_url())
            .with_variable("GATEWAY_TOKEN", config.gateway_token())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in one left-to-right pass.
    ///
    /// Substituted values are copied through verbatim and never rescanned,
    /// so user text that looks like a placeholder stays as typed. Unknown
    /// placeholders stay as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            rest = &rest[start..];
            let Some(end) = rest[2..].find("}}") else {
                break;
            };

            match self.variables.get(&rest[2..end + 2]) {
                Some(value) => {
                    result.push_str(value);
                    rest = &rest[end + 4..];
                }
                // Not a placeholder here; a later brace may still open one.
                None => {
                    result.push('{');
                    rest = &rest[1..];
                }
            }
        }
        result.push_str(rest);
        result
    }
}
