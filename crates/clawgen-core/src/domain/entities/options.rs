//! Variant payloads and the resolved configuration handed to the renderer.

use serde::{Deserialize, Serialize};

use crate::domain::entities::project::{GatewayConfig, Modules, ProjectName};
use crate::domain::entities::state::{Requirements, WorkflowState};
use crate::domain::error::DomainError;
use crate::domain::value_objects::{Database, OAuthProvider, PluginType, ProjectKind, TechStack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillOptions {
    pub create_scripts: bool,
    pub create_references: bool,
    pub create_assets: bool,
    pub add_examples: bool,
}

impl Default for SkillOptions {
    fn default() -> Self {
        Self {
            create_scripts: true,
            create_references: true,
            create_assets: false,
            add_examples: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    pub plugin_type: PluginType,
    pub add_examples: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            plugin_type: PluginType::Tool,
            add_examples: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebOptions {
    pub stack: TechStack,
    pub oauth: bool,
    pub oauth_provider: OAuthProvider,
    pub database: Database,
    pub companion_skill: bool,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            stack: TechStack::NextJs,
            oauth: false,
            oauth_provider: OAuthProvider::Openclaw,
            database: Database::None,
            companion_skill: true,
        }
    }
}

impl WebOptions {
    /// Derive web options from the modules and requirements collected by the
    /// staged flow, so they are never asked twice.
    pub fn derive(modules: &Modules, requirements: &Requirements) -> Self {
        Self {
            stack: requirements.tech_stack.unwrap_or_default(),
            oauth: modules.oauth,
            oauth_provider: OAuthProvider::default(),
            database: modules.database,
            companion_skill: true,
        }
    }
}

/// Variant-specific payload, tagged by `type` in the state document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariantOptions {
    Skill(SkillOptions),
    Plugin(PluginOptions),
    Web(WebOptions),
}

impl VariantOptions {
    pub fn kind(&self) -> ProjectKind {
        match self {
            Self::Skill(_) => ProjectKind::Skill,
            Self::Plugin(_) => ProjectKind::Plugin,
            Self::Web(_) => ProjectKind::Web,
        }
    }

    /// Quick-mode defaults for a variant.
    pub fn defaults_for(kind: ProjectKind) -> Self {
        match kind {
            ProjectKind::Skill => Self::Skill(SkillOptions::default()),
            ProjectKind::Plugin => Self::Plugin(PluginOptions::default()),
            ProjectKind::Web => Self::Web(WebOptions::default()),
        }
    }

    /// Error unless this payload belongs to `kind`.
    pub fn ensure_kind(&self, kind: ProjectKind) -> Result<(), DomainError> {
        if self.kind() == kind {
            Ok(())
        } else {
            Err(DomainError::VariantMismatch {
                requested: kind.to_string(),
                configured: self.kind().to_string(),
            })
        }
    }
}

/// Everything the renderer needs, fully resolved from a [`WorkflowState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub name: ProjectName,
    pub description: String,
    pub author: String,
    pub gateway: Option<GatewayConfig>,
    pub requirements: Requirements,
    pub options: VariantOptions,
}

impl ScaffoldConfig {
    pub fn from_state(state: &WorkflowState) -> Result<Self, DomainError> {
        let name = state
            .project
            .name
            .clone()
            .ok_or(DomainError::MissingRequiredField {
                field: "project.name",
            })?;
        let options = state
            .options
            .ok_or(DomainError::MissingRequiredField { field: "options" })?;
        let kind = state
            .project_type
            .ok_or(DomainError::MissingRequiredField {
                field: "projectType",
            })?;
        options.ensure_kind(kind)?;

        Ok(Self {
            description: state
                .project
                .description
                .clone()
                .unwrap_or_else(|| default_description(kind, &name)),
            author: state.project.author.clone().unwrap_or_default(),
            gateway: state.gateway_config.clone(),
            requirements: state.requirements.clone(),
            name,
            options,
        })
    }

    pub fn kind(&self) -> ProjectKind {
        self.options.kind()
    }

    /// Gateway URL for generated env templates.
    pub fn gateway_url(&self) -> &str {
        self.gateway
            .as_ref()
            .map_or(crate::domain::entities::project::DEFAULT_GATEWAY_URL, |g| {
                g.url.as_str()
            })
    }

    pub fn gateway_token(&self) -> &str {
        self.gateway.as_ref().map_or("", |g| g.token.as_str())
    }
}

/// Description used when none was collected.
pub fn default_description(kind: ProjectKind, name: &ProjectName) -> String {
    match kind {
        ProjectKind::Skill => format!("An OpenClaw skill: {name}"),
        ProjectKind::Plugin => format!("An OpenClaw plugin: {name}"),
        ProjectKind::Web => format!("A web app integrated with OpenClaw: {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stage::Stage;

    #[test]
    fn payload_is_tagged_by_type() {
        let json = serde_json::to_value(VariantOptions::Plugin(PluginOptions::default())).unwrap();
        assert_eq!(json["type"], "plugin");
        assert_eq!(json["pluginType"], "tool");
        assert_eq!(json["addExamples"], true);
    }

    #[test]
    fn unknown_enum_in_payload_fails_to_deserialize() {
        let raw = r#"{"type":"web","stack":"angular","oauth":false,"oauthProvider":"openclaw","database":"none","companionSkill":true}"#;
        assert!(serde_json::from_str::<VariantOptions>(raw).is_err());
    }

    #[test]
    fn quick_defaults_match_documented_values() {
        assert_eq!(
            VariantOptions::defaults_for(ProjectKind::Skill),
            VariantOptions::Skill(SkillOptions {
                create_scripts: true,
                create_references: true,
                create_assets: false,
                add_examples: true,
            })
        );
        let VariantOptions::Web(web) = VariantOptions::defaults_for(ProjectKind::Web) else {
            panic!("expected web options");
        };
        assert_eq!(web.stack, TechStack::NextJs);
        assert!(!web.oauth);
        assert_eq!(web.database, Database::None);
        assert!(web.companion_skill);
    }

    #[test]
    fn web_options_follow_modules_and_requirements() {
        let modules = Modules {
            web: true,
            oauth: true,
            database: Database::Postgresql,
            ..Modules::default()
        };
        let requirements = Requirements {
            tech_stack: Some(TechStack::ViteReact),
            ..Requirements::default()
        };
        let web = WebOptions::derive(&modules, &requirements);
        assert_eq!(web.stack, TechStack::ViteReact);
        assert!(web.oauth);
        assert_eq!(web.database, Database::Postgresql);
    }

    #[test]
    fn scaffold_config_requires_name_and_matching_options() {
        let mut state = WorkflowState::new();
        assert_eq!(
            ScaffoldConfig::from_state(&state),
            Err(DomainError::MissingRequiredField {
                field: "project.name"
            })
        );

        state.project.name = Some(ProjectName::parse("demo").unwrap());
        state.project_type = Some(ProjectKind::Web);
        state.options = Some(VariantOptions::defaults_for(ProjectKind::Skill));
        state.stage = Stage::Prd;
        assert!(matches!(
            ScaffoldConfig::from_state(&state),
            Err(DomainError::VariantMismatch { .. })
        ));

        state.options = Some(VariantOptions::defaults_for(ProjectKind::Web));
        let config = ScaffoldConfig::from_state(&state).unwrap();
        assert_eq!(config.kind(), ProjectKind::Web);
        assert_eq!(config.gateway_url(), "http://localhost:18789");
        assert_eq!(config.gateway_token(), "");
    }
}
