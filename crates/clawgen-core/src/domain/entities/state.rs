//! The persisted workflow document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::options::VariantOptions;
use crate::domain::entities::project::{GatewayConfig, Modules, ProjectInfo};
use crate::domain::error::DomainError;
use crate::domain::stage::Stage;
use crate::domain::value_objects::{DesignStyle, PluginType, ProjectKind, SkillTrigger, TechStack};

/// Directory, relative to the target, that holds tool state.
pub const STATE_DIR: &str = ".clawgen";
/// State document file name inside [`STATE_DIR`].
pub const STATE_FILE: &str = "state.json";
/// Current document format version.
pub const STATE_VERSION: u32 = 1;

/// Product requirements. Every field is optional until collected, and the
/// collector only asks for what is still `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_trigger: Option<SkillTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_type: Option<PluginType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_pages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_tables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_style: Option<DesignStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_style_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<TechStack>,
}

impl Requirements {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }
}

/// The single persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub project_type: Option<ProjectKind>,
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub gateway_config: Option<GatewayConfig>,
    #[serde(default)]
    pub modules: Option<Modules>,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub options: Option<VariantOptions>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn current_version() -> u32 {
    STATE_VERSION
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowState {
    /// A first-run document at stage `init`.
    pub fn new() -> Self {
        Self {
            version: STATE_VERSION,
            stage: Stage::Init,
            project_type: None,
            project: ProjectInfo::default(),
            gateway_config: None,
            modules: None,
            requirements: Requirements::default(),
            options: None,
            updated_at: None,
        }
    }

    /// Project basics, gateway and modules have all been collected.
    pub fn is_initialized(&self) -> bool {
        self.project.is_complete() && self.modules.is_some()
    }

    /// Whether `prd` recorded anything. The stage alone does not say so:
    /// a non-quick `new` reaches `prd` without asking for requirements.
    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// Record the variant payload, keeping `projectType` in agreement.
    pub fn set_options(&mut self, options: VariantOptions) -> Result<(), DomainError> {
        if let Some(kind) = self.project_type {
            options.ensure_kind(kind)?;
        }
        self.project_type = Some(options.kind());
        self.options = Some(options);
        Ok(())
    }

    /// Choose the variant. A different variant than the one already recorded
    /// is a mismatch; restart to change it.
    pub fn set_project_type(&mut self, kind: ProjectKind) -> Result<(), DomainError> {
        match self.project_type {
            Some(existing) if existing != kind => Err(DomainError::VariantMismatch {
                requested: kind.to_string(),
                configured: existing.to_string(),
            }),
            _ => {
                self.project_type = Some(kind);
                Ok(())
            }
        }
    }

    /// Check the cross-field invariants of the document.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let (Some(kind), Some(options)) = (self.project_type, self.options) {
            options.ensure_kind(kind)?;
        }
        Ok(())
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::options::SkillOptions;
    use crate::domain::entities::project::ProjectName;
    use crate::domain::value_objects::Database;

    fn populated() -> WorkflowState {
        let mut state = WorkflowState::new();
        state.stage = Stage::Prd;
        state.project.name = Some(ProjectName::parse("Weather Bot").unwrap());
        state.project.description = Some("Forecasts".into());
        state.project.author = Some("dev".into());
        state.gateway_config = Some(GatewayConfig::new("http://gw:1", ""));
        state.modules = Some(Modules {
            skill: true,
            database: Database::Sqlite,
            ..Modules::default()
        });
        state.requirements.summary = Some("Weather on demand".into());
        state.requirements.features = Some(vec!["alerts".into(), "daily digest".into()]);
        state.requirements.skill_trigger = Some(SkillTrigger::Schedule);
        state
            .set_options(VariantOptions::Skill(SkillOptions::default()))
            .unwrap();
        state
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let json = serde_json::to_value(populated()).unwrap();
        for key in [
            "version",
            "stage",
            "projectType",
            "project",
            "gatewayConfig",
            "modules",
            "requirements",
            "options",
            "updatedAt",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["stage"], "prd");
        assert_eq!(json["projectType"], "skill");
        assert_eq!(json["options"]["type"], "skill");
        assert_eq!(json["requirements"]["skillTrigger"], "schedule");
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let mut state = populated();
        state.touch(Utc::now());
        let json = serde_json::to_string_pretty(&state).unwrap();
        let back: WorkflowState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn unknown_database_in_document_is_rejected() {
        let mut json = serde_json::to_value(populated()).unwrap();
        json["modules"]["database"] = "mysql".into();
        assert!(serde_json::from_value::<WorkflowState>(json).is_err());
    }

    #[test]
    fn options_must_agree_with_project_type() {
        let mut state = populated();
        assert!(
            state
                .set_options(VariantOptions::defaults_for(ProjectKind::Web))
                .is_err()
        );
        assert!(state.set_project_type(ProjectKind::Plugin).is_err());
        assert!(state.set_project_type(ProjectKind::Skill).is_ok());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn fresh_state_is_not_initialized() {
        let state = WorkflowState::new();
        assert_eq!(state.stage, Stage::Init);
        assert!(!state.is_initialized());
        assert!(!state.has_requirements());
        assert!(populated().is_initialized());
    }

    #[test]
    fn requirements_are_recorded_by_content_not_stage() {
        let mut state = WorkflowState::new();
        state.stage = Stage::Prd;
        assert!(!state.has_requirements());

        state.requirements.summary = Some("Answer support questions".into());
        assert!(state.has_requirements());
    }
}
