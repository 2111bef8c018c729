//! Config collector - fills in whatever the state document is still missing.
//!
//! Every section checks the state first and only asks for `None` fields, so a
//! resumed run never re-asks an answered question. In quick mode no question
//! is asked: each one resolves to its declared default.

use std::fmt::Display;

use tracing::debug;

use crate::{
    application::ports::Elicitor,
    domain::{
        ChoiceQuestion, ConfirmQuestion, Database, DesignStyle, DomainError, DomainValidator,
        GatewayConfig, Modules, OAuthProvider, PluginOptions, PluginType, ProjectKind,
        ProjectName, SkillOptions, SkillTrigger, TechStack, TextQuestion, VariantOptions,
        WebOptions, WorkflowState, entities::project::DEFAULT_GATEWAY_URL,
        entities::options::default_description, question::split_list,
    },
    error::{ClawgenError, ClawgenResult},
};

/// Defaults offered by prompts and used verbatim by quick mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorDefaults {
    /// Basename of the target directory; source of the quick-mode name.
    pub basename: Option<String>,
    pub author: String,
    /// Description template; `{name}` and `{type}` are substituted.
    pub description: Option<String>,
    pub gateway_url: String,
    pub tech_stack: TechStack,
}

impl Default for CollectorDefaults {
    fn default() -> Self {
        Self {
            basename: None,
            author: "developer".into(),
            description: None,
            gateway_url: DEFAULT_GATEWAY_URL.into(),
            tech_stack: TechStack::default(),
        }
    }
}

impl CollectorDefaults {
    fn description_for(&self, kind: Option<ProjectKind>, name: &ProjectName) -> String {
        match (&self.description, kind) {
            (Some(template), kind) => template
                .replace("{name}", name.as_str())
                .replace("{type}", kind.map_or("project", |k| k.as_str())),
            (None, Some(kind)) => default_description(kind, name),
            (None, None) => format!("OpenClaw project: {name}"),
        }
    }
}

pub struct ConfigCollector<'a> {
    elicitor: &'a mut dyn Elicitor,
    defaults: &'a CollectorDefaults,
    quick: bool,
}

impl<'a> ConfigCollector<'a> {
    pub fn new(
        elicitor: &'a mut dyn Elicitor,
        defaults: &'a CollectorDefaults,
        quick: bool,
    ) -> Self {
        Self {
            elicitor,
            defaults,
            quick,
        }
    }

    // -------------------------------------------------------------------------
    // Sections
    // -------------------------------------------------------------------------

    /// Project name, description and author.
    pub fn collect_project(&mut self, state: &mut WorkflowState) -> ClawgenResult<()> {
        if state.project.name.is_none() {
            let name = if self.quick {
                ProjectName::from_basename(self.defaults.basename.as_deref())
            } else {
                self.note("Project basics")?;
                let mut question = TextQuestion::new("Project name (kebab-case)")
                    .with_check(DomainValidator::check_project_name);
                if let Some(base) = self.defaults.basename.as_deref() {
                    if let Ok(suggested) = ProjectName::parse(base) {
                        question = question.with_default(suggested.as_str());
                    }
                }
                ProjectName::parse(&self.elicitor.text(&question)?)?
            };
            debug!(name = %name, "Project name set");
            state.project.name = Some(name);
        }

        let name = state
            .project
            .name
            .clone()
            .ok_or(DomainError::MissingRequiredField {
                field: "project.name",
            })?;

        if state.project.description.is_none() {
            let default = self.defaults.description_for(state.project_type, &name);
            let description =
                self.text(TextQuestion::new("Project description").with_default(default))?;
            state.project.description = Some(description);
        }

        if state.project.author.is_none() {
            let author = self.text(
                TextQuestion::new("Author").with_default(self.defaults.author.as_str()),
            )?;
            state.project.author = Some(author);
        }

        Ok(())
    }

    /// Gateway connection and module toggles.
    pub fn collect_modules(&mut self, state: &mut WorkflowState) -> ClawgenResult<()> {
        if state.modules.is_some() {
            return Ok(());
        }

        self.note("OpenClaw gateway")?;
        let configure = self.confirm(
            ConfirmQuestion::new("Configure an OpenClaw gateway connection?").with_default(false),
        )?;
        state.gateway_config = if configure {
            let url = self.text(
                TextQuestion::new("Gateway URL")
                    .with_default(self.defaults.gateway_url.as_str())
                    .with_check(DomainValidator::check_gateway_url),
            )?;
            let token = self.text(TextQuestion::new("Gateway token (optional)").with_default(""))?;
            Some(GatewayConfig::new(url, token))
        } else {
            None
        };

        self.note("Modules")?;
        let kind = state.project_type;
        let modules = Modules {
            skill: self.confirm(
                ConfirmQuestion::new("Include a skill?")
                    .with_default(kind == Some(ProjectKind::Skill)),
            )?,
            plugin: self.confirm(
                ConfirmQuestion::new("Include a plugin?")
                    .with_default(kind == Some(ProjectKind::Plugin)),
            )?,
            web: self.confirm(
                ConfirmQuestion::new("Include a web app?")
                    .with_default(kind == Some(ProjectKind::Web)),
            )?,
            oauth: self.confirm(ConfirmQuestion::new("Need OAuth login?").with_default(false))?,
            database: self.choose("Database", Database::ALL, Database::None)?,
        };
        state.modules = Some(modules);
        Ok(())
    }

    /// Requirements ("PRD"). Needs modules to know which sub-fields apply.
    pub fn collect_requirements(&mut self, state: &mut WorkflowState) -> ClawgenResult<()> {
        let modules = state
            .modules
            .ok_or(DomainError::MissingRequiredField { field: "modules" })?;

        for line in capability_overview(&modules) {
            self.note(&line)?;
        }

        let description = state.project.description.clone().unwrap_or_default();
        let req = &mut state.requirements;

        if req.summary.is_none() {
            req.summary = Some(self.text(
                TextQuestion::new("What should the app do?").with_default(description),
            )?);
        }
        if req.target_users.is_none() {
            req.target_users =
                Some(self.text(TextQuestion::new("Target users").with_default(""))?);
        }
        if req.features.is_none() {
            self.note("Core features, one per line (empty line to finish)")?;
            let mut features = Vec::new();
            loop {
                let feature = self.text(TextQuestion::new("Feature").with_default(""))?;
                if feature.is_empty() {
                    break;
                }
                features.push(feature);
            }
            req.features = Some(features);
        }

        if modules.skill && req.skill_trigger.is_none() {
            req.skill_trigger =
                Some(self.choose("Skill trigger", SkillTrigger::ALL, SkillTrigger::default())?);
        }
        if modules.plugin && req.plugin_type.is_none() {
            req.plugin_type =
                Some(self.choose("Plugin type", PluginType::ALL, PluginType::default())?);
        }
        if modules.web {
            if req.web_pages.is_none() {
                let pages = self.text(
                    TextQuestion::new("Main pages (comma separated)").with_default("home, chat"),
                )?;
                req.web_pages = Some(split_list(&pages));
            }
            if req.save_history.is_none() {
                req.save_history = Some(self.confirm(
                    ConfirmQuestion::new("Keep user conversation history?").with_default(false),
                )?);
            }
        }
        if modules.oauth && req.oauth_scopes.is_none() {
            let scopes = self.text(
                TextQuestion::new("User profile fields to request (comma separated)")
                    .with_default("avatar, nickname"),
            )?;
            req.oauth_scopes = Some(split_list(&scopes));
        }
        if modules.database.is_enabled() && req.db_tables.is_none() {
            req.db_tables = Some(self.text(
                TextQuestion::new("Data to store (short description)")
                    .with_default("user sessions"),
            )?);
        }

        if req.design_style.is_none() {
            req.design_style =
                Some(self.choose("Design style", DesignStyle::ALL, DesignStyle::default())?);
        }
        if req.design_style == Some(DesignStyle::Other) && req.design_style_other.is_none() {
            req.design_style_other = Some(
                self.text(TextQuestion::new("Describe the style you want").with_default(""))?,
            );
        }
        if req.color_preference.is_none() {
            req.color_preference = Some(
                self.text(TextQuestion::new("Color preference (optional)").with_default(""))?,
            );
        }
        if modules.web && req.tech_stack.is_none() {
            req.tech_stack =
                Some(self.choose("Tech stack", TechStack::ALL, self.defaults.tech_stack)?);
        }

        Ok(())
    }

    /// Resolve the variant: explicit request, then state, then modules, then ask.
    pub fn choose_project_type(
        &mut self,
        state: &mut WorkflowState,
        requested: Option<ProjectKind>,
    ) -> ClawgenResult<ProjectKind> {
        if let Some(kind) = requested {
            state.set_project_type(kind)?;
            return Ok(kind);
        }
        if let Some(kind) = state.project_type {
            return Ok(kind);
        }

        let inferred = state.modules.and_then(|m| {
            if m.web {
                Some(ProjectKind::Web)
            } else if m.plugin {
                Some(ProjectKind::Plugin)
            } else if m.skill {
                Some(ProjectKind::Skill)
            } else {
                None
            }
        });
        let kind = self.choose("Project type", ProjectKind::ALL, inferred.unwrap_or_default())?;
        state.set_project_type(kind)?;
        Ok(kind)
    }

    /// Variant payload. Web options come from modules when those exist.
    pub fn collect_options(
        &mut self,
        state: &mut WorkflowState,
        kind: ProjectKind,
    ) -> ClawgenResult<()> {
        if let Some(options) = state.options {
            options.ensure_kind(kind)?;
            return Ok(());
        }

        let options = match kind {
            ProjectKind::Skill => {
                self.note("Skill resources")?;
                VariantOptions::Skill(SkillOptions {
                    create_scripts: self
                        .confirm(ConfirmQuestion::new("Include scripts/?").with_default(true))?,
                    create_references: self
                        .confirm(ConfirmQuestion::new("Include references/?").with_default(true))?,
                    create_assets: self
                        .confirm(ConfirmQuestion::new("Include assets/?").with_default(false))?,
                    add_examples: self
                        .confirm(ConfirmQuestion::new("Add example files?").with_default(true))?,
                })
            }
            ProjectKind::Plugin => {
                self.note("Plugin settings")?;
                let plugin_type = match state.requirements.plugin_type {
                    Some(t) => t,
                    None => self.choose("Plugin type", PluginType::ALL, PluginType::default())?,
                };
                VariantOptions::Plugin(PluginOptions {
                    plugin_type,
                    add_examples: self
                        .confirm(ConfirmQuestion::new("Add example code?").with_default(true))?,
                })
            }
            ProjectKind::Web => match state.modules {
                Some(modules) => {
                    VariantOptions::Web(WebOptions::derive(&modules, &state.requirements))
                }
                None => VariantOptions::Web(self.ask_web_options(state)?),
            },
        };

        state.set_options(options)?;
        Ok(())
    }

    fn ask_web_options(&mut self, state: &WorkflowState) -> ClawgenResult<WebOptions> {
        self.note("Web app settings")?;
        let stack = match state.requirements.tech_stack {
            Some(stack) => stack,
            None => self.choose("Tech stack", TechStack::ALL, self.defaults.tech_stack)?,
        };
        let oauth =
            self.confirm(ConfirmQuestion::new("Include OAuth login?").with_default(false))?;
        let oauth_provider = if oauth {
            self.choose("OAuth provider", OAuthProvider::ALL, OAuthProvider::default())?
        } else {
            OAuthProvider::default()
        };
        let database = self.choose("Database", Database::ALL, Database::None)?;
        let companion_skill = self.confirm(
            ConfirmQuestion::new("Generate a companion skill?").with_default(true),
        )?;

        Ok(WebOptions {
            stack,
            oauth,
            oauth_provider,
            database,
            companion_skill,
        })
    }

    // -------------------------------------------------------------------------
    // Quick-aware prompt helpers
    // -------------------------------------------------------------------------

    fn text(&mut self, question: TextQuestion) -> ClawgenResult<String> {
        if self.quick {
            return Ok(question.default.unwrap_or_default());
        }
        self.elicitor.text(&question)
    }

    fn confirm(&mut self, question: ConfirmQuestion) -> ClawgenResult<bool> {
        if self.quick {
            return Ok(question.default.unwrap_or(false));
        }
        self.elicitor.confirm(&question)
    }

    fn choose<T>(&mut self, prompt: &str, values: &[T], default: T) -> ClawgenResult<T>
    where
        T: Copy + PartialEq + Display,
    {
        let default_index = values.iter().position(|v| *v == default).unwrap_or(0);
        if self.quick {
            return Ok(default);
        }

        let question =
            ChoiceQuestion::new(prompt, values.iter().map(ToString::to_string))
                .with_default(default_index);
        let index = self.elicitor.choice(&question)?;
        values.get(index).copied().ok_or_else(|| ClawgenError::Internal {
            message: format!("choice index {index} out of range for '{prompt}'"),
        })
    }

    fn note(&mut self, message: &str) -> ClawgenResult<()> {
        if self.quick {
            return Ok(());
        }
        self.elicitor.note(message)
    }
}

/// What each selected module lets the project do.
pub fn capability_overview(modules: &Modules) -> Vec<String> {
    let mut lines = Vec::new();
    if modules.skill {
        lines.push("Skill: executable scripts, gateway events (message, schedule, system), state and skill calls".into());
    }
    if modules.plugin {
        lines.push("Plugin: custom channels, tools, gateway methods, composite extensions".into());
    }
    if modules.web {
        lines.push("Web: HTTP API to the gateway, streaming chat (SSE), user auth".into());
    }
    if modules.oauth {
        lines.push("OAuth: sign-in/sign-out flow, access and refresh tokens".into());
    }
    if modules.database.is_enabled() {
        lines.push(format!(
            "Database: local persistence ({}) for sessions, settings, notes",
            modules.database
        ));
    }
    lines
}
