//! Variant renderer: configuration in, ordered file set out.
//!
//! Rendering is pure. No clock, no randomness, no filesystem reads, so equal
//! configurations always produce byte-identical file sets.

mod manifest;
mod plugin;
mod skill;
mod web;

use clawgen_core::{
    application::ports::TemplateRenderer,
    domain::{
        DomainValidator as validator, FileSet, ProjectKind, RenderContext, ScaffoldConfig,
        VariantOptions,
    },
    error::ClawgenResult,
};
use tracing::{debug, instrument};

/// Renders skill, plugin and web projects from built-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantRenderer;

impl VariantRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for VariantRenderer {
    #[instrument(skip_all, fields(kind = %kind, project = %config.name))]
    fn render(&self, kind: ProjectKind, config: &ScaffoldConfig) -> ClawgenResult<FileSet> {
        config.options.ensure_kind(kind)?;

        let ctx = RenderContext::for_config(config);
        let files = match &config.options {
            VariantOptions::Skill(options) => skill::render(&ctx, options),
            VariantOptions::Plugin(options) => plugin::render(&ctx, config, options)?,
            VariantOptions::Web(options) => web::render(&ctx, config, options)?,
        };

        validator::validate_file_set(&files)?;
        debug!(files = files.len(), "Rendered file set");
        Ok(files)
    }
}
