//! Command handlers.
//!
//! Each handler translates parsed arguments into a workflow call and renders
//! the result. Workflow rules live in `clawgen-core`.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod new;
pub mod prd;
pub mod status;
pub mod validate;

use clawgen_adapters::{JsonStateStore, LocalFilesystem, VariantRenderer};
use clawgen_core::application::{GenerationReport, WorkflowService};
use serde_json::json;

use crate::{error::CliResult, output::OutputManager};

/// Workflow wired to the local filesystem and the JSON state file.
pub(crate) fn workflow() -> WorkflowService {
    WorkflowService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonStateStore::new()),
        Box::new(VariantRenderer::new()),
    )
}

/// Summary shared by `new` and `generate`.
pub(crate) fn print_generation(output: &OutputManager, report: &GenerationReport) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({
            "type": report.kind.as_str(),
            "name": report.name,
            "projectDir": report.project_dir,
            "files": report.written,
            "nextSteps": report.next_steps,
        }))?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} project '{}' in {}",
        report.kind,
        report.name,
        report.project_dir.display()
    ))?;
    output.info(&format!("{} files written", report.written.len()))?;
    output.print("")?;
    output.header("Next steps")?;
    output.steps(&report.next_steps)?;
    Ok(())
}

/// Shown when the user answers "abort" or declines an occupied directory.
pub(crate) fn print_declined(output: &OutputManager) -> CliResult<()> {
    output.info("Aborted. Nothing was changed.")?;
    Ok(())
}
