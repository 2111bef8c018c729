//! `clawgen validate`: structural checks on a generated project.

use tracing::instrument;
use serde_json::json;

use crate::{cli::ValidateArgs, commands::workflow, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let report = workflow().validate_project(&args.dir)?;

    if output.is_json() {
        output.json(&json!({
            "type": report.kind.as_str(),
            "stack": report.stack.map(|s| s.as_str()),
            "checks": report.checks,
        }))?;
        return Ok(());
    }

    let kind = match report.stack {
        Some(stack) => format!("{} ({})", report.kind, stack.display_name()),
        None => report.kind.to_string(),
    };
    output.header(&format!("Detected {kind} project"))?;
    for check in &report.checks {
        output.success(check)?;
    }
    output.print("")?;
    output.success(&format!("{} is valid", args.dir.display()))?;
    Ok(())
}
