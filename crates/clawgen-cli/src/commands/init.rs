//! `clawgen init`: project basics, gateway and modules, plus notes.

use tracing::instrument;

use clawgen_adapters::LineElicitor;
use clawgen_core::application::Outcome;
use serde_json::json;

use crate::{
    cli::InitArgs,
    commands::{print_declined, workflow},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(output = %args.target.output.display()))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.target.output;
    let defaults = config.collector_defaults(&root)?;

    let mut elicitor = LineElicitor::stdio();
    let report = match workflow().run_init(&root, args.quick, &mut elicitor, &defaults)? {
        Outcome::Completed(report) => report,
        Outcome::Declined => return print_declined(&output),
    };

    if output.is_json() {
        output.json(&json!({
            "notes": report.notes_path,
            "gitignoreUpdated": report.gitignore_updated,
        }))?;
        return Ok(());
    }

    output.success(&format!("Project initialized in {}", root.display()))?;
    output.info(&format!("Notes written to {}", report.notes_path.display()))?;
    if report.gitignore_updated {
        output.info("Added .clawgen/ to .gitignore")?;
    }
    output.print("")?;
    output.header("Next steps")?;
    output.steps(&[
        "clawgen prd to record requirements".to_string(),
        "clawgen generate --quick to generate with defaults".to_string(),
    ])?;
    Ok(())
}
