//! `clawgen prd`: requirements for an initialized project.

use tracing::instrument;

use clawgen_adapters::LineElicitor;

use crate::{
    cli::PrdArgs,
    commands::workflow,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(output = %args.target.output.display(), revise = args.revise))]
pub fn execute(args: PrdArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.target.output;
    let defaults = config.collector_defaults(&root)?;

    let mut elicitor = LineElicitor::stdio();
    let summary = workflow().run_prd(&root, args.revise, &mut elicitor, &defaults)?;

    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    output.success("Requirements recorded")?;
    output.print("")?;
    output.header("Requirements")?;
    for line in &summary {
        output.print(&format!("  {line}"))?;
    }
    output.print("")?;
    output.info("Run `clawgen generate` to create the project")?;
    Ok(())
}
