//! `clawgen generate`: render and write from the staged state.

use tracing::{info, instrument};

use clawgen_adapters::LineElicitor;
use clawgen_core::application::FlowOptions;

use crate::{
    cli::GenerateArgs,
    commands::{print_generation, workflow},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(output = %args.target.output.display(), quick = args.quick))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.target.output;
    let defaults = config.collector_defaults(&root)?;
    let flags = FlowOptions {
        quick: args.quick,
        kind: args.kind.map(Into::into),
    };

    let mut elicitor = LineElicitor::stdio();
    let report = workflow().run_generate(&root, flags, &mut elicitor, &defaults)?;
    info!(files = report.written.len(), "Project generated");
    print_generation(&output, &report)
}
