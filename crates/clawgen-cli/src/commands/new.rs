//! `clawgen new`: the one-shot resumable flow.

use tracing::{info, instrument};

use clawgen_adapters::LineElicitor;
use clawgen_core::application::{FlowOptions, Outcome};

use crate::{
    cli::NewArgs,
    commands::{print_declined, print_generation, workflow},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(output = %args.target.output.display(), quick = args.quick))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.target.output;
    let defaults = config.collector_defaults(&root)?;
    let flags = FlowOptions {
        quick: args.quick,
        kind: args.kind.map(Into::into),
    };

    let mut elicitor = LineElicitor::stdio();
    match workflow().run_new(&root, flags, &mut elicitor, &defaults)? {
        Outcome::Completed(report) => {
            info!(files = report.written.len(), "Project generated");
            print_generation(&output, &report)
        }
        Outcome::Declined => print_declined(&output),
    }
}
