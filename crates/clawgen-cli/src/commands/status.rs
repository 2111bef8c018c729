//! `clawgen status`: summary of the persisted workflow state.

use clawgen_core::domain::WorkflowState;

use crate::{cli::StatusArgs, commands::workflow, error::CliResult, output::OutputManager};

/// Placeholder shown for a recorded gateway token.
const REDACTED: &str = "********";

pub fn execute(args: StatusArgs, output: OutputManager) -> CliResult<()> {
    let root = args.target.output;

    let Some(state) = workflow().load_state(&root) else {
        output.info(&format!("No clawgen state in {}", root.display()))?;
        output.print("  Run `clawgen init` or `clawgen new` to start")?;
        return Ok(());
    };

    if output.is_json() {
        output.json(&redacted(state))?;
        return Ok(());
    }

    let project = &state.project;
    output.header(&format!("clawgen state in {}", root.display()))?;
    output.field("Stage", state.stage.as_str())?;
    output.field(
        "Type",
        state.project_type.map_or("not chosen", |k| k.as_str()),
    )?;
    output.field("Name", project.name.as_ref().map_or("-", |n| n.as_str()))?;
    output.field("Description", project.description.as_deref().unwrap_or("-"))?;
    output.field("Author", project.author.as_deref().unwrap_or("-"))?;

    let gateway = match &state.gateway_config {
        Some(g) if g.is_authenticated() => format!("{} (token set)", g.url),
        Some(g) => g.url.clone(),
        None => "not configured".into(),
    };
    output.field("Gateway", &gateway)?;

    if let Some(modules) = &state.modules {
        let enabled = modules.enabled();
        let listed = if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled.join(", ")
        };
        output.field("Modules", &listed)?;
    }
    if state.has_requirements() {
        output.field("Features", &state.requirements.features().len().to_string())?;
    } else {
        output.field("Requirements", "not recorded")?;
    }
    if let Some(at) = state.updated_at {
        output.field("Updated", &at.format("%Y-%m-%d %H:%M:%S UTC").to_string())?;
    }
    Ok(())
}

fn redacted(mut state: WorkflowState) -> WorkflowState {
    if let Some(gateway) = state.gateway_config.as_mut() {
        if gateway.is_authenticated() {
            gateway.token = REDACTED.into();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawgen_core::domain::GatewayConfig;

    #[test]
    fn token_is_masked() {
        let mut state = WorkflowState::new();
        state.gateway_config = Some(GatewayConfig::new("http://gw", "secret"));
        let shown = redacted(state);
        assert_eq!(shown.gateway_config.unwrap().token, REDACTED);
    }

    #[test]
    fn empty_token_stays_empty() {
        let mut state = WorkflowState::new();
        state.gateway_config = Some(GatewayConfig::new("http://gw", ""));
        assert_eq!(redacted(state).gateway_config.unwrap().token, "");
    }
}
