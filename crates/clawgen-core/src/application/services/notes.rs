//! Human-facing text derived from the workflow state: the `AGENTS.md` notes
//! file, the requirements summary and post-generation next steps.

use std::fmt::Write as _;

use crate::domain::{
    ProjectKind, VariantOptions, WorkflowState, entities::state::STATE_DIR,
};

/// File name of the project notes written by `init`.
pub const NOTES_FILE: &str = "AGENTS.md";

fn mark(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

/// Render the project notes. The gateway token is never included.
pub fn agent_notes(state: &WorkflowState) -> String {
    let project = &state.project;
    let name = project.name.as_ref().map_or("-", |n| n.as_str());
    let mut out = String::new();

    let _ = writeln!(out, "# OpenClaw project notes\n");
    let _ = writeln!(out, "## Project\n");
    let _ = writeln!(out, "- **Name**: {name}");
    let _ = writeln!(
        out,
        "- **Description**: {}",
        project.description.as_deref().unwrap_or("-")
    );
    let _ = writeln!(out, "- **Author**: {}", project.author.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "- **Stage**: {}\n", state.stage);

    let _ = writeln!(out, "## Documentation\n");
    let _ = writeln!(out, "| Topic | Link |");
    let _ = writeln!(out, "|-------|------|");
    let _ = writeln!(out, "| Getting started | https://docs.openclaw.ai |");
    let _ = writeln!(out, "| API reference | https://docs.openclaw.ai/api |");
    let _ = writeln!(out, "| Source | https://github.com/openclaw/openclaw |\n");

    if let Some(modules) = &state.modules {
        let _ = writeln!(out, "## Modules\n");
        let _ = writeln!(out, "| Module | Enabled |");
        let _ = writeln!(out, "|--------|---------|");
        let _ = writeln!(out, "| Skill | {} |", mark(modules.skill));
        let _ = writeln!(out, "| Plugin | {} |", mark(modules.plugin));
        let _ = writeln!(out, "| Web | {} |", mark(modules.web));
        let _ = writeln!(out, "| OAuth | {} |", mark(modules.oauth));
        let _ = writeln!(out, "| Database | {} |\n", modules.database);
    }

    let _ = writeln!(out, "## Gateway\n");
    match &state.gateway_config {
        Some(gateway) => {
            let _ = writeln!(out, "- URL: {}", gateway.url);
            let _ = writeln!(
                out,
                "- Token: {}\n",
                if gateway.is_authenticated() { "set" } else { "not set" }
            );
        }
        None => {
            let _ = writeln!(out, "- Not configured\n");
        }
    }

    let _ = writeln!(out, "## Next steps\n");
    let _ = writeln!(out, "- `clawgen prd` to define requirements (recommended)");
    let _ = writeln!(out, "- `clawgen generate --quick` to generate with defaults");
    let _ = writeln!(out, "- `clawgen new` for the one-shot flow\n");
    let _ = write!(
        out,
        "> `{STATE_DIR}/state.json` may contain a gateway token. Keep it out of version control.\n"
    );

    out
}

/// Requirements summary lines, for display after `prd`.
pub fn requirements_summary(state: &WorkflowState) -> Vec<String> {
    let req = &state.requirements;
    let mut lines = vec![
        format!("Goal: {}", req.summary.as_deref().unwrap_or("-")),
        format!("Target users: {}", req.target_users.as_deref().unwrap_or("-")),
    ];
    if req.features().is_empty() {
        lines.push("Features: -".into());
    } else {
        lines.push("Features:".into());
        lines.extend(req.features().iter().map(|f| format!("  - {f}")));
    }
    if let Some(style) = req.design_style {
        lines.push(format!("Design: {style}"));
    }
    if let Some(stack) = req.tech_stack {
        lines.push(format!("Tech stack: {}", stack.display_name()));
    }
    lines
}

/// Suggested commands after generating `kind` into `<target>/<name>`.
pub fn next_steps(kind: ProjectKind, name: &str, options: Option<&VariantOptions>) -> Vec<String> {
    match kind {
        ProjectKind::Skill => vec![
            format!("cp -r {name} ~/.openclaw/workspace/skills/"),
            "Restart the OpenClaw gateway".into(),
            format!("clawhub publish ./{name}"),
        ],
        ProjectKind::Plugin => vec![
            format!("cd {name} && npm install"),
            "npm run build".into(),
            "openclaw plugins install -l .".into(),
            "Restart the OpenClaw gateway".into(),
        ],
        ProjectKind::Web => {
            let mut steps = vec![
                format!("cd {name}"),
                "cp .env.local.example .env.local and edit".into(),
                "npm install".into(),
            ];
            if let Some(VariantOptions::Web(web)) = options {
                if web.database.is_enabled() {
                    steps.push("npx prisma db push".into());
                }
                if web.companion_skill {
                    steps.push("cp -r skill ~/.openclaw/workspace/skills/".into());
                }
            }
            steps.push("npm run dev, then open http://localhost:3000".into());
            steps
        }
    }
}
