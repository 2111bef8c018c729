//! Public-API tests for the persisted workflow document and stage rules.

use clawgen_core::domain::{
    Database, DirectoryStatus, GatewayConfig, Modules, ProjectKind, ProjectName, Stage,
    StageGuard, TechStack, VariantOptions, WebOptions, WorkflowState,
    entities::project::normalize_name,
};

fn web_state() -> WorkflowState {
    let mut state = WorkflowState::new();
    state.stage = Stage::Prd;
    state.project.name = Some(ProjectName::parse("Chat Portal").unwrap());
    state.project.description = Some("Portal".into());
    state.project.author = Some("dev".into());
    state.gateway_config = Some(GatewayConfig::new("http://localhost:18789", ""));
    state.modules = Some(Modules {
        web: true,
        oauth: true,
        database: Database::Postgresql,
        ..Modules::default()
    });
    state.requirements.features = Some(vec!["chat".into()]);
    state.requirements.tech_stack = Some(TechStack::ViteReact);
    state
        .set_options(VariantOptions::Web(WebOptions::derive(
            state.modules.as_ref().unwrap(),
            &state.requirements,
        )))
        .unwrap();
    state
}

#[test]
fn state_document_survives_json() {
    let state = web_state();
    let json = serde_json::to_string_pretty(&state).unwrap();
    let back: WorkflowState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["projectType"], "web");
    assert_eq!(value["options"]["stack"], "vite-react");
    assert_eq!(value["modules"]["database"], "postgresql");
}

#[test]
fn options_payload_must_match_project_type() {
    let mut state = web_state();
    state.project_type = Some(ProjectKind::Plugin);
    assert!(state.validate().is_err());
}

#[test]
fn stages_are_ordered_by_declaration() {
    assert!(Stage::Init < Stage::Prd);
    assert!(Stage::Prd < Stage::Generating);
    assert!(Stage::Generating < Stage::Ready);
    // "generating" < "init" as strings; the declared order wins.
    assert!(Stage::Generating > Stage::Init);
}

#[test]
fn guard_accepts_exactly_the_legal_transitions() {
    let legal = [
        (Stage::Init, Stage::Prd),
        (Stage::Prd, Stage::Generating),
        (Stage::Generating, Stage::Ready),
        (Stage::Ready, Stage::Generating),
    ];
    for from in Stage::ORDER {
        for to in Stage::ORDER {
            let expected = from == to || legal.contains(&(from, to));
            assert_eq!(
                StageGuard::transition(from, to, false).is_ok(),
                expected,
                "{from} -> {to}"
            );
        }
    }
    assert!(StageGuard::transition(Stage::Init, Stage::Generating, true).is_ok());
    assert!(StageGuard::ensure_generation_allowed(Stage::Init, false).is_err());
    assert!(StageGuard::ensure_generation_allowed(Stage::Init, true).is_ok());
}

#[test]
fn name_normalization_is_idempotent() {
    for raw in ["My Cool App", "  --x__y--  ", "Already-kebab", "ÄBC 12"] {
        let once = normalize_name(raw);
        assert_eq!(normalize_name(&once), once);
    }
}

#[test]
fn housekeeping_only_directory_is_safe() {
    assert_eq!(
        DirectoryStatus::classify([".git", ".clawgen"]),
        DirectoryStatus::Ignorable
    );
    assert!(!DirectoryStatus::classify([".git", "main.rs"]).is_safe());
}
