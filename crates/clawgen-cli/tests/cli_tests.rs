//! End-to-end tests for the `clawgen` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A `clawgen` command isolated from the user's config and log settings.
fn clawgen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clawgen").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CLAWGEN_DEFAULTS__AUTHOR")
        .env("NO_COLOR", "1");
    cmd
}

fn read_state(root: &Path) -> Value {
    let raw = fs::read_to_string(root.join(".clawgen/state.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn help_lists_workflow_commands() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prd"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_type_exits_with_one() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .args(["new", "--type", "desktop"])
        .assert()
        .code(1);
}

#[test]
fn quick_skill_scaffold() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("out");

    clawgen(tmp.path())
        .args(["new", "--type", "skill", "--quick", "--output"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated skill project 'out'"))
        .stdout(predicate::str::contains("Next steps"));

    let project = root.join("out");
    assert!(project.join("SKILL.md").is_file());
    assert!(project.join("README.md").is_file());
    assert!(project.join("scripts/example.py").is_file());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(project.join("scripts/example.py"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0);
    }

    let state = read_state(&root);
    assert_eq!(state["stage"], "ready");
    assert_eq!(state["projectType"], "skill");
    assert_eq!(state["project"]["name"], "out");
}

#[test]
fn quiet_mode_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .args(["-q", "new", "--type", "plugin", "--quick", "-o"])
        .arg(tmp.path().join("p"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn generate_without_state_fails() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .args(["generate", "--output"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No clawgen state found"))
        .stderr(predicate::str::contains("clawgen init"));
}

#[test]
fn closed_stdin_is_fatal() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .args(["init", "--output"])
        .arg(tmp.path().join("fresh"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input ended"));
    assert!(!tmp.path().join("fresh/.clawgen").exists());
}

#[test]
fn staged_flow_from_init_to_ready() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("portal");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join(".gitignore"), "node_modules/\n").unwrap();

    clawgen(tmp.path())
        .args(["init", "--quick", "-o"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added .clawgen/ to .gitignore"));
    assert!(root.join("AGENTS.md").is_file());
    assert_eq!(
        fs::read_to_string(root.join(".gitignore")).unwrap(),
        "node_modules/\n.clawgen/\n"
    );

    // Requirements are still missing.
    clawgen(tmp.path())
        .args(["generate", "-o"])
        .arg(&root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("clawgen prd"));

    // summary, target users, one feature, end of list, design style, colour
    clawgen(tmp.path())
        .args(["prd", "-o"])
        .arg(&root)
        .write_stdin("\n\nchat history\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - chat history"));
    assert_eq!(read_state(&root)["stage"], "prd");

    // Four skill resource confirmations, all defaults.
    clawgen(tmp.path())
        .args(["generate", "--type", "skill", "-o"])
        .arg(&root)
        .write_stdin("\n\n\n\n")
        .assert()
        .success();
    assert_eq!(read_state(&root)["stage"], "ready");
    assert!(root.join("portal/SKILL.md").is_file());

    clawgen(tmp.path())
        .args(["status", "-o"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("ready"))
        .stdout(predicate::str::contains("portal"))
        .stdout(predicate::str::contains("Features"));
}

#[test]
fn status_after_quick_new_reports_no_requirements() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("bare");

    clawgen(tmp.path())
        .args(["new", "--type", "plugin", "--quick", "-o"])
        .arg(&root)
        .assert()
        .success();

    clawgen(tmp.path())
        .args(["status", "-o"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("not recorded"))
        .stdout(predicate::str::contains("Features").not());
}

#[test]
fn abort_leaves_state_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("keep");

    clawgen(tmp.path())
        .args(["init", "--quick", "-o"])
        .arg(&root)
        .assert()
        .success();
    let before = fs::read_to_string(root.join(".clawgen/state.json")).unwrap();

    clawgen(tmp.path())
        .args(["new", "--type", "web", "-o"])
        .arg(&root)
        .write_stdin("abort\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    let after = fs::read_to_string(root.join(".clawgen/state.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn web_project_validates() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("site");

    clawgen(tmp.path())
        .args(["new", "--type", "web", "--quick", "-o"])
        .arg(&root)
        .assert()
        .success();

    clawgen(tmp.path())
        .arg("validate")
        .arg(root.join("site"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected web project (Next.js)"))
        .stdout(predicate::str::contains("companion skill present"));
}

#[test]
fn empty_directory_does_not_validate() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .arg("validate")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot determine project type"));
}

#[test]
fn status_json_redacts_token() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("gw");
    fs::create_dir_all(root.join(".clawgen")).unwrap();
    fs::write(
        root.join(".clawgen/state.json"),
        r#"{"version":1,"stage":"init","gatewayConfig":{"url":"http://gw:1","token":"hunter2"}}"#,
    )
    .unwrap();

    let out = clawgen(tmp.path())
        .args(["--output-format", "json", "status", "-o"])
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let shown: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(shown["gatewayConfig"]["url"], "http://gw:1");
    assert_ne!(shown["gatewayConfig"]["token"], "hunter2");
}

#[test]
fn status_without_state_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .args(["status", "-o"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No clawgen state"));
}

#[test]
fn author_comes_from_environment() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("tool");

    clawgen(tmp.path())
        .env("CLAWGEN_DEFAULTS__AUTHOR", "ada")
        .args(["new", "--type", "plugin", "--quick", "-o"])
        .arg(&root)
        .assert()
        .success();

    let raw = fs::read_to_string(root.join("tool/package.json")).unwrap();
    let manifest: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(manifest["author"], "ada");
}

#[test]
fn config_init_then_get() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("conf/clawgen.toml");

    clawgen(tmp.path())
        .args(["config", "init", "--config"])
        .arg(&file)
        .assert()
        .success();
    assert!(fs::read_to_string(&file).unwrap().contains("[defaults]"));

    clawgen(tmp.path())
        .args(["config", "init", "--config"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    fs::write(&file, "[defaults]\nauthor = \"grace\"\n").unwrap();

    clawgen(tmp.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout("grace\n");

    clawgen(tmp.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "get", "defaults.color"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_config_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .arg("--config")
        .arg(tmp.path().join("absent.toml"))
        .args(["status", "-o"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    clawgen(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clawgen"));
}
