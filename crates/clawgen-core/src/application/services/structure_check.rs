//! Structural presence checks on a generated project.
//!
//! Detects the project type from marker files, then checks that the files
//! each variant needs are present. File *contents* are not validated beyond
//! the skill front matter and the plugin manifest entry point.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectKind, TechStack},
    error::ClawgenResult,
};

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub kind: ProjectKind,
    pub stack: Option<TechStack>,
    /// One line per passed check, in check order.
    pub checks: Vec<String>,
}

pub struct StructureChecker<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> StructureChecker<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Work out which variant lives in `dir`.
    pub fn detect(&self, dir: &Path) -> ClawgenResult<(ProjectKind, Option<TechStack>)> {
        let has = |rel: &str| self.fs.exists(&dir.join(rel));

        if has("SKILL.md") {
            Ok((ProjectKind::Skill, None))
        } else if has("index.ts") && has("package.json") {
            Ok((ProjectKind::Plugin, None))
        } else if has("src/app/page.tsx") {
            Ok((ProjectKind::Web, Some(TechStack::NextJs)))
        } else if has("src/main.tsx") && has("index.html") {
            Ok((ProjectKind::Web, Some(TechStack::ViteReact)))
        } else {
            Err(ApplicationError::UnknownProjectLayout {
                path: dir.to_path_buf(),
            }
            .into())
        }
    }

    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn check(&self, dir: &Path) -> ClawgenResult<StructureReport> {
        if !self.fs.is_dir(dir) {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "directory not found".into(),
            }
            .into());
        }

        let (kind, stack) = self.detect(dir)?;
        debug!(kind = %kind, "Detected project type");

        let checks = match kind {
            ProjectKind::Skill => self.check_skill(dir)?,
            ProjectKind::Plugin => self.check_plugin(dir)?,
            ProjectKind::Web => self.check_web(dir, stack.unwrap_or_default())?,
        };

        Ok(StructureReport {
            kind,
            stack,
            checks,
        })
    }

    fn check_skill(&self, dir: &Path) -> ClawgenResult<Vec<String>> {
        let manifest = self.fs.read_to_string(&dir.join("SKILL.md"))?;
        let front_matter = front_matter(&manifest)
            .ok_or_else(|| invalid(ProjectKind::Skill, dir, "SKILL.md has no YAML front matter"))?;

        for key in ["name:", "description:"] {
            if !front_matter.lines().any(|l| l.trim_start().starts_with(key)) {
                return Err(invalid(
                    ProjectKind::Skill,
                    dir,
                    &format!("front matter is missing '{}'", key.trim_end_matches(':')),
                ));
            }
        }

        let mut checks = vec!["SKILL.md front matter has name and description".to_string()];
        for sub in ["scripts", "references", "assets"] {
            let path = dir.join(sub);
            if self.fs.is_dir(&path) {
                let count = self.fs.list_dir(&path)?.len();
                checks.push(if count == 0 {
                    format!("{sub}/ present (empty)")
                } else {
                    format!("{sub}/ present ({count} entries)")
                });
            }
        }
        Ok(checks)
    }

    fn check_plugin(&self, dir: &Path) -> ClawgenResult<Vec<String>> {
        let raw = self.fs.read_to_string(&dir.join("package.json"))?;
        let manifest: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            invalid(
                ProjectKind::Plugin,
                dir,
                &format!("package.json is not valid JSON: {e}"),
            )
        })?;

        let has_extensions = manifest
            .get("openclaw")
            .and_then(|o| o.get("extensions"))
            .and_then(|e| e.as_array())
            .is_some_and(|a| !a.is_empty());
        if !has_extensions {
            return Err(invalid(
                ProjectKind::Plugin,
                dir,
                "package.json is missing openclaw.extensions",
            ));
        }

        Ok(vec![
            "index.ts and package.json present".into(),
            "openclaw.extensions defined".into(),
        ])
    }

    fn check_web(&self, dir: &Path, stack: TechStack) -> ClawgenResult<Vec<String>> {
        let required: &[&str] = match stack {
            TechStack::NextJs => &["package.json", "src/app/page.tsx", "src/app/layout.tsx"],
            TechStack::ViteReact => &["package.json", "index.html", "src/main.tsx", "src/App.tsx"],
        };
        for rel in required {
            if !self.fs.exists(&dir.join(rel)) {
                return Err(invalid(
                    ProjectKind::Web,
                    dir,
                    &format!("missing required file: {rel}"),
                ));
            }
        }

        let mut checks = vec![format!("{} entry points present", stack.display_name())];
        if self.fs.exists(&dir.join(".env.local.example")) {
            checks.push(".env.local.example provided".into());
        }
        if self.fs.exists(&dir.join("skill/SKILL.md")) {
            checks.push("companion skill present".into());
        }
        Ok(checks)
    }
}

/// The block between the leading `---` line and the next `---` line.
fn front_matter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

fn invalid(kind: ProjectKind, dir: &Path, reason: &str) -> crate::error::ClawgenError {
    ApplicationError::StructureInvalid {
        kind: kind.to_string(),
        path: dir.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::path::PathBuf;

    #[test]
    fn front_matter_is_extracted() {
        assert_eq!(
            front_matter("---\nname: a\ndescription: b\n---\n# A\n"),
            Some("name: a\ndescription: b")
        );
        assert_eq!(front_matter("# no front matter"), None);
        assert_eq!(front_matter("---\nname: a\n"), None);
    }

    #[test]
    fn skill_missing_description_is_invalid() {
        let dir = PathBuf::from("/p");
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().returning(|p| p.ends_with("SKILL.md"));
        fs.expect_read_to_string()
            .returning(|_| Ok("---\nname: a\n---\n".to_string()));

        let err = StructureChecker::new(&fs).check(&dir).unwrap_err();
        assert!(err.to_string().contains("missing 'description'"));
    }

    #[test]
    fn plugin_requires_extensions() {
        let dir = PathBuf::from("/p");
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().returning(|p| {
            p.ends_with("index.ts") || p.ends_with("package.json")
        });
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name":"x","openclaw":{}}"#.to_string()));

        let err = StructureChecker::new(&fs).check(&dir).unwrap_err();
        assert!(err.to_string().contains("openclaw.extensions"));
    }

    #[test]
    fn unknown_layout_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(false);

        let err = StructureChecker::new(&fs)
            .check(Path::new("/empty"))
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::UnknownProjectLayout {
                path: PathBuf::from("/empty")
            }
            .into()
        );
    }
}
