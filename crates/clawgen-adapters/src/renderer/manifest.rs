//! JSON manifests (`package.json`, `tsconfig.json`) built with `serde_json`.
//!
//! Key order is insertion order, so output is stable across runs.

use clawgen_core::{
    application::ApplicationError,
    domain::FileSet,
    error::{ClawgenError, ClawgenResult},
};
use serde_json::{Map, Value};
use thiserror::Error;

pub(crate) const PACKAGE_JSON: &str = "package.json";

#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    #[error("{file} is not valid JSON: {source}")]
    Parse {
        file: &'static str,
        source: serde_json::Error,
    },

    #[error("{file}: '{key}' is not an object")]
    NotAnObject { file: &'static str, key: String },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ManifestError> for ClawgenError {
    fn from(e: ManifestError) -> Self {
        ApplicationError::RenderingFailed {
            reason: e.to_string(),
        }
        .into()
    }
}

/// Two-space indented JSON with a trailing newline.
pub(crate) fn to_pretty(value: &Value) -> Result<String, ManifestError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Add `entries` to the `section` object of `package.json`, creating the
/// section when absent. Existing keys keep their position.
pub(crate) fn merge_package(
    files: &mut FileSet,
    section: &str,
    entries: &[(&str, &str)],
) -> ClawgenResult<()> {
    let raw = files
        .get(PACKAGE_JSON)
        .map(|f| f.content.clone())
        .unwrap_or_default();
    let mut manifest: Value = serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
        file: PACKAGE_JSON,
        source,
    })?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ManifestError::NotAnObject {
            file: PACKAGE_JSON,
            key: "<root>".into(),
        })?;
    let target = root
        .entry(section)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| ManifestError::NotAnObject {
            file: PACKAGE_JSON,
            key: section.to_string(),
        })?;
    for (key, value) in entries {
        target.insert((*key).to_string(), Value::String((*value).to_string()));
    }

    files.replace(PACKAGE_JSON, to_pretty(&manifest)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_adds_section_and_keeps_existing_keys() {
        let base = json!({"name": "x", "dependencies": {"react": "^18"}});
        let mut files = FileSet::new().with_file(PACKAGE_JSON, to_pretty(&base).unwrap());

        merge_package(&mut files, "dependencies", &[("prisma", "^5")]).unwrap();
        merge_package(&mut files, "scripts", &[("db:push", "prisma db push")]).unwrap();

        let merged: Value =
            serde_json::from_str(&files.get(PACKAGE_JSON).unwrap().content).unwrap();
        assert_eq!(
            merged,
            json!({
                "name": "x",
                "dependencies": {"react": "^18", "prisma": "^5"},
                "scripts": {"db:push": "prisma db push"}
            })
        );
    }

    #[test]
    fn merge_without_manifest_fails() {
        let mut files = FileSet::new().with_file("README.md", "");
        assert!(merge_package(&mut files, "dependencies", &[("a", "1")]).is_err());
    }
}
