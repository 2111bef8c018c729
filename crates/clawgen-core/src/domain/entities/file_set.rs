use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Rendered project files, ready for materialization.
///
/// This is the output of the rendering step. Order is insertion order and is
/// the order in which files are written and reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<FileToWrite>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.push(path.into(), content.into(), Permissions::read_write());
    }

    pub fn add_executable(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.push(path.into(), content.into(), Permissions::executable());
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add(path, content);
        self
    }

    fn push(&mut self, path: PathBuf, content: String, permissions: Permissions) {
        self.files.push(FileToWrite {
            path,
            content,
            permissions,
        });
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Append text to an existing file. Content already present is untouched.
    pub fn append_to(&mut self, path: impl AsRef<Path>, extra: &str) -> Result<(), DomainError> {
        let file = self.get_mut(path.as_ref())?;
        file.content.push_str(extra);
        Ok(())
    }

    /// Swap the content of an existing file, keeping its position and permissions.
    pub fn replace(&mut self, path: impl AsRef<Path>, content: String) -> Result<(), DomainError> {
        let file = self.get_mut(path.as_ref())?;
        file.content = content;
        Ok(())
    }

    fn get_mut(&mut self, path: &Path) -> Result<&mut FileToWrite, DomainError> {
        self.files
            .iter_mut()
            .find(|f| f.path == path)
            .ok_or_else(|| DomainError::MissingFile {
                path: path.display().to_string(),
            })
    }

    /// Move every file of `other` under `prefix` and append them to this set.
    pub fn nest(&mut self, prefix: impl AsRef<Path>, other: FileSet) {
        let prefix = prefix.as_ref();
        for mut file in other.files {
            file.path = prefix.join(&file.path);
            self.files.push(file);
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyFileSet);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();

            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if file
                .path
                .components()
                .any(|c| matches!(c, Component::ParentDir))
            {
                return Err(DomainError::PathEscapesRoot { path: path_str });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| f.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl IntoIterator for FileSet {
    type Item = FileToWrite;
    type IntoIter = std::vec::IntoIter<FileToWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Permissions,
}

impl FileToWrite {
    pub fn is_executable(&self) -> bool {
        self.permissions.executable_flag()
    }
}

/// Permission bits carried with a rendered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self { executable: false }
    }

    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let set = FileSet::new()
            .with_file("b.md", "")
            .with_file("a.md", "")
            .with_file("c/d.md", "");
        assert_eq!(set.paths(), ["b.md", "a.md", "c/d.md"]);
    }

    #[test]
    fn validate_rejects_empty_duplicate_and_escaping_paths() {
        assert_eq!(FileSet::new().validate(), Err(DomainError::EmptyFileSet));

        let dup = FileSet::new().with_file("a", "1").with_file("a", "2");
        assert!(matches!(
            dup.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));

        let escape = FileSet::new().with_file("../a", "");
        assert!(matches!(
            escape.validate(),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn append_keeps_existing_content_as_prefix() {
        let mut set = FileSet::new().with_file(".env", "A=1\n");
        set.append_to(".env", "B=2\n").unwrap();
        assert_eq!(set.get(".env").unwrap().content, "A=1\nB=2\n");
        assert!(set.append_to("missing", "x").is_err());
    }

    #[test]
    fn nest_prefixes_paths_and_keeps_permissions() {
        let mut inner = FileSet::new();
        inner.add_executable("scripts/main.py", "print()");

        let mut outer = FileSet::new().with_file("README.md", "");
        outer.nest("skill", inner);

        assert_eq!(outer.paths(), ["README.md", "skill/scripts/main.py"]);
        assert!(outer.get("skill/scripts/main.py").unwrap().is_executable());
    }
}
