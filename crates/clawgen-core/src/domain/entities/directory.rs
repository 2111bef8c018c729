use crate::domain::entities::state::STATE_DIR;

/// Housekeeping entries that never make a directory "occupied".
/// Any dot-prefixed entry is ignorable as well.
pub const IGNORABLE_ENTRIES: &[&str] = &[
    ".git",
    STATE_DIR,
    "AGENTS.md",
    "node_modules",
    "__pycache__",
    ".next",
    "target",
    "dist",
    "build",
];

/// Result of inspecting a target directory. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// Does not exist yet; it will be created.
    Absent,
    /// Exists and holds nothing but housekeeping entries.
    Ignorable,
    /// Holds user content. Carries the offending entry names, sorted.
    Occupied(Vec<String>),
}

impl DirectoryStatus {
    /// Classify an existing directory from its entry names.
    pub fn classify<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut offending: Vec<String> = entries
            .into_iter()
            .filter(|name| !is_ignorable(name.as_ref()))
            .map(|name| name.as_ref().to_string())
            .collect();

        if offending.is_empty() {
            Self::Ignorable
        } else {
            offending.sort();
            Self::Occupied(offending)
        }
    }

    pub fn is_safe(&self) -> bool {
        !matches!(self, Self::Occupied(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Absent => "directory does not exist, it will be created".into(),
            Self::Ignorable => "directory is empty".into(),
            Self::Occupied(names) => {
                let shown: Vec<&str> = names.iter().take(5).map(String::as_str).collect();
                let more = names.len().saturating_sub(shown.len());
                let mut text = format!(
                    "directory contains {} entr{}: {}",
                    names.len(),
                    if names.len() == 1 { "y" } else { "ies" },
                    shown.join(", ")
                );
                if more > 0 {
                    text.push_str(&format!(" (+{more} more)"));
                }
                text
            }
        }
    }
}

pub fn is_ignorable(name: &str) -> bool {
    name.starts_with('.') || IGNORABLE_ENTRIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_and_state_dir_only_is_ignorable() {
        assert_eq!(
            DirectoryStatus::classify([".git", ".clawgen"]),
            DirectoryStatus::Ignorable
        );
    }

    #[test]
    fn empty_directory_is_ignorable() {
        assert_eq!(
            DirectoryStatus::classify(Vec::<String>::new()),
            DirectoryStatus::Ignorable
        );
    }

    #[test]
    fn one_unrelated_file_is_occupied() {
        let status = DirectoryStatus::classify([".git", "notes.txt"]);
        assert_eq!(status, DirectoryStatus::Occupied(vec!["notes.txt".into()]));
        assert!(!status.is_safe());
    }

    #[test]
    fn dot_entries_and_build_output_are_ignored() {
        let status = DirectoryStatus::classify([".env.local", "node_modules", "dist", "AGENTS.md"]);
        assert!(status.is_safe());
    }

    #[test]
    fn describe_truncates_long_listings() {
        let names: Vec<String> = (0..7).map(|i| format!("f{i}")).collect();
        let text = DirectoryStatus::classify(names).describe();
        assert!(text.starts_with("directory contains 7 entries: f0, f1, f2, f3, f4"));
        assert!(text.ends_with("(+2 more)"));
    }
}
