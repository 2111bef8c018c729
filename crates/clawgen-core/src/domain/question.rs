//! Typed questions and the input policies that answer them.
//!
//! Every elicitor, interactive or scripted, feeds raw lines through
//! `accept`. `Err` carries a short hint and means "ask again".

/// Normalizer/validator for free-text answers. Returns the value to keep or a
/// hint explaining the rejection.
pub type TextCheck = fn(&str) -> Result<String, String>;

/// Free text, with an optional default and an optional field check.
#[derive(Debug, Clone)]
pub struct TextQuestion {
    pub prompt: String,
    pub default: Option<String>,
    pub check: Option<TextCheck>,
}

impl TextQuestion {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: None,
            check: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_check(mut self, check: TextCheck) -> Self {
        self.check = Some(check);
        self
    }

    pub fn accept(&self, input: &str) -> Result<String, String> {
        let value = resolve_text(input, self.default.as_deref())
            .ok_or_else(|| "A value is required".to_string())?;
        match self.check {
            Some(check) => check(&value),
            None => Ok(value),
        }
    }
}

/// Yes/no, with an optional default.
#[derive(Debug, Clone)]
pub struct ConfirmQuestion {
    pub prompt: String,
    pub default: Option<bool>,
}

impl ConfirmQuestion {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    /// `[Y/n]`, `[y/N]` or `[y/n]`.
    pub fn hint(&self) -> &'static str {
        match self.default {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[y/n]",
        }
    }

    pub fn accept(&self, input: &str) -> Result<bool, String> {
        parse_bool(input, self.default).ok_or_else(|| "Please answer yes or no".to_string())
    }
}

/// One of a fixed list of options. Answers resolve to an index into `options`.
#[derive(Debug, Clone)]
pub struct ChoiceQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub default: Option<usize>,
}

impl ChoiceQuestion {
    pub fn new<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Default by index. Out-of-range indices are ignored.
    pub fn with_default(mut self, index: usize) -> Self {
        if index < self.options.len() {
            self.default = Some(index);
        }
        self
    }

    /// Default by option name, matched case-insensitively.
    pub fn with_default_named(self, name: &str) -> Self {
        match self.position(name) {
            Some(index) => self.with_default(index),
            None => self,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(name.trim()))
    }

    pub fn default_label(&self) -> Option<&str> {
        self.default
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn accept(&self, input: &str) -> Result<usize, String> {
        parse_choice(input, &self.options, self.default).ok_or_else(|| {
            format!(
                "Enter 1-{} or one of: {}",
                self.options.len(),
                self.options.join(", ")
            )
        })
    }
}

/// Empty input yields the default (if any); anything else is kept verbatim
/// after trimming.
pub fn resolve_text(input: &str, default: Option<&str>) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.map(str::to_string)
    } else {
        Some(trimmed.to_string())
    }
}

/// `y/yes/true/1` and `n/no/false/0`, case-insensitive. Empty input yields the
/// default. Anything else is `None`.
pub fn parse_bool(input: &str, default: Option<bool>) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// A 1-based index or a case-insensitive option name. Empty input yields the
/// default when one is declared.
pub fn parse_choice(input: &str, options: &[String], default: Option<usize>) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options.iter().position(|o| o.eq_ignore_ascii_case(trimmed))
}

/// Split a comma-separated answer into trimmed, non-empty items.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["none".into(), "postgresql".into(), "sqlite".into()]
    }

    #[test]
    fn bool_vocabulary() {
        for yes in ["y", "YES", "True", "1"] {
            assert_eq!(parse_bool(yes, None), Some(true));
        }
        for no in ["n", "No", "FALSE", "0"] {
            assert_eq!(parse_bool(no, Some(true)), Some(false));
        }
        assert_eq!(parse_bool("", Some(true)), Some(true));
        assert_eq!(parse_bool("", None), None);
        assert_eq!(parse_bool("maybe", Some(false)), None);
    }

    #[test]
    fn choice_by_index_or_name() {
        assert_eq!(parse_choice("2", &options(), None), Some(1));
        assert_eq!(parse_choice("SQLite", &options(), None), Some(2));
        assert_eq!(parse_choice("", &options(), Some(0)), Some(0));
        assert_eq!(parse_choice("", &options(), None), None);
        assert_eq!(parse_choice("0", &options(), Some(0)), None);
        assert_eq!(parse_choice("4", &options(), None), None);
        assert_eq!(parse_choice("mysql", &options(), Some(0)), None);
    }

    #[test]
    fn text_default_and_required() {
        let q = TextQuestion::new("Description").with_default("fallback");
        assert_eq!(q.accept("   "), Ok("fallback".to_string()));
        assert_eq!(q.accept(" given "), Ok("given".to_string()));
        assert!(TextQuestion::new("Name").accept("").is_err());
    }

    #[test]
    fn text_check_normalizes_or_rejects() {
        fn upper(s: &str) -> Result<String, String> {
            if s.contains('!') {
                Err("no bangs".into())
            } else {
                Ok(s.to_uppercase())
            }
        }
        let q = TextQuestion::new("x").with_check(upper);
        assert_eq!(q.accept("abc"), Ok("ABC".to_string()));
        assert_eq!(q.accept("a!"), Err("no bangs".to_string()));
    }

    #[test]
    fn choice_default_by_name() {
        let q = ChoiceQuestion::new("db", options()).with_default_named("Sqlite");
        assert_eq!(q.default, Some(2));
        assert_eq!(q.default_label(), Some("sqlite"));
        let none = ChoiceQuestion::new("db", options()).with_default_named("mysql");
        assert_eq!(none.default, None);
    }

    #[test]
    fn list_splitting_drops_blanks() {
        assert_eq!(split_list("home, chat,, profile "), ["home", "chat", "profile"]);
        assert!(split_list(" , ").is_empty());
    }
}
