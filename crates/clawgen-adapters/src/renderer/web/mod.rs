//! Web variant: a Next.js or Vite + React base, then optional fragments.
//!
//! Fragments own disjoint files or append to the two shared files
//! (`package.json`, `.env.local.example`), so any combination composes.

mod fragments;
mod nextjs;
mod vite;

use clawgen_core::{
    domain::{DesignStyle, FileSet, RenderContext, ScaffoldConfig, TechStack, WebOptions},
    error::ClawgenResult,
};

use super::skill;

pub(crate) const ENV_TEMPLATE: &str = ".env.local.example";

/// Directory of the companion skill inside a web project.
pub(crate) const COMPANION_DIR: &str = "skill";

pub(crate) fn render(
    ctx: &RenderContext,
    config: &ScaffoldConfig,
    options: &WebOptions,
) -> ClawgenResult<FileSet> {
    let page = page_context(ctx, config);
    let mut files = match options.stack {
        TechStack::NextJs => nextjs::base(&page)?,
        TechStack::ViteReact => vite::base(&page)?,
    };

    if options.database.is_enabled() {
        fragments::database(&mut files, options.database)?;
    }
    if options.oauth {
        fragments::oauth(&mut files, options.stack, options.oauth_provider)?;
    }
    if options.companion_skill {
        files.nest(COMPANION_DIR, skill::companion(ctx));
    }
    Ok(files)
}

/// Render context extended with landing-page content from the requirements.
fn page_context(ctx: &RenderContext, config: &ScaffoldConfig) -> RenderContext {
    let req = &config.requirements;
    let summary = req
        .summary
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(&config.description);

    ctx.clone()
        .with_variable("SUMMARY", jsx_text(summary))
        .with_variable("FEATURES", features_block(req.features()))
        .with_variable("ACCENT", accent(req.design_style, req.color_preference.as_deref()))
        .with_variable("DESCRIPTION_JS", js_string(&config.description))
}

fn features_block(features: &[String]) -> String {
    if features.is_empty() {
        return String::new();
    }
    let mut out = String::from("      <h2>Core features</h2>\n      <ul>\n");
    for feature in features {
        out.push_str(&format!("        <li>{}</li>\n", jsx_text(feature)));
    }
    out.push_str("      </ul>\n");
    out
}

fn accent(style: Option<DesignStyle>, color: Option<&str>) -> String {
    if let Some(color) = color.map(str::trim).filter(|c| !c.is_empty()) {
        return color.to_string();
    }
    match style.unwrap_or_default() {
        DesignStyle::MinimalModern | DesignStyle::Other => "#111827",
        DesignStyle::WarmPlayful => "#f97316",
        DesignStyle::Professional => "#1d4ed8",
    }
    .to_string()
}

/// Text safe to place between JSX tags.
fn jsx_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// A quoted JavaScript string literal.
fn js_string(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsx_text_escapes_markup_and_braces() {
        assert_eq!(jsx_text("a <b> {c} & d"), "a &lt;b&gt; &#123;c&#125; &amp; d");
    }

    #[test]
    fn color_preference_wins_over_style() {
        assert_eq!(accent(Some(DesignStyle::WarmPlayful), Some(" teal ")), "teal");
        assert_eq!(accent(Some(DesignStyle::WarmPlayful), Some("")), "#f97316");
        assert_eq!(accent(None, None), "#111827");
    }

    #[test]
    fn js_string_is_quoted() {
        assert_eq!(js_string(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
