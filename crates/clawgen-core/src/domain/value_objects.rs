//! Domain value objects: the closed enumerations of the workflow.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. Every
//! one of them is a closed set. Parsing is case-insensitive and rejects
//! anything outside the set with [`DomainError::UnknownVariant`], so an
//! unknown value can never reach the persisted state. Deserialization goes
//! through the same names, so a hand-edited state file with an unknown value
//! fails to load instead of smuggling it in.
//!
//! # Adding New Variants
//!
//! 1. Add the `Variant => "name"` arm in the `closed_enum!` invocation
//! 2. Handle the new variant in the renderer where it matters
//! 3. Done: `ALL`, `as_str`, `Display`, `FromStr` and serde follow

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Canonical names, in display order.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(DomainError::UnknownVariant {
                        field: $field,
                        value: s.to_string(),
                        expected: Self::names().join(", "),
                    }),
                }
            }
        }
    };
}

// ── ProjectKind ───────────────────────────────────────────────────────────────

closed_enum! {
    /// The variant of project to scaffold.
    pub enum ProjectKind as "project type" {
        #[default]
        Skill => "skill",
        Plugin => "plugin",
        Web => "web" | "webapp",
    }
}

// ── Database ──────────────────────────────────────────────────────────────────

closed_enum! {
    /// Database support for generated web applications.
    pub enum Database as "database" {
        #[default]
        None => "none",
        Postgresql => "postgresql" | "postgres" | "pg",
        Sqlite => "sqlite",
    }
}

impl Database {
    /// Whether the database fragment applies.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

// ── PluginType ────────────────────────────────────────────────────────────────

closed_enum! {
    /// What an OpenClaw plugin registers with the gateway.
    pub enum PluginType as "plugin type" {
        Channel => "channel",
        #[default]
        Tool => "tool",
        GatewayMethod => "gateway-method" | "gateway_method",
        Composite => "composite",
    }
}

// ── TechStack ─────────────────────────────────────────────────────────────────

closed_enum! {
    /// Web application stack flavor.
    pub enum TechStack as "tech stack" {
        #[default]
        NextJs => "nextjs" | "next" | "next.js",
        ViteReact => "vite-react" | "vite",
    }
}

// ── OAuthProvider ─────────────────────────────────────────────────────────────

closed_enum! {
    /// Identity provider wired into the OAuth fragment.
    pub enum OAuthProvider as "oauth provider" {
        #[default]
        Openclaw => "openclaw",
        Google => "google",
        Github => "github",
    }
}

// ── SkillTrigger ──────────────────────────────────────────────────────────────

closed_enum! {
    /// How a skill is triggered by the gateway.
    pub enum SkillTrigger as "skill trigger" {
        #[default]
        Message => "message",
        Schedule => "schedule",
        Event => "event",
    }
}

// ── DesignStyle ───────────────────────────────────────────────────────────────

closed_enum! {
    /// Visual direction recorded with the requirements.
    pub enum DesignStyle as "design style" {
        #[default]
        MinimalModern => "minimal-modern" | "minimal",
        WarmPlayful => "warm-playful" | "playful",
        Professional => "professional",
        Other => "other",
    }
}

impl TechStack {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::ViteReact => "Vite + React",
        }
    }
}
