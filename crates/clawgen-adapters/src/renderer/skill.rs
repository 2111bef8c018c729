//! Skill variant, and the companion skill shipped inside web apps.

use clawgen_core::domain::{FileSet, RenderContext, SkillOptions};

const SKILL_MANIFEST: &str = r#"---
name: {{PROJECT_NAME}}
description: {{DESCRIPTION}}
---

# {{PROJECT_TITLE}}

## Overview

Describe what this skill does and when the agent should use it.

## Resources

### scripts/
Executable code (Python/Bash/etc.) that can be run directly.

### references/
Documentation and reference material.

### assets/
Files not intended to be loaded into context, but used in output.
"#;

const EXAMPLE_SCRIPT: &str = r#"#!/usr/bin/env python3
"""
Example helper script for {{PROJECT_NAME}}
"""


def main():
    print("Hello from skill: {{PROJECT_NAME}}!")


if __name__ == "__main__":
    main()
"#;

const API_REFERENCE: &str = r#"# API Reference for {{PROJECT_TITLE}}

Document API endpoints, data schemas, and usage examples.

## When to Use

- Detailed API documentation
- Configuration options
- Troubleshooting guides
"#;

const ASSETS_README: &str = "Place asset files (templates, images, etc.) here.\n";

const README: &str = r#"# {{PROJECT_TITLE}}

{{DESCRIPTION}}

## Usage

1. Place this skill folder in your OpenClaw workspace `skills/` directory
2. Restart the OpenClaw gateway
3. The skill is loaded automatically

See `SKILL.md` for skill details.
"#;

const COMPANION_MANIFEST: &str = r#"---
name: {{PROJECT_NAME}}-skill
description: Skill for {{PROJECT_NAME}} OpenClaw application
user-invocable: true
---

# {{PROJECT_TITLE}} Skill

Lets the agent talk to the {{PROJECT_TITLE}} web application.

## Usage

Run `scripts/main.py` with a message; it is posted to the application's
`/api/openclaw` endpoint.
"#;

const COMPANION_SCRIPT: &str = r#"#!/usr/bin/env python3
"""
Companion script for the {{PROJECT_NAME}} web application.
"""

import json
import os
import sys
import urllib.request

APP_URL = os.environ.get("APP_URL", "http://localhost:3000")


def main():
    message = " ".join(sys.argv[1:]) or "Hello from {{PROJECT_NAME}}-skill"
    body = json.dumps({"messages": [{"role": "user", "content": message}]}).encode()
    request = urllib.request.Request(
        APP_URL + "/api/openclaw",
        data=body,
        headers={"Content-Type": "application/json"},
    )
    with urllib.request.urlopen(request) as response:
        print(response.read().decode())


if __name__ == "__main__":
    main()
"#;

const GITKEEP: &str = "";

/// Render a standalone skill. Subtree toggles never touch `SKILL.md`.
pub(crate) fn render(ctx: &RenderContext, options: &SkillOptions) -> FileSet {
    let mut files = FileSet::new();
    files.add("SKILL.md", ctx.render(SKILL_MANIFEST));

    if options.create_scripts {
        if options.add_examples {
            files.add_executable("scripts/example.py", ctx.render(EXAMPLE_SCRIPT));
        } else {
            files.add("scripts/.gitkeep", GITKEEP);
        }
    }
    if options.create_references {
        if options.add_examples {
            files.add("references/api_reference.md", ctx.render(API_REFERENCE));
        } else {
            files.add("references/.gitkeep", GITKEEP);
        }
    }
    if options.create_assets {
        if options.add_examples {
            files.add("assets/README.md", ASSETS_README);
        } else {
            files.add("assets/.gitkeep", GITKEEP);
        }
    }

    files.add("README.md", ctx.render(README));
    files
}

/// Minimal user-invocable skill, relative to its own directory.
pub(crate) fn companion(ctx: &RenderContext) -> FileSet {
    let mut files = FileSet::new();
    files.add("SKILL.md", ctx.render(COMPANION_MANIFEST));
    files.add_executable("scripts/main.py", ctx.render(COMPANION_SCRIPT));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawgen_core::domain::ProjectName;

    fn ctx() -> RenderContext {
        RenderContext::new(&ProjectName::parse("out").unwrap()).with_variable("DESCRIPTION", "d")
    }

    #[test]
    fn defaults_give_example_script_and_reference() {
        let files = render(&ctx(), &SkillOptions::default());
        assert_eq!(
            files.paths(),
            vec![
                "SKILL.md",
                "scripts/example.py",
                "references/api_reference.md",
                "README.md"
            ]
        );
        assert!(files.get("scripts/example.py").unwrap().is_executable());
        assert!(files
            .get("SKILL.md")
            .unwrap()
            .content
            .starts_with("---\nname: out\ndescription: d\n---\n"));
    }

    #[test]
    fn toggles_leave_manifest_alone() {
        let bare = SkillOptions {
            create_scripts: false,
            create_references: false,
            create_assets: true,
            add_examples: false,
        };
        let full = render(&ctx(), &SkillOptions::default());
        let files = render(&ctx(), &bare);

        assert_eq!(files.paths(), vec!["SKILL.md", "assets/.gitkeep", "README.md"]);
        assert_eq!(
            files.get("SKILL.md").unwrap().content,
            full.get("SKILL.md").unwrap().content
        );
    }

    #[test]
    fn companion_is_user_invocable() {
        let files = companion(&ctx());
        let manifest = &files.get("SKILL.md").unwrap().content;
        assert!(manifest.contains("name: out-skill"));
        assert!(manifest.contains("user-invocable: true"));
        assert!(files.get("scripts/main.py").unwrap().is_executable());
    }
}
