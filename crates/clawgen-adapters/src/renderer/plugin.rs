//! Plugin variant. The plugin type only changes the documentation comment
//! and the commented example code in `index.ts`.

use clawgen_core::{
    domain::{FileSet, PluginOptions, PluginType, RenderContext, ScaffoldConfig},
    error::ClawgenResult,
};
use serde_json::json;

use super::manifest::{PACKAGE_JSON, to_pretty};

const INDEX_HEADER: &str = r#"// {{PROJECT_TITLE}}
// {{DESCRIPTION}}

import { OpenClawPluginApi } from "openclaw/plugin-sdk";

"#;

const REGISTER_OPEN: &str = r#"export default function register(api: OpenClawPluginApi) {
  console.log("{{PROJECT_TITLE}} plugin loaded!");
"#;

const REGISTER_CLOSE: &str = "}\n";

const TOOL_EXAMPLE: &str = r#"
  // api.registerTool({
  //   name: "{{PROJECT_NAME_SNAKE}}",
  //   description: "Describe what the tool does",
  //   parameters: {
  //     type: "object",
  //     properties: {
  //       input: { type: "string", description: "Input value" }
  //     }
  //   },
  //   execute: async ({ input }) => {
  //     return { result: `Processed: ${input}` };
  //   }
  // });
"#;

const GATEWAY_METHOD_EXAMPLE: &str = r#"
  // api.registerGatewayMethod("{{PROJECT_NAME}}.status", ({ respond }) => {
  //   respond(true, { ok: true, message: "{{PROJECT_TITLE}} is running" });
  // });
"#;

const CHANNEL_EXAMPLE: &str = r#"
  // api.registerChannel({
  //   id: "{{PROJECT_NAME}}",
  //   meta: {
  //     id: "{{PROJECT_NAME}}",
  //     label: "{{PROJECT_TITLE}}",
  //     selectionLabel: "{{PROJECT_TITLE}} (API)",
  //     docsPath: "/plugins/{{PROJECT_NAME}}",
  //     blurb: "{{DESCRIPTION}}",
  //   },
  //   capabilities: { chatTypes: ["direct"] },
  //   outbound: {
  //     deliveryMode: "direct",
  //     sendText: async ({ text, to }) => {
  //       console.log(`Would send to ${to}: ${text}`);
  //       return { ok: true };
  //     },
  //   },
  // });
"#;

const SERVICE_EXAMPLE: &str = r#"
  // api.registerService({
  //   id: "{{PROJECT_NAME}}-service",
  //   start: () => console.log("{{PROJECT_TITLE}} service started"),
  //   stop: () => console.log("{{PROJECT_TITLE}} service stopped"),
  // });
"#;

const README: &str = r#"# {{PROJECT_TITLE}}

{{DESCRIPTION}}

## Installation

```bash
npm install @openclaw/{{PROJECT_NAME}}
openclaw plugins install @openclaw/{{PROJECT_NAME}}
```

## Development

```bash
npm install
npm run build
openclaw plugins install -l .
```
"#;

fn type_doc(plugin_type: PluginType) -> &'static str {
    match plugin_type {
        PluginType::Channel => "  // Channel plugin: bridges a messaging platform into OpenClaw.\n",
        PluginType::Tool => "  // Tool plugin: exposes agent tools.\n",
        PluginType::GatewayMethod => {
            "  // Gateway method plugin: adds RPC methods to the gateway.\n"
        }
        PluginType::Composite => {
            "  // Composite plugin: combines tools, gateway methods and background services.\n"
        }
    }
}

fn examples(plugin_type: PluginType) -> &'static [&'static str] {
    match plugin_type {
        PluginType::Channel => &[CHANNEL_EXAMPLE],
        PluginType::Tool => &[TOOL_EXAMPLE],
        PluginType::GatewayMethod => &[GATEWAY_METHOD_EXAMPLE],
        PluginType::Composite => &[TOOL_EXAMPLE, GATEWAY_METHOD_EXAMPLE, SERVICE_EXAMPLE],
    }
}

fn index_ts(ctx: &RenderContext, options: &PluginOptions) -> String {
    let mut out = ctx.render(INDEX_HEADER);
    out.push_str(&ctx.render(REGISTER_OPEN));
    out.push('\n');
    out.push_str(type_doc(options.plugin_type));
    if options.add_examples {
        for example in examples(options.plugin_type) {
            out.push_str(&ctx.render(example));
        }
    }
    out.push_str(REGISTER_CLOSE);
    out
}

pub(crate) fn render(
    ctx: &RenderContext,
    config: &ScaffoldConfig,
    options: &PluginOptions,
) -> ClawgenResult<FileSet> {
    let name = config.name.as_str();

    let package = json!({
        "name": format!("@openclaw/{name}"),
        "version": "1.0.0",
        "description": config.description,
        "main": "dist/index.js",
        "scripts": {"build": "tsc", "dev": "tsc --watch", "clean": "rm -rf dist"},
        "keywords": ["openclaw", "plugin"],
        "author": config.author,
        "license": "MIT",
        "openclaw": {
            "extensions": ["./dist/index.js"],
            "plugin": {
                "id": name,
                "name": config.name.title(),
                "description": config.description,
            }
        },
        "peerDependencies": {"openclaw": ">=2026.2.0"},
        "devDependencies": {"typescript": "^5.0.0", "@types/node": "^20"}
    });

    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "commonjs",
            "lib": ["ES2020"],
            "outDir": "./dist",
            "rootDir": "./",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "declaration": true,
            "declarationMap": true,
            "sourceMap": true,
            "resolveJsonModule": true
        },
        "include": ["./**/*.ts"],
        "exclude": ["node_modules", "dist", "**/*.test.ts"]
    });

    let mut files = FileSet::new();
    files.add("index.ts", index_ts(ctx, options));
    files.add(PACKAGE_JSON, to_pretty(&package)?);
    files.add("tsconfig.json", to_pretty(&tsconfig)?);
    files.add("README.md", ctx.render(README));
    Ok(files)
}
