//! Vite + React base file set.

use clawgen_core::{
    domain::{FileSet, RenderContext},
    error::ClawgenResult,
};
use serde_json::json;

use super::ENV_TEMPLATE;
use crate::renderer::manifest::{PACKAGE_JSON, to_pretty};

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  server: { port: 3000 },
  envPrefix: 'VITE_',
});
"#;

const ENV: &str = r#"# OpenClaw Gateway
VITE_OPENCLAW_GATEWAY_URL={{GATEWAY_URL}}
VITE_OPENCLAW_GATEWAY_TOKEN={{GATEWAY_TOKEN}}

# App
VITE_APP_NAME={{PROJECT_NAME}}
VITE_APP_URL=http://localhost:3000
"#;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{PROJECT_TITLE}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const MAIN: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
import './index.css';

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
);
"#;

const APP: &str = r#"export default function App() {
  return (
    <main style={{ padding: '2rem', maxWidth: '800px', margin: '0 auto' }}>
      <h1>{{PROJECT_TITLE}}</h1>
      <p>{{SUMMARY}}</p>
{{FEATURES}}      <p>Built on OpenClaw</p>
    </main>
  );
}
"#;

const INDEX_CSS: &str = r#":root {
  --accent: {{ACCENT}};
}

* { box-sizing: border-box; }
body { margin: 0; padding: 0; font-family: system-ui, sans-serif; }
h1, a { color: var(--accent); }
"#;

const CLIENT: &str = r#"// Thin client for the OpenClaw gateway. Requests go through /api/openclaw
// so the gateway token never reaches the browser.
export type ChatMessage = { role: 'system' | 'user' | 'assistant'; content: string };

export async function callOpenClaw(messages: ChatMessage[], agentId = 'main') {
  const response = await fetch('/api/openclaw', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ messages, agentId }),
  });
  if (!response.ok) {
    throw new Error(`OpenClaw API error: ${response.status}`);
  }
  return response.json();
}
"#;

const API_ROUTE: &str = r#"// Serverless proxy to the OpenClaw gateway.
const GATEWAY_URL = process.env.VITE_OPENCLAW_GATEWAY_URL || 'http://localhost:18789';
const GATEWAY_TOKEN = process.env.VITE_OPENCLAW_GATEWAY_TOKEN;

export default async function handler(req: any, res: any) {
  if (req.method !== 'POST') {
    res.status(405).json({ error: 'Method not allowed' });
    return;
  }
  const { messages, agentId = 'main' } = req.body;
  try {
    const response = await fetch(GATEWAY_URL + '/v1/chat/completions', {
      method: 'POST',
      headers: {
        'Content-Type': 'application/json',
        ...(GATEWAY_TOKEN ? { Authorization: `Bearer ${GATEWAY_TOKEN}` } : {}),
        'x-openclaw-agent-id': agentId,
      },
      body: JSON.stringify({ model: `openclaw:${agentId}`, messages }),
    });
    res.status(response.status).json(await response.json());
  } catch (error) {
    res.status(500).json({ error: String(error) });
  }
}
"#;

const README: &str = r#"# {{PROJECT_TITLE}}

{{DESCRIPTION}}

## Quick Start

1. Install dependencies: `npm install`
2. Copy `.env.local.example` to `.env.local` and fill in the gateway settings
3. If `prisma/schema.prisma` exists, create the tables: `npx prisma db push`
4. Start the dev server: `npm run dev`
5. Open [http://localhost:3000](http://localhost:3000)

## OpenClaw Integration

- `api/openclaw.ts` is a serverless proxy to the gateway's chat completions
- `src/openclaw.ts` exports `callOpenClaw` for the UI

| Variable | Purpose |
|----------|---------|
| `VITE_OPENCLAW_GATEWAY_URL` | Gateway URL (default `http://localhost:18789`) |
| `VITE_OPENCLAW_GATEWAY_TOKEN` | Gateway token (optional, read by the proxy only) |
| `VITE_APP_NAME` | Application name |
"#;

pub(super) fn base(ctx: &RenderContext) -> ClawgenResult<FileSet> {
    let package = json!({
        "name": ctx.get("PROJECT_NAME").unwrap_or_default(),
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "tsc && vite build",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18",
            "react-dom": "^18"
        },
        "devDependencies": {
            "@types/react": "^18",
            "@types/react-dom": "^18",
            "@vitejs/plugin-react": "^4",
            "typescript": "^5",
            "vite": "^5"
        }
    });

    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true
        },
        "include": ["src"],
        "references": [{"path": "./tsconfig.node.json"}]
    });

    let tsconfig_node = json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true
        },
        "include": ["vite.config.ts"]
    });

    let mut files = FileSet::new();
    files.add(PACKAGE_JSON, to_pretty(&package)?);
    files.add("tsconfig.json", to_pretty(&tsconfig)?);
    files.add("tsconfig.node.json", to_pretty(&tsconfig_node)?);
    files.add("vite.config.ts", VITE_CONFIG);
    files.add("index.html", ctx.render(INDEX_HTML));
    files.add(ENV_TEMPLATE, ctx.render(ENV));
    files.add("src/main.tsx", MAIN);
    files.add("src/App.tsx", ctx.render(APP));
    files.add("src/index.css", ctx.render(INDEX_CSS));
    files.add("src/openclaw.ts", CLIENT);
    files.add("api/openclaw.ts", API_ROUTE);
    files.add("README.md", ctx.render(README));
    Ok(files)
}
