//! Next.js 14 (app router) base file set.

use clawgen_core::{
    domain::{FileSet, RenderContext},
    error::ClawgenResult,
};
use serde_json::json;

use super::ENV_TEMPLATE;
use crate::renderer::manifest::{PACKAGE_JSON, to_pretty};

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": { "@/*": ["./src/*"] }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  env: {
    OPENCLAW_GATEWAY_URL: process.env.OPENCLAW_GATEWAY_URL,
  },
};

module.exports = nextConfig;
"#;

const ENV: &str = r#"# OpenClaw Gateway
OPENCLAW_GATEWAY_URL={{GATEWAY_URL}}
OPENCLAW_GATEWAY_TOKEN={{GATEWAY_TOKEN}}

# App
NEXT_PUBLIC_APP_NAME={{PROJECT_NAME}}
NEXT_PUBLIC_APP_URL=http://localhost:3000
"#;

const LAYOUT: &str = r#"import './globals.css';
import type { ReactNode } from 'react';

export const metadata = {
  title: '{{PROJECT_TITLE}}',
  description: {{DESCRIPTION_JS}},
};

export default function RootLayout({ children }: { children: ReactNode }) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#;

const GLOBALS_CSS: &str = r#":root {
  --accent: {{ACCENT}};
}

* { box-sizing: border-box; }
body { margin: 0; padding: 0; font-family: system-ui, sans-serif; }
h1, a { color: var(--accent); }
"#;

const PAGE: &str = r#"export default function Home() {
  return (
    <main style={{ padding: '2rem', maxWidth: '800px', margin: '0 auto' }}>
      <h1>{{PROJECT_TITLE}}</h1>
      <p>{{SUMMARY}}</p>
{{FEATURES}}      <p>Built on OpenClaw</p>
    </main>
  );
}
"#;

const CLIENT: &str = r#"// Thin client for the OpenClaw gateway (server side only).
const GATEWAY_URL = process.env.OPENCLAW_GATEWAY_URL || 'http://localhost:18789';
const GATEWAY_TOKEN = process.env.OPENCLAW_GATEWAY_TOKEN;

export type ChatMessage = { role: 'system' | 'user' | 'assistant'; content: string };

export async function callOpenClaw(messages: ChatMessage[], agentId = 'main') {
  const response = await fetch(GATEWAY_URL + '/v1/chat/completions', {
    method: 'POST',
    headers: {
      'Content-Type': 'application/json',
      ...(GATEWAY_TOKEN ? { Authorization: `Bearer ${GATEWAY_TOKEN}` } : {}),
      'x-openclaw-agent-id': agentId,
    },
    body: JSON.stringify({ model: `openclaw:${agentId}`, messages }),
  });
  if (!response.ok) {
    const text = await response.text();
    throw new Error(`OpenClaw API error: ${response.status} ${text}`);
  }
  return response.json();
}
"#;

const API_ROUTE: &str = r#"import { NextResponse } from 'next/server';
import { callOpenClaw } from '@/lib/openclaw';

export async function POST(request: Request) {
  try {
    const { messages, agentId } = await request.json();
    const data = await callOpenClaw(messages, agentId);
    return NextResponse.json(data);
  } catch (error) {
    const message = error instanceof Error ? error.message : String(error);
    return NextResponse.json({ error: message }, { status: 500 });
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

The app talks to an OpenClaw gateway over HTTP.

- `POST /api/openclaw` proxies chat completions to the gateway
- `src/lib/openclaw.ts` exports `callOpenClaw` for server code

| Variable | Purpose |
|----------|---------|
| `OPENCLAW_GATEWAY_URL` | Gateway URL (default `http://localhost:18789`) |
| `OPENCLAW_GATEWAY_TOKEN` | Gateway token (optional) |
| `NEXT_PUBLIC_APP_NAME` | Application name |
"#;

pub(super) fn base(ctx: &RenderContext) -> ClawgenResult<FileSet> {
    let package = json!({
        "name": ctx.get("PROJECT_NAME").unwrap_or_default(),
        "version": "0.1.0",
        "private": true,
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint"
        },
        "dependencies": {
            "next": "14",
            "react": "^18",
            "react-dom": "^18"
        },
        "devDependencies": {
            "@types/node": "^20",
            "@types/react": "^18",
            "typescript": "^5"
        }
    });

    let mut files = FileSet::new();
    files.add(PACKAGE_JSON, to_pretty(&package)?);
    files.add("tsconfig.json", TSCONFIG);
    files.add("next.config.js", NEXT_CONFIG);
    files.add(ENV_TEMPLATE, ctx.render(ENV));
    files.add("src/app/layout.tsx", ctx.render(LAYOUT));
    files.add("src/app/globals.css", ctx.render(GLOBALS_CSS));
    files.add("src/app/page.tsx", ctx.render(PAGE));
    files.add("src/lib/openclaw.ts", CLIENT);
    files.add("src/app/api/openclaw/route.ts", API_ROUTE);
    files.add("README.md", ctx.render(README));
    Ok(files)
}
