//! designkit-mcp: MCP server for AI-assisted design-system work
//!
//! This library aggregates UI component catalogs and design tokens behind a
//! single Model Context Protocol surface so AI assistants can look up brand
//! tokens, browse component libraries, and route AI operations to n8n.
//!
//! # Architecture
//!
//! The server exposes seven providers through one tool and resource
//! namespace:
//!
//! - **Brand System**: design-token lookups (colors, spacing, typography,
//!   radii, shadows) with theme awareness and "did you mean" suggestions
//! - **Component Libraries**: shadcn/ui, Magic UI, Aceternity UI, 8bitcn,
//!   and an in-house catalog, each with list/search/retrieve tools
//! - **AI Router**: proxies AI operations to n8n webhooks; no LLM calls
//!   happen in this process
//!
//! Tool-level failures (an unknown token, a missing component) come back as
//! error-flagged tool results, never as protocol errors; one failed lookup
//! does not disturb the session.
//!
//! # Modules
//!
//! - [`catalog`] — Static component catalogs and search
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`mcp`] — MCP protocol implementation
//! - [`providers`] — Provider trait, registry, and the seven providers
//! - [`tokens`] — Design-token store, resolution, and validation

pub mod catalog;
pub mod config;
pub mod error;
pub mod mcp;
pub mod providers;
pub mod tokens;
