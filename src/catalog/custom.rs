//! Custom in-house component catalog.
//!
//! A small library of project-specific components. Creation through the
//! MCP surface is acknowledged but not persisted.

use super::{entry, Component};

/// All custom components.
pub static CUSTOM_COMPONENTS: &[Component] = &[
    entry("button", "ui", "Reusable button component"),
    entry("card", "ui", "Reusable card component"),
    entry("modal", "ui", "Reusable modal component"),
];
