//! Tool and resource providers behind the MCP surface.
//!
//! Each provider owns one namespace of tools and one resource URI scheme:
//! the brand design-token API, four UI component libraries, the custom
//! component library, and the AI workflow router. The [`ProviderRegistry`]
//! merges their catalogs for tools/list and resources/list, and routes
//! tools/call and resources/read to the owning provider through an
//! explicit lookup table rather than by inspecting name prefixes.

pub mod aceternity;
pub mod ai_router;
pub mod brand;
pub mod custom;
pub mod eightbit;
pub mod library;
pub mod magicui;
pub mod shadcn;

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::TokenError;
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::tokens::TokenStore;

pub use aceternity::AceternityProvider;
pub use ai_router::AiRouterProvider;
pub use brand::BrandProvider;
pub use custom::CustomProvider;
pub use eightbit::EightbitProvider;
pub use magicui::MagicUiProvider;
pub use shadcn::ShadcnProvider;

/// Identifies one provider in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Design-token and theme API.
    Brand,
    /// shadcn/ui component library.
    Shadcn,
    /// Magic UI component library.
    MagicUi,
    /// Aceternity UI component library.
    Aceternity,
    /// 8bitcn retro component library.
    Eightbit,
    /// In-house component library.
    Custom,
    /// AI workflow router.
    AiRouter,
}

impl ProviderId {
    /// Stable name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Shadcn => "shadcn",
            Self::MagicUi => "magicui",
            Self::Aceternity => "aceternity",
            Self::Eightbit => "eightbit",
            Self::Custom => "custom",
            Self::AiRouter => "ai-router",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One namespace of tools and resources.
///
/// Implementations are synchronous: every provider answers from data held
/// in memory.
pub trait Provider: Send + Sync {
    /// This provider's registry identity.
    fn id(&self) -> ProviderId;

    /// Tool definitions contributed to tools/list.
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Resource definitions contributed to resources/list.
    fn resources(&self) -> Vec<ResourceDefinition>;

    /// Executes one of this provider's tools.
    ///
    /// Tool-level failures come back as error results, never panics.
    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult;

    /// Reads a resource if the URI belongs to this provider's scheme.
    fn read_resource(&self, uri: &str) -> Option<ResourceContents>;
}

/// Routes tool calls and resource reads to the owning provider.
pub struct ProviderRegistry {
    providers: IndexMap<ProviderId, Box<dyn Provider>>,
    tool_index: HashMap<String, ProviderId>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: IndexMap::new(),
            tool_index: HashMap::new(),
        }
    }

    /// Creates a registry with the full provider set.
    #[must_use]
    pub fn with_default_providers(
        store: Arc<TokenStore>,
        webhook_url: Option<String>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BrandProvider::new(store)));
        registry.register(Box::new(ShadcnProvider::new()));
        registry.register(Box::new(MagicUiProvider::new()));
        registry.register(Box::new(AceternityProvider::new()));
        registry.register(Box::new(EightbitProvider::new()));
        registry.register(Box::new(CustomProvider::new()));
        registry.register(Box::new(AiRouterProvider::new(webhook_url)));
        registry
    }

    /// Adds a provider and indexes its tool names.
    ///
    /// A tool name registered by two providers would be ambiguous; the
    /// second registration wins and is logged.
    pub fn register(&mut self, provider: Box<dyn Provider>) {
        let id = provider.id();
        for tool in provider.tools() {
            if let Some(previous) = self.tool_index.insert(tool.name.clone(), id) {
                tracing::warn!(
                    tool = tool.name.as_str(),
                    previous = previous.as_str(),
                    replacement = id.as_str(),
                    "duplicate tool name re-routed"
                );
            }
        }
        self.providers.insert(id, provider);
    }

    /// Number of registered providers.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Number of routable tools.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.tool_index.len()
    }

    /// All tool definitions, grouped by provider in registration order.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.providers
            .values()
            .flat_map(|provider| provider.tools())
            .collect()
    }

    /// All resource definitions, grouped by provider in registration order.
    #[must_use]
    pub fn list_resources(&self) -> Vec<ResourceDefinition> {
        self.providers
            .values()
            .flat_map(|provider| provider.resources())
            .collect()
    }

    /// Routes a tool call to the provider that owns the tool name.
    #[must_use]
    pub fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        let Some(provider) = self
            .tool_index
            .get(name)
            .and_then(|id| self.providers.get(id))
        else {
            return ToolCallResult::error(format!("Unknown tool: {name}"));
        };

        tracing::debug!(tool = name, provider = %provider.id(), "dispatching tool call");
        provider.call_tool(name, args)
    }

    /// Asks each provider in registration order to read the URI; the
    /// first one that recognises the scheme answers.
    #[must_use]
    pub fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        self.providers
            .values()
            .find_map(|provider| provider.read_resource(uri))
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a required string argument.
///
/// # Errors
///
/// Returns [`TokenError::MissingArgument`] when the field is absent, not a
/// string, or empty.
pub(crate) fn required_str<'a>(
    args: &'a Value,
    name: &'static str,
) -> Result<&'a str, TokenError> {
    args.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(TokenError::MissingArgument { name })
}

/// Extracts an optional string argument.
pub(crate) fn optional_str<'a>(args: &'a Value, name: &str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

/// The theme argument, accepted under either `theme` or `themeName`.
pub(crate) fn theme_arg(args: &Value) -> Option<&str> {
    optional_str(args, "theme").or_else(|| optional_str(args, "themeName"))
}
