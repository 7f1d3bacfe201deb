//! designkit-mcp: MCP server for AI-assisted design-system work
//!
//! This tool aggregates UI component catalogs and design tokens behind a
//! single MCP surface so AI assistants can look up brand tokens, browse
//! component libraries, and route AI operations through n8n workflows.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use designkit_mcp::config;
use designkit_mcp::mcp::server::McpServer;
use designkit_mcp::providers::ProviderRegistry;
use designkit_mcp::tokens::TokenStore;

/// Fallback token theme when the configuration names none.
const DEFAULT_THEME: &str = "default";

/// MCP server for AI-assisted design-system work.
///
/// Aggregates design tokens, shadcn/ui, Magic UI, Aceternity UI, 8bitcn,
/// and an in-house component library behind one MCP surface.
#[derive(Parser, Debug)]
#[command(name = "designkit-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logs go to stderr; stdout is reserved for the JSON-RPC transport.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the designkit-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // Display GPL license notice (required by GPLv3 Section 5d)
    eprintln!(
        "designkit-mcp {}  Copyright (C) 2026  The DesignKit Authors",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
    eprintln!("This is free software, licensed under GPL-3.0-or-later.");
    eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
    eprintln!();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting designkit-mcp server"
    );

    let default_theme = cfg
        .default_theme
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    let store = match TokenStore::embedded(&default_theme) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(error = %e, "Embedded token data is malformed");
            return ExitCode::FAILURE;
        }
    };

    info!(theme = %default_theme, "Design tokens loaded");

    let registry = ProviderRegistry::with_default_providers(store, cfg.n8n_webhook_url);
    let mut server = McpServer::new(registry);

    info!("MCP server ready, waiting for client connection...");

    // Run the server
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(server.run());

    match result {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(get_log_level(3, true, "warn"), Level::ERROR);
    }

    #[test]
    fn config_level_applies_without_flags() {
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn verbosity_flags_escalate() {
        assert_eq!(get_log_level(1, false, "warn"), Level::INFO);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(5, false, "warn"), Level::TRACE);
    }
}
