//! Contacts MCP Server - Main entry point
//!
//! Serves the device's contact list over the Model Context Protocol on stdio.

use anyhow::Result;
use contacts_mcp_server::dialer::{CommandDialer, Dialer, LoggingDialer};
use contacts_mcp_server::repositories::{ContactRepository, JsonFileContactRepository};
use contacts_mcp_server::services::{ContactListService, ContactListServiceImpl};
use contacts_mcp_server::{Config, ContactsMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr only; stdout carries MCP traffic. RUST_LOG wins over LOG_LEVEL.
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Contacts MCP Server with contacts file: {}",
        config.contacts_file.display()
    );

    let repository = Arc::new(JsonFileContactRepository::new(config.contacts_file.clone()))
        as Arc<dyn ContactRepository>;

    let dialer: Arc<dyn Dialer> = match &config.dial_command {
        Some(program) => {
            info!("Calls are handed to: {}", program);
            Arc::new(CommandDialer::new(program.clone()))
        }
        None => {
            info!("No DIAL_COMMAND set; calls will only be logged");
            Arc::new(LoggingDialer)
        }
    };

    let service = Arc::new(ContactListServiceImpl::new(
        repository,
        dialer,
        config.cache_ttl_secs,
    )) as Arc<dyn ContactListService>;

    // Fail fast on an unreadable export instead of on the first tool call
    match service.reload().await {
        Ok(count) => info!("Loaded {} contacts", count),
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            return Err(e.into());
        }
    }

    let server = ContactsMcpServer::new(service);
    info!("Cache TTL: {} seconds", config.cache_ttl_secs);

    info!("Starting MCP server with stdio transport");
    contacts_mcp_server::server::run_server(server).await?;

    info!("Contacts MCP Server shutdown complete");
    Ok(())
}
