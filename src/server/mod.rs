//! MCP server for the contact list.
//!
//! This module provides the MCP protocol server that exposes the contact
//! list to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contacts MCP server with stdio transport.
///
/// Blocks until the client disconnects.
pub async fn run_server(server: ContactsMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
