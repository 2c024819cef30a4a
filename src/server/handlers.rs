//! MCP tool handlers for the contacts server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::ContactError;
use crate::services::ContactListService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the device's contact list.
#[derive(Clone)]
pub struct ContactsMcpServer {
    contact_service: Arc<dyn ContactListService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the device's contact list - lists contacts, filters them by name ranked by similarity, and places calls to a listed contact.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FilterContactsParams {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PlaceCallParams {
    /// 0-based row in the list filtered by `query`
    position: usize,
    #[serde(default)]
    query: Option<String>,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Caller mistakes are reported as invalid params, everything else as internal
fn contact_error_to_mcp(e: ContactError) -> McpError {
    match e {
        ContactError::PositionOutOfRange { .. } | ContactError::InvalidPhone(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        other => to_mcp_error(other),
    }
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl ContactsMcpServer {
    /// Create a new contacts MCP server.
    pub fn new(contact_service: Arc<dyn ContactListService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List every contact in display order.
    #[tool(description = "List every contact on the device with its phone number, in display order")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let contacts = self
            .contact_service
            .all_contacts()
            .await
            .map_err(contact_error_to_mcp)?;

        json_result(serde_json::json!({
            "count": contacts.len(),
            "contacts": contacts.iter().enumerate().map(|(position, c)| {
                serde_json::json!({
                    "position": position,
                    "name": c.name,
                    "phone_number": c.phone_number,
                })
            }).collect::<Vec<_>>(),
        }))
    }

    /// Filter contacts by name, most similar first.
    #[tool(
        description = "Filter contacts whose name contains the query (case-insensitive), ranked by similarity to the query. Score 0 is an exact name match; lower scores are less similar. An empty query returns the full list."
    )]
    async fn filter_contacts(
        &self,
        params: Parameters<FilterContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .contact_service
            .filter_contacts(&params.query)
            .await
            .map_err(contact_error_to_mcp)?;

        let total_matches = response.contacts.len();
        let shown = params.max_results.unwrap_or(total_matches);

        json_result(serde_json::json!({
            "query": response.query,
            "total_matches": total_matches,
            "result_count": shown.min(total_matches),
            "contacts": response.contacts.iter().take(shown).enumerate().map(|(position, r)| {
                serde_json::json!({
                    "position": position,
                    "name": r.contact.name,
                    "phone_number": r.contact.phone_number,
                    "score": r.score,
                })
            }).collect::<Vec<_>>(),
        }))
    }

    /// Call a contact picked from a (filtered) list.
    #[tool(
        description = "Place a phone call to the contact at the given 0-based position of the list filtered by the optional query (the full list when no query is given)"
    )]
    async fn place_call(
        &self,
        params: Parameters<PlaceCallParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let query = params.query.unwrap_or_default();

        tracing::info!("MCP Handler: place_call called");
        tracing::debug!(position = params.position, query_len = query.len(), "place_call parameters");

        let receipt = self
            .contact_service
            .place_call(&query, params.position)
            .await
            .map_err(|e| {
                tracing::error!("Failed to place call: {:?}", e);
                contact_error_to_mcp(e)
            })?;

        json_result(serde_json::json!({
            "name": receipt.request.contact_name,
            "phone_number": receipt.request.phone_number,
            "uri": receipt.request.uri,
            "dialer": receipt.dialer,
        }))
    }

    /// Re-read the contact store.
    #[tool(description = "Re-read the device's contacts, discarding the cached list")]
    async fn reload_contacts(&self) -> Result<CallToolResult, McpError> {
        let count = self
            .contact_service
            .reload()
            .await
            .map_err(contact_error_to_mcp)?;

        json_result(serde_json::json!({
            "reloaded": true,
            "count": count,
        }))
    }
}
