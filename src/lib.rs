//! Contacts MCP Server - the device's contact list over the Model Context Protocol.
//!
//! Lists address book contacts, filters them by name with a similarity
//! ranking, and places calls to a chosen row.
//!
//! # Architecture
//!
//! - **models**: The contact record
//! - **domain**: Validated phone numbers and `tel:` URIs
//! - **matching**: Substring filter with LCS-based similarity ranking
//! - **repositories**: Contact sources (address book export, in-memory)
//! - **cache**: TTL snapshot of the loaded contact list
//! - **dialer**: Call placement
//! - **services**: Contact list operations
//! - **server**: MCP tools
//! - **config** / **error**: Configuration and error types

pub mod cache;
pub mod config;
pub mod dialer;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use cache::TimedSnapshot;
pub use config::Config;
pub use dialer::{CommandDialer, DialRequest, Dialer, LoggingDialer};
pub use error::{ConfigError, ContactError, ContactResult};
pub use matching::{ScoredContact, SimilarityFilter};
pub use models::Contact;
pub use server::ContactsMcpServer;
pub use services::{ContactListService, ContactListServiceImpl, FilterResponse};
