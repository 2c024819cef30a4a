//! Caching utilities for the Contacts MCP Server.
//!
//! The contact corpus is re-read from the store only after its snapshot expires.

pub mod snapshot;

pub use snapshot::TimedSnapshot;
