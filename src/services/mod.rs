//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the contact store, the similarity filter, and the dialer. They provide a
//! clean boundary between the MCP handlers and the data access layer.

mod contact_list_service;

pub use contact_list_service::{
    CallReceipt, ContactListService, ContactListServiceImpl, FilterResponse, RankedContact,
};
