use crate::error::ContactResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Source of the device's contacts.
///
/// Provides abstraction over the address book, enabling different
/// implementations (exported file, in-memory, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact, in the order the list should show them.
    async fn list_all(&self) -> ContactResult<Vec<Contact>>;
}
