use crate::error::ContactResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;

/// Contact repository over a fixed list, returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
}
