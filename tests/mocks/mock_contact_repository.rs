use async_trait::async_trait;
use contacts_mcp_server::error::{ContactError, ContactResult};
use contacts_mcp_server::models::Contact;
use contacts_mcp_server::repositories::ContactRepository;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Holds a replaceable in-memory corpus, counts reads, and can be switched
/// into a failing state to simulate an unreadable address book.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    list_calls: Arc<Mutex<usize>>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new MockContactRepository holding the given contacts.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
            list_calls: Arc::new(Mutex::new(0)),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Replace the stored contacts.
    pub fn set_contacts(&self, contacts: Vec<Contact>) {
        *self.contacts.lock().unwrap() = contacts;
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Number of times `list_all` was called.
    pub fn list_call_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        *self.list_calls.lock().unwrap() += 1;

        if *self.failing.lock().unwrap() {
            return Err(ContactError::Store("mock store offline".to_string()));
        }

        let contacts = self.contacts.lock().unwrap().clone();
        Ok(contacts)
    }
}
