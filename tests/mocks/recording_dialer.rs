use async_trait::async_trait;
use contacts_mcp_server::dialer::{DialRequest, Dialer};
use contacts_mcp_server::error::{ContactError, ContactResult};
use std::sync::{Arc, Mutex};

/// Dialer that remembers every request instead of placing calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingDialer {
    calls: Arc<Mutex<Vec<DialRequest>>>,
    reject: bool,
}

#[allow(dead_code)]
impl RecordingDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dialer whose every call fails.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<DialRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dialer for RecordingDialer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn dial(&self, request: &DialRequest) -> ContactResult<()> {
        self.calls.lock().unwrap().push(request.clone());

        if self.reject {
            return Err(ContactError::DialFailed("line busy".to_string()));
        }
        Ok(())
    }
}
