//! Call placement.
//!
//! A [`Dialer`] receives a validated [`DialRequest`] and hands its `tel:` URI
//! to whatever places calls on this machine.

use crate::domain::PhoneNumber;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use async_trait::async_trait;
use serde::Serialize;

/// A call about to be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialRequest {
    /// Display name of the contact being called
    pub contact_name: String,

    /// Validated number
    pub phone_number: PhoneNumber,

    /// `tel:` URI handed to the dialer
    pub uri: String,
}

impl DialRequest {
    /// Build a dial request for a contact, validating its number.
    pub fn for_contact(contact: &Contact) -> ContactResult<Self> {
        let phone_number = contact.dialable_number()?;
        let uri = phone_number.tel_uri();

        Ok(Self {
            contact_name: contact.name.clone(),
            phone_number,
            uri,
        })
    }
}

/// Places calls.
#[async_trait]
pub trait Dialer: Send + Sync {
    /// Short identifier reported back to callers.
    fn name(&self) -> &str;

    /// Place the call.
    async fn dial(&self, request: &DialRequest) -> ContactResult<()>;
}

/// Dialer that only records the call in the log.
///
/// Used when no dial handler is configured.
#[derive(Debug, Clone, Default)]
pub struct LoggingDialer;

#[async_trait]
impl Dialer for LoggingDialer {
    fn name(&self) -> &str {
        "log"
    }

    async fn dial(&self, request: &DialRequest) -> ContactResult<()> {
        tracing::info!(
            contact = %request.contact_name,
            uri = %request.uri,
            "Dial requested (no dial handler configured)"
        );
        Ok(())
    }
}

/// Dialer that runs an external program with the `tel:` URI as its only argument,
/// e.g. `xdg-open tel:+15551234`.
#[derive(Debug, Clone)]
pub struct CommandDialer {
    program: String,
}

impl CommandDialer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl Dialer for CommandDialer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn dial(&self, request: &DialRequest) -> ContactResult<()> {
        tracing::info!(
            program = %self.program,
            contact = %request.contact_name,
            uri = %request.uri,
            "Placing call"
        );

        let status = tokio::process::Command::new(&self.program)
            .arg(&request.uri)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .status()
            .await
            .map_err(|e| {
                tracing::warn!(program = %self.program, error = %e, "Dial handler failed to start");
                ContactError::DialFailed(format!("{}: {}", self.program, e))
            })?;

        if !status.success() {
            tracing::warn!(program = %self.program, %status, "Dial handler exited with failure");
            return Err(ContactError::DialFailed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        Ok(())
    }
}
