use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Contact repository backed by an address book export.
///
/// The file holds a JSON array of `{"name": ..., "phone_number": ...}`
/// objects. It is re-read on every call; callers cache the result.
/// Contacts come back sorted by display name, the same order the device's
/// contact provider hands them out in.
#[derive(Debug, Clone)]
pub struct JsonFileContactRepository {
    path: PathBuf,
}

impl JsonFileContactRepository {
    /// Create a repository reading from the given export file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactRepository for JsonFileContactRepository {
    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ContactError::Store(format!("{}: {}", self.path.display(), e)))?;

        let mut contacts: Vec<Contact> = serde_json::from_str(&raw)?;
        // Stable, so duplicate names keep their file order
        contacts.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::info!(
            path = %self.path.display(),
            count = contacts.len(),
            "Loaded contacts from export"
        );

        Ok(contacts)
    }
}
