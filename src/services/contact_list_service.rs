//! Contact list service layer.
//!
//! Keeps the full contact corpus, answers search queries against it, and
//! places calls for rows of a filtered view.

use crate::cache::TimedSnapshot;
use crate::dialer::{DialRequest, Dialer};
use crate::error::{ContactError, ContactResult};
use crate::matching::SimilarityFilter;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// One row of a filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedContact {
    pub contact: Contact,
    pub score: i64,
}

/// Result of applying a query to the contact list.
#[derive(Debug, Clone)]
pub struct FilterResponse {
    /// The query as received
    pub query: String,

    /// Matching contacts, most similar first
    pub contacts: Vec<RankedContact>,

    /// Number of contacts in the full list
    pub total: usize,

    /// Whether the full list came from the snapshot cache
    pub from_cache: bool,
}

/// Outcome of a placed call.
#[derive(Debug, Clone, Serialize)]
pub struct CallReceipt {
    pub request: DialRequest,

    /// Name of the dialer that handled the call
    pub dialer: String,
}

/// Contact list operations.
#[async_trait]
pub trait ContactListService: Send + Sync {
    /// Every contact, in list order.
    async fn all_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// Contacts whose name contains `query`, ranked by similarity.
    async fn filter_contacts(&self, query: &str) -> ContactResult<FilterResponse>;

    /// Call the contact at `position` (0-based) of the view for `query`.
    ///
    /// An empty query refers to the full list.
    async fn place_call(&self, query: &str, position: usize) -> ContactResult<CallReceipt>;

    /// Drop the cached corpus and read the store again.
    async fn reload(&self) -> ContactResult<usize>;
}

/// Default implementation of ContactListService.
pub struct ContactListServiceImpl {
    repository: Arc<dyn ContactRepository>,
    dialer: Arc<dyn Dialer>,
    filter: SimilarityFilter,
    snapshot: TimedSnapshot<Arc<Vec<Contact>>>,
}

impl ContactListServiceImpl {
    /// Create a new contact list service.
    ///
    /// # Arguments
    /// * `repository` - Source of the contact corpus
    /// * `dialer` - Handler for placed calls
    /// * `cache_ttl_secs` - How long a loaded corpus is reused
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        dialer: Arc<dyn Dialer>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            repository,
            dialer,
            filter: SimilarityFilter::new(),
            snapshot: TimedSnapshot::new(cache_ttl_secs),
        }
    }

    async fn corpus(&self) -> ContactResult<(Arc<Vec<Contact>>, bool)> {
        if let Some(contacts) = self.snapshot.get() {
            return Ok((contacts, true));
        }

        let contacts = Arc::new(self.repository.list_all().await?);
        self.snapshot.set(contacts.clone());
        Ok((contacts, false))
    }
}

#[async_trait]
impl ContactListService for ContactListServiceImpl {
    async fn all_contacts(&self) -> ContactResult<Vec<Contact>> {
        let (contacts, _) = self.corpus().await?;
        Ok(contacts.as_ref().clone())
    }

    async fn filter_contacts(&self, query: &str) -> ContactResult<FilterResponse> {
        let (contacts, from_cache) = self.corpus().await?;

        let ranked = self
            .filter
            .rank(&contacts, query)
            .into_iter()
            .map(|scored| RankedContact {
                contact: scored.contact.clone(),
                score: scored.score,
            })
            .collect();

        Ok(FilterResponse {
            query: query.to_string(),
            contacts: ranked,
            total: contacts.len(),
            from_cache,
        })
    }

    async fn place_call(&self, query: &str, position: usize) -> ContactResult<CallReceipt> {
        let (contacts, _) = self.corpus().await?;
        let view = self.filter.filter(&contacts, query);

        let contact = view.get(position).ok_or(ContactError::PositionOutOfRange {
            position,
            len: view.len(),
        })?;

        let request = DialRequest::for_contact(contact)?;
        self.dialer.dial(&request).await?;

        Ok(CallReceipt {
            request,
            dialer: self.dialer.name().to_string(),
        })
    }

    async fn reload(&self) -> ContactResult<usize> {
        self.snapshot.invalidate();
        let (contacts, _) = self.corpus().await?;
        tracing::info!(count = contacts.len(), "Contact list reloaded");
        Ok(contacts.len())
    }
}
