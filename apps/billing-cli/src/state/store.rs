//! # Store State
//!
//! The opened [`Store`] bound to the configured storage key.

use chrono::{DateTime, Utc};

use billing_core::InvoiceDocument;
use billing_store::{Store, StoreResult};

/// Wrapper around `Store` and the key the document lives under.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Store,
    key: String,
}

impl StoreState {
    pub fn new(store: Store, key: impl Into<String>) -> Self {
        StoreState {
            store,
            key: key.into(),
        }
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored document, or the default one.
    pub async fn load(&self) -> StoreResult<InvoiceDocument> {
        self.store.documents().load(&self.key).await
    }

    /// Saves the document and returns the save time.
    pub async fn save(&self, document: &InvoiceDocument) -> StoreResult<DateTime<Utc>> {
        self.store.documents().save(&self.key, document).await
    }

    /// Forgets the stored document.
    pub async fn clear(&self) -> StoreResult<()> {
        self.store.documents().clear(&self.key).await
    }

    /// When the document was last saved.
    pub async fn last_saved(&self) -> StoreResult<Option<DateTime<Utc>>> {
        self.store.documents().last_saved(&self.key).await
    }
}
