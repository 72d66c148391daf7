//! # Document Store
//!
//! Loads and saves the whole [`InvoiceDocument`] as one JSON value.
//!
//! ## Load Rules
//! ```text
//! stored value          load(key) returns
//! ────────────────      ─────────────────────────────────────
//! (none)                InvoiceDocument::default()
//! valid JSON document   the document (lenient number coercion)
//! anything else         InvoiceDocument::default()  + warn log
//! ```
//!
//! Saving writes compact JSON; NaN numbers become `null` and read back
//! as 0.

use billing_core::export::parse_document;
use billing_core::InvoiceDocument;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::repository::state::StateRepository;

/// The invoice document on top of [`StateRepository`].
#[derive(Debug, Clone)]
pub struct DocumentStore {
    state: StateRepository,
}

impl DocumentStore {
    pub fn new(state: StateRepository) -> Self {
        DocumentStore { state }
    }

    /// Loads the document stored under `key`.
    pub async fn load(&self, key: &str) -> StoreResult<InvoiceDocument> {
        let Some(text) = self.state.get(key).await? else {
            debug!(key = %key, "No saved document, starting from defaults");
            return Ok(InvoiceDocument::default());
        };

        match parse_document(&text) {
            Ok(document) => {
                debug!(key = %key, items = document.items.len(), "Loaded document");
                Ok(document)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Saved document is unreadable, starting from defaults");
                Ok(InvoiceDocument::default())
            }
        }
    }

    /// Saves `document` under `key` and returns the save time.
    pub async fn save(&self, key: &str, document: &InvoiceDocument) -> StoreResult<DateTime<Utc>> {
        let text = serde_json::to_string(document)?;
        self.state.set(key, &text).await
    }

    /// Forgets the document stored under `key`.
    pub async fn clear(&self, key: &str) -> StoreResult<()> {
        self.state.remove(key).await?;
        Ok(())
    }

    /// When the document under `key` was last saved.
    pub async fn last_saved(&self, key: &str) -> StoreResult<Option<DateTime<Utc>>> {
        self.state.updated_at(key).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use billing_core::{InvoiceDocument, LineItem};

    use crate::{Store, StoreConfig};

    const KEY: &str = "billing-app-state";

    #[tokio::test]
    async fn test_load_without_saved_state() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();

        let doc = store.documents().load(KEY).await.unwrap();
        assert_eq!(doc, InvoiceDocument::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let documents = store.documents();

        let mut doc = InvoiceDocument::default();
        doc.customer.name = "Karim Traders".to_string();
        doc.items.push(LineItem {
            description: "Cotton Shirt".to_string(),
            qty: 2.0,
            unit_price: 850.0,
            ..LineItem::blank()
        });
        doc.shipping = 60.0;

        documents.save(KEY, &doc).await.unwrap();
        let loaded = documents.load(KEY).await.unwrap();

        assert_eq!(loaded, doc);
        assert_eq!(loaded.totals().total, doc.totals().total);
        assert!(documents.last_saved(KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unreadable_state_falls_back_to_default() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        store.state().set(KEY, "{not json").await.unwrap();

        let doc = store.documents().load(KEY).await.unwrap();
        assert_eq!(doc, InvoiceDocument::default());
    }

    #[tokio::test]
    async fn test_nan_shipping_reloads_as_zero() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let documents = store.documents();

        let mut doc = InvoiceDocument::default();
        doc.shipping = f64::NAN;
        documents.save(KEY, &doc).await.unwrap();

        let loaded = documents.load(KEY).await.unwrap();
        assert_eq!(loaded.shipping, 0.0);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let documents = store.documents();

        let mut doc = InvoiceDocument::default();
        doc.terms = "No returns".to_string();
        documents.save(KEY, &doc).await.unwrap();
        documents.clear(KEY).await.unwrap();

        assert_eq!(documents.load(KEY).await.unwrap(), InvoiceDocument::default());
        assert_eq!(documents.last_saved(KEY).await.unwrap(), None);
    }
}
