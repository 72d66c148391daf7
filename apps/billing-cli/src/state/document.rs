//! # Document State
//!
//! The invoice being edited while a command runs.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  load from store ──► DocumentState::new(doc)                            │
//! │                            │                                            │
//! │                            ▼                                            │
//! │  with_document_mut(|doc| doc.set_item_field(..)) ← exclusive lock       │
//! │                            │                                            │
//! │                            ▼                                            │
//! │  with_document(|doc| doc.totals())               ← recomputed, never    │
//! │                            │                        cached              │
//! │                            ▼                                            │
//! │  snapshot() ──► save to store                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is never held across an `.await`: closures are synchronous and
//! saving works on a snapshot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use billing_core::InvoiceDocument;

/// Shared, lock-protected invoice document.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    document: Arc<Mutex<InvoiceDocument>>,
}

impl DocumentState {
    pub fn new(document: InvoiceDocument) -> Self {
        DocumentState {
            document: Arc::new(Mutex::new(document)),
        }
    }

    // A panic inside an edit leaves plain data behind, still safe to read.
    fn lock(&self) -> MutexGuard<'_, InvoiceDocument> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_document(|doc| doc.totals());
    /// ```
    pub fn with_document<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDocument) -> R,
    {
        let document = self.lock();
        f(&document)
    }

    /// Executes a function with write access to the document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_document_mut(|doc| doc.remove_item(0))?;
    /// ```
    pub fn with_document_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDocument) -> R,
    {
        let mut document = self.lock();
        f(&mut document)
    }

    /// Clone of the current document.
    pub fn snapshot(&self) -> InvoiceDocument {
        self.with_document(InvoiceDocument::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_then_read() {
        let state = DocumentState::new(InvoiceDocument::default());

        state.with_document_mut(|doc| {
            doc.add_item().unit_price = 100.0;
        });

        assert_eq!(state.with_document(|doc| doc.items.len()), 2);
        assert_eq!(state.with_document(|doc| doc.totals().sub_total), 1913.5);
    }

    #[test]
    fn test_clones_share_the_document() {
        let state = DocumentState::default();
        let other = state.clone();

        other.with_document_mut(|doc| doc.terms = "Cash only".to_string());

        assert_eq!(state.snapshot().terms, "Cash only");
    }

    #[test]
    fn test_errors_pass_through() {
        let state = DocumentState::default();
        let result = state.with_document_mut(|doc| doc.remove_item(5));
        assert!(result.is_err());
    }
}
