//! # Repository Module
//!
//! ## Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │  store.documents().load(key)                                   │
//! │       ▼                                                                 │
//! │  DocumentStore      InvoiceDocument  ⇄  JSON text                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StateRepository    get / set / remove / updated_at  (by key)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  app_state table                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`StateRepository`](state::StateRepository) - raw key/value access
//! - [`DocumentStore`](document::DocumentStore) - the invoice document

pub mod document;
pub mod state;
