//! # billing-store: Persistence Layer for the Invoice Builder
//!
//! Stores the invoice document between runs. The browser kept it in local
//! storage under one key; here the same JSON sits in a SQLite key/value
//! table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoice Builder Data Flow                        │
//! │                                                                         │
//! │  CLI command (edit-item 1 qty 3)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   billing-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (state.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ StateRepo     │    │ 001_app_     │  │   │
//! │  │   │               │    │ DocumentStore │    │   state.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite file in the platform data directory (billing.db)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - Key/value state and the document on top of it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use billing_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("billing.db")).await?;
//!
//! let mut doc = store.documents().load("billing-app-state").await?;
//! doc.add_item();
//! store.documents().save("billing-app-state", &doc).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

pub use repository::document::DocumentStore;
pub use repository::state::StateRepository;
