//! # State Module
//!
//! Application state for one CLI run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │  StoreState  │  │  DocumentState   │  │    AppConfig     │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Store       │  │  Arc<Mutex<      │  │  database path   │          │
//! │  │  (SQLite     │  │    Invoice       │  │  storage key     │          │
//! │  │   pool)      │  │    Document>>    │  │  export names    │          │
//! │  │  + key       │  │                  │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • StoreState: the pool is thread-safe on its own                      │
//! │  • DocumentState: Arc<Mutex<T>> for exclusive edits                    │
//! │  • AppConfig: read-only after start-up                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod document;
mod store;

pub use config::{AppConfig, ConfigError, ExportSettings, StorageSettings};
pub use document::DocumentState;
pub use store::StoreState;
