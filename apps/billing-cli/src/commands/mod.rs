//! # Commands Module
//!
//! One function per subcommand, all running against an [`App`].
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Command Organization                               │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐         │
//! │  │  invoice.rs     │  │    item.rs      │  │   export.rs     │         │
//! │  │                 │  │                 │  │                 │         │
//! │  │ • show / print  │  │ • add_item      │  │ • export_csv    │         │
//! │  │ • customer      │  │ • edit_item     │  │ • export_json   │         │
//! │  │ • meta / tax    │  │ • remove_item   │  │ • import_json   │         │
//! │  │ • terms / new   │  │                 │  │                 │         │
//! │  │ • clear, totals │  │                 │  │                 │         │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘         │
//! │                                                                         │
//! │  Every edit: mutate ──► save ("Last saved") ──► re-render with totals  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod export;
pub mod invoice;
pub mod item;
pub mod view;

use chrono::{DateTime, Local, Utc};
use rand::Rng;
use tracing::{debug, info};

use billing_core::{InvoiceDocument, MAX_INVOICE_SERIAL, MIN_INVOICE_SERIAL};
use billing_store::{Store, StoreConfig};

use crate::cli::Command;
use crate::error::CliResult;
use crate::state::{AppConfig, DocumentState, StoreState};

/// Picks a random six-digit invoice serial.
pub fn random_serial() -> u32 {
    rand::thread_rng().gen_range(MIN_INVOICE_SERIAL..=MAX_INVOICE_SERIAL)
}

/// Save status line, in local time.
pub fn last_saved_line(saved_at: DateTime<Utc>) -> String {
    format!(
        "Last saved: {}",
        saved_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    )
}

// =============================================================================
// App
// =============================================================================

/// Everything a command needs: configuration, the store and the document.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    store: StoreState,
    document: DocumentState,
}

impl App {
    /// Opens the configured database and loads the document.
    pub async fn open(config: AppConfig) -> CliResult<Self> {
        let path = config.database_path()?;
        debug!(?path, "Opening invoice store");

        let store = Store::new(StoreConfig::new(path)).await?;
        Self::with_store(config, store).await
    }

    /// Loads the document from an already opened store.
    ///
    /// A document without a date or number gets both here and is saved
    /// right away, so the number stays the same across runs.
    pub async fn with_store(config: AppConfig, store: Store) -> CliResult<Self> {
        let store = StoreState::new(store, config.storage.key.clone());
        let document = DocumentState::new(store.load().await?);

        let app = App {
            config,
            store,
            document,
        };

        let stamped = app
            .document
            .with_document_mut(|doc| doc.ensure_stamped(Utc::now(), random_serial()));
        if stamped {
            debug!("Stamped invoice date and number");
            app.save().await?;
        }

        Ok(app)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &StoreState {
        &self.store
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// Saves the current document and reports the save time.
    pub async fn save(&self) -> CliResult<DateTime<Utc>> {
        let snapshot = self.document.snapshot();
        let saved_at = self.store.save(&snapshot).await?;

        info!("{}", last_saved_line(saved_at));
        Ok(saved_at)
    }

    /// Runs one edit, saves, and returns the refreshed editor view.
    ///
    /// The edit runs on a copy; when it fails the document is left as it
    /// was and nothing is saved.
    pub async fn apply<F>(&self, edit: F) -> CliResult<String>
    where
        F: FnOnce(&mut InvoiceDocument) -> CliResult<()>,
    {
        let mut draft = self.document.snapshot();
        edit(&mut draft)?;
        self.document.with_document_mut(|doc| *doc = draft);

        self.save().await?;
        Ok(self.document.with_document(view::render_editor))
    }

    /// Closes the store.
    pub async fn close(&self) {
        self.store.inner().close().await;
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs a command and returns what goes to stdout.
pub async fn execute(app: &App, command: Command) -> CliResult<String> {
    debug!(?command, "Executing command");

    match command {
        Command::Show => invoice::show(app).await,
        Command::Print => Ok(invoice::print(app)),
        Command::Totals => invoice::totals(app),
        Command::Customer {
            name,
            address,
            phone,
        } => invoice::customer(app, name, address, phone).await,
        Command::Meta {
            date,
            number,
            payment_type,
        } => invoice::meta(app, date, number, payment_type).await,
        Command::Tax { vat, shipping } => invoice::tax(app, vat, shipping).await,
        Command::Terms { text } => invoice::terms(app, text).await,
        Command::New => invoice::new_invoice(app).await,
        Command::Clear => invoice::clear(app).await,
        Command::AddItem(args) => item::add_item(app, args).await,
        Command::EditItem { row, field, value } => item::edit_item(app, row, &field, &value).await,
        Command::RemoveItem { row } => item::remove_item(app, row).await,
        Command::ExportCsv { output } => export::export_csv(app, output),
        Command::ExportJson { output } => export::export_json(app, output),
        Command::ImportJson { path } => export::import_json(app, &path).await,
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// App on a fresh in-memory store.
    pub async fn test_app() -> App {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        App::with_store(AppConfig::default(), store).await.unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;

    #[test]
    fn test_random_serial_range() {
        for _ in 0..1000 {
            let serial = random_serial();
            assert!((MIN_INVOICE_SERIAL..=MAX_INVOICE_SERIAL).contains(&serial));
        }
    }

    #[tokio::test]
    async fn test_startup_stamps_and_saves() {
        let app = test_app().await;

        let doc = app.document().snapshot();
        assert_eq!(doc.invoice.date.len(), 16);
        assert_eq!(doc.invoice.number.len(), 8);

        let stored = app.store().load().await.unwrap();
        assert_eq!(stored.invoice.number, doc.invoice.number);
    }

    #[tokio::test]
    async fn test_reopen_keeps_number() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();

        let first = App::with_store(AppConfig::default(), store.clone()).await.unwrap();
        let number = first.document().snapshot().invoice.number;

        let second = App::with_store(AppConfig::default(), store).await.unwrap();
        assert_eq!(second.document().snapshot().invoice.number, number);
    }

    #[tokio::test]
    async fn test_failed_edit_is_not_saved() {
        let app = test_app().await;

        let result = app
            .apply(|doc| {
                doc.terms = "changed".to_string();
                doc.remove_item(9)?;
                Ok(())
            })
            .await;
        assert!(result.is_err());

        assert_ne!(app.document().snapshot().terms, "changed");
        let stored = app.store().load().await.unwrap();
        assert_ne!(stored.terms, "changed");
    }
}
