//! # Export and Import Commands
//!
//! ```text
//! export-csv  ──► to_csv(doc)   ──► <output> | invoice.csv  | stdout ("-")
//! export-json ──► to_json(doc)  ──► <output> | invoice.json | stdout ("-")
//! import-json ◄── file ──► merge_json (top-level keys replace fields) ──► save
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use billing_core::export::{to_csv, to_json};

use super::App;
use crate::error::CliResult;

const STDOUT_PATH: &str = "-";

/// Writes `content` to `output` (or `default_name`), or hands it back for
/// stdout when the output is `-`.
fn write_output(output: Option<PathBuf>, default_name: &str, content: String) -> CliResult<String> {
    let path = output.unwrap_or_else(|| PathBuf::from(default_name));

    if path.as_os_str() == STDOUT_PATH {
        return Ok(content);
    }

    std::fs::write(&path, content)?;
    info!(path = %path.display(), "Export written");

    Ok(format!("Saved {}", path.display()))
}

/// Writes the line items as CSV.
pub fn export_csv(app: &App, output: Option<PathBuf>) -> CliResult<String> {
    let csv = app.document().with_document(to_csv);
    write_output(output, &app.config().export.csv_file_name, csv)
}

/// Writes the whole document as JSON.
pub fn export_json(app: &App, output: Option<PathBuf>) -> CliResult<String> {
    let json = app.document().with_document(to_json)?;
    write_output(output, &app.config().export.json_file_name, json)
}

/// Merges a JSON file into the current document and saves it.
pub async fn import_json(app: &App, path: &Path) -> CliResult<String> {
    let text = std::fs::read_to_string(path)?;

    let view = app
        .apply(|doc| {
            doc.merge_json(&text)?;
            Ok(())
        })
        .await?;

    info!(path = %path.display(), "Imported invoice");
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::test_app;
    use crate::error::ErrorCode;
    use billing_core::InvoiceDocument;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("billing-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_export_csv_to_stdout() {
        let app = test_app().await;

        let csv = export_csv(&app, Some(PathBuf::from("-"))).unwrap();
        assert_eq!(
            csv,
            "Barcode,Description,Qty,UOM,Unit Price,Discount %,Amount\n\
             1078068,Stripe Polo T-Shirt Size M,1,PCS,2790,35,1813.50"
        );
    }

    #[tokio::test]
    async fn test_export_csv_to_file() {
        let app = test_app().await;
        let path = temp_path("export.csv");

        let message = export_csv(&app, Some(path.clone())).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(message.starts_with("Saved "));
        assert!(written.starts_with("Barcode,Description"));
    }

    #[tokio::test]
    async fn test_json_export_then_import() {
        let source = test_app().await;
        source
            .apply(|doc| {
                doc.customer.name = "Rahim Store".to_string();
                doc.add_item().unit_price = 250.0;
                Ok(())
            })
            .await
            .unwrap();
        let path = temp_path("export.json");
        export_json(&source, Some(path.clone())).unwrap();

        let target = test_app().await;
        import_json(&target, &path).await.unwrap();
        std::fs::remove_file(&path).ok();

        let imported = target.document().snapshot();
        assert_eq!(imported, source.document().snapshot());
        assert_eq!(target.store().load().await.unwrap(), imported);
    }

    #[tokio::test]
    async fn test_import_partial_document() {
        let app = test_app().await;
        let before = app.document().snapshot();
        let path = temp_path("partial.json");
        std::fs::write(&path, r#"{ "vatRate": "5", "shipping": 40, "extra": true }"#).unwrap();

        import_json(&app, &path).await.unwrap();
        std::fs::remove_file(&path).ok();

        let doc = app.document().snapshot();
        assert_eq!(doc.vat_rate, 5.0);
        assert_eq!(doc.shipping, 40.0);
        assert_eq!(doc.items, before.items);
        assert_eq!(doc.customer, before.customer);
    }

    #[tokio::test]
    async fn test_import_invalid_json() {
        let app = test_app().await;
        let path = temp_path("broken.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let err = import_json(&app, &path).await.unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(err.code, ErrorCode::InvalidDocument);
        assert_eq!(app.document().snapshot().items, InvoiceDocument::default().items);
    }

    #[tokio::test]
    async fn test_import_missing_file() {
        let app = test_app().await;
        let err = import_json(&app, Path::new("/nonexistent/invoice.json"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
    }
}
