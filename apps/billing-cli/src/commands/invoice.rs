//! # Invoice Commands
//!
//! Header, tax and whole-document commands.

use chrono::{NaiveDateTime, Utc};
use tracing::info;

use billing_core::coerce::coerce_str;
use billing_core::document::INVOICE_DATE_FORMAT;
use billing_core::validation::{validate_shipping, validate_vat_rate};
use billing_core::ValidationError;

use super::{last_saved_line, random_serial, view, App};
use crate::error::CliResult;

/// Editor view of the current document, followed by the save status.
pub async fn show(app: &App) -> CliResult<String> {
    let editor = app.document().with_document(view::render_editor);

    match app.store().last_saved().await? {
        Some(saved_at) => Ok(format!("{}\n{}", editor, last_saved_line(saved_at))),
        None => Ok(editor),
    }
}

/// Printable invoice.
pub fn print(app: &App) -> String {
    app.document().with_document(view::render_print)
}

/// Computed totals as pretty JSON.
pub fn totals(app: &App) -> CliResult<String> {
    let totals = app.document().with_document(|doc| doc.totals());
    Ok(serde_json::to_string_pretty(&totals)?)
}

/// Sets any of the customer fields.
pub async fn customer(
    app: &App,
    name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
) -> CliResult<String> {
    app.apply(|doc| {
        if let Some(name) = name {
            doc.customer.name = name;
        }
        if let Some(address) = address {
            doc.customer.address = address;
        }
        if let Some(phone) = phone {
            doc.customer.phone = phone;
        }
        Ok(())
    })
    .await
}

fn check_date(date: &str) -> Result<(), ValidationError> {
    if date.is_empty() {
        return Ok(());
    }

    NaiveDateTime::parse_from_str(date, INVOICE_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY-MM-DDTHH:MM".to_string(),
        })
}

/// Sets the invoice date, number or payment type.
pub async fn meta(
    app: &App,
    date: Option<String>,
    number: Option<String>,
    payment_type: Option<String>,
) -> CliResult<String> {
    if let Some(date) = &date {
        check_date(date)?;
    }

    app.apply(|doc| {
        if let Some(date) = date {
            doc.invoice.date = date;
        }
        if let Some(number) = number {
            doc.invoice.number = number;
        }
        if let Some(payment_type) = payment_type {
            doc.invoice.payment_type = payment_type;
        }
        Ok(())
    })
    .await
}

/// Sets the VAT rate and shipping charge.
pub async fn tax(app: &App, vat: Option<String>, shipping: Option<String>) -> CliResult<String> {
    if let Some(raw) = &vat {
        validate_vat_rate(coerce_str(raw))?;
    }
    if let Some(raw) = &shipping {
        validate_shipping(coerce_str(raw))?;
    }

    app.apply(|doc| {
        if let Some(raw) = &vat {
            doc.set_vat_rate(raw);
        }
        if let Some(raw) = &shipping {
            doc.set_shipping(raw);
        }
        Ok(())
    })
    .await
}

/// Replaces the terms text.
pub async fn terms(app: &App, text: String) -> CliResult<String> {
    app.apply(|doc| {
        doc.terms = text;
        Ok(())
    })
    .await
}

/// Starts over with a fresh date and number.
pub async fn new_invoice(app: &App) -> CliResult<String> {
    let view = app
        .apply(|doc| {
            doc.start_new(Utc::now(), random_serial());
            Ok(())
        })
        .await?;

    info!(
        number = %app.document().with_document(|doc| doc.invoice.number.clone()),
        "Started new invoice"
    );
    Ok(view)
}

/// Forgets the saved document, then saves the default one.
pub async fn clear(app: &App) -> CliResult<String> {
    app.store().clear().await?;
    info!(key = %app.store().key(), "Cleared saved invoice");

    app.apply(|doc| {
        doc.reset();
        Ok(())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::test_app;
    use crate::error::ErrorCode;
    use billing_core::InvoiceDocument;

    #[tokio::test]
    async fn test_show_reports_last_saved() {
        let app = test_app().await;
        let saved_at = app.store().last_saved().await.unwrap().unwrap();

        let output = show(&app).await.unwrap();
        assert!(output.contains("Stripe Polo T-Shirt Size M"));
        assert!(output.ends_with(&last_saved_line(saved_at)));
    }

    #[tokio::test]
    async fn test_show_without_saved_document() {
        let app = test_app().await;
        app.store().clear().await.unwrap();

        let output = show(&app).await.unwrap();
        assert!(!output.contains("Last saved"));
    }

    #[tokio::test]
    async fn test_customer_updates_only_given_fields() {
        let app = test_app().await;

        customer(&app, Some("Karim Traders".into()), None, None).await.unwrap();
        customer(&app, None, None, Some("01711000000".into())).await.unwrap();

        let stored = app.store().load().await.unwrap();
        assert_eq!(stored.customer.name, "Karim Traders");
        assert_eq!(stored.customer.phone, "01711000000");
        assert_eq!(stored.customer.address, "");
    }

    #[tokio::test]
    async fn test_meta_rejects_bad_date() {
        let app = test_app().await;

        let err = meta(&app, Some("18/10/2026".into()), None, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        meta(&app, Some("2026-10-18T09:30".into()), None, Some("Card".into()))
            .await
            .unwrap();
        let doc = app.document().snapshot();
        assert_eq!(doc.invoice.date, "2026-10-18T09:30");
        assert_eq!(doc.invoice.payment_type, "Card");
    }

    #[tokio::test]
    async fn test_tax_updates_totals() {
        let app = test_app().await;

        let view = tax(&app, Some("15".into()), Some("60".into())).await.unwrap();
        assert!(view.contains("VAT (15%) 272.02"));
        assert!(view.contains("Shipping 60.00"));

        let totals = app.document().with_document(|doc| doc.totals());
        assert_eq!(totals.total, 1813.5 + 1813.5 * 15.0 / 100.0 + 60.0);
    }

    #[tokio::test]
    async fn test_tax_rejects_invalid_input() {
        let app = test_app().await;

        assert!(tax(&app, Some("-5".into()), None).await.is_err());
        assert!(tax(&app, None, Some("abc".into())).await.is_err());

        let doc = app.document().snapshot();
        assert_eq!(doc.vat_rate, 10.0);
        assert_eq!(doc.shipping, 0.0);
    }

    #[tokio::test]
    async fn test_new_invoice_resets_and_renumbers() {
        let app = test_app().await;
        terms(&app, "Cash only".into()).await.unwrap();

        new_invoice(&app).await.unwrap();

        let doc = app.document().snapshot();
        assert_eq!(doc.terms, InvoiceDocument::default().terms);
        assert_eq!(doc.invoice.number.len(), 8);
        assert!(!doc.invoice.date.is_empty());
    }

    #[tokio::test]
    async fn test_clear_restores_default_document() {
        let app = test_app().await;
        customer(&app, Some("Karim".into()), None, None).await.unwrap();

        clear(&app).await.unwrap();

        let stored = app.store().load().await.unwrap();
        assert_eq!(stored, InvoiceDocument::default());
    }

    #[tokio::test]
    async fn test_totals_json() {
        let app = test_app().await;

        let json: serde_json::Value = serde_json::from_str(&totals(&app).unwrap()).unwrap();
        assert_eq!(json["subTotal"], 1813.5);
        assert_eq!(json["lineAmounts"][0], 1813.5);
        assert_eq!(
            json["totalInWords"],
            "one thousand nine hundred ninety-four taka and eighty-five paisa"
        );
    }
}
