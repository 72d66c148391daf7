//! # Invoice Views
//!
//! Text renderings of the document: the editor view shown after every
//! command and the print view.
//!
//! ## Editor View
//! ```text
//! Invoice 26482913 · 2026-10-18T09:30 · COD
//! Customer: Karim Traders, 12 Lake Road, 01711000000
//! +---+---------+----------------------------+-----+-----+------------+--------+---------+
//! | # | Barcode | Description                | Qty | UOM | Unit Price | Disc % | Amount  |
//! +---+---------+----------------------------+-----+-----+------------+--------+---------+
//! | 1 | 1078068 | Stripe Polo T-Shirt Size M | 1   | PCS | 2790       | 35     | 1813.50 |
//! +---+---------+----------------------------+-----+-----+------------+--------+---------+
//! Sub total 1813.50 · VAT (10%) 181.35 · Shipping 0.00 · Total 1994.85 · Due 1994.85
//! ```

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

use billing_core::{format_amount, format_number, InvoiceDocument, InvoiceTotals};

const ITEM_HEADER: [&str; 7] = [
    "Barcode",
    "Description",
    "Qty",
    "UOM",
    "Unit Price",
    "Disc %",
    "Amount",
];

fn right(text: impl ToString) -> Cell {
    Cell::new(text.to_string()).set_alignment(CellAlignment::Right)
}

fn items_table(document: &InvoiceDocument, totals: &InvoiceTotals, numbered: bool) -> Table {
    let mut table = Table::new();

    let mut header: Vec<Cell> = ITEM_HEADER.iter().map(|title| Cell::new(*title)).collect();
    if numbered {
        header.insert(0, Cell::new("#"));
    }
    table.set_header(header);

    for (index, (item, amount)) in document.items.iter().zip(&totals.line_amounts).enumerate() {
        let mut row = vec![
            Cell::new(&item.barcode),
            Cell::new(&item.description),
            right(format_number(item.qty)),
            Cell::new(&item.uom),
            right(format_number(item.unit_price)),
            right(format_number(item.discount)),
            right(format_amount(*amount)),
        ];
        if numbered {
            row.insert(0, right(index + 1));
        }
        table.add_row(row);
    }

    table
}

fn vat_label(document: &InvoiceDocument) -> String {
    format!("VAT ({}%)", format_number(document.vat_rate))
}

fn customer_line(document: &InvoiceDocument) -> Option<String> {
    let customer = &document.customer;
    let parts: Vec<&str> = [&customer.name, &customer.address, &customer.phone]
        .into_iter()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

/// The view printed after every command.
pub fn render_editor(document: &InvoiceDocument) -> String {
    let totals = document.totals();
    let mut lines = Vec::new();

    lines.push(format!(
        "Invoice {} · {} · {}",
        document.invoice.number, document.invoice.date, document.invoice.payment_type
    ));
    if let Some(customer) = customer_line(document) {
        lines.push(format!("Customer: {}", customer));
    }

    lines.push(items_table(document, &totals, true).to_string());

    lines.push(format!(
        "Sub total {} · {} {} · Shipping {} · Total {} · Due {}",
        format_amount(totals.sub_total),
        vat_label(document),
        format_amount(totals.vat_amount),
        format_amount(totals.shipping),
        format_amount(totals.total),
        format_amount(totals.due),
    ));
    if !totals.total_in_words.is_empty() {
        lines.push(format!("In words: {}", totals.total_in_words));
    }

    lines.join("\n")
}

/// The printable invoice.
pub fn render_print(document: &InvoiceDocument) -> String {
    let totals = document.totals();
    let mut sections = Vec::new();

    let mut header = Table::new();
    header.load_preset(UTF8_FULL);
    header.set_header(vec![
        Cell::new("INVOICE").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    header.add_row(vec![Cell::new("Number"), Cell::new(&document.invoice.number)]);
    header.add_row(vec![Cell::new("Date"), Cell::new(&document.invoice.date)]);
    header.add_row(vec![Cell::new("Payment"), Cell::new(&document.invoice.payment_type)]);
    header.add_row(vec![Cell::new("Bill to"), Cell::new(&document.customer.name)]);
    header.add_row(vec![Cell::new("Address"), Cell::new(&document.customer.address)]);
    header.add_row(vec![Cell::new("Phone"), Cell::new(&document.customer.phone)]);
    sections.push(header.to_string());

    let mut items = items_table(document, &totals, false);
    items.load_preset(UTF8_FULL);
    sections.push(items.to_string());

    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL);
    summary.add_row(vec![Cell::new("Sub total"), right(format_amount(totals.sub_total))]);
    summary.add_row(vec![Cell::new(vat_label(document)), right(format_amount(totals.vat_amount))]);
    summary.add_row(vec![Cell::new("Shipping"), right(format_amount(totals.shipping))]);
    summary.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        right(format_amount(totals.total)).add_attribute(Attribute::Bold),
    ]);
    summary.add_row(vec![Cell::new("Due"), right(format_amount(totals.due))]);
    sections.push(summary.to_string());

    if !totals.total_in_words.is_empty() {
        sections.push(format!("In words: {}", totals.total_in_words));
    }
    if !document.terms.is_empty() {
        sections.push(format!("Terms & conditions\n{}", document.terms));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_view_default_document() {
        let view = render_editor(&InvoiceDocument::default());

        assert!(view.contains("Stripe Polo T-Shirt Size M"));
        assert!(view.contains("1813.50"));
        assert!(view.contains("VAT (10%) 181.35"));
        assert!(view.contains("Total 1994.85"));
        assert!(view.contains(
            "In words: one thousand nine hundred ninety-four taka and eighty-five paisa"
        ));
        assert!(!view.contains("Customer:"));
    }

    #[test]
    fn test_editor_view_customer_line() {
        let mut doc = InvoiceDocument::default();
        doc.customer.name = "Karim Traders".to_string();
        doc.customer.phone = "01711000000".to_string();

        let view = render_editor(&doc);
        assert!(view.contains("Customer: Karim Traders, 01711000000"));
    }

    #[test]
    fn test_editor_view_nan_total_has_no_words() {
        let mut doc = InvoiceDocument::default();
        doc.vat_rate = f64::NAN;

        let view = render_editor(&doc);
        assert!(view.contains("Total NaN"));
        assert!(!view.contains("In words"));
    }

    #[test]
    fn test_print_view() {
        let mut doc = InvoiceDocument::default();
        doc.invoice.number = "26482913".to_string();

        let view = render_print(&doc);
        assert!(view.contains("INVOICE"));
        assert!(view.contains("26482913"));
        assert!(view.contains("1994.85"));
        assert!(view.contains("Terms & conditions"));
        assert!(view.contains("Invoice & tag must be intact."));
    }
}
