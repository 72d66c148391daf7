//! # Line Item Commands
//!
//! Rows are addressed by their 1-based position, as printed in the `#`
//! column of the editor view.

use tracing::debug;

use billing_core::coerce::coerce_str;
use billing_core::validation::{
    validate_discount, validate_quantity, validate_row, validate_unit_price,
};
use billing_core::ItemField;

use super::App;
use crate::cli::ItemArgs;
use crate::error::CliResult;

/// Checks a raw value typed for `field`. Text fields take anything.
fn check_value(field: ItemField, raw: &str) -> CliResult<()> {
    let value = coerce_str(raw);

    match field {
        ItemField::Qty => validate_quantity(value).map(|_| ())?,
        ItemField::UnitPrice => validate_unit_price(value).map(|_| ())?,
        ItemField::Discount => validate_discount(value).map(|_| ())?,
        ItemField::Barcode | ItemField::Description | ItemField::Uom => {}
    }

    Ok(())
}

/// Appends a blank row, then fills in any fields given.
pub async fn add_item(app: &App, args: ItemArgs) -> CliResult<String> {
    let fields: Vec<(ItemField, String)> = [
        (ItemField::Barcode, args.barcode),
        (ItemField::Description, args.description),
        (ItemField::Qty, args.qty),
        (ItemField::Uom, args.uom),
        (ItemField::UnitPrice, args.unit_price),
        (ItemField::Discount, args.discount),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|value| (field, value)))
    .collect();

    for (field, value) in &fields {
        check_value(*field, value)?;
    }

    app.apply(|doc| {
        doc.add_item();
        let index = doc.items.len() - 1;
        for (field, value) in &fields {
            doc.set_item_field(index, *field, value)?;
        }
        debug!(row = index + 1, "Added line item");
        Ok(())
    })
    .await
}

/// Changes one field of row `row`.
pub async fn edit_item(app: &App, row: usize, field: &str, value: &str) -> CliResult<String> {
    let field: ItemField = field.parse()?;
    check_value(field, value)?;

    app.apply(|doc| {
        let index = validate_row(row, doc.items.len())?;
        doc.set_item_field(index, field, value)?;
        Ok(())
    })
    .await
}

/// Removes row `row`. Removing the only row leaves a blank one.
pub async fn remove_item(app: &App, row: usize) -> CliResult<String> {
    app.apply(|doc| {
        let index = validate_row(row, doc.items.len())?;
        let removed = doc.remove_item(index)?;
        debug!(row, description = %removed.description, "Removed line item");
        Ok(())
    })
    .await
}
