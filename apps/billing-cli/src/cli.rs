//! # Command Line
//!
//! Argument definitions. Every subcommand maps to one control of the
//! invoice screen.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "billing", version, about = "Build, print and export invoices")]
pub struct Cli {
    /// Config file (default: <config dir>/billing.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the invoice with totals
    Show,

    /// Set customer details
    Customer {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Set invoice date, number or payment type
    Meta {
        /// Date as YYYY-MM-DDTHH:MM
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        payment_type: Option<String>,
    },

    /// Set VAT percentage and shipping charge
    Tax {
        #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
        vat: Option<String>,
        #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
        shipping: Option<String>,
    },

    /// Replace the terms and conditions
    Terms {
        text: String,
    },

    /// Append a line item
    AddItem(ItemArgs),

    /// Change one field of a line item
    EditItem {
        /// Row number, starting at 1
        row: usize,
        /// barcode, description, qty, uom, unitPrice or discount
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a line item
    RemoveItem {
        /// Row number, starting at 1
        row: usize,
    },

    /// Start a new invoice with a fresh date and number
    New,

    /// Print the invoice as a table
    Print,

    /// Write the line items as CSV
    ExportCsv {
        /// Output file, `-` for stdout (default: invoice.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write the whole document as JSON
    ExportJson {
        /// Output file, `-` for stdout (default: invoice.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Merge a JSON document into the current invoice
    ImportJson {
        path: PathBuf,
    },

    /// Forget the saved invoice and start from the sample one
    Clear,

    /// Print the computed totals as JSON
    Totals,
}

/// Optional fields for a new line item.
#[derive(Debug, Default, Args)]
pub struct ItemArgs {
    #[arg(long)]
    pub barcode: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub qty: Option<String>,
    #[arg(long)]
    pub uom: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub unit_price: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub discount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_item() {
        let cli = Cli::parse_from(["billing", "edit-item", "2", "unitPrice", "99.5"]);
        match cli.command {
            Some(Command::EditItem { row, field, value }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "unitPrice");
                assert_eq!(value, "99.5");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_item_flags() {
        let cli = Cli::parse_from([
            "billing",
            "add-item",
            "--description",
            "Denim Jacket",
            "--unit-price",
            "4500",
        ]);
        match cli.command {
            Some(Command::AddItem(args)) => {
                assert_eq!(args.description.as_deref(), Some("Denim Jacket"));
                assert_eq!(args.unit_price.as_deref(), Some("4500"));
                assert!(args.qty.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["billing", "show", "--config", "/tmp/b.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/b.toml")));
    }
}
