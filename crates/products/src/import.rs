//! CSV import: header-skipping, per-row validation, append-only merge.
//!
//! Input is a flat `name,price,stock,category` table. There is no quoting or
//! escaping; a comma always separates columns.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use shopadmin_store::StoreError;

use crate::product::{NewProduct, Product};

/// Why a single data row was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    #[error("blank line")]
    BlankLine,

    #[error("expected 4 columns, found {found}")]
    TooFewColumns { found: usize },

    #[error("name is empty")]
    EmptyName,

    #[error("price `{value}` is not a non-negative number")]
    InvalidPrice { value: String },

    #[error("stock `{value}` is not a non-negative integer")]
    InvalidStock { value: String },

    #[error("category is empty")]
    EmptyCategory,
}

/// A dropped row. `row` is 1-based and counts data rows (the header is row 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRejection {
    pub row: usize,
    pub line: String,
    #[serde(flatten)]
    pub reason: RejectReason,
}

/// Outcome of parsing, before anything is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvParse {
    pub accepted: Vec<NewProduct>,
    pub rejected: Vec<RowRejection>,
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    /// Records appended by this import, in file order.
    pub imported: Vec<Product>,
    pub rejected: Vec<RowRejection>,
    /// Catalog length after the append.
    pub catalog_size: usize,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("please select a CSV file first")]
    NoFileSelected,

    #[error("no valid products found in the CSV file ({} rows rejected)", .rejected.len())]
    NoValidProducts { rejected: Vec<RowRejection> },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parse CSV text into accepted products and rejected rows.
///
/// The first line is always discarded as a header. Rejections never abort the
/// batch.
pub fn parse_products_csv(text: &str) -> CsvParse {
    let mut parse = CsvParse::default();

    for (index, line) in text.split('\n').skip(1).enumerate() {
        let row = index + 1;
        match parse_row(line) {
            Ok(product) => parse.accepted.push(product),
            Err(reason) => {
                if reason == RejectReason::BlankLine {
                    debug!(row, "skipping blank CSV line");
                } else {
                    warn!(row, %reason, "skipping invalid CSV row");
                }
                parse.rejected.push(RowRejection {
                    row,
                    line: line.trim_end_matches('\r').to_string(),
                    reason,
                });
            }
        }
    }

    parse
}

fn parse_row(line: &str) -> Result<NewProduct, RejectReason> {
    if line.trim().is_empty() {
        return Err(RejectReason::BlankLine);
    }

    let columns: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, price, stock, category, ..] = columns.as_slice() else {
        return Err(RejectReason::TooFewColumns { found: columns.len() });
    };

    if name.is_empty() {
        return Err(RejectReason::EmptyName);
    }
    let price = parse_price(price).ok_or_else(|| RejectReason::InvalidPrice {
        value: (*price).to_string(),
    })?;
    let stock = stock.parse::<u64>().map_err(|_| RejectReason::InvalidStock {
        value: (*stock).to_string(),
    })?;
    if category.is_empty() {
        return Err(RejectReason::EmptyCategory);
    }

    Ok(NewProduct {
        name: (*name).to_string(),
        price,
        stock,
        category: (*category).to_string(),
    })
}

fn parse_price(raw: &str) -> Option<f64> {
    let value = raw.parse::<f64>().ok()?;
    // `-0` parses as negative zero; store it as plain zero.
    (value.is_finite() && value >= 0.0).then_some(value + 0.0)
}
