//! Product catalog: CSV import with row validation, filtered and paginated listing.
//!
//! Parsing and querying are pure functions over in-memory slices. Only
//! [`ProductCatalog`] talks to a store, and it persists the catalog in a
//! single write per import.

pub mod catalog;
pub mod import;
pub mod product;
pub mod query;

pub use catalog::ProductCatalog;
pub use import::{
    CsvParse, ImportError, ImportReport, RejectReason, RowRejection, parse_products_csv,
};
pub use product::{NewProduct, Product};
pub use query::{DEFAULT_PAGE_SIZE, Page, PageRequest, ProductFilter, paginate};
pub use shopadmin_core::ProductId;
