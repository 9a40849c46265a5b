//! Sales reporting over the orders written by the storefront checkout.
//!
//! Orders are read-only here. The report is a pure function of the order list,
//! a [`TimeWindow`] and the current instant.

mod lenient;
pub mod order;
pub mod report;
pub mod window;

pub use order::{LineItem, Order, load_orders};
pub use report::{CategoryOrders, CategoryRevenue, SalesPoint, SalesReport, build_report};
pub use window::{TimeWindow, UnknownWindow};
