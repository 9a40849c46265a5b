//! `shopadmin-admin` — the admin screens as one service.
//!
//! Wires the product catalog, user directory and sales report to a single
//! store and clock.

pub mod config;
pub mod service;

pub use config::{AdminConfig, DATA_FILE_ENV, DEFAULT_DATA_FILE, PAGE_SIZE_ENV};
pub use service::{AdminService, DashboardSummary};
