//! Runtime configuration.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use tracing::warn;

use shopadmin_products::DEFAULT_PAGE_SIZE;

pub const DATA_FILE_ENV: &str = "SHOPADMIN_DATA_FILE";
pub const PAGE_SIZE_ENV: &str = "SHOPADMIN_PAGE_SIZE";
pub const DEFAULT_DATA_FILE: &str = "shopadmin.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// JSON document backing the key-value store.
    pub data_file: PathBuf,
    pub page_size: NonZeroUsize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AdminConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or invalid values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<NonZeroUsize>() {
                Ok(size) => config.page_size = size,
                Err(_) => warn!(
                    value = %raw,
                    default = DEFAULT_PAGE_SIZE.get(),
                    "{PAGE_SIZE_ENV} is not a positive integer; using default"
                ),
            }
        }

        config
    }
}
