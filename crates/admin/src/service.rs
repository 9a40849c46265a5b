use serde::Serialize;
use tracing::info;

use shopadmin_core::Clock;
use shopadmin_products::{
    ImportError, ImportReport, Page, PageRequest, Product, ProductCatalog, ProductFilter,
};
use shopadmin_sales::{SalesReport, TimeWindow, build_report, load_orders};
use shopadmin_store::{KeyValueStore, StoreError};
use shopadmin_users::{User, UserDirectory};

/// Dashboard tiles and charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Unfiltered.
    pub total_users: usize,
    /// Unfiltered.
    pub total_products: usize,
    pub sales: SalesReport,
}

/// Entry point for every admin operation.
#[derive(Debug)]
pub struct AdminService<S, C> {
    store: S,
    clock: C,
}

impl<S, C> AdminService<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    fn catalog(&self) -> ProductCatalog<&S> {
        ProductCatalog::new(&self.store)
    }

    fn directory(&self) -> UserDirectory<&S> {
        UserDirectory::new(&self.store)
    }

    /// Counts and sales aggregates for `window`, evaluated at the clock's "now".
    pub fn dashboard(&self, window: TimeWindow) -> Result<DashboardSummary, StoreError> {
        let total_users = self.directory().count()?;
        let total_products = self.catalog().count()?;
        let orders = load_orders(&self.store)?;
        let sales = build_report(&orders, window, self.clock.now());

        info!(
            %window,
            total_users,
            total_products,
            orders = sales.order_count,
            "dashboard computed"
        );

        Ok(DashboardSummary {
            total_users,
            total_products,
            sales,
        })
    }

    pub fn import_products(&self, csv: Option<&str>) -> Result<ImportReport, ImportError> {
        self.catalog().import_csv(csv)
    }

    pub fn products(&self, filter: &ProductFilter, request: PageRequest) -> Result<Page<Product>, StoreError> {
        self.catalog().page(filter, request)
    }

    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        self.directory().list()
    }

    pub fn delete_user(&self, email: &str) -> Result<usize, StoreError> {
        self.directory().delete_by_email(email)
    }
}
