use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::Context;

use shopadmin_admin::AdminService;
use shopadmin_core::Clock;
use shopadmin_products::{ImportError, PageRequest, ProductFilter};
use shopadmin_store::KeyValueStore;

use super::emit;

/// Import a CSV file. `None` is the "no file selected" case.
pub fn import<S, C>(admin: &AdminService<S, C>, file: Option<&Path>) -> anyhow::Result<()>
where
    S: KeyValueStore,
    C: Clock,
{
    let text = file
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read CSV file {}", path.display()))
        })
        .transpose()?;

    match admin.import_products(text.as_deref()) {
        Ok(report) => emit(&report),
        Err(err @ ImportError::Store(_)) => Err(err).context("import failed"),
        Err(err) => Err(err.into()),
    }
}

pub fn list<S, C>(
    admin: &AdminService<S, C>,
    name: String,
    category: String,
    min_stock: Option<u64>,
    page: usize,
    page_size: NonZeroUsize,
) -> anyhow::Result<()>
where
    S: KeyValueStore,
    C: Clock,
{
    let filter = ProductFilter {
        name,
        category,
        min_stock,
    };
    let page = admin
        .products(&filter, PageRequest::new(page, page_size))
        .context("failed to load catalog")?;
    emit(&page)
}
