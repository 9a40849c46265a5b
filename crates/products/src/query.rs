//! Catalog filtering and fixed-size pagination.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::product::Product;

/// Rows per page on the product management screen.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// Search and filter inputs. Empty strings and `None` match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name. Not trimmed.
    pub name: String,
    /// Case-insensitive exact category, compared after trimming both sides.
    pub category: String,
    /// Minimum stock level, inclusive.
    pub min_stock: Option<u64>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_name(product) && self.matches_category(product) && self.matches_stock(product)
    }

    /// Matching products in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_name(&self, product: &Product) -> bool {
        product
            .name
            .to_lowercase()
            .contains(&self.name.to_lowercase())
    }

    fn matches_category(&self, product: &Product) -> bool {
        let wanted = self.category.trim();
        wanted.is_empty() || product.category.trim().to_lowercase() == wanted.to_lowercase()
    }

    fn matches_stock(&self, product: &Product) -> bool {
        self.min_stock.is_none_or(|min| product.stock >= min)
    }
}

/// A 1-based page index and a page size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: NonZeroUsize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus what a pager control needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` to `[(page-1)*size, page*size)`.
///
/// Page 0 and pages past the end are empty, never an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let size = request.page_size.get();
    let total_items = items.len();

    let slice = request
        .page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(size))
        .filter(|&start| start < total_items)
        .map(|start| &items[start..total_items.min(start.saturating_add(size))])
        .unwrap_or(&[]);

    Page {
        items: slice.to_vec(),
        page: request.page,
        page_size: size,
        total_items,
        total_pages: total_items.div_ceil(size),
    }
}
