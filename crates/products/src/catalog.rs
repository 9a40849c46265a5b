//! Store-backed catalog service.

use tracing::{info, warn};

use shopadmin_core::ProductId;
use shopadmin_store::{KeyValueStore, PRODUCTS_KEY, StoreError, load_collection, save_collection};

use crate::import::{ImportError, ImportReport, parse_products_csv};
use crate::product::Product;
use crate::query::{Page, PageRequest, ProductFilter, paginate};

/// The product catalog persisted under [`PRODUCTS_KEY`].
#[derive(Debug)]
pub struct ProductCatalog<S> {
    store: S,
}

impl<S> ProductCatalog<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full catalog in insertion order.
    pub fn products(&self) -> Result<Vec<Product>, StoreError> {
        load_collection(&self.store, PRODUCTS_KEY)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.products()?.len())
    }

    /// Import CSV text, appending every accepted row with a fresh id.
    ///
    /// `None` means no file was chosen. Nothing is written unless at least one
    /// row is accepted, and then the merged catalog is written exactly once.
    /// Re-importing the same file appends duplicates.
    pub fn import_csv(&self, source: Option<&str>) -> Result<ImportReport, ImportError> {
        self.import_csv_with_ids(source, ProductId::new)
    }

    /// Like [`import_csv`](Self::import_csv) with caller-supplied id generation.
    pub fn import_csv_with_ids(
        &self,
        source: Option<&str>,
        mut next_id: impl FnMut() -> ProductId,
    ) -> Result<ImportReport, ImportError> {
        let Some(text) = source else {
            warn!("import requested without a file");
            return Err(ImportError::NoFileSelected);
        };

        let parse = parse_products_csv(text);
        if parse.accepted.is_empty() {
            warn!(rejected = parse.rejected.len(), "no valid products in CSV");
            return Err(ImportError::NoValidProducts {
                rejected: parse.rejected,
            });
        }

        let mut catalog = self.products()?;
        let imported: Vec<Product> = parse
            .accepted
            .into_iter()
            .map(|p| p.into_product(next_id()))
            .collect();
        catalog.extend(imported.iter().cloned());

        save_collection(&self.store, PRODUCTS_KEY, &catalog)?;

        info!(
            imported = imported.len(),
            rejected = parse.rejected.len(),
            catalog_size = catalog.len(),
            "products imported"
        );

        Ok(ImportReport {
            imported,
            rejected: parse.rejected,
            catalog_size: catalog.len(),
        })
    }

    /// Filter the catalog and return one page of matches.
    pub fn page(&self, filter: &ProductFilter, request: PageRequest) -> Result<Page<Product>, StoreError> {
        let products = self.products()?;
        let matches: Vec<Product> = filter.apply(&products).into_iter().cloned().collect();
        Ok(paginate(&matches, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shopadmin_store::InMemoryStore;
    use std::collections::HashSet;

    const HEADER: &str = "name,price,stock,category";

    fn csv(rows: &[&str]) -> String {
        std::iter::once(HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn no_file_leaves_store_untouched() {
        let store = InMemoryStore::with_entries([(PRODUCTS_KEY, json!([]))]);
        let catalog = ProductCatalog::new(&store);

        let err = catalog.import_csv(None).unwrap_err();
        assert!(matches!(err, ImportError::NoFileSelected));
        assert_eq!(store.get(PRODUCTS_KEY).unwrap(), Some(json!([])));
    }

    #[test]
    fn all_invalid_rows_leave_store_untouched() {
        let store = InMemoryStore::new();
        let catalog = ProductCatalog::new(&store);

        let err = catalog
            .import_csv(Some(&csv(&["Bad,xx,5,Toys", ",1,1,Toys", "Short,1"])))
            .unwrap_err();
        match err {
            ImportError::NoValidProducts { rejected } => assert_eq!(rejected.len(), 3),
            other => panic!("expected NoValidProducts, got {other:?}"),
        }
        assert_eq!(store.get(PRODUCTS_KEY).unwrap(), None);
    }

    #[test]
    fn import_appends_accepted_rows_in_order() {
        let store = InMemoryStore::new();
        let catalog = ProductCatalog::new(&store);

        let report = catalog
            .import_csv(Some(&csv(&[
                "Phone,500,10,Electronics",
                "Bad,xx,5,Toys",
                "Mug,8,100,Home",
            ])))
            .unwrap();

        assert_eq!(report.imported.len(), 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.catalog_size, 2);

        let stored = catalog.products().unwrap();
        assert_eq!(stored, report.imported);
        assert_eq!(stored[0].name, "Phone");
        assert_eq!(stored[1].name, "Mug");
    }

    #[test]
    fn reimporting_appends_duplicates_with_new_ids() {
        let store = InMemoryStore::new();
        let catalog = ProductCatalog::new(&store);
        let text = csv(&["Mug,8,100,Home"]);

        catalog.import_csv(Some(&text)).unwrap();
        let report = catalog.import_csv(Some(&text)).unwrap();

        let stored = catalog.products().unwrap();
        assert_eq!(report.catalog_size, 2);
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, stored[1].name);
        assert_ne!(stored[0].id, stored[1].id);
    }

    #[test]
    fn import_keeps_existing_catalog_prefix() {
        let store = InMemoryStore::new();
        let catalog = ProductCatalog::new(&store);
        let before = catalog
            .import_csv(Some(&csv(&["Lamp,20,3,Home", "Desk,90,1,Office"])))
            .unwrap()
            .imported;

        catalog.import_csv(Some(&csv(&["Pen,1,500,Office"]))).unwrap();

        let stored = catalog.products().unwrap();
        assert_eq!(&stored[..2], before.as_slice());
        assert_eq!(stored[2].name, "Pen");
        let ids: HashSet<_> = stored.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn injected_ids_are_used_in_order() {
        let store = InMemoryStore::new();
        let catalog = ProductCatalog::new(&store);
        let ids = [ProductId::new(), ProductId::new()];
        let mut next = ids.iter().copied();

        let report = catalog
            .import_csv_with_ids(Some(&csv(&["A,1,1,x", "B,2,2,y"])), || next.next().unwrap())
            .unwrap();

        assert_eq!(report.imported[0].id, ids[0]);
        assert_eq!(report.imported[1].id, ids[1]);
    }

    #[test]
    fn corrupt_catalog_fails_before_writing() {
        let store = InMemoryStore::with_entries([(PRODUCTS_KEY, json!("not an array"))]);
        let catalog = ProductCatalog::new(&store);

        let err = catalog.import_csv(Some(&csv(&["Mug,8,100,Home"]))).unwrap_err();
        assert!(matches!(err, ImportError::Store(StoreError::Decode { .. })));
        assert_eq!(store.get(PRODUCTS_KEY).unwrap(), Some(json!("not an array")));
    }

    #[test]
    fn page_filters_then_paginates() {
        let store = InMemoryStore::new();
        let catalog = ProductCatalog::new(&store);
        let rows: Vec<String> = (1..=8).map(|i| format!("Mug {i},5,{i},Home")).collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        catalog.import_csv(Some(&csv(&rows))).unwrap();

        let filter = ProductFilter {
            min_stock: Some(2),
            ..ProductFilter::default()
        };
        let page = catalog.page(&filter, PageRequest::default()).unwrap();

        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].name, "Mug 2");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        type Expected = Option<(String, f64, u64, String)>;

        fn good_row() -> impl Strategy<Value = (String, Expected)> {
            ("[A-Za-z]{1,8}", 0u32..100_000, 0u64..1_000, "[A-Za-z]{1,8}").prop_map(
                |(name, cents, stock, category)| {
                    let price = f64::from(cents) / 100.0;
                    let line = format!(" {name} ,{price}, {stock},{category} ");
                    (line, Some((name, price, stock, category)))
                },
            )
        }

        fn bad_row() -> impl Strategy<Value = (String, Expected)> {
            proptest::sample::select(vec![
                "",
                "   ",
                "Short,1",
                "Bad,xx,5,Toys",
                ",1,1,Toys",
                "Lamp,1,1,",
                "Lamp,-3,1,Home",
                "Lamp,1,2.5,Home",
                "Lamp,NaN,1,Home",
            ])
            .prop_map(|line| (line.to_string(), None))
        }

        fn row() -> impl Strategy<Value = (String, Expected)> {
            prop_oneof![good_row(), bad_row()]
        }

        fn as_tuple(p: &Product) -> (String, f64, u64, String) {
            (p.name.clone(), p.price, p.stock, p.category.clone())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: an import appends exactly the accepted rows, in file
            /// order, after the prior catalog, with distinct ids; an import with
            /// nothing accepted leaves the stored value as it was.
            #[test]
            fn import_appends_accepted_rows_or_changes_nothing(
                prior in proptest::collection::vec(good_row(), 0..4),
                rows in proptest::collection::vec(row(), 0..12)
            ) {
                let store = InMemoryStore::new();
                let catalog = ProductCatalog::new(&store);
                if !prior.is_empty() {
                    let lines: Vec<&str> = prior.iter().map(|(l, _)| l.as_str()).collect();
                    catalog.import_csv(Some(&csv(&lines))).unwrap();
                }
                let stored_before = store.get(PRODUCTS_KEY).unwrap();
                let before = catalog.products().unwrap();

                let lines: Vec<&str> = rows.iter().map(|(l, _)| l.as_str()).collect();
                let expected: Vec<(String, f64, u64, String)> =
                    rows.iter().filter_map(|(_, e)| e.clone()).collect();

                match catalog.import_csv(Some(&csv(&lines))) {
                    Ok(report) => {
                        prop_assert!(!expected.is_empty());
                        let stored = catalog.products().unwrap();
                        prop_assert_eq!(stored.len(), before.len() + expected.len());
                        prop_assert_eq!(&stored[..before.len()], before.as_slice());

                        let appended: Vec<_> = stored[before.len()..].iter().map(as_tuple).collect();
                        prop_assert_eq!(appended, expected);
                        prop_assert_eq!(&stored[before.len()..], report.imported.as_slice());

                        let ids: HashSet<_> = stored.iter().map(|p| p.id).collect();
                        prop_assert_eq!(ids.len(), stored.len());
                    }
                    Err(ImportError::NoValidProducts { rejected }) => {
                        prop_assert!(expected.is_empty());
                        prop_assert_eq!(rejected.len(), rows.len());
                        prop_assert_eq!(store.get(PRODUCTS_KEY).unwrap(), stored_before);
                    }
                    Err(other) => prop_assert!(false, "unexpected import error: {other:?}"),
                }
            }
        }
    }
}
