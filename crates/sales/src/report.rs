//! Dashboard aggregates: order count, revenue, per-category breakdowns and a
//! sales-versus-returns series.
//!
//! Categories are grouped by their exact string. `"Home"` and `"home "` are two
//! different buckets, and no attempt is made to reconcile them with catalog
//! categories.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::order::Order;
use crate::window::TimeWindow;

/// Share of each order's total reported as returns.
const RETURNS_RATE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOrders {
    pub name: String,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRevenue {
    pub name: String,
    pub value: f64,
}

/// One point of the sales-versus-returns chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub date: Option<String>,
    pub sales: f64,
    pub returns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub window: TimeWindow,
    pub generated_at: DateTime<Utc>,
    pub order_count: usize,
    pub total_revenue: f64,
    /// Line items per category, first-seen order.
    pub category_orders: Vec<CategoryOrders>,
    /// `price × quantity` per category, first-seen order.
    pub category_revenue: Vec<CategoryRevenue>,
    pub sales_series: Vec<SalesPoint>,
}

/// Aggregate `orders` that fall inside `window` as of `now`.
///
/// Orders without a total still count toward `order_count` but add nothing to
/// revenue or the series. Orders without items and items without a category or
/// price are skipped in the category breakdowns.
pub fn build_report(orders: &[Order], window: TimeWindow, now: DateTime<Utc>) -> SalesReport {
    let mut order_count = 0;
    let mut total_revenue = 0.0;
    let mut categories = CategoryTally::default();
    let mut sales_series = Vec::new();

    for (index, order) in orders.iter().enumerate() {
        if !window.contains(order.placed_at(), now) {
            continue;
        }
        order_count += 1;

        match &order.items {
            Some(items) => {
                for item in items {
                    let Some(category) = item.category.as_deref() else {
                        warn!(order = index, item = ?item.name, "line item missing category");
                        continue;
                    };
                    let Some(revenue) = item.revenue() else {
                        warn!(order = index, category, "line item missing price");
                        continue;
                    };
                    categories.record(category, revenue);
                }
            }
            None => warn!(order = index, "order missing items array"),
        }

        match order.total_price {
            Some(total) => {
                total_revenue += total;
                sales_series.push(SalesPoint {
                    date: order.date.clone(),
                    sales: total,
                    returns: (total * RETURNS_RATE).floor(),
                });
            }
            None => warn!(order = index, "order missing totalPrice"),
        }
    }

    let (category_orders, category_revenue) = categories.finish();

    SalesReport {
        window,
        generated_at: now,
        order_count,
        total_revenue,
        category_orders,
        category_revenue,
        sales_series,
    }
}

#[derive(Default)]
struct CategoryTally {
    index: HashMap<String, usize>,
    buckets: Vec<(String, u64, f64)>,
}

impl CategoryTally {
    fn record(&mut self, category: &str, revenue: f64) {
        let slot = match self.index.get(category) {
            Some(&slot) => slot,
            None => {
                self.buckets.push((category.to_string(), 0, 0.0));
                let slot = self.buckets.len() - 1;
                self.index.insert(category.to_string(), slot);
                slot
            }
        };
        if let Some(bucket) = self.buckets.get_mut(slot) {
            bucket.1 += 1;
            bucket.2 += revenue;
        }
    }

    fn finish(self) -> (Vec<CategoryOrders>, Vec<CategoryRevenue>) {
        self.buckets
            .into_iter()
            .map(|(name, orders, value)| {
                (
                    CategoryOrders {
                        name: name.clone(),
                        orders,
                    },
                    CategoryRevenue { name, value },
                )
            })
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::LineItem;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn item(category: &str, price: f64, quantity: Option<f64>) -> LineItem {
        LineItem {
            name: None,
            category: Some(category.to_string()),
            price: Some(price),
            quantity,
        }
    }

    fn order(days_ago: i64, total: f64, items: Vec<LineItem>) -> Order {
        Order {
            id: None,
            date: Some((now() - Duration::days(days_ago)).to_rfc3339()),
            total_price: Some(total),
            items: Some(items),
        }
    }

    #[test]
    fn thirty_day_window_drops_older_orders() {
        let orders = vec![
            order(0, 100.0, vec![item("Electronics", 100.0, None)]),
            order(10, 50.0, vec![item("Home", 25.0, Some(2.0))]),
            order(40, 999.0, vec![item("Toys", 999.0, None)]),
        ];

        let report = build_report(&orders, TimeWindow::Last30Days, now());

        assert_eq!(report.order_count, 2);
        assert_eq!(report.total_revenue, 150.0);
        let names: Vec<&str> = report.category_revenue.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Electronics", "Home"]);
        assert_eq!(report.category_revenue[1].value, 50.0);
        assert_eq!(report.sales_series.len(), 2);
    }

    #[test]
    fn all_window_includes_everything() {
        let orders = vec![order(0, 10.0, vec![]), order(400, 20.0, vec![])];
        let report = build_report(&orders, TimeWindow::All, now());
        assert_eq!(report.order_count, 2);
        assert_eq!(report.total_revenue, 30.0);
    }

    #[test]
    fn seven_day_window() {
        let orders = vec![order(3, 10.0, vec![]), order(8, 20.0, vec![])];
        let report = build_report(&orders, TimeWindow::Last7Days, now());
        assert_eq!(report.order_count, 1);
        assert_eq!(report.total_revenue, 10.0);
    }

    #[test]
    fn category_counts_line_items_not_orders() {
        let orders = vec![
            order(1, 30.0, vec![item("Home", 10.0, None), item("Home", 20.0, None)]),
            order(2, 5.0, vec![item("Toys", 5.0, None)]),
        ];
        let report = build_report(&orders, TimeWindow::All, now());
        assert_eq!(
            report.category_orders,
            vec![
                CategoryOrders { name: "Home".into(), orders: 2 },
                CategoryOrders { name: "Toys".into(), orders: 1 },
            ]
        );
    }

    #[test]
    fn categories_are_matched_by_exact_string() {
        let orders = vec![order(1, 20.0, vec![item("Home", 10.0, None), item("home ", 10.0, None)])];
        let report = build_report(&orders, TimeWindow::All, now());
        assert_eq!(report.category_revenue.len(), 2);
    }

    #[test]
    fn returns_are_floored_tenth_of_total() {
        let orders = vec![order(1, 199.0, vec![])];
        let report = build_report(&orders, TimeWindow::All, now());
        assert_eq!(report.sales_series[0].sales, 199.0);
        assert_eq!(report.sales_series[0].returns, 19.0);
    }

    #[test]
    fn incomplete_orders_and_items_are_skipped_not_fatal() {
        let orders = vec![
            Order {
                total_price: Some(40.0),
                ..order(1, 0.0, vec![])
            },
            Order {
                items: None,
                ..order(1, 15.0, vec![])
            },
            Order {
                total_price: None,
                ..order(1, 0.0, vec![item("Home", 7.0, None)])
            },
            order(
                1,
                12.0,
                vec![
                    LineItem {
                        category: None,
                        ..item("x", 3.0, None)
                    },
                    LineItem {
                        price: None,
                        ..item("Toys", 0.0, None)
                    },
                    item("Garden", 12.0, None),
                ],
            ),
        ];

        let report = build_report(&orders, TimeWindow::All, now());

        assert_eq!(report.order_count, 4);
        assert_eq!(report.total_revenue, 67.0);
        assert_eq!(report.sales_series.len(), 3);
        let names: Vec<&str> = report.category_orders.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Home", "Garden"]);
    }

    #[test]
    fn undated_orders_count_only_for_all() {
        let undated = Order {
            date: None,
            ..order(0, 10.0, vec![])
        };
        let orders = vec![undated];
        assert_eq!(build_report(&orders, TimeWindow::All, now()).order_count, 1);
        assert_eq!(build_report(&orders, TimeWindow::Last7Days, now()).order_count, 0);
    }

    #[test]
    fn empty_orders_give_an_empty_report() {
        let report = build_report(&[], TimeWindow::Last30Days, now());
        assert_eq!(report.order_count, 0);
        assert_eq!(report.total_revenue, 0.0);
        assert!(report.category_orders.is_empty());
        assert!(report.sales_series.is_empty());
        assert_eq!(report.generated_at, now());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a narrower window never reports more orders than a wider one.
            #[test]
            fn windows_are_nested(ages in proptest::collection::vec(0i64..60, 0..30)) {
                let orders: Vec<Order> = ages.iter().map(|&d| order(d, 1.0, vec![])).collect();
                let week = build_report(&orders, TimeWindow::Last7Days, now()).order_count;
                let month = build_report(&orders, TimeWindow::Last30Days, now()).order_count;
                let all = build_report(&orders, TimeWindow::All, now()).order_count;
                prop_assert!(week <= month);
                prop_assert!(month <= all);
                prop_assert_eq!(all, orders.len());
            }
        }
    }
}
