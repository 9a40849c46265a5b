use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use shopadmin_store::{KeyValueStore, ORDERS_KEY, StoreError};

use crate::lenient;

/// An order as written by checkout. Every field may be missing, and a field of
/// the wrong type reads as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// Whatever identifier checkout assigned (string or number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Date string, or epoch milliseconds normalized to RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::date")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::number")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::items")]
    pub items: Option<Vec<LineItem>>,
}

/// One line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
}

impl LineItem {
    /// `price × quantity`, with quantity defaulting to 1.
    pub fn revenue(&self) -> Option<f64> {
        let price = self.price?;
        Some(price * self.quantity.unwrap_or(1.0))
    }
}

impl Order {
    /// The order timestamp, if `date` parses.
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_order_date)
    }
}

/// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC), or `YYYY-MM-DD`
/// (UTC midnight).
pub fn parse_order_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// All orders persisted under [`ORDERS_KEY`].
///
/// Each element decodes on its own; one that is not an object is skipped with a
/// warning. A stored value that is not an array is a decode error.
pub fn load_orders<S>(store: &S) -> Result<Vec<Order>, StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let values = match store.get(ORDERS_KEY)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(values)) => values,
        Some(_) => return Err(StoreError::decode(ORDERS_KEY, "expected an array of orders")),
    };

    let orders = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Order>(value) {
            Ok(order) => Some(order),
            Err(e) => {
                warn!(order = index, error = %e, "skipping undecodable order");
                None
            }
        })
        .collect();
    Ok(orders)
}
