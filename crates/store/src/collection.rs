//! Whole-collection load/save over a [`KeyValueStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Load the JSON array stored under `key`.
///
/// An absent key or a stored `null` is an empty collection. Anything else that
/// does not decode as `Vec<T>` is an error.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(|e| StoreError::decode(key, e.to_string())),
    }
}

/// Serialize `items` and overwrite whatever was stored under `key`.
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let value = serde_json::to_value(items).map_err(|e| StoreError::encode(key, e.to_string()))?;
    store.put(key, value)
}
