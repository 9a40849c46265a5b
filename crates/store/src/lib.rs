//! Key-value persistence for the admin screens.
//!
//! Every collection (products, orders, users) is stored as one JSON array under
//! a fixed key and is always read and written whole. Backends implement
//! [`KeyValueStore`]; domain code never reaches for ambient global state.

pub mod collection;
pub mod error;
pub mod file;
pub mod keys;
pub mod kv;
pub mod memory;

pub use collection::{load_collection, save_collection};
pub use error::StoreError;
pub use file::JsonFileStore;
pub use keys::{ORDERS_KEY, PRODUCTS_KEY, USERS_KEY};
pub use kv::KeyValueStore;
pub use memory::InMemoryStore;
