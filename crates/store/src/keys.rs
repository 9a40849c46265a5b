//! Well-known store keys.

/// Catalog of imported products.
pub const PRODUCTS_KEY: &str = "products";

/// Orders written by the storefront checkout flow.
pub const ORDERS_KEY: &str = "orders";

/// Registered storefront users.
pub const USERS_KEY: &str = "users";
