use tracing::info;

use shopadmin_core::Entity;
use shopadmin_store::{KeyValueStore, StoreError, USERS_KEY, load_collection, save_collection};

use crate::user::User;

/// Users persisted under [`USERS_KEY`].
///
/// Users are created by the storefront sign-up flow; this side only reads and
/// deletes.
#[derive(Debug)]
pub struct UserDirectory<S> {
    store: S,
}

impl<S> UserDirectory<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<User>, StoreError> {
        load_collection(&self.store, USERS_KEY)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }

    /// Remove every user whose email equals `email` exactly and overwrite the
    /// stored collection. Returns how many records were removed.
    pub fn delete_by_email(&self, email: &str) -> Result<usize, StoreError> {
        let mut users = self.list()?;
        let before = users.len();
        users.retain(|u| u.id() != email);
        let removed = before - users.len();

        save_collection(&self.store, USERS_KEY, &users)?;
        info!(email, removed, remaining = users.len(), "user delete");
        Ok(removed)
    }
}
