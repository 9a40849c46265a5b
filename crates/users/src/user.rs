use serde::{Deserialize, Serialize};

use shopadmin_core::Entity;

/// A registered storefront user. Identified by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Entity for User {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.email
    }
}
