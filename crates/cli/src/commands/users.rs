use anyhow::Context;
use serde_json::json;

use shopadmin_admin::AdminService;
use shopadmin_core::Clock;
use shopadmin_store::KeyValueStore;

use super::emit;

pub fn list<S, C>(admin: &AdminService<S, C>) -> anyhow::Result<()>
where
    S: KeyValueStore,
    C: Clock,
{
    let users = admin.users().context("failed to load users")?;
    emit(&users)
}

pub fn delete<S, C>(admin: &AdminService<S, C>, email: &str) -> anyhow::Result<()>
where
    S: KeyValueStore,
    C: Clock,
{
    let removed = admin
        .delete_user(email)
        .with_context(|| format!("failed to delete user {email}"))?;
    emit(&json!({ "email": email, "removed": removed }))
}
