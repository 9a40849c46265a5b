use anyhow::Context;

use shopadmin_admin::AdminService;
use shopadmin_core::Clock;
use shopadmin_sales::TimeWindow;
use shopadmin_store::KeyValueStore;

use super::emit;

pub fn show<S, C>(admin: &AdminService<S, C>, window: TimeWindow) -> anyhow::Result<()>
where
    S: KeyValueStore,
    C: Clock,
{
    let summary = admin
        .dashboard(window)
        .context("failed to compute dashboard")?;
    emit(&summary)
}
