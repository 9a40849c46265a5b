pub mod dashboard;
pub mod products;
pub mod users;

use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub fn emit<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
