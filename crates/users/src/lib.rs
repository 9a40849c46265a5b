//! User management: list registered users and remove them by email.

pub mod directory;
pub mod user;

pub use directory::UserDirectory;
pub use user::User;
