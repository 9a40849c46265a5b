//! `shopadmin-core` — shared building blocks for the admin screens.
//!
//! Pure types only: identifiers, the domain error model, the `Entity` trait and
//! the clock abstraction every time-dependent computation takes as input.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::DomainError;
pub use id::ProductId;
