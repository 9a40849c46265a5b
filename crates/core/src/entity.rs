//! Entity trait: records that keep their identity across collection rewrites.

/// Entity marker + minimal interface.
///
/// Collections are persisted whole, so identity is what lets a caller find the
/// same record again after a read-modify-overwrite cycle.
pub trait Entity {
    /// Identifier type (a generated id for products, the email for users).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
