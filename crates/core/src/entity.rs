//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records stored by a repository are looked up by this identity, never by
/// their position in the collection.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
