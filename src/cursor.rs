//! Native cursor operators.
//!
//! These traits are the operators a base iterator brings with it, the
//! things a raw pointer can do without help: read, step, jump and measure.
//! [`DefaultPolicies`](crate::policy::DefaultPolicies) forwards to them.
//! Equality and ordering are the standard `PartialEq` / `PartialOrd`.
//!
//! # Hierarchy
//!
//! - [`Cursor`]: dereference and increment
//! - [`BidirectionalCursor`]: plus decrement
//! - [`RandomAccessCursor`]: plus jump by an offset
//! - [`OffsetFrom`]: signed distance, possibly across cursor types (a
//!   mutable cursor measured against its const counterpart)

/// Dereference and single-step advance.
pub trait Cursor {
    /// What dereferencing yields.
    type Item;

    /// Read the element at the current position.
    ///
    /// Must not move the cursor.
    fn get(&self) -> Self::Item;

    /// Move to the next position.
    fn step(&mut self);
}

/// A cursor that can also move backwards.
pub trait BidirectionalCursor: Cursor {
    /// Move to the previous position.
    fn step_back(&mut self);
}

/// A cursor that can jump any number of positions in constant time.
pub trait RandomAccessCursor: BidirectionalCursor {
    type Difference: Copy;

    /// Move by `n` positions; negative moves backwards, zero does nothing.
    fn jump(&mut self, n: Self::Difference);
}

/// Signed distance from `origin` to `self`.
///
/// `a.offset_from(&b)` is the number of steps needed to move `b` onto `a`,
/// negative when `a` precedes `b`.
pub trait OffsetFrom<J: ?Sized = Self> {
    type Difference;

    fn offset_from(&self, origin: &J) -> Self::Difference;
}
