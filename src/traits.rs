//! Trait descriptions: the five associated types every iterator publishes.
//!
//! A cursor usually publishes its own description by implementing
//! [`IteratorTraits`]; the adaptor's description parameter defaults to the
//! cursor type itself. A base that publishes nothing (a bare integer, a
//! foreign type) gets one through [`ExplicitTraits`].
//!
//! The description and the policy's actual behavior must agree. Nothing
//! checks this at runtime.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Neg;

use crate::category::Category;
use crate::category::RandomAccessTag;

/// The static record of an iterator's associated types.
pub trait IteratorTraits {
    /// Traversal category marker.
    type Category: Category;
    /// The element type.
    type Value;
    /// Signed distance between two positions.
    type Difference: Copy + Neg<Output = Self::Difference>;
    /// Address type of an element. Descriptive only.
    type Pointer;
    /// What dereferencing yields, by value.
    type Reference;
}

/// A description supplied explicitly rather than published by the base.
///
/// Never constructed; used only as a type argument.
///
/// ```
/// use iterator_adaptors::ExplicitTraits;
/// use iterator_adaptors::RandomAccessTag;
/// use iterator_adaptors::traits::IteratorTraits;
///
/// type Counter = ExplicitTraits<RandomAccessTag, isize>;
/// let _: <Counter as IteratorTraits>::Reference = 5isize;
/// ```
pub struct ExplicitTraits<C = RandomAccessTag, V = (), D = isize, P = *const V, R = V> {
    _marker: PhantomData<fn() -> (C, V, D, P, R)>,
}

impl<C, V, D, P, R> IteratorTraits for ExplicitTraits<C, V, D, P, R>
where
    C: Category,
    D: Copy + Neg<Output = D>,
{
    type Category = C;
    type Value = V;
    type Difference = D;
    type Pointer = P;
    type Reference = R;
}

impl<C, V, D, P, R> fmt::Debug for ExplicitTraits<C, V, D, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("ExplicitTraits");
    }
}

/// Shorthand for a description's difference type.
pub type DifferenceOf<T> = <T as IteratorTraits>::Difference;

/// Shorthand for a description's reference type.
pub type ReferenceOf<T> = <T as IteratorTraits>::Reference;
