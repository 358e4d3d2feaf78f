//! Mutable/const adaptor pairs.
//!
//! Containers usually want two iterator types, one that can write and one
//! that can only read, behaving identically otherwise. [`Adaptors`] derives
//! both from one policy set so they cannot drift apart:
//!
//! ```
//! use std::cell::Cell;
//! use iterator_adaptors::pair::{Adaptors, PairConstIterator, PairIterator};
//! use iterator_adaptors::{CellPtr, ConstCellPtr};
//!
//! type Pair<'a> = Adaptors<CellPtr<'a, i32>, ConstCellPtr<'a, i32>>;
//!
//! let cells = [Cell::new(1), Cell::new(2)];
//! let it = PairIterator::<Pair>::new(CellPtr::begin(&cells));
//! it.get().set(10);
//!
//! let c = PairConstIterator::<Pair>::from_nonconst(&it);
//! assert_eq!(c.get(), 10);
//! assert!(c == it);
//! ```
//!
//! Both members carry the mutable cursor as their non-const tag, so they
//! compare and measure against each other, and the mutable one converts
//! into the const one. Nothing converts back.

use std::marker::PhantomData;

use crate::adaptor::IteratorAdaptor;
use crate::policy::DefaultPolicies;

/// A generator of two matching adaptor types.
pub trait AdaptorPair {
    /// The member over the mutable cursor.
    type Iterator;
    /// The member over the const cursor.
    type ConstIterator;
}

/// Pair generator over the mutable cursor `I`, the const cursor `C`, their
/// trait descriptions `T` and `CT`, and one policy set `P`.
///
/// Type-level only; never constructed.
pub struct Adaptors<I, C, T = I, CT = C, P = DefaultPolicies> {
    _marker: PhantomData<fn() -> (I, C, T, CT, P)>,
}

impl<I, C, T, CT, P> AdaptorPair for Adaptors<I, C, T, CT, P> {
    type Iterator = IteratorAdaptor<I, P, T, I>;
    type ConstIterator = IteratorAdaptor<C, P, CT, I>;
}

/// The mutable member of a pair.
pub type PairIterator<G> = <G as AdaptorPair>::Iterator;

/// The const member of a pair.
pub type PairConstIterator<G> = <G as AdaptorPair>::ConstIterator;
