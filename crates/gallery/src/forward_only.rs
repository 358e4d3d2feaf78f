//! Restrict a cursor to forward traversal at runtime.
//!
//! Leaving an operation trait unimplemented is the usual way to withhold it,
//! and turns misuse into a compile error. `ForwardOnly` instead implements
//! `decrement`, `advance` and `distance` by calling
//! [`unsupported`](iterator_adaptors::error::unsupported), which is what a
//! policy does when it can only tell at runtime. The adaptor then builds
//! but panics on first use of a declined operation.

use iterator_adaptors::ExplicitTraits;
use iterator_adaptors::ForwardTag;
use iterator_adaptors::IteratorAdaptor;
use iterator_adaptors::Operation;
use iterator_adaptors::Ptr;
use iterator_adaptors::error::unsupported;
use iterator_adaptors::inherit_default_policies;
use iterator_adaptors::policy::Advance;
use iterator_adaptors::policy::Decrement;
use iterator_adaptors::policy::Distance;

#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardOnly;

inherit_default_policies!(ForwardOnly => dereference, increment, equal, less);

impl<I> Decrement<I> for ForwardOnly {
    fn decrement(_base: &mut I) {
        unsupported(Operation::Decrement);
    }
}

impl<I, D> Advance<I, D> for ForwardOnly {
    fn advance(_base: &mut I, _n: D) {
        unsupported(Operation::Advance);
    }
}

impl<I, J, D> Distance<I, J, D> for ForwardOnly {
    fn distance(_x: &I, _y: &J) -> D {
        unsupported(Operation::Distance);
    }
}

pub type ForwardTraits<'a, T> = ExplicitTraits<ForwardTag, T, isize, *const T, &'a T>;

/// A slice cursor that only walks forward.
pub type ForwardPtr<'a, T> = IteratorAdaptor<Ptr<'a, T>, ForwardOnly, ForwardTraits<'a, T>>;

#[cfg(test)]
mod tests {
    use super::*;
    use iterator_adaptors::Traversal;

    fn bounds(data: &[u8]) -> (ForwardPtr<'_, u8>, ForwardPtr<'_, u8>) {
        return (IteratorAdaptor::new(Ptr::begin(data)), IteratorAdaptor::new(Ptr::end(data)));
    }

    #[test]
    fn forward_operations_work() {
        let data = *b"abc";
        let (mut first, last) = bounds(&data);
        assert_eq!(ForwardPtr::<u8>::category(), Traversal::Forward);
        assert_eq!(*first.get(), b'a');
        first.increment();
        assert!(first < last);
        assert!(first != last);
        let rest: Vec<u8> = first.until(last).copied().collect();
        assert_eq!(rest, b"bc");
    }

    #[test]
    #[should_panic(expected = "policy does not support `decrement`")]
    fn decrement_is_declined() {
        let data = *b"abc";
        let (_, mut last) = bounds(&data);
        last.decrement();
    }

    #[test]
    #[should_panic(expected = "policy does not support `advance`")]
    fn offset_is_declined() {
        let data = *b"abc";
        let (first, _) = bounds(&data);
        let _ = first + 1;
    }

    #[test]
    #[should_panic(expected = "policy does not support `advance`")]
    fn indexing_is_declined() {
        let data = *b"abc";
        let (first, _) = bounds(&data);
        let _ = first.at(0);
    }

    #[test]
    #[should_panic(expected = "policy does not support `distance`")]
    fn distance_is_declined() {
        let data = *b"abc";
        let (first, last) = bounds(&data);
        let _ = &last - &first;
    }

    #[test]
    #[should_panic(expected = "policy does not support `decrement`")]
    fn reverse_iteration_is_declined() {
        let data = *b"abc";
        let (first, last) = bounds(&data);
        let _ = first.until(last).next_back();
    }
}
