//! Half-open ranges of adaptors as std iterators.
//!
//! An [`AdaptorRange`] holds `[front, back)` and yields the reference type
//! of each position, using only the policy's `dereference`, `increment` and
//! `equal`. With `decrement` it also iterates from the back. This is how an
//! adapted cursor pair plugs into `for` loops, `collect` and the rest of the
//! iterator toolbox.

use std::iter::FusedIterator;

use crate::adaptor::IteratorAdaptor;
use crate::policy::Decrement;
use crate::policy::Dereference;
use crate::policy::Distance;
use crate::policy::Equal;
use crate::policy::Increment;
use crate::traits::IteratorTraits;

/// The positions from `front` up to, not including, `back`.
#[derive(Clone, Copy, Debug)]
pub struct AdaptorRange<A> {
    front: A,
    back: A,
}

impl<A> AdaptorRange<A> {
    /// The range `[front, back)`. `back` must be reachable from `front` by
    /// incrementing.
    pub fn new(front: A, back: A) -> AdaptorRange<A> {
        return AdaptorRange { front, back };
    }

    /// Next position to be yielded from the front.
    pub fn front(&self) -> &A {
        return &self.front;
    }

    /// One past the next position to be yielded from the back.
    pub fn back(&self) -> &A {
        return &self.back;
    }

    /// Give back the two bounds.
    pub fn into_bounds(self) -> (A, A) {
        return (self.front, self.back);
    }
}

impl<I, P, T, N> AdaptorRange<IteratorAdaptor<I, P, T, N>>
where
    T: IteratorTraits,
{
    /// Number of positions left, measured by the policy's `distance`.
    pub fn len(&self) -> T::Difference
    where
        P: Distance<I, I, T::Difference>,
    {
        return &self.back - &self.front;
    }

    /// Whether no positions are left.
    pub fn is_empty(&self) -> bool
    where
        P: Equal<I, I>,
    {
        return self.front == self.back;
    }
}

impl<I, P, T, N> Iterator for AdaptorRange<IteratorAdaptor<I, P, T, N>>
where
    T: IteratorTraits,
    P: Dereference<I, T::Reference> + Increment<I> + Equal<I, I>,
{
    type Item = T::Reference;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.increment();
        return Some(item);
    }
}

impl<I, P, T, N> DoubleEndedIterator for AdaptorRange<IteratorAdaptor<I, P, T, N>>
where
    T: IteratorTraits,
    P: Dereference<I, T::Reference> + Increment<I> + Decrement<I> + Equal<I, I>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement();
        return Some(self.back.get());
    }
}

impl<I, P, T, N> FusedIterator for AdaptorRange<IteratorAdaptor<I, P, T, N>>
where
    T: IteratorTraits,
    P: Dereference<I, T::Reference> + Increment<I> + Equal<I, I>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DefaultPolicies;
    use crate::ptr::Ptr;

    type Adapted<'a> = IteratorAdaptor<Ptr<'a, u32>, DefaultPolicies>;

    fn bounds(data: &[u32]) -> (Adapted<'_>, Adapted<'_>) {
        return (IteratorAdaptor::new(Ptr::begin(data)), IteratorAdaptor::new(Ptr::end(data)));
    }

    #[test]
    fn forward_matches_slice() {
        let data = [3, 1, 4, 1, 5];
        let (first, last) = bounds(&data);
        let items: Vec<u32> = first.until(last).copied().collect();
        assert_eq!(items, data.to_vec());
    }

    #[test]
    fn backward_matches_slice() {
        let data = [3, 1, 4, 1, 5];
        let (first, last) = bounds(&data);
        let items: Vec<u32> = first.until(last).rev().copied().collect();
        assert_eq!(items, vec![5, 1, 4, 1, 3]);
    }

    #[test]
    fn meets_in_the_middle() {
        let data = [1, 2, 3, 4];
        let (first, last) = bounds(&data);
        let mut range = first.until(last);
        assert_eq!(range.next(), Some(&1));
        assert_eq!(range.next_back(), Some(&4));
        assert_eq!(range.len(), 2);
        assert_eq!(range.next(), Some(&2));
        assert_eq!(range.next_back(), Some(&3));
        assert!(range.is_empty());
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn empty_range() {
        let data: [u32; 0] = [];
        let (first, last) = bounds(&data);
        let mut range = AdaptorRange::new(first, last);
        assert_eq!(range.len(), 0);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn into_bounds_returns_positions() {
        let data = [7, 8, 9];
        let (first, last) = bounds(&data);
        let mut range = first.until(last);
        range.next();
        let (front, back) = range.into_bounds();
        assert_eq!(front.base().index(), 1);
        assert_eq!(back.base().index(), 3);
    }
}
