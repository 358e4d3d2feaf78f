//! Generic checks for policy sets.
//!
//! Each check takes the first position of a sequence, its length, and a
//! closure giving the reference expected at each offset. It then walks every
//! position (and, for the random-access checks, every pair of positions)
//! and panics with a message naming the first violated property.
//!
//! Pair checks are quadratic in `len`; keep sequences short.
//!
//! # Checked properties
//!
//! Random access (`check_random_access`):
//!
//! - `(p + n).get()` and `p.at(n)` both yield the `n`th element
//! - incrementing `n` times equals adding `n`; decrementing undoes it
//! - post-increment returns the position before the step
//! - `p + n - n == p`, `n + p == p + n`, and `+=`/`-=` cancel
//! - `&(p + b) - &(p + a) == b - a`
//! - ordering and equality agree with the offsets
//! - the range `[p, p + len)` yields the elements in order, both ways
//!
//! Forward (`check_forward`) keeps only what increment, equality and
//! ordering can observe.

use std::fmt::Debug;

use iterator_adaptors::IteratorAdaptor;
use iterator_adaptors::IteratorTraits;
use iterator_adaptors::policy::Dereference;
use iterator_adaptors::policy::Equal;
use iterator_adaptors::policy::Increment;
use iterator_adaptors::policy::Less;

use crate::RandomAccessPolicies;

/// Run every random-access check over `[first, first + len)`.
pub fn check_random_access<I, P, T, N, F>(first: &IteratorAdaptor<I, P, T, N>, len: isize, expected: F)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    T::Reference: PartialEq + Debug,
    P: RandomAccessPolicies<I, T::Reference, isize>,
    F: Fn(isize) -> T::Reference,
{
    check_dereference(first, len, &expected);
    check_stepping(first, len);
    check_offsets(first, len);
    check_distance(first, len);
    check_ordering(first, len);
    check_range(first, len, &expected);
}

/// Run the checks a forward-only policy set can pass.
pub fn check_forward<I, P, T, N, F>(first: &IteratorAdaptor<I, P, T, N>, len: usize, expected: F)
where
    I: Clone + Debug,
    T: IteratorTraits,
    T::Reference: PartialEq + Debug,
    P: Dereference<I, T::Reference> + Increment<I> + Equal<I, I> + Less<I, I>,
    F: Fn(usize) -> T::Reference,
{
    let mut positions = Vec::with_capacity(len + 1);
    let mut p = first.clone();
    for n in 0..len {
        assert_eq!(p.get(), expected(n), "dereference after {n} increments");
        positions.push(p.clone());
        let before = p.post_increment();
        assert_eq!(before, positions[n], "post-increment snapshot at {n}");
    }
    positions.push(p);

    for (a, x) in positions.iter().enumerate() {
        for (b, y) in positions.iter().enumerate() {
            assert_eq!(x == y, a == b, "equality of positions {a} and {b}");
            assert_eq!(x < y, a < b, "order of positions {a} and {b}");
        }
    }

    let last = positions[len].clone();
    let walked: Vec<T::Reference> = first.clone().until(last).collect();
    let wanted: Vec<T::Reference> = (0..len).map(&expected).collect();
    assert_eq!(walked, wanted, "forward range");
}

fn check_dereference<I, P, T, N, F>(first: &IteratorAdaptor<I, P, T, N>, len: isize, expected: &F)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    T::Reference: PartialEq + Debug,
    P: RandomAccessPolicies<I, T::Reference, isize>,
    F: Fn(isize) -> T::Reference,
{
    for n in 0..len {
        assert_eq!((first.clone() + n).get(), expected(n), "dereference at offset {n}");
        assert_eq!(first.at(n), expected(n), "index {n}");
        assert_eq!(*(first.clone() + n).arrow(), expected(n), "arrow at offset {n}");
    }
}

fn check_stepping<I, P, T, N>(first: &IteratorAdaptor<I, P, T, N>, len: isize)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    P: RandomAccessPolicies<I, T::Reference, isize>,
{
    let mut p = first.clone();
    for n in 0..len {
        assert_eq!(p, first.clone() + n, "{n} increments");
        let before = p.post_increment();
        assert_eq!(before, first.clone() + n, "post-increment snapshot at {n}");
    }
    assert_eq!(p, first.clone() + len, "{len} increments");

    for n in (0..len).rev() {
        let before = p.post_decrement();
        assert_eq!(before, first.clone() + (n + 1), "post-decrement snapshot at {n}");
        assert_eq!(p, first.clone() + n, "decrement back to {n}");
    }
}

fn check_offsets<I, P, T, N>(first: &IteratorAdaptor<I, P, T, N>, len: isize)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    P: RandomAccessPolicies<I, T::Reference, isize>,
{
    for a in 0..=len {
        let p = first.clone() + a;
        assert_eq!(p.clone() + 0, p, "zero offset at {a}");
        for b in 0..=len {
            let d = b - a;
            assert_eq!(p.clone() + d, first.clone() + b, "{a} + {d}");
            assert_eq!(d + p.clone(), p.clone() + d, "{d} + p commutes at {a}");
            assert_eq!(p.clone() + d - d, p, "{a} + {d} - {d}");

            let mut q = p.clone();
            q += d;
            q -= d;
            assert_eq!(q, p, "+= then -= of {d} at {a}");
        }
    }
}

fn check_distance<I, P, T, N>(first: &IteratorAdaptor<I, P, T, N>, len: isize)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    P: RandomAccessPolicies<I, T::Reference, isize>,
{
    for a in 0..=len {
        let x = first.clone() + a;
        for b in 0..=len {
            let y = first.clone() + b;
            assert_eq!(&y - &x, b - a, "distance from {a} to {b}");
            assert_eq!(x.clone() + (&y - &x), y, "x + (y - x) == y for {a}, {b}");
        }
    }
}

fn check_ordering<I, P, T, N>(first: &IteratorAdaptor<I, P, T, N>, len: isize)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    P: RandomAccessPolicies<I, T::Reference, isize>,
{
    for a in 0..=len {
        let x = first.clone() + a;
        for b in 0..=len {
            let y = first.clone() + b;
            assert_eq!(x == y, a == b, "{a} == {b}");
            assert_eq!(x != y, a != b, "{a} != {b}");
            assert_eq!(x < y, a < b, "{a} < {b}");
            assert_eq!(x > y, a > b, "{a} > {b}");
            assert_eq!(x <= y, a <= b, "{a} <= {b}");
            assert_eq!(x >= y, a >= b, "{a} >= {b}");
            assert_eq!(x.cmp(&y), a.cmp(&b), "cmp({a}, {b})");
        }
    }
}

fn check_range<I, P, T, N, F>(first: &IteratorAdaptor<I, P, T, N>, len: isize, expected: &F)
where
    I: Clone + Debug,
    T: IteratorTraits<Difference = isize>,
    T::Reference: PartialEq + Debug,
    P: RandomAccessPolicies<I, T::Reference, isize>,
    F: Fn(isize) -> T::Reference,
{
    let range = first.clone().until(first.clone() + len);
    assert_eq!(range.len(), len, "range length");

    let forward: Vec<T::Reference> = range.clone().collect();
    let wanted: Vec<T::Reference> = (0..len).map(expected).collect();
    assert_eq!(forward, wanted, "forward range");

    let backward: Vec<T::Reference> = range.rev().collect();
    let wanted: Vec<T::Reference> = (0..len).rev().map(expected).collect();
    assert_eq!(backward, wanted, "backward range");
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterator_adaptors::DefaultPolicies;
    use iterator_adaptors::Ptr;

    #[test]
    fn default_policies_pass() {
        let data = [2, 7, 1, 8, 2, 8];
        let first: IteratorAdaptor<Ptr<i32>, DefaultPolicies> = IteratorAdaptor::new(Ptr::begin(&data));
        check_random_access(&first, 6, |n| &data[n as usize]);
        check_forward(&first, 6, |n| &data[n]);
    }

    #[test]
    fn empty_sequence_passes() {
        let data: [i32; 0] = [];
        let first: IteratorAdaptor<Ptr<i32>, DefaultPolicies> = IteratorAdaptor::new(Ptr::begin(&data));
        check_random_access(&first, 0, |n| &data[n as usize]);
    }

    #[test]
    #[should_panic(expected = "dereference at offset 1")]
    fn wrong_expectation_is_reported() {
        let data = [1, 2, 3];
        let first: IteratorAdaptor<Ptr<i32>, DefaultPolicies> = IteratorAdaptor::new(Ptr::begin(&data));
        check_random_access(&first, 3, |_| &data[0]);
    }
}
