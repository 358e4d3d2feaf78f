//! A counter posing as a cursor.
//!
//! The base is a bare `isize`. It implements none of the cursor traits, so
//! every operation is written out and the trait description is supplied with
//! [`ExplicitTraits`]. Dereferencing yields the count itself, by value.

use iterator_adaptors::ExplicitTraits;
use iterator_adaptors::IteratorAdaptor;
use iterator_adaptors::RandomAccessTag;
use iterator_adaptors::policy::Advance;
use iterator_adaptors::policy::Decrement;
use iterator_adaptors::policy::Dereference;
use iterator_adaptors::policy::Distance;
use iterator_adaptors::policy::Equal;
use iterator_adaptors::policy::Increment;
use iterator_adaptors::policy::Less;

#[derive(Clone, Copy, Debug, Default)]
pub struct Counting;

pub type CountingTraits = ExplicitTraits<RandomAccessTag, isize, isize, *const isize, isize>;

/// Counts upward from wherever it starts.
pub type Counter = IteratorAdaptor<isize, Counting, CountingTraits>;

pub fn counter(start: isize) -> Counter {
    return IteratorAdaptor::new(start);
}

impl Dereference<isize, isize> for Counting {
    #[inline]
    fn dereference(base: &isize) -> isize {
        return *base;
    }
}

impl Increment<isize> for Counting {
    #[inline]
    fn increment(base: &mut isize) {
        *base += 1;
    }
}

impl Decrement<isize> for Counting {
    #[inline]
    fn decrement(base: &mut isize) {
        *base -= 1;
    }
}

impl Advance<isize, isize> for Counting {
    #[inline]
    fn advance(base: &mut isize, n: isize) {
        *base += n;
    }
}

impl Distance<isize, isize, isize> for Counting {
    #[inline]
    fn distance(x: &isize, y: &isize) -> isize {
        return y - x;
    }
}

impl Equal<isize> for Counting {
    #[inline]
    fn equal(x: &isize, y: &isize) -> bool {
        return x == y;
    }
}

impl Less<isize> for Counting {
    #[inline]
    fn less(x: &isize, y: &isize) -> bool {
        return x < y;
    }
}
