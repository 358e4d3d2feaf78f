//! Reverse traversal.
//!
//! The base sits one position *after* the element it denotes, so the end of
//! a slice is the first reversed position and the beginning is the last.
//! Every operation is the mirror of the default:
//!
//! - dereference reads the element before the base
//! - increment steps back, decrement steps forward
//! - advance negates its offset
//! - distance and ordering swap their operands
//!
//! Equality is unchanged and inherited.

use std::ops::Neg;

use iterator_adaptors::cursor::BidirectionalCursor;
use iterator_adaptors::cursor::Cursor;
use iterator_adaptors::cursor::OffsetFrom;
use iterator_adaptors::cursor::RandomAccessCursor;
use iterator_adaptors::inherit_default_policies;
use iterator_adaptors::policy::Advance;
use iterator_adaptors::policy::Decrement;
use iterator_adaptors::policy::Dereference;
use iterator_adaptors::policy::Distance;
use iterator_adaptors::policy::Increment;
use iterator_adaptors::policy::Less;

/// Walk a bidirectional cursor backwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

impl<I, R> Dereference<I, R> for Reverse
where
    I: BidirectionalCursor + Clone,
    I::Item: Into<R>,
{
    fn dereference(base: &I) -> R {
        let mut prev = base.clone();
        prev.step_back();
        return prev.get().into();
    }
}

impl<I: BidirectionalCursor> Increment<I> for Reverse {
    fn increment(base: &mut I) {
        base.step_back();
    }
}

impl<I: Cursor> Decrement<I> for Reverse {
    fn decrement(base: &mut I) {
        base.step();
    }
}

impl<I, D> Advance<I, D> for Reverse
where
    I: RandomAccessCursor,
    D: Neg<Output = D> + Into<I::Difference>,
{
    fn advance(base: &mut I, n: D) {
        base.jump((-n).into());
    }
}

// Reversed, `y` is ahead of `x` by however far `x` is ahead natively.
impl<I, J, D> Distance<I, J, D> for Reverse
where
    I: OffsetFrom<J>,
    I::Difference: Into<D>,
{
    fn distance(x: &I, y: &J) -> D {
        return x.offset_from(y).into();
    }
}

impl<I, J> Less<I, J> for Reverse
where
    J: PartialOrd<I>,
{
    fn less(x: &I, y: &J) -> bool {
        return y < x;
    }
}

inherit_default_policies!(Reverse => equal);

#[cfg(test)]
mod tests {
    use super::*;
    use iterator_adaptors::IteratorAdaptor;
    use iterator_adaptors::Ptr;

    type Rev<'a> = IteratorAdaptor<Ptr<'a, char>, Reverse>;

    fn rbegin(data: &[char]) -> Rev<'_> {
        return IteratorAdaptor::new(Ptr::end(data));
    }

    fn rend(data: &[char]) -> Rev<'_> {
        return IteratorAdaptor::new(Ptr::begin(data));
    }

    #[test]
    fn reads_backwards() {
        let data = ['a', 'b', 'c', 'd'];
        let p = rbegin(&data);
        assert_eq!(*p.get(), 'd');
        assert_eq!(*p.at(1), 'c');
        assert_eq!(*(p + 3).get(), 'a');
    }

    #[test]
    fn mirrored_distance_and_order() {
        let data = ['a', 'b', 'c', 'd'];
        let first = rbegin(&data);
        let last = rend(&data);
        assert_eq!(&last - &first, 4);
        assert_eq!(&first - &last, -4);
        assert!(first < last);
        assert!(first + 1 > first);
    }

    #[test]
    fn decrement_moves_toward_end() {
        let data = ['a', 'b', 'c'];
        let mut p = rend(&data);
        p.decrement();
        assert_eq!(*p.get(), 'a');
        p -= 1;
        assert_eq!(*p.get(), 'b');
    }

    #[test]
    fn range_collects_reversed() {
        let data = ['x', 'y', 'z'];
        let collected: String = rbegin(&data).until(rend(&data)).collect();
        assert_eq!(collected, "zyx");
        let twice: String = rbegin(&data).until(rend(&data)).rev().collect();
        assert_eq!(twice, "xyz");
    }
}
