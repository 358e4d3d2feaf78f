//! Property-based tests for the adaptor's operator suite.

use std::cell::Cell;

use iterator_adaptors::CellPtr;
use iterator_adaptors::ConstCellPtr;
use iterator_adaptors::DefaultPolicies;
use iterator_adaptors::IteratorAdaptor;
use iterator_adaptors::Ptr;
use iterator_adaptors::cursor::Cursor;
use iterator_adaptors::pair::Adaptors;
use iterator_adaptors::pair::PairConstIterator;
use iterator_adaptors::pair::PairIterator;
use proptest::prelude::*;

type Adapted<'a> = IteratorAdaptor<Ptr<'a, i32>, DefaultPolicies>;
type CellPair<'a> = Adaptors<CellPtr<'a, i32>, ConstCellPtr<'a, i32>>;

// =============================================================================
// Test helpers
// =============================================================================

/// A non-empty slice and two positions in `0..=len`.
fn slice_and_positions() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    return prop::collection::vec(any::<i32>(), 1..64).prop_flat_map(|data| {
        let len = data.len();
        return (Just(data), 0..=len, 0..=len);
    });
}

fn at(data: &[i32], index: usize) -> Adapted<'_> {
    return IteratorAdaptor::new(Ptr::at(data, index));
}

// =============================================================================
// The worked example
// =============================================================================

#[test]
fn worked_example() {
    let data = [10, 20, 30];
    let p = at(&data, 0);

    assert_eq!(*p.get(), 10);
    assert_eq!(*(p + 2).get(), 30);
    assert_eq!(&(p + 2) - &p, 2);
    assert!(p == p);
    assert!(p < p + 1);
    assert_eq!(*p.at(1), 20);
}

// =============================================================================
// Arithmetic properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Wrapping changes nothing the default policy can observe.
    #[test]
    fn dereference_matches_cursor((data, x, _) in slice_and_positions()) {
        prop_assume!(x < data.len());
        let cursor = Ptr::at(&data, x);
        let p: Adapted = IteratorAdaptor::new(cursor);
        prop_assert_eq!(p.get(), cursor.get());
        prop_assert_eq!(*p.get(), data[x]);
    }

    /// (p + n) - n == p
    #[test]
    fn offset_then_back((data, x, y) in slice_and_positions()) {
        let p = at(&data, x);
        let n = y as isize - x as isize;
        prop_assert_eq!((p + n) - n, p);
        prop_assert_eq!(p + 0, p);
    }

    /// p + n == n + p
    #[test]
    fn offset_commutes((data, x, y) in slice_and_positions()) {
        let p = at(&data, x);
        let n = y as isize - x as isize;
        prop_assert_eq!(p + n, n + p);
    }

    /// x - y is the number of increments taking y to x.
    #[test]
    fn distance_counts_increments((data, x, y) in slice_and_positions()) {
        let px = at(&data, x);
        let py = at(&data, y);
        prop_assert_eq!(&px - &py, x as isize - y as isize);

        let (low, high) = if x <= y { (px, py) } else { (py, px) };
        let mut steps = 0isize;
        let mut walker = low;
        while walker != high {
            walker.increment();
            steps += 1;
        }
        prop_assert_eq!(steps, &high - &low);
    }

    /// Post-increment hands back the old position and moves by one.
    #[test]
    fn post_increment_returns_prior((data, x, _) in slice_and_positions()) {
        prop_assume!(x < data.len());
        let mut p = at(&data, x);
        let old = p.post_increment();
        prop_assert_eq!(old, at(&data, x));
        prop_assert_eq!(p, old + 1);

        let newer = p.post_decrement();
        prop_assert_eq!(newer, old + 1);
        prop_assert_eq!(p, old);
    }

    /// p[n] == *(p + n)
    #[test]
    fn index_is_offset_then_dereference((data, x, y) in slice_and_positions()) {
        prop_assume!(y < data.len());
        let p = at(&data, x);
        let n = y as isize - x as isize;
        prop_assert_eq!(p.at(n), (p + n).get());
    }
}

// =============================================================================
// Comparison properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Exactly one of x < y, x == y, y < x.
    #[test]
    fn trichotomy((data, x, y) in slice_and_positions()) {
        let px = at(&data, x);
        let py = at(&data, y);
        let held = [px < py, px == py, py < px].iter().filter(|b| **b).count();
        prop_assert_eq!(held, 1);
    }

    /// <= and >= are the negations of the strict relations.
    #[test]
    fn derived_relations((data, x, y) in slice_and_positions()) {
        let px = at(&data, x);
        let py = at(&data, y);
        prop_assert_eq!(px <= py, !(py < px));
        prop_assert_eq!(px >= py, !(px < py));
        prop_assert_eq!(px > py, py < px);
        prop_assert_eq!(px != py, !(px == py));
        prop_assert_eq!(px.cmp(&py), x.cmp(&y));
    }
}

// =============================================================================
// Ranges and pairs
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An adapted range yields what the slice iterator yields, both ways.
    #[test]
    fn range_matches_slice((data, x, y) in slice_and_positions()) {
        let (low, high) = (x.min(y), x.max(y));
        let range = at(&data, low).until(at(&data, high));
        prop_assert_eq!(range.len(), (high - low) as isize);

        let forward: Vec<i32> = range.copied().collect();
        prop_assert_eq!(&forward[..], &data[low..high]);

        let backward: Vec<i32> = range.rev().copied().collect();
        let expected: Vec<i32> = data[low..high].iter().rev().copied().collect();
        prop_assert_eq!(backward, expected);
    }

    /// The const member reads exactly what the mutable member points at,
    /// including writes made through the mutable one.
    #[test]
    fn const_conversion_reads_same_element(
        values in prop::collection::vec(any::<i32>(), 1..32),
        index in any::<prop::sample::Index>(),
        written in any::<i32>(),
    ) {
        let cells: Vec<Cell<i32>> = values.iter().copied().map(Cell::new).collect();
        let i = index.index(cells.len());

        let m = PairIterator::<CellPair>::new(CellPtr::at(&cells, i));
        let c = PairConstIterator::<CellPair>::from_nonconst(&m);
        prop_assert_eq!(c.get(), values[i]);
        prop_assert!(c == m && m == c);
        prop_assert_eq!(&c - &m, 0);

        m.get().set(written);
        prop_assert_eq!(c.get(), written);
    }
}
