//! Slice cursors: the crate's stand-in for raw pointers.
//!
//! Each cursor is a borrowed slice plus an index. The index may sit anywhere
//! in `0..=len`; `len` is the one-past-the-end position. Moving outside that
//! range panics, and so does dereferencing the end position, through normal
//! slice indexing.
//!
//! | Cursor | Over | Dereferences to | Role |
//! |--------|------|-----------------|------|
//! | `Ptr<'a, T>` | `&'a [T]` | `&'a T` | const pointer |
//! | `CellPtr<'a, T>` | `&'a [Cell<T>]` | `&'a Cell<T>` | mutable pointer |
//! | `ConstCellPtr<'a, T>` | `&'a [Cell<T>]` | `T` (copy) | const view of `CellPtr` |
//!
//! A `CellPtr` converts into a `ConstCellPtr` over the same cells; there is
//! no conversion back. The two compare, order and measure against each
//! other. Comparing cursors over different slices is a caller error, caught
//! only by a debug assertion.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use crate::category::RandomAccessTag;
use crate::cursor::BidirectionalCursor;
use crate::cursor::Cursor;
use crate::cursor::OffsetFrom;
use crate::cursor::RandomAccessCursor;
use crate::traits::IteratorTraits;

/// Apply a signed move to `index`, keeping it inside `0..=len`.
#[inline]
#[track_caller]
fn moved(index: usize, len: usize, n: isize) -> usize {
    return match index.checked_add_signed(n) {
        Some(next) if next <= len => next,
        _ => panic!("cursor moved outside 0..={len} (from {index} by {n})"),
    };
}

/// Check an absolute position against `0..=len`.
#[inline]
#[track_caller]
fn positioned(index: usize, len: usize) -> usize {
    if index > len {
        panic!("cursor index {index} outside 0..={len}");
    }
    return index;
}

/// `to - from` as a signed offset. Only slices of zero-sized elements can be
/// long enough for this not to fit.
#[inline]
#[track_caller]
fn signed_offset(to: usize, from: usize) -> isize {
    let offset = if to >= from {
        isize::try_from(to - from)
    } else {
        isize::try_from(from - to).map(|d| -d)
    };
    return match offset {
        Ok(d) => d,
        Err(_) => panic!("offset from {from} to {to} does not fit in isize"),
    };
}

// =============================================================================
// Ptr
// =============================================================================

/// A read-only position in a slice.
pub struct Ptr<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> Ptr<'a, T> {
    /// Position of the first element.
    pub fn begin(slice: &'a [T]) -> Ptr<'a, T> {
        return Ptr { slice, index: 0 };
    }

    /// The one-past-the-end position.
    pub fn end(slice: &'a [T]) -> Ptr<'a, T> {
        return Ptr { slice, index: slice.len() };
    }

    /// Position `index`; panics if `index > slice.len()`.
    #[track_caller]
    pub fn at(slice: &'a [T], index: usize) -> Ptr<'a, T> {
        return Ptr { slice, index: positioned(index, slice.len()) };
    }

    /// Current index.
    #[inline]
    pub fn index(&self) -> usize {
        return self.index;
    }

    /// The slice this cursor walks.
    pub fn slice(&self) -> &'a [T] {
        return self.slice;
    }
}

impl<T> Clone for Ptr<'_, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for Ptr<'_, T> {}

impl<T> fmt::Debug for Ptr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Ptr({}/{})", self.index, self.slice.len());
    }
}

impl<'a, T> Cursor for Ptr<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        return &self.slice[self.index];
    }

    #[inline]
    fn step(&mut self) {
        self.index = moved(self.index, self.slice.len(), 1);
    }
}

impl<T> BidirectionalCursor for Ptr<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.index = moved(self.index, self.slice.len(), -1);
    }
}

impl<T> RandomAccessCursor for Ptr<'_, T> {
    type Difference = isize;

    #[inline]
    fn jump(&mut self, n: isize) {
        self.index = moved(self.index, self.slice.len(), n);
    }
}

impl<T> OffsetFrom for Ptr<'_, T> {
    type Difference = isize;

    #[inline]
    #[track_caller]
    fn offset_from(&self, origin: &Self) -> isize {
        debug_assert!(ptr::eq(self.slice, origin.slice), "cursors over different slices");
        return signed_offset(self.index, origin.index);
    }
}

impl<T> PartialEq for Ptr<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(ptr::eq(self.slice, other.slice), "cursors over different slices");
        return self.index == other.index;
    }
}

impl<T> Eq for Ptr<'_, T> {}

impl<T> PartialOrd for Ptr<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl<T> Ord for Ptr<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(ptr::eq(self.slice, other.slice), "cursors over different slices");
        return self.index.cmp(&other.index);
    }
}

impl<'a, T> IteratorTraits for Ptr<'a, T> {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
}

// =============================================================================
// CellPtr / ConstCellPtr
// =============================================================================

/// A writable position in a slice of cells.
pub struct CellPtr<'a, T> {
    cells: &'a [Cell<T>],
    index: usize,
}

/// A read-only position in a slice of cells. Dereferences to a copy.
pub struct ConstCellPtr<'a, T> {
    cells: &'a [Cell<T>],
    index: usize,
}

impl<'a, T> CellPtr<'a, T> {
    /// Position of the first cell.
    pub fn begin(cells: &'a [Cell<T>]) -> CellPtr<'a, T> {
        return CellPtr { cells, index: 0 };
    }

    /// The one-past-the-end position.
    pub fn end(cells: &'a [Cell<T>]) -> CellPtr<'a, T> {
        return CellPtr { cells, index: cells.len() };
    }

    /// Position `index`; panics if `index > cells.len()`.
    #[track_caller]
    pub fn at(cells: &'a [Cell<T>], index: usize) -> CellPtr<'a, T> {
        return CellPtr { cells, index: positioned(index, cells.len()) };
    }

    /// Borrow a plain slice as cells and point at its first element.
    pub fn from_mut(slice: &'a mut [T]) -> CellPtr<'a, T> {
        return CellPtr::begin(Cell::from_mut(slice).as_slice_of_cells());
    }

    /// Current index.
    #[inline]
    pub fn index(&self) -> usize {
        return self.index;
    }

    /// The cells this cursor walks.
    pub fn cells(&self) -> &'a [Cell<T>] {
        return self.cells;
    }
}

impl<'a, T> ConstCellPtr<'a, T> {
    /// Position of the first cell.
    pub fn begin(cells: &'a [Cell<T>]) -> ConstCellPtr<'a, T> {
        return ConstCellPtr { cells, index: 0 };
    }

    /// The one-past-the-end position.
    pub fn end(cells: &'a [Cell<T>]) -> ConstCellPtr<'a, T> {
        return ConstCellPtr { cells, index: cells.len() };
    }

    /// Position `index`; panics if `index > cells.len()`.
    #[track_caller]
    pub fn at(cells: &'a [Cell<T>], index: usize) -> ConstCellPtr<'a, T> {
        return ConstCellPtr { cells, index: positioned(index, cells.len()) };
    }

    /// Current index.
    #[inline]
    pub fn index(&self) -> usize {
        return self.index;
    }
}

impl<'a, T> From<CellPtr<'a, T>> for ConstCellPtr<'a, T> {
    fn from(ptr: CellPtr<'a, T>) -> Self {
        return ConstCellPtr { cells: ptr.cells, index: ptr.index };
    }
}

impl<T> Clone for CellPtr<'_, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for CellPtr<'_, T> {}

impl<T> Clone for ConstCellPtr<'_, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for ConstCellPtr<'_, T> {}

impl<T> fmt::Debug for CellPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "CellPtr({}/{})", self.index, self.cells.len());
    }
}

impl<T> fmt::Debug for ConstCellPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "ConstCellPtr({}/{})", self.index, self.cells.len());
    }
}

impl<'a, T> Cursor for CellPtr<'a, T> {
    type Item = &'a Cell<T>;

    #[inline]
    fn get(&self) -> &'a Cell<T> {
        return &self.cells[self.index];
    }

    #[inline]
    fn step(&mut self) {
        self.index = moved(self.index, self.cells.len(), 1);
    }
}

impl<T: Copy> Cursor for ConstCellPtr<'_, T> {
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        return self.cells[self.index].get();
    }

    #[inline]
    fn step(&mut self) {
        self.index = moved(self.index, self.cells.len(), 1);
    }
}

impl<T> BidirectionalCursor for CellPtr<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.index = moved(self.index, self.cells.len(), -1);
    }
}

impl<T: Copy> BidirectionalCursor for ConstCellPtr<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.index = moved(self.index, self.cells.len(), -1);
    }
}

impl<T> RandomAccessCursor for CellPtr<'_, T> {
    type Difference = isize;

    #[inline]
    fn jump(&mut self, n: isize) {
        self.index = moved(self.index, self.cells.len(), n);
    }
}

impl<T: Copy> RandomAccessCursor for ConstCellPtr<'_, T> {
    type Difference = isize;

    #[inline]
    fn jump(&mut self, n: isize) {
        self.index = moved(self.index, self.cells.len(), n);
    }
}

impl<'a, T> IteratorTraits for CellPtr<'a, T> {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const Cell<T>;
    type Reference = &'a Cell<T>;
}

impl<T> IteratorTraits for ConstCellPtr<'_, T> {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

/// Position identity shared by both cell cursors, so the mutable and const
/// forms compare and measure against each other.
trait CellPosition<T> {
    fn cells(&self) -> &[Cell<T>];
    fn position(&self) -> usize;
}

impl<T> CellPosition<T> for CellPtr<'_, T> {
    fn cells(&self) -> &[Cell<T>] {
        return self.cells;
    }

    fn position(&self) -> usize {
        return self.index;
    }
}

impl<T> CellPosition<T> for ConstCellPtr<'_, T> {
    fn cells(&self) -> &[Cell<T>] {
        return self.cells;
    }

    fn position(&self) -> usize {
        return self.index;
    }
}

#[inline]
fn cell_cmp<T>(a: &impl CellPosition<T>, b: &impl CellPosition<T>) -> Ordering {
    debug_assert!(ptr::eq(a.cells(), b.cells()), "cursors over different slices");
    return a.position().cmp(&b.position());
}

macro_rules! cell_relations {
    ($lhs:ident, $rhs:ident) => {
        impl<T> PartialEq<$rhs<'_, T>> for $lhs<'_, T> {
            #[inline]
            fn eq(&self, other: &$rhs<'_, T>) -> bool {
                return cell_cmp(self, other) == Ordering::Equal;
            }
        }

        impl<T> PartialOrd<$rhs<'_, T>> for $lhs<'_, T> {
            #[inline]
            fn partial_cmp(&self, other: &$rhs<'_, T>) -> Option<Ordering> {
                return Some(cell_cmp(self, other));
            }
        }

        impl<T> OffsetFrom<$rhs<'_, T>> for $lhs<'_, T> {
            type Difference = isize;

            #[inline]
            fn offset_from(&self, origin: &$rhs<'_, T>) -> isize {
                debug_assert!(ptr::eq(self.cells, origin.cells), "cursors over different slices");
                return signed_offset(self.index, origin.index);
            }
        }
    };
}

cell_relations!(CellPtr, CellPtr);
cell_relations!(CellPtr, ConstCellPtr);
cell_relations!(ConstCellPtr, CellPtr);
cell_relations!(ConstCellPtr, ConstCellPtr);

impl<T> Eq for CellPtr<'_, T> {}

impl<T> Eq for ConstCellPtr<'_, T> {}
