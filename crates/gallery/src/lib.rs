//! Educational policy sets built on `iterator_adaptors`.
//!
//! Each module is one small policy set showing a different way to use the
//! policy contract. None of them is needed by the core crate; they exist to
//! compare approaches and to exercise the conformance suite.
//!
//! # Policy Sets
//!
//! | Policy | Base | Overrides | Shows |
//! |--------|------|-----------|-------|
//! | `Reverse` | any bidirectional cursor | everything but `equal` | mirrored arithmetic and ordering |
//! | `Indirect` | cursor over pointers | `dereference` | inheriting six of seven operations |
//! | `Counting` | bare `isize` | everything | a base with no cursor traits and an explicit description |
//! | `ForwardOnly` | any cursor | `decrement`, `advance`, `distance` | declining operations at runtime |
//!
//! # Example
//!
//! ```
//! use gallery::reverse::Reverse;
//! use iterator_adaptors::IteratorAdaptor;
//! use iterator_adaptors::Ptr;
//!
//! let data = [1, 2, 3];
//! let first: IteratorAdaptor<Ptr<i32>, Reverse> = IteratorAdaptor::new(Ptr::end(&data));
//! let last = IteratorAdaptor::new(Ptr::begin(&data));
//!
//! let backwards: Vec<i32> = first.until(last).copied().collect();
//! assert_eq!(backwards, [3, 2, 1]);
//! ```

pub mod conformance;
pub mod counting;
pub mod forward_only;
pub mod indirect;
pub mod reverse;

use iterator_adaptors::policy::Advance;
use iterator_adaptors::policy::Decrement;
use iterator_adaptors::policy::Dereference;
use iterator_adaptors::policy::Distance;
use iterator_adaptors::policy::Equal;
use iterator_adaptors::policy::Increment;
use iterator_adaptors::policy::Less;

/// Every operation a random-access adaptor over `I` needs, with reference
/// type `R` and difference type `D`.
pub trait RandomAccessPolicies<I, R, D>:
    Dereference<I, R> + Increment<I> + Decrement<I> + Advance<I, D> + Distance<I, I, D> + Equal<I, I> + Less<I, I>
{
}

impl<P, I, R, D> RandomAccessPolicies<I, R, D> for P where
    P: Dereference<I, R> + Increment<I> + Decrement<I> + Advance<I, D> + Distance<I, I, D> + Equal<I, I> + Less<I, I>
{
}
