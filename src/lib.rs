//! Iterator adaptors - build new cursors by swapping out behaviors of an
//! existing one.
//!
//! An [`IteratorAdaptor`] wraps a base cursor and routes every iterator
//! operation (dereference, step, offset, distance, equality, ordering)
//! through a *policy set*: a zero-sized type implementing a few pure
//! functions. Write the handful of operations that differ and the adaptor
//! supplies the whole operator suite around them.
//!
//! # Quick Start
//!
//! ```
//! use iterator_adaptors::DefaultPolicies;
//! use iterator_adaptors::IteratorAdaptor;
//! use iterator_adaptors::Ptr;
//!
//! let data = [10, 20, 30];
//! let p: IteratorAdaptor<Ptr<i32>, DefaultPolicies> = IteratorAdaptor::new(Ptr::begin(&data));
//!
//! assert_eq!(*p.get(), 10);
//! assert_eq!(*(p + 2).get(), 30);
//! assert_eq!(&(p + 2) - &p, 2);
//! assert!(p < p + 1);
//! assert_eq!(*p.at(1), 20);
//!
//! let end = IteratorAdaptor::new(Ptr::end(&data));
//! let all: Vec<i32> = p.until(end).copied().collect();
//! assert_eq!(all, [10, 20, 30]);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`adaptor`] | `IteratorAdaptor` and its operators |
//! | [`policy`] | the seven policy operations and `DefaultPolicies` |
//! | [`pair`] | mutable/const pair generator |
//! | [`traits`] | trait descriptions |
//! | [`category`] | traversal category markers |
//! | [`cursor`] | native cursor operators the default policy forwards to |
//! | [`ptr`] | slice cursors standing in for raw pointers |
//! | [`range`] | `[first, last)` as a std iterator |
//! | [`error`] | the unsupported-operation failure |
//! | [`profiling`] | dispatch counters (feature `profiling`) |

pub mod adaptor;
pub mod category;
pub mod cursor;
pub mod error;
pub mod pair;
pub mod policy;
pub mod profiling;
pub mod ptr;
pub mod range;
pub mod traits;

pub use adaptor::IteratorAdaptor;
pub use adaptor::PointerProxy;
pub use category::BidirectionalTag;
pub use category::ForwardTag;
pub use category::RandomAccessTag;
pub use category::Traversal;
pub use error::Operation;
pub use error::PolicyError;
pub use pair::AdaptorPair;
pub use pair::Adaptors;
pub use policy::DefaultPolicies;
pub use ptr::CellPtr;
pub use ptr::ConstCellPtr;
pub use ptr::Ptr;
pub use range::AdaptorRange;
pub use traits::ExplicitTraits;
pub use traits::IteratorTraits;
