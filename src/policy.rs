//! The policy contract.
//!
//! A policy set is a zero-sized type that implements some of the seven
//! operation traits below. Every operation is an associated function: a
//! policy has no instance and no state, and it is resolved entirely at
//! compile time. The adaptor names its policy as a type parameter and calls
//! `P::increment(&mut base)` and friends.
//!
//! Each trait is generic over the base cursor types it acts on, and the
//! binary operations over two (possibly different) cursor types, so a
//! mutable cursor can be compared or measured against its const
//! counterpart. Results whose type comes from the trait description
//! (`R` for the reference, `D` for the difference) are inferred from the
//! call site.
//!
//! # Defaults
//!
//! [`DefaultPolicies`] forwards every operation to the cursor's native
//! operator (see [`cursor`](crate::cursor)). A custom policy implements the
//! operations it changes and inherits the rest with
//! [`inherit_default_policies!`](crate::inherit_default_policies):
//!
//! ```
//! use iterator_adaptors::inherit_default_policies;
//! use iterator_adaptors::policy::Dereference;
//! use iterator_adaptors::IteratorAdaptor;
//! use iterator_adaptors::ExplicitTraits;
//! use iterator_adaptors::Ptr;
//! use iterator_adaptors::RandomAccessTag;
//! use iterator_adaptors::cursor::Cursor;
//!
//! struct Squared;
//!
//! impl<'a> Dereference<Ptr<'a, i64>, i64> for Squared {
//!     fn dereference(base: &Ptr<'a, i64>) -> i64 {
//!         let x = *base.get();
//!         return x * x;
//!     }
//! }
//!
//! inherit_default_policies!(Squared => increment, decrement, advance, distance, equal, less);
//!
//! type Desc = ExplicitTraits<RandomAccessTag, i64, isize, *const i64, i64>;
//! let data = [1, 2, 3];
//! let p: IteratorAdaptor<Ptr<i64>, Squared, Desc> = IteratorAdaptor::new(Ptr::begin(&data));
//! assert_eq!(p.at(2), 9);
//! ```
//!
//! # Unsupported operations
//!
//! A policy that cannot offer an operation simply does not implement its
//! trait; adaptor methods needing it then fail to compile. A policy that can
//! only decide at runtime calls [`unsupported`](crate::error::unsupported).

use crate::cursor::BidirectionalCursor;
use crate::cursor::Cursor;
use crate::cursor::OffsetFrom;
use crate::cursor::RandomAccessCursor;

/// Produce the reference for the position `base` holds. Must not move it.
pub trait Dereference<I, R> {
    fn dereference(base: &I) -> R;
}

/// Move `base` one position forward, in place.
pub trait Increment<I> {
    fn increment(base: &mut I);
}

/// Move `base` one position back, in place.
pub trait Decrement<I> {
    fn decrement(base: &mut I);
}

/// Move `base` by `n` positions. `n == 0` must leave it unchanged.
pub trait Advance<I, D> {
    fn advance(base: &mut I, n: D);
}

/// How far `y` is ahead of `x`: the number of increments taking `x` to `y`.
pub trait Distance<I, J, D> {
    fn distance(x: &I, y: &J) -> D;
}

/// Whether two positions are the same.
pub trait Equal<I, J = I> {
    fn equal(x: &I, y: &J) -> bool;
}

/// Whether `x` strictly precedes `y`. The only ordering primitive; the
/// adaptor derives `>`, `<=` and `>=` from it.
pub trait Less<I, J = I> {
    fn less(x: &I, y: &J) -> bool;
}

/// Do what the wrapped cursor would do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultPolicies;

impl<I, R> Dereference<I, R> for DefaultPolicies
where
    I: Cursor,
    I::Item: Into<R>,
{
    #[inline]
    fn dereference(base: &I) -> R {
        return base.get().into();
    }
}

impl<I: Cursor> Increment<I> for DefaultPolicies {
    #[inline]
    fn increment(base: &mut I) {
        base.step();
    }
}

impl<I: BidirectionalCursor> Decrement<I> for DefaultPolicies {
    #[inline]
    fn decrement(base: &mut I) {
        base.step_back();
    }
}

impl<I, D> Advance<I, D> for DefaultPolicies
where
    I: RandomAccessCursor,
    D: Into<I::Difference>,
{
    #[inline]
    fn advance(base: &mut I, n: D) {
        base.jump(n.into());
    }
}

impl<I, J, D> Distance<I, J, D> for DefaultPolicies
where
    J: OffsetFrom<I>,
    J::Difference: Into<D>,
{
    #[inline]
    fn distance(x: &I, y: &J) -> D {
        return y.offset_from(x).into();
    }
}

impl<I, J> Equal<I, J> for DefaultPolicies
where
    I: PartialEq<J>,
{
    #[inline]
    fn equal(x: &I, y: &J) -> bool {
        return x == y;
    }
}

impl<I, J> Less<I, J> for DefaultPolicies
where
    I: PartialOrd<J>,
{
    #[inline]
    fn less(x: &I, y: &J) -> bool {
        return x < y;
    }
}

/// Implement the named operations for a policy type by forwarding to
/// [`DefaultPolicies`].
///
/// ```ignore
/// inherit_default_policies!(MyPolicy => increment, decrement, equal);
/// ```
///
/// Accepted names: `dereference`, `increment`, `decrement`, `advance`,
/// `distance`, `equal`, `less`.
#[macro_export]
macro_rules! inherit_default_policies {
    ($policy:ty => $($op:ident),+ $(,)?) => {
        $( $crate::inherit_default_policies!(@op $policy, $op); )+
    };
    (@op $policy:ty, dereference) => {
        impl<I, R> $crate::policy::Dereference<I, R> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Dereference<I, R>,
        {
            #[inline]
            fn dereference(base: &I) -> R {
                return <$crate::policy::DefaultPolicies as $crate::policy::Dereference<I, R>>::dereference(base);
            }
        }
    };
    (@op $policy:ty, increment) => {
        impl<I> $crate::policy::Increment<I> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Increment<I>,
        {
            #[inline]
            fn increment(base: &mut I) {
                <$crate::policy::DefaultPolicies as $crate::policy::Increment<I>>::increment(base);
            }
        }
    };
    (@op $policy:ty, decrement) => {
        impl<I> $crate::policy::Decrement<I> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Decrement<I>,
        {
            #[inline]
            fn decrement(base: &mut I) {
                <$crate::policy::DefaultPolicies as $crate::policy::Decrement<I>>::decrement(base);
            }
        }
    };
    (@op $policy:ty, advance) => {
        impl<I, D> $crate::policy::Advance<I, D> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Advance<I, D>,
        {
            #[inline]
            fn advance(base: &mut I, n: D) {
                <$crate::policy::DefaultPolicies as $crate::policy::Advance<I, D>>::advance(base, n);
            }
        }
    };
    (@op $policy:ty, distance) => {
        impl<I, J, D> $crate::policy::Distance<I, J, D> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Distance<I, J, D>,
        {
            #[inline]
            fn distance(x: &I, y: &J) -> D {
                return <$crate::policy::DefaultPolicies as $crate::policy::Distance<I, J, D>>::distance(x, y);
            }
        }
    };
    (@op $policy:ty, equal) => {
        impl<I, J> $crate::policy::Equal<I, J> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Equal<I, J>,
        {
            #[inline]
            fn equal(x: &I, y: &J) -> bool {
                return <$crate::policy::DefaultPolicies as $crate::policy::Equal<I, J>>::equal(x, y);
            }
        }
    };
    (@op $policy:ty, less) => {
        impl<I, J> $crate::policy::Less<I, J> for $policy
        where
            $crate::policy::DefaultPolicies: $crate::policy::Less<I, J>,
        {
            #[inline]
            fn less(x: &I, y: &J) -> bool {
                return <$crate::policy::DefaultPolicies as $crate::policy::Less<I, J>>::less(x, y);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ptr::Ptr;

    #[test]
    fn defaults_forward_to_cursor() {
        let data = [10, 20, 30];
        let mut p = Ptr::begin(&data);

        let r: &i32 = DefaultPolicies::dereference(&p);
        assert_eq!(*r, 10);

        <DefaultPolicies as Increment<_>>::increment(&mut p);
        assert_eq!(p.index(), 1);

        <DefaultPolicies as Decrement<_>>::decrement(&mut p);
        assert_eq!(p.index(), 0);

        <DefaultPolicies as Advance<_, isize>>::advance(&mut p, 2);
        assert_eq!(p.index(), 2);
    }

    #[test]
    fn default_distance_is_second_minus_first() {
        let data = [0; 5];
        let a = Ptr::at(&data, 1);
        let b = Ptr::at(&data, 4);
        let d: isize = DefaultPolicies::distance(&a, &b);
        assert_eq!(d, 3);
        let d: isize = DefaultPolicies::distance(&b, &a);
        assert_eq!(d, -3);
    }

    #[test]
    fn default_comparisons() {
        let data = [0; 3];
        let a = Ptr::at(&data, 0);
        let b = Ptr::at(&data, 2);
        assert!(DefaultPolicies::equal(&a, &a));
        assert!(!DefaultPolicies::equal(&a, &b));
        assert!(DefaultPolicies::less(&a, &b));
        assert!(!DefaultPolicies::less(&b, &a));
        assert!(!DefaultPolicies::less(&a, &a));
    }

    struct OnlyEqual;

    crate::inherit_default_policies!(OnlyEqual => equal, increment);

    #[test]
    fn inherited_operations_forward() {
        let data = [1, 2];
        let mut a = Ptr::begin(&data);
        let b = Ptr::at(&data, 1);
        assert!(!OnlyEqual::equal(&a, &b));
        OnlyEqual::increment(&mut a);
        assert!(OnlyEqual::equal(&a, &b));
    }
}
