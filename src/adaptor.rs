//! The iterator adaptor.
//!
//! [`IteratorAdaptor`] holds one base cursor and forwards every iterator
//! operation to a policy set. The wrapped value then behaves like a native
//! random-access cursor: it can be dereferenced, stepped, offset, measured
//! and compared, with each behavior decided by the policy.
//!
//! # Type parameters
//!
//! - `I`: the base cursor, owned by value.
//! - `P`: the policy set. Type-level only, never instantiated.
//! - `T`: the trait description. Defaults to `I`, i.e. the cursor's own.
//! - `N`: the canonical non-const cursor of a mutable/const pair. Defaults
//!   to `I`. Two adaptors with the same `P` and `N` are *compatible*: they
//!   compare and measure against each other, and the one whose base is `N`
//!   converts into the other.
//!
//! # Operator map
//!
//! | Operation | Adaptor surface | Policy operation |
//! |-----------|-----------------|------------------|
//! | read | [`get`](IteratorAdaptor::get) | `dereference` |
//! | member access | [`arrow`](IteratorAdaptor::arrow) | `dereference` |
//! | indexed read | [`at`](IteratorAdaptor::at) | `advance`, `dereference` |
//! | step forward | [`increment`](IteratorAdaptor::increment), [`post_increment`](IteratorAdaptor::post_increment) | `increment` |
//! | step back | [`decrement`](IteratorAdaptor::decrement), [`post_decrement`](IteratorAdaptor::post_decrement) | `decrement` |
//! | offset | `+=`, `-=`, `p + n`, `n + p`, `p - n` | `advance` |
//! | distance | `&x - &y` | `distance(y, x)` |
//! | equality | `==`, `!=` | `equal` |
//! | ordering | `<`, `>`, `<=`, `>=` | `less` |
//!
//! Dereference and indexing are methods because `Deref` and `Index` must
//! hand out a borrow, while the reference type here is produced by value.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Deref;
use std::ops::Sub;
use std::ops::SubAssign;

use crate::category::Category;
use crate::category::Traversal;
use crate::error::Operation;
use crate::policy::Advance;
use crate::policy::Decrement;
use crate::policy::Dereference;
use crate::policy::Distance;
use crate::policy::Equal;
use crate::policy::Increment;
use crate::policy::Less;
use crate::profiling;
use crate::range::AdaptorRange;
use crate::traits::IteratorTraits;

/// A base cursor whose behavior is supplied by the policy set `P`.
pub struct IteratorAdaptor<I, P, T = I, N = I> {
    base: I,
    _marker: PhantomData<fn() -> (P, T, N)>,
}

impl<I, P, T, N> IteratorAdaptor<I, P, T, N> {
    /// Wrap a base cursor.
    #[inline]
    pub fn new(base: I) -> IteratorAdaptor<I, P, T, N> {
        return IteratorAdaptor { base, _marker: PhantomData };
    }

    /// Build from a compatible adaptor over the non-const cursor.
    ///
    /// This is the mutable to const conversion of a pair, and more generally
    /// any conversion between adaptors sharing the policy and the non-const
    /// tag. The trait description may differ. There is no conversion the
    /// other way:
    ///
    /// ```compile_fail
    /// use std::cell::Cell;
    /// use iterator_adaptors::pair::{Adaptors, PairConstIterator, PairIterator};
    /// use iterator_adaptors::{CellPtr, ConstCellPtr};
    ///
    /// type Pair<'a> = Adaptors<CellPtr<'a, i32>, ConstCellPtr<'a, i32>>;
    ///
    /// let cells = [Cell::new(1)];
    /// let c = PairConstIterator::<Pair>::new(ConstCellPtr::begin(&cells));
    /// let _m = PairIterator::<Pair>::from_nonconst(&c);
    /// ```
    #[inline]
    pub fn from_nonconst<U>(other: &IteratorAdaptor<N, P, U, N>) -> IteratorAdaptor<I, P, T, N>
    where
        N: Clone,
        I: From<N>,
    {
        return IteratorAdaptor::new(I::from(other.base.clone()));
    }

    /// Assign from a compatible adaptor over the non-const cursor. Same
    /// compatibility rule as [`from_nonconst`](Self::from_nonconst).
    #[inline]
    pub fn assign_nonconst<U>(&mut self, other: &IteratorAdaptor<N, P, U, N>)
    where
        N: Clone,
        I: From<N>,
    {
        self.base = I::from(other.base.clone());
    }

    /// The held base cursor.
    #[inline]
    pub fn base(&self) -> &I {
        return &self.base;
    }

    /// The held base cursor, mutably. Moving it moves the adaptor.
    #[inline]
    pub fn base_mut(&mut self) -> &mut I {
        return &mut self.base;
    }

    /// Unwrap into the base cursor.
    #[inline]
    pub fn into_base(self) -> I {
        return self.base;
    }

    /// The half-open range `[self, last)` as a std iterator.
    pub fn until(self, last: IteratorAdaptor<I, P, T, N>) -> AdaptorRange<IteratorAdaptor<I, P, T, N>> {
        return AdaptorRange::new(self, last);
    }
}

impl<I, P, T> IteratorAdaptor<I, P, T, I> {
    /// Consume a non-const adaptor into a compatible one, typically the
    /// const member of its pair.
    #[inline]
    pub fn convert<C, U>(self) -> IteratorAdaptor<C, P, U, I>
    where
        C: From<I>,
    {
        return IteratorAdaptor::new(C::from(self.base));
    }
}

impl<I, P, T, N> IteratorAdaptor<I, P, T, N>
where
    T: IteratorTraits,
{
    /// The traversal category the trait description claims.
    pub fn category() -> Traversal {
        return <T::Category as Category>::TRAVERSAL;
    }

    /// Dereference: the element at the current position.
    #[inline]
    pub fn get(&self) -> T::Reference
    where
        P: Dereference<I, T::Reference>,
    {
        profiling::record(Operation::Dereference);
        return P::dereference(&self.base);
    }

    /// Member access through the dereferenced temporary.
    ///
    /// The proxy owns the temporary, so the borrow it hands out cannot
    /// outlive it.
    #[inline]
    pub fn arrow(&self) -> PointerProxy<T::Reference>
    where
        P: Dereference<I, T::Reference>,
    {
        return PointerProxy { reference: self.get() };
    }

    /// Indexed access: exactly `(self.clone() + n).get()`.
    #[inline]
    pub fn at(&self, n: T::Difference) -> T::Reference
    where
        I: Clone,
        P: Advance<I, T::Difference> + Dereference<I, T::Reference>,
    {
        return (self.clone() + n).get();
    }

    /// Pre-increment.
    #[inline]
    pub fn increment(&mut self) -> &mut IteratorAdaptor<I, P, T, N>
    where
        P: Increment<I>,
    {
        profiling::record(Operation::Increment);
        P::increment(&mut self.base);
        return self;
    }

    /// Post-increment: returns a full copy of the state before the step.
    #[inline]
    pub fn post_increment(&mut self) -> IteratorAdaptor<I, P, T, N>
    where
        I: Clone,
        P: Increment<I>,
    {
        let snapshot = self.clone();
        self.increment();
        return snapshot;
    }

    /// Pre-decrement.
    #[inline]
    pub fn decrement(&mut self) -> &mut IteratorAdaptor<I, P, T, N>
    where
        P: Decrement<I>,
    {
        profiling::record(Operation::Decrement);
        P::decrement(&mut self.base);
        return self;
    }

    /// Post-decrement: returns a full copy of the state before the step.
    #[inline]
    pub fn post_decrement(&mut self) -> IteratorAdaptor<I, P, T, N>
    where
        I: Clone,
        P: Decrement<I>,
    {
        let snapshot = self.clone();
        self.decrement();
        return snapshot;
    }
}

impl<I, P, T, N> From<I> for IteratorAdaptor<I, P, T, N> {
    fn from(base: I) -> Self {
        return IteratorAdaptor::new(base);
    }
}

impl<I: Clone, P, T, N> Clone for IteratorAdaptor<I, P, T, N> {
    fn clone(&self) -> Self {
        return IteratorAdaptor::new(self.base.clone());
    }
}

impl<I: Copy, P, T, N> Copy for IteratorAdaptor<I, P, T, N> {}

impl<I: fmt::Debug, P, T, N> fmt::Debug for IteratorAdaptor<I, P, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_tuple("IteratorAdaptor").field(&self.base).finish();
    }
}

// =============================================================================
// Offset arithmetic
// =============================================================================

impl<I, P, T, N> AddAssign<T::Difference> for IteratorAdaptor<I, P, T, N>
where
    T: IteratorTraits,
    P: Advance<I, T::Difference>,
{
    #[inline]
    fn add_assign(&mut self, n: T::Difference) {
        profiling::record(Operation::Advance);
        P::advance(&mut self.base, n);
    }
}

/// Advances by `-n`. Negating `T::Difference::MIN` overflows, which panics
/// in debug builds; this is the one failure the adaptor adds itself.
impl<I, P, T, N> SubAssign<T::Difference> for IteratorAdaptor<I, P, T, N>
where
    T: IteratorTraits,
    P: Advance<I, T::Difference>,
{
    #[inline]
    fn sub_assign(&mut self, n: T::Difference) {
        profiling::record(Operation::Advance);
        P::advance(&mut self.base, -n);
    }
}

impl<I, P, T, N> Add<T::Difference> for IteratorAdaptor<I, P, T, N>
where
    T: IteratorTraits,
    P: Advance<I, T::Difference>,
{
    type Output = IteratorAdaptor<I, P, T, N>;

    #[inline]
    fn add(mut self, n: T::Difference) -> Self::Output {
        self += n;
        return self;
    }
}

/// Same overflow rule as `-=`.
impl<I, P, T, N> Sub<T::Difference> for IteratorAdaptor<I, P, T, N>
where
    T: IteratorTraits,
    P: Advance<I, T::Difference>,
{
    type Output = IteratorAdaptor<I, P, T, N>;

    #[inline]
    fn sub(mut self, n: T::Difference) -> Self::Output {
        self -= n;
        return self;
    }
}

/// `n + p` for the primitive signed difference types.
macro_rules! offset_plus_adaptor {
    ($($d:ty),+) => {
        $(
            impl<I, P, T, N> Add<IteratorAdaptor<I, P, T, N>> for $d
            where
                T: IteratorTraits<Difference = $d>,
                P: Advance<I, $d>,
            {
                type Output = IteratorAdaptor<I, P, T, N>;

                #[inline]
                fn add(self, p: IteratorAdaptor<I, P, T, N>) -> Self::Output {
                    return p + self;
                }
            }
        )+
    };
}

offset_plus_adaptor!(isize, i64, i32, i16, i8);

/// `x - y`: how many increments take `y` to `x`.
impl<'a, 'b, I1, I2, P, T1, T2, N> Sub<&'b IteratorAdaptor<I2, P, T2, N>> for &'a IteratorAdaptor<I1, P, T1, N>
where
    T1: IteratorTraits,
    P: Distance<I2, I1, T1::Difference>,
{
    type Output = T1::Difference;

    #[inline]
    fn sub(self, y: &'b IteratorAdaptor<I2, P, T2, N>) -> T1::Difference {
        profiling::record(Operation::Distance);
        return P::distance(&y.base, &self.base);
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<I1, I2, P, T1, T2, N> PartialEq<IteratorAdaptor<I2, P, T2, N>> for IteratorAdaptor<I1, P, T1, N>
where
    P: Equal<I1, I2>,
{
    #[inline]
    fn eq(&self, y: &IteratorAdaptor<I2, P, T2, N>) -> bool {
        profiling::record(Operation::Equal);
        return P::equal(&self.base, &y.base);
    }
}

impl<I, P, T, N> Eq for IteratorAdaptor<I, P, T, N> where P: Equal<I, I> {}

/// All four relations come from the single `less` primitive.
impl<I1, I2, P, T1, T2, N> PartialOrd<IteratorAdaptor<I2, P, T2, N>> for IteratorAdaptor<I1, P, T1, N>
where
    P: Equal<I1, I2> + Less<I1, I2> + Less<I2, I1>,
{
    #[inline]
    fn partial_cmp(&self, y: &IteratorAdaptor<I2, P, T2, N>) -> Option<Ordering> {
        if self.lt(y) {
            return Some(Ordering::Less);
        }
        if self.gt(y) {
            return Some(Ordering::Greater);
        }
        if self.eq(y) {
            return Some(Ordering::Equal);
        }
        // Neither precedes the other, yet they differ: `less` is partial here.
        return None;
    }

    #[inline]
    fn lt(&self, y: &IteratorAdaptor<I2, P, T2, N>) -> bool {
        profiling::record(Operation::Less);
        return <P as Less<I1, I2>>::less(&self.base, &y.base);
    }

    #[inline]
    fn gt(&self, y: &IteratorAdaptor<I2, P, T2, N>) -> bool {
        profiling::record(Operation::Less);
        return <P as Less<I2, I1>>::less(&y.base, &self.base);
    }

    #[inline]
    fn le(&self, y: &IteratorAdaptor<I2, P, T2, N>) -> bool {
        profiling::record(Operation::Less);
        return !<P as Less<I2, I1>>::less(&y.base, &self.base);
    }

    #[inline]
    fn ge(&self, y: &IteratorAdaptor<I2, P, T2, N>) -> bool {
        profiling::record(Operation::Less);
        return !<P as Less<I1, I2>>::less(&self.base, &y.base);
    }
}

impl<I, P, T, N> Ord for IteratorAdaptor<I, P, T, N>
where
    P: Equal<I, I> + Less<I, I>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt(other) {
            return Ordering::Less;
        }
        if self.gt(other) {
            return Ordering::Greater;
        }
        return Ordering::Equal;
    }
}

// =============================================================================
// PointerProxy
// =============================================================================

/// Keeps a dereferenced temporary alive and exposes it through `Deref`, so
/// members of a by-value reference can be reached with method syntax.
pub struct PointerProxy<R> {
    reference: R,
}

impl<R> PointerProxy<R> {
    /// Give up the proxy and keep the temporary.
    pub fn into_inner(self) -> R {
        return self.reference;
    }
}

impl<R> Deref for PointerProxy<R> {
    type Target = R;

    fn deref(&self) -> &R {
        return &self.reference;
    }
}

impl<R: fmt::Debug> fmt::Debug for PointerProxy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_tuple("PointerProxy").field(&self.reference).finish();
    }
}
