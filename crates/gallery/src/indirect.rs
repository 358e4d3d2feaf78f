//! Look through one level of indirection.
//!
//! The base walks a sequence of owning pointers (`Box`, `Rc`, ...) and the
//! adaptor yields what they point at. Only `dereference` is written here;
//! the other six operations are inherited unchanged.

use std::ops::Deref;

use iterator_adaptors::ExplicitTraits;
use iterator_adaptors::IteratorAdaptor;
use iterator_adaptors::Ptr;
use iterator_adaptors::RandomAccessTag;
use iterator_adaptors::cursor::Cursor;
use iterator_adaptors::inherit_default_policies;
use iterator_adaptors::policy::Dereference;

#[derive(Clone, Copy, Debug, Default)]
pub struct Indirect;

impl<'a, I, Q, R> Dereference<I, &'a R> for Indirect
where
    I: Cursor<Item = &'a Q>,
    Q: Deref<Target = R> + 'a,
    R: ?Sized + 'a,
{
    #[inline]
    fn dereference(base: &I) -> &'a R {
        let outer: &'a Q = base.get();
        return Deref::deref(outer);
    }
}

inherit_default_policies!(Indirect => increment, decrement, advance, distance, equal, less);

/// The base's own description would name the pointer as the value, so the
/// pointee is spelled out.
pub type IndirectTraits<'a, T> = ExplicitTraits<RandomAccessTag, T, isize, *const T, &'a T>;

/// A cursor over a slice of pointers to `T` that reads the `T`s.
pub type IndirectPtr<'a, Q, T> = IteratorAdaptor<Ptr<'a, Q>, Indirect, IndirectTraits<'a, T>>;
