use std::borrow::Cow;
use std::hash::Hash;

/// Method-call form of the slice operations.
///
/// Every method forwards to the free function of the same name. Arrays have
/// an inherent `map`, so call these through a slice (`xs.as_slice().map(..)`)
/// when working with `[E; N]` directly.
pub trait SliceExt<E> {
    fn count<F>(&self, f: F) -> usize
    where
        F: FnMut(&E) -> bool;

    fn unique(&self) -> Vec<E>
    where
        E: Eq + Hash + Clone;

    fn difference<S>(&self, excludes: &[S]) -> Cow<'_, [E]>
    where
        E: Eq + Hash + Clone,
        S: AsRef<[E]>;

    fn filter<F>(&self, f: F) -> Vec<E>
    where
        E: Clone,
        F: FnMut(&E) -> bool;

    fn map<F>(&self, f: F) -> Vec<E>
    where
        F: FnMut(&E) -> E;

    fn remap<T, C, F>(&self, f: F) -> C
    where
        C: FromIterator<T>,
        F: FnMut(&E) -> T;

    fn reduce<A, F>(&self, acc: A, f: F) -> A
    where
        F: FnMut(A, &E) -> A;

    fn reduce_default<A, F>(&self, f: F) -> A
    where
        A: Default,
        F: FnMut(A, &E) -> A;
}

impl<E> SliceExt<E> for [E] {
    #[inline]
    fn count<F>(&self, f: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        crate::count(self, f)
    }

    #[inline]
    fn unique(&self) -> Vec<E>
    where
        E: Eq + Hash + Clone,
    {
        crate::unique(self)
    }

    #[inline]
    fn difference<S>(&self, excludes: &[S]) -> Cow<'_, [E]>
    where
        E: Eq + Hash + Clone,
        S: AsRef<[E]>,
    {
        crate::difference(self, excludes)
    }

    #[inline]
    fn filter<F>(&self, f: F) -> Vec<E>
    where
        E: Clone,
        F: FnMut(&E) -> bool,
    {
        crate::filter(self, f)
    }

    #[inline]
    fn map<F>(&self, f: F) -> Vec<E>
    where
        F: FnMut(&E) -> E,
    {
        crate::map(self, f)
    }

    #[inline]
    fn remap<T, C, F>(&self, f: F) -> C
    where
        C: FromIterator<T>,
        F: FnMut(&E) -> T,
    {
        crate::remap(self, f)
    }

    #[inline]
    fn reduce<A, F>(&self, acc: A, f: F) -> A
    where
        F: FnMut(A, &E) -> A,
    {
        crate::reduce(self, acc, f)
    }

    #[inline]
    fn reduce_default<A, F>(&self, f: F) -> A
    where
        A: Default,
        F: FnMut(A, &E) -> A,
    {
        crate::reduce_default(self, f)
    }
}
