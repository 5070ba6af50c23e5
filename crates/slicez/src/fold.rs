/// Counts the elements for which `f` returns `true`.
///
/// `f` sees every element exactly once, front to back.
pub fn count<E, F>(xs: &[E], mut f: F) -> usize
where
    F: FnMut(&E) -> bool,
{
    let mut count = 0;
    for x in xs {
        if f(x) {
            count += 1;
        }
    }
    count
}

/// Left fold of `xs` into `acc`.
///
/// Returns `acc` untouched when `xs` is empty.
pub fn reduce<E, A, F>(xs: &[E], mut acc: A, mut f: F) -> A
where
    F: FnMut(A, &E) -> A,
{
    for x in xs {
        acc = f(acc, x);
    }
    acc
}

/// [`reduce`] starting from `A::default()`.
pub fn reduce_default<E, A, F>(xs: &[E], f: F) -> A
where
    A: Default,
    F: FnMut(A, &E) -> A,
{
    reduce(xs, A::default(), f)
}
