/// Keeps the elements for which `f` returns `true`, in their original order.
pub fn filter<E, F>(xs: &[E], mut f: F) -> Vec<E>
where
    E: Clone,
    F: FnMut(&E) -> bool,
{
    let mut out = Vec::new();
    for x in xs {
        if f(x) {
            out.push(x.clone());
        }
    }
    out
}

/// Applies `f` to every element, keeping the element type.
pub fn map<E, F>(xs: &[E], f: F) -> Vec<E>
where
    F: FnMut(&E) -> E,
{
    remap(xs, f)
}

/// Applies `f` to every element, collecting into any container of `T`.
///
/// ```
/// let strings: Vec<String> = slicez::remap(&[1, 2, 3], |x| x.to_string());
/// assert_eq!(strings, ["1", "2", "3"]);
/// ```
pub fn remap<E, T, C, F>(xs: &[E], f: F) -> C
where
    C: FromIterator<T>,
    F: FnMut(&E) -> T,
{
    xs.iter().map(f).collect()
}

/// Concatenates the inner sequences, one level deep.
pub fn flatten<E, S>(xss: &[S]) -> Vec<E>
where
    E: Clone,
    S: AsRef<[E]>,
{
    let total = xss.iter().map(|xs| xs.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for xs in xss {
        out.extend_from_slice(xs.as_ref());
    }
    out
}
