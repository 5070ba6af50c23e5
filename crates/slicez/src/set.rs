use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;

/// Returns the distinct values of `xs` in first-occurrence order.
pub fn unique<E>(xs: &[E]) -> Vec<E>
where
    E: Eq + Hash + Clone,
{
    if xs.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::with_capacity(xs.len());
    let mut out = Vec::new();
    for x in xs {
        if seen.insert(x) {
            out.push(x.clone());
        }
    }
    out
}

/// Returns the elements of `xs` that appear in none of `excludes`.
///
/// Order and duplicates of `xs` are kept. With no exclusion sequences the
/// input is returned borrowed, without copying.
pub fn difference<'a, E, S>(xs: &'a [E], excludes: &[S]) -> Cow<'a, [E]>
where
    E: Eq + Hash + Clone,
    S: AsRef<[E]>,
{
    if xs.is_empty() || excludes.is_empty() {
        return Cow::Borrowed(xs);
    }

    let excluded: HashSet<&E> = excludes.iter().flat_map(|ex| ex.as_ref()).collect();
    xs.iter()
        .filter(|x| !excluded.contains(x))
        .cloned()
        .collect::<Vec<_>>()
        .into()
}
