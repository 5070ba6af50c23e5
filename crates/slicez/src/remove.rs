use thiserror::Error;

/// Returned by [`try_remove`] when the index does not address an element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("index {index} out of bounds for sequence of length {len}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// Removes the element at `i`, shifting everything after it one slot left.
///
/// The input's storage is reused: the returned vector is `xs` itself, one
/// element shorter. An empty input is handed back as-is without looking at
/// `i`.
///
/// # Panics
///
/// Panics if `xs` is non-empty and `i >= xs.len()`.
pub fn remove<E>(xs: Vec<E>, i: usize) -> Vec<E> {
    match try_remove(xs, i) {
        Ok(xs) => xs,
        Err(err) => panic!("{err}"),
    }
}

/// Checked form of [`remove`].
pub fn try_remove<E>(mut xs: Vec<E>, i: usize) -> Result<Vec<E>, IndexOutOfBounds> {
    if xs.is_empty() {
        return Ok(xs);
    }
    check_index(i, xs.len())?;

    xs.remove(i);
    Ok(xs)
}

/// Like [`remove`], but copies into a fresh vector and leaves `xs` untouched.
///
/// # Panics
///
/// Panics if `xs` is non-empty and `i >= xs.len()`.
pub fn remove_copy<E: Clone>(xs: &[E], i: usize) -> Vec<E> {
    if xs.is_empty() {
        return Vec::new();
    }
    if let Err(err) = check_index(i, xs.len()) {
        panic!("{err}");
    }

    let mut out = Vec::with_capacity(xs.len() - 1);
    out.extend_from_slice(&xs[..i]);
    out.extend_from_slice(&xs[i + 1..]);
    out
}

#[inline]
fn check_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index < len {
        Ok(())
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_and_shifts() {
        let xs = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(remove(xs.clone(), 1), vec![1, 3, 4, 5, 6]);
        assert_eq!(remove(xs.clone(), 0), vec![2, 3, 4, 5, 6]);
        assert_eq!(remove(xs, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(remove(vec!['x'], 0), Vec::<char>::new());
    }

    #[test]
    fn reuses_input_storage() {
        let xs = vec![10_u32, 20, 30, 40];
        let ptr = xs.as_ptr();
        let capacity = xs.capacity();

        let out = remove(xs, 2);
        assert_eq!(out, vec![10, 20, 40]);
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out.capacity(), capacity);
    }

    #[test]
    fn empty_input_ignores_index() {
        assert!(remove(Vec::<i32>::new(), 1).is_empty());
        assert!(remove(Vec::<i32>::new(), usize::MAX).is_empty());
        assert_eq!(try_remove(Vec::<i32>::new(), 9), Ok(Vec::new()));
        assert!(remove_copy::<i32>(&[], 3).is_empty());
    }

    #[test]
    #[should_panic(expected = "index 7 out of bounds for sequence of length 6")]
    fn out_of_bounds_panics() {
        remove(vec![1, 2, 3, 4, 5, 6], 7);
    }

    #[test]
    #[should_panic(expected = "index 6 out of bounds for sequence of length 6")]
    fn index_equal_to_len_panics() {
        remove(vec![1, 2, 3, 4, 5, 6], 6);
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for sequence of length 2")]
    fn remove_copy_out_of_bounds_panics() {
        remove_copy(&[1, 2], 3);
    }

    #[test]
    fn try_remove_reports_index_and_len() {
        let err = try_remove(vec![1, 2, 3], 3).unwrap_err();
        assert_eq!(err, IndexOutOfBounds { index: 3, len: 3 });
        assert_eq!(
            err.to_string(),
            "index 3 out of bounds for sequence of length 3"
        );
        assert_eq!(try_remove(vec![1, 2, 3], 1), Ok(vec![1, 3]));
    }

    #[test]
    fn remove_copy_leaves_input_intact() {
        let xs = vec!["a", "b", "c"];
        assert_eq!(remove_copy(&xs, 1), vec!["a", "c"]);
        assert_eq!(xs, vec!["a", "b", "c"]);
    }

    #[test]
    fn variants_agree_on_every_index() {
        let xs: Vec<u8> = (0..16).collect();
        for i in 0..xs.len() {
            let expected = remove(xs.clone(), i);
            assert_eq!(try_remove(xs.clone(), i).as_ref(), Ok(&expected), "index={i}");
            assert_eq!(remove_copy(&xs, i), expected, "index={i}");
        }
        for i in xs.len()..xs.len() + 4 {
            assert!(try_remove(xs.clone(), i).is_err(), "index={i}");
        }
    }
}
