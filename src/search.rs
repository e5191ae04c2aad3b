//! Generic slice scan helpers.
//!
//! Left-to-right predicate scans with a start offset and a caller-supplied
//! context value threaded to the predicate. Total and non-mutating; absence
//! is `None`. Nothing here assumes anything about the element type beyond
//! what the predicate itself requires.

/// First index `i >= start` where `pred(&items[i], ctx)` holds.
///
/// Returns `None` when nothing matches or `start` is past the end.
pub fn find_index<T, C: ?Sized>(
    items: &[T],
    start: usize,
    ctx: &C,
    pred: impl Fn(&T, &C) -> bool,
) -> Option<usize> {
    let mut i = start;
    while i < items.len() {
        if pred(&items[i], ctx) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Like [`find_index`], but returns the matching element itself.
pub fn find_first<'a, T, C: ?Sized>(
    items: &'a [T],
    start: usize,
    ctx: &C,
    pred: impl Fn(&T, &C) -> bool,
) -> Option<&'a T> {
    find_index(items, start, ctx, pred).map(|i| &items[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice() {
        let items: [i32; 0] = [];
        assert_eq!(find_index(&items, 0, &(), |_, _| true), None);
        assert_eq!(find_first(&items, 0, &(), |_, _| true), None);
    }

    #[test]
    fn test_no_match() {
        let items = [1, 2, 3];
        assert_eq!(find_index(&items, 0, &(), |_, _| false), None);
    }

    #[test]
    fn test_start_offset() {
        let items = [10, 20, 30, 40];
        // Always-true predicate: first index scanned is the answer.
        assert_eq!(find_index(&items, 2, &(), |_, _| true), Some(2));
        assert_eq!(find_index(&items, 0, &(), |_, _| true), Some(0));
        // Start past the end.
        assert_eq!(find_index(&items, 4, &(), |_, _| true), None);
        assert_eq!(find_index(&items, 100, &(), |_, _| true), None);
    }

    #[test]
    fn test_context_threading() {
        let items = [3, 1, 4, 1, 5];
        let needle = 1;
        assert_eq!(find_index(&items, 0, &needle, |e, n| e == n), Some(1));
        // Same predicate, later start: next occurrence.
        assert_eq!(find_index(&items, 2, &needle, |e, n| e == n), Some(3));
        assert_eq!(find_first(&items, 0, &needle, |e, n| e == n), Some(&1));
    }

    #[test]
    fn test_str_context() {
        let items = ["alpha", "beta", "gamma"];
        let found = find_first(&items, 0, "bet", |e, prefix: &str| e.starts_with(prefix));
        assert_eq!(found, Some(&"beta"));
    }
}
