//! Index and slice resolution over list lengths

/// Resolve a possibly negative index against `len`
#[must_use]
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len.checked_add(index)? } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Indices selected by `[start:end:step]` on a list of `len` elements
///
/// Defaults follow the sign of `step`: `0..len` forward, `len-1` down to the
/// exclusive `-1` sentinel in reverse. Explicit negative bounds are offset by
/// `len` once, then clamped to `[-1, len]`. A zero step selects nothing.
#[must_use]
pub fn slice_indices(
    len: usize,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
) -> Vec<usize> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Vec::new();
    }
    let Ok(len) = i64::try_from(len) else {
        return Vec::new();
    };

    let normalize = |bound: i64| {
        let offset = if bound < 0 { bound.saturating_add(len) } else { bound };
        offset.clamp(-1, len)
    };
    let (default_start, default_end) = if step > 0 { (0, len) } else { (len - 1, -1) };
    let start = start.map_or(default_start, normalize);
    let end = end.map_or(default_end, normalize);

    let mut indices = Vec::new();
    let mut i = start;
    while (step > 0 && i < end) || (step < 0 && i > end) {
        if let Ok(index) = usize::try_from(i)
            && i < len
        {
            indices.push(index);
        }
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_index_resolution() {
        assert_eq!(resolve_index(3, -1), Some(2));
        assert_eq!(resolve_index(3, -3), Some(0));
        assert_eq!(resolve_index(3, -4), None);
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(0, 0), None);
    }

    #[test]
    fn test_reverse_slice_is_end_exclusive() {
        assert_eq!(slice_indices(10, Some(7), Some(3), Some(-1)), vec![7, 6, 5, 4]);
        assert_eq!(
            slice_indices(5, None, None, Some(-1)),
            vec![4, 3, 2, 1, 0]
        );
        assert_eq!(slice_indices(5, None, None, Some(-2)), vec![4, 2, 0]);
    }

    #[test]
    fn test_forward_slices() {
        assert_eq!(slice_indices(5, Some(1), Some(3), None), vec![1, 2]);
        assert_eq!(slice_indices(5, Some(-2), None, None), vec![3, 4]);
        assert_eq!(slice_indices(5, None, Some(-1), Some(2)), vec![0, 2]);
        assert_eq!(slice_indices(5, Some(-100), Some(100), None), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_ranges() {
        assert!(slice_indices(5, Some(3), Some(1), None).is_empty());
        assert!(slice_indices(5, Some(1), Some(3), Some(-1)).is_empty());
        assert!(slice_indices(0, None, None, Some(-1)).is_empty());
        assert!(slice_indices(5, None, None, Some(0)).is_empty());
    }
}
