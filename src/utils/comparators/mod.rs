use std::cmp::Ordering;

use crate::comparator::Comparator;

/// Compares two keys that both represent the exclusive end of a range.
///
/// An empty end key means "no upper bound", so it sorts after every
/// non-empty key.
pub fn compare_end_key(a: &[u8], b: &[u8]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BytewiseComparator;

impl Comparator for BytewiseComparator {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &str {
        "keyrange.BytewiseComparator"
    }
}

/// Bytewise order, except the empty key is the largest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndKeyComparator;

impl Comparator for EndKeyComparator {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        compare_end_key(a, b)
    }

    fn name(&self) -> &str {
        "keyrange.EndKeyComparator"
    }
}
