//! Order-independent comparison of string slices.

use std::collections::HashMap;

/// Returns true when `a` and `b` hold the same strings with the same
/// multiplicities, in any order.
///
/// `["a", "a"]` and `["a"]` are not equal.
pub fn compare_unordered<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&str, isize> = HashMap::new();
    for s in a {
        *counts.entry(s.as_ref()).or_default() += 1;
    }
    for s in b {
        *counts.entry(s.as_ref()).or_default() -= 1;
    }
    counts.values().all(|&n| n == 0)
}
