//! Dotted version comparison.
//!
//! Versions are compared component by component as plain numbers; ranges,
//! prerelease tags and build metadata carry no meaning here. A component that
//! is missing or not a number never compares equal, greater or lower than
//! anything, so malformed input degrades to a best-effort answer instead of
//! an error.

/// Numeric value of the `index`-th dot-separated component
///
/// `None` stands for a missing or non-numeric component. Blank components
/// count as zero.
fn component(version: &str, index: usize) -> Option<u64> {
    let part = version.split('.').nth(index)?.trim();
    if part.is_empty() {
        return Some(0);
    }
    part.parse().ok()
}

/// Returns the higher of two versions, looking at major, minor and patch
///
/// The first component that differs decides. `a` wins only when it is
/// numerically greater there; otherwise `b` is returned. When all three
/// components are equal `a` is returned.
pub fn compare_dotted<'a>(a: &'a str, b: &'a str) -> &'a str {
    for index in 0..3 {
        let left = component(a, index);
        let right = component(b, index);

        match (left, right) {
            (Some(l), Some(r)) if l == r => continue,
            (Some(l), Some(r)) => return if l > r { a } else { b },
            _ => return b,
        }
    }
    a
}

/// Whether `current` lags `latest` on major or minor
///
/// Patch differences are ignored.
pub fn is_behind(current: &str, latest: &str) -> bool {
    for index in 0..2 {
        if let (Some(c), Some(l)) = (component(current, index), component(latest, index)) {
            if c < l {
                return true;
            }
            if c > l {
                return false;
            }
        }
    }
    false
}
