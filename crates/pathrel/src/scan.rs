// crates/pathrel/src/scan.rs

use crate::platform::Platform;
use tracing::trace;

/// Count the leading characters `first` and `second` have in common.
///
/// With `ignore_case` set, characters are compared through their Unicode
/// uppercase mapping, which does not depend on the process locale. Returns
/// `0` if either string is empty.
pub fn equal_starting_character_count(first: &str, second: &str, ignore_case: bool) -> usize {
    if first.is_empty() || second.is_empty() {
        return 0;
    }
    first
        .chars()
        .zip(second.chars())
        .take_while(|&(a, b)| chars_equal(a, b, ignore_case))
        .count()
}

/// Length of the prefix `first` and `second` share, aligned to a segment
/// boundary.
///
/// The raw character match is retracted to the separator preceding the
/// first mismatch, so `/Foodie` and `/Foobar` share `/` rather than
/// `/Foo`. The result is either `0`, the end of one of the strings where the
/// other continues with a separator, or a position directly after a
/// separator in `first`.
///
/// The scan is asymmetric: only `first` is consulted when retracting.
pub fn common_path_length(
    first: &str,
    second: &str,
    ignore_case: bool,
    platform: Platform,
) -> usize {
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();
    common_length(&first, &second, ignore_case, platform)
}

pub(crate) fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_uppercase().eq(b.to_uppercase()))
}

pub(crate) fn common_length(
    first: &[char],
    second: &[char],
    ignore_case: bool,
    platform: Platform,
) -> usize {
    let raw = first
        .iter()
        .zip(second)
        .take_while(|&(&a, &b)| chars_equal(a, b, ignore_case))
        .count();
    let snapped = snap_to_boundary(first, second, raw, platform);
    trace!(target: "debug::scan", raw, snapped, "common prefix");
    snapped
}

fn snap_to_boundary(first: &[char], second: &[char], mut raw: usize, platform: Platform) -> usize {
    if raw == 0 {
        return 0;
    }
    if raw == first.len() && (raw == second.len() || platform.is_separator(second[raw])) {
        return raw;
    }
    if raw == second.len() && platform.is_separator(first[raw]) {
        return raw;
    }
    while raw > 0 && !platform.is_separator(first[raw - 1]) {
        raw -= 1;
    }
    raw
}
