//! English ordinal suffixes for day numbers.

/// Returns the English ordinal suffix for `n` ("st", "nd", "rd" or "th").
///
/// Values whose last two digits fall in 10..=20 always take "th".
pub fn ordinal_suffix(n: u64) -> &'static str {
    if (10..=20).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats `n` followed by its ordinal suffix, e.g. `"21st"`.
pub fn ordinal(n: u64) -> String {
    format!("{n}{}", ordinal_suffix(n))
}
