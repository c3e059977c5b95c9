//! English ordinal labels for rank ticks.

/// `1 -> "1st"`, `2 -> "2nd"`, `11 -> "11th"`, `23 -> "23rd"`.
#[must_use]
pub fn to_ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

#[must_use]
pub const fn ordinal_suffix(n: u32) -> &'static str {
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
