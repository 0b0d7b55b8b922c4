//! English ordinal labels.

/// `1 → "1st"`, `2 → "2nd"`, `11 → "11th"`, `21 → "21st"`.
///
/// Numbers ending in 11–20 (last two digits) always take "th".
pub fn ordinal(n: u32) -> String {
    let suffix = if (10..=20).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}
