//! Display names for months.

use crate::year::MONTHS_PER_YEAR;

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "Silence",
    "Khord",
    "Maiden's Blight",
    "Ortide",
    "Verenin",
    "Song",
    "Grishleaf",
    "Solian",
    "Marthos",
    "Illumi",
    "Restos",
    "Veil",
];

/// Returns the name of a 0-based month index, wrapping past the end of the year.
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[usize::from(month) % MONTHS_PER_YEAR]
}
