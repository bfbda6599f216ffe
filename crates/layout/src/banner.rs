//! Human-readable one-line summary of the current date.

use strandwheel_calendar::{CalendarDate, ordinal};
use strandwheel_strands::StrandDirectory;

/// Formats the date line shown under the dial.
///
/// ```
/// use strandwheel_calendar::decompose;
/// use strandwheel_layout::date_banner;
/// use strandwheel_strands::StrandDirectory;
///
/// let line = date_banner(&decompose(0), 7, &StrandDirectory::new());
/// assert_eq!(line, "07:00, Silence 1st, Low Winter, No Strand (1), Year 0");
/// ```
pub fn date_banner(date: &CalendarDate, hour: u8, directory: &StrandDirectory) -> String {
    format!("{hour:02}:00, {}", date_line(date, directory))
}

/// Formats a date without the hour, as used in search results.
pub fn date_line(date: &CalendarDate, directory: &StrandDirectory) -> String {
    let strand = date.strand();
    format!(
        "{} {}, {} {}, {} ({}), Year {}",
        date.month_name(),
        ordinal(u64::from(date.day())),
        date.magic_phase().name(),
        date.season().name(),
        directory.display_name(strand),
        strand.number(),
        date.year(),
    )
}
