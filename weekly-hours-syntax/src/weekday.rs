// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

/// Get the weekday numbered from Monday=1 to Sunday=7, this is the inverse
/// of [`Weekday::number_from_monday`].
///
/// ```
/// use weekly_hours_syntax::{weekday_from_number, Weekday};
///
/// assert_eq!(weekday_from_number(1), Some(Weekday::Mon));
/// assert_eq!(weekday_from_number(7), Some(Weekday::Sun));
/// assert_eq!(weekday_from_number(0), None);
/// assert_eq!(weekday_from_number(8), None);
/// ```
#[inline]
pub fn weekday_from_number(number: u8) -> Option<Weekday> {
    Some(match number {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    })
}
