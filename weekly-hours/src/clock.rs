//! Resolve the current weekday and time of day.

use chrono::{Datelike, Local, NaiveDateTime};

use weekly_hours_syntax::{weekday_from_number, TimeOfDay, Weekday};

/// A source for the current wall-clock time, expressed in the local time of
/// the schedule.
pub trait Clock: Clone {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the host system.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a given time.
///
/// ```
/// use weekly_hours::clock::{current_minute, current_weekday, FixedClock};
/// use weekly_hours::Weekday;
///
/// let at = chrono::NaiveDate::from_ymd_opt(2025, 12, 21)
///     .unwrap()
///     .and_hms_opt(18, 5, 0)
///     .unwrap();
///
/// let clock = FixedClock(at);
/// assert_eq!(current_weekday(&clock), Weekday::Sun);
/// assert_eq!(current_minute(&clock).mins_from_midnight(), 18 * 60 + 5);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Current time in a given timezone, regardless of the timezone of the host.
#[cfg(feature = "tz")]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TzClock {
    tz: chrono_tz::Tz,
}

#[cfg(feature = "tz")]
impl TzClock {
    /// Read the time of day in given timezone.
    ///
    /// ```
    /// use weekly_hours::clock::TzClock;
    ///
    /// let clock = TzClock::new(chrono_tz::Europe::Berlin);
    /// assert_eq!(clock.tz().name(), "Europe/Berlin");
    /// ```
    pub fn new(tz: chrono_tz::Tz) -> Self {
        Self { tz }
    }

    /// Find a timezone from its IANA name.
    ///
    /// ```
    /// use weekly_hours::clock::TzClock;
    ///
    /// assert!(TzClock::from_name("Europe/Berlin").is_ok());
    /// assert!(TzClock::from_name("Europe/Atlantis").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, crate::UnknownTimezone> {
        let tz = name
            .parse()
            .map_err(|_| crate::UnknownTimezone(name.to_string()))?;

        Ok(Self::new(tz))
    }

    pub fn tz(&self) -> chrono_tz::Tz {
        self.tz
    }
}

#[cfg(feature = "tz")]
impl Clock for TzClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Get the current weekday of a clock.
#[inline]
pub fn current_weekday(clock: &impl Clock) -> Weekday {
    clock.now().weekday()
}

/// Get the current time of day of a clock, truncated to the minute.
#[inline]
pub fn current_minute(clock: &impl Clock) -> TimeOfDay {
    clock.now().time().into()
}

/// Convert a weekday index counted from Sunday=0 to Saturday=6, which is how
/// many clocks expose it, into a weekday.
///
/// ```
/// use weekly_hours::clock::weekday_from_sunday_index;
/// use weekly_hours::Weekday;
///
/// assert_eq!(weekday_from_sunday_index(0), Some(Weekday::Sun));
/// assert_eq!(weekday_from_sunday_index(1), Some(Weekday::Mon));
/// assert_eq!(weekday_from_sunday_index(6), Some(Weekday::Sat));
/// assert_eq!(weekday_from_sunday_index(7), None);
/// ```
#[inline]
pub fn weekday_from_sunday_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1..=6 => weekday_from_number(index.try_into().ok()?),
        _ => None,
    }
}
