use std::convert::TryInto;
use std::fmt::{Debug, Display};

use chrono::{NaiveTime, Timelike};

/// An hour+minute struct for a single day, with *24:00* allowed so that a
/// day can be closed at midnight.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight at the end of the day.
    pub const END_OF_DAY: Self = Self { hour: 24, minute: 0 };

    /// Create a new time of day, this may return `None` if input values are
    /// out of range.
    ///
    /// ```
    /// use weekly_hours_syntax::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(8, 30).is_some());
    /// assert!(TimeOfDay::new(24, 0).is_some());
    /// assert!(TimeOfDay::new(24, 1).is_none()); // past the end of the day
    /// assert!(TimeOfDay::new(25, 0).is_none()); // hours are out of bound
    /// assert!(TimeOfDay::new(8, 70).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use weekly_hours_syntax::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(12, 15).unwrap();
    /// assert_eq!(time.mins_from_midnight(), 12 * 60 + 15);
    /// assert_eq!(TimeOfDay::END_OF_DAY.mins_from_midnight(), 1440);
    /// ```
    #[inline]
    pub fn mins_from_midnight(self) -> u16 {
        u16::from(self.minute) + 60 * u16::from(self.hour)
    }

    /// Build a time of day from the total number of minutes from midnight
    /// and return `None` if the result is out of bounds.
    ///
    /// ```
    /// use weekly_hours_syntax::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_mins_from_midnight(540), TimeOfDay::new(9, 0));
    /// assert!(TimeOfDay::from_mins_from_midnight(1441).is_none());
    /// ```
    #[inline]
    pub fn from_mins_from_midnight(minute: u16) -> Option<Self> {
        let hour = (minute / 60).try_into().ok()?;
        let minute = (minute % 60).try_into().ok()?;
        Self::new(hour, minute)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl From<NaiveTime> for TimeOfDay {
    #[inline]
    fn from(time: NaiveTime) -> TimeOfDay {
        Self {
            hour: time.hour().try_into().expect("invalid NaiveTime"),
            minute: time.minute().try_into().expect("invalid NaiveTime"),
        }
    }
}
