use std::fmt::Display;
use std::iter::FromIterator;
use std::ops::Deref;

use crate::time_of_day::TimeOfDay;

// Interval

/// A single open window inside of a day. The start is included and the end
/// is excluded.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Interval {
    /// Create a new interval, return `None` if it doesn't end strictly after
    /// it starts.
    ///
    /// ```
    /// use weekly_hours_syntax::{Interval, TimeOfDay};
    ///
    /// let eight = TimeOfDay::new(8, 0).unwrap();
    /// let noon = TimeOfDay::new(12, 0).unwrap();
    /// assert!(Interval::new(eight, noon).is_some());
    /// assert!(Interval::new(noon, eight).is_none());
    /// assert!(Interval::new(noon, noon).is_none());
    /// ```
    #[inline]
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    #[inline]
    pub fn start(self) -> TimeOfDay {
        self.start
    }

    #[inline]
    pub fn end(self) -> TimeOfDay {
        self.end
    }

    /// Check if the interval is open at given number of minutes from
    /// midnight.
    ///
    /// ```
    /// use weekly_hours_syntax::parse_interval;
    ///
    /// let interval = parse_interval("08:00-12:00").unwrap();
    /// assert!(interval.contains(480));
    /// assert!(interval.contains(719));
    /// assert!(!interval.contains(720));
    /// ```
    #[inline]
    pub fn contains(self, minutes: u16) -> bool {
        (self.start.mins_from_midnight()..self.end.mins_from_midnight()).contains(&minutes)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// DaySchedule

/// The intervals of a single weekday, always sorted by start time.
///
/// Intervals may overlap: the sort is stable so that intervals starting at
/// the same time keep the order they were given in, and the first one that
/// matches a time of day takes precedence.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DaySchedule(Vec<Interval>);

impl DaySchedule {
    /// Get the first interval which is open at given time, if any.
    #[inline]
    pub fn active_at(&self, minutes: u16) -> Option<&Interval> {
        self.0.iter().find(|interval| interval.contains(minutes))
    }

    /// Get the first interval which opens strictly after given time, if any.
    ///
    /// ```
    /// use weekly_hours_syntax::parse_intervals;
    ///
    /// let schedule = parse_intervals("08:00-12:00,14:00-16:00");
    /// assert_eq!(schedule.next_after(600).unwrap().to_string(), "14:00-16:00");
    /// assert!(schedule.next_after(840).is_none());
    /// ```
    #[inline]
    pub fn next_after(&self, minutes: u16) -> Option<&Interval> {
        self.0
            .iter()
            .find(|interval| interval.start.mins_from_midnight() > minutes)
    }
}

impl FromIterator<Interval> for DaySchedule {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut schedule = Self(iter.into_iter().collect());
        schedule.0.sort_by_key(|interval| interval.start);
        schedule
    }
}

impl Extend<Interval> for DaySchedule {
    #[inline]
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.0.sort_by_key(|interval| interval.start);
    }
}

impl From<Vec<Interval>> for DaySchedule {
    #[inline]
    fn from(intervals: Vec<Interval>) -> Self {
        intervals.into_iter().collect()
    }
}

impl Deref for DaySchedule {
    type Target = [Interval];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for DaySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut intervals = self.0.iter();

        if let Some(first) = intervals.next() {
            write!(f, "{first}")?;
        }

        for interval in intervals {
            write!(f, ",{interval}")?;
        }

        Ok(())
    }
}
