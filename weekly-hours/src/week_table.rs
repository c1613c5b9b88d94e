use std::fmt::Display;

use weekly_hours_syntax::{parse_intervals, parse_weekday, DaySchedule, Weekday};

/// The schedules of a whole week, indexed by weekday.
///
/// A day that was never given any hours is closed all day.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct WeekTable {
    days: [DaySchedule; 7],
}

impl WeekTable {
    /// Build a table from `(weekday, hours)` rows as they are written on the
    /// page, for example `("Mo", "08:00-12:00, 14:00-16:00")`.
    ///
    /// Rows with an unknown weekday are skipped, and invalid intervals are
    /// dropped from their row. Only the first row of a weekday is read, even
    /// if none of its intervals is valid.
    ///
    /// ```
    /// use weekly_hours::{Weekday, WeekTable};
    ///
    /// let table = WeekTable::from_rows([
    ///     ("Mo", "08:00-12:00"),
    ///     ("Di", "09:00-10:00, 14:00-16:00"),
    ///     ("Feiertag", "10:00-12:00"),
    ///     ("Montag", "14:00-16:00"),
    /// ]);
    ///
    /// assert_eq!(table.day(Weekday::Mon).to_string(), "08:00-12:00");
    /// assert_eq!(table.day(Weekday::Tue).len(), 2);
    /// assert!(table.day(Weekday::Wed).is_empty());
    /// ```
    pub fn from_rows<I, D, H>(rows: I) -> Self
    where
        I: IntoIterator<Item = (D, H)>,
        D: AsRef<str>,
        H: AsRef<str>,
    {
        let mut table = Self::default();
        let mut seen = [false; 7];

        for (day, hours) in rows {
            let day = day.as_ref();

            let Some(weekday) = parse_weekday(day) else {
                #[cfg(feature = "log")]
                log::debug!(weekday = day; "Skipping row with unknown weekday");
                continue;
            };

            if std::mem::replace(&mut seen[Self::index(weekday)], true) {
                #[cfg(feature = "log")]
                log::debug!(weekday = day; "Ignoring duplicate row for {weekday}");
                continue;
            }

            table.insert(weekday, parse_intervals(hours.as_ref()));
        }

        table
    }

    /// Add intervals to a day of the table, keeping the intervals that were
    /// already there. Unlike [`WeekTable::from_rows`], repeated calls for a
    /// weekday add up.
    pub fn insert(&mut self, weekday: Weekday, schedule: DaySchedule) {
        self.days[Self::index(weekday)].extend(schedule.iter().copied());
    }

    /// Builder variant of [`WeekTable::insert`].
    ///
    /// ```
    /// use weekly_hours::{parse_intervals, Weekday, WeekTable};
    ///
    /// let table = WeekTable::default()
    ///     .with_day(Weekday::Sat, parse_intervals("10:00-12:00"))
    ///     .with_day(Weekday::Sat, parse_intervals("09:00-09:30"));
    ///
    /// assert_eq!(table.day(Weekday::Sat).to_string(), "09:00-09:30,10:00-12:00");
    /// ```
    pub fn with_day(mut self, weekday: Weekday, schedule: DaySchedule) -> Self {
        self.insert(weekday, schedule);
        self
    }

    /// Get the schedule of a weekday.
    #[inline]
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[Self::index(weekday)]
    }

    /// Check if there is no opening at all during the week.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|schedule| schedule.is_empty())
    }

    /// Iterate over the days of the week, starting on Monday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> + '_ {
        std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ()))
            .zip(&self.days)
    }

    #[inline]
    fn index(weekday: Weekday) -> usize {
        weekday.num_days_from_monday() as usize
    }
}

impl Display for WeekTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut is_first = true;

        for (weekday, schedule) in self.iter().filter(|(_, s)| !s.is_empty()) {
            if !is_first {
                write!(f, "; ")?;
            }

            write!(f, "{} {schedule}", weekday.number_from_monday())?;
            is_first = false;
        }

        Ok(())
    }
}
