use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, NaiveDateTime};

use weekly_hours_syntax::{DaySchedule, TimeOfDay, Weekday};

use crate::clock::{Clock, SystemClock};
use crate::evaluate::{evaluate, EvaluationResult};
use crate::label::StatusLabel;
use crate::week_table::WeekTable;

/// How often a live status should be refreshed by its owner.
pub const REFRESH_LIVE_STATUS: Duration = Duration::from_secs(60);

/// How often the highlight of the current day should be refreshed by its
/// owner.
pub const REFRESH_TODAY_HIGHLIGHT: Duration = Duration::from_secs(60 * 60);

/// A week table and the clock used to evaluate it.
///
/// The table is immutable and wrapped by an `Arc` so this is safe and fast
/// to clone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct WeeklyHours<C: Clock = SystemClock> {
    table: Arc<WeekTable>,
    clock: C,
}

impl WeeklyHours<SystemClock> {
    /// Evaluate a week table with the system clock.
    pub fn new(table: WeekTable) -> Self {
        Self { table: Arc::new(table), clock: SystemClock }
    }

    /// Shortcut for [`WeekTable::from_rows`] followed by
    /// [`WeeklyHours::new`].
    ///
    /// ```
    /// use weekly_hours::WeeklyHours;
    ///
    /// let hours = WeeklyHours::from_rows([("Mo", "08:00-12:00"), ("Fr", "14:00-18:00")]);
    /// assert!(!hours.table().is_empty());
    /// ```
    pub fn from_rows<I, D, H>(rows: I) -> Self
    where
        I: IntoIterator<Item = (D, H)>,
        D: AsRef<str>,
        H: AsRef<str>,
    {
        Self::new(WeekTable::from_rows(rows))
    }
}

impl<C: Clock> WeeklyHours<C> {
    /// Set a new clock for this week table.
    ///
    /// ```
    /// use weekly_hours::clock::FixedClock;
    /// use weekly_hours::WeeklyHours;
    ///
    /// let at = chrono::NaiveDate::from_ymd_opt(2025, 12, 15)
    ///     .unwrap()
    ///     .and_hms_opt(10, 0, 0)
    ///     .unwrap();
    ///
    /// let hours = WeeklyHours::from_rows([("Mo", "08:00-12:00")]).with_clock(FixedClock(at));
    /// assert!(hours.status().is_open());
    /// ```
    pub fn with_clock<C2: Clock>(self, clock: C2) -> WeeklyHours<C2> {
        WeeklyHours { table: self.table, clock }
    }

    pub fn table(&self) -> &WeekTable {
        &self.table
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get the status at given local time.
    pub fn evaluate_at(&self, at: NaiveDateTime) -> EvaluationResult {
        let minutes_now = TimeOfDay::from(at.time()).mins_from_midnight();
        let result = evaluate(&self.table, at.weekday(), minutes_now);

        #[cfg(feature = "log")]
        log::trace!("Evaluated week table at {at}: {result:?}");

        result
    }

    /// Get the status at current time of the clock.
    pub fn status(&self) -> EvaluationResult {
        self.evaluate_at(self.clock.now())
    }

    /// Check if the week table is open at given local time.
    pub fn is_open(&self, at: NaiveDateTime) -> bool {
        self.evaluate_at(at).is_open()
    }

    /// Get the German status label at given local time.
    pub fn label_at(&self, at: NaiveDateTime) -> StatusLabel {
        let minutes_now = TimeOfDay::from(at.time()).mins_from_midnight();
        StatusLabel::new(&self.evaluate_at(at), minutes_now)
    }

    /// List the days of the week from Monday to Sunday, with `today` marked.
    ///
    /// ```
    /// use weekly_hours::{Weekday, WeeklyHours};
    ///
    /// let hours = WeeklyHours::from_rows([("Mo", "08:00-12:00")]);
    /// let overview = hours.week_overview(Weekday::Wed);
    ///
    /// assert_eq!(overview.len(), 7);
    /// assert_eq!(overview[0].schedule.len(), 1);
    /// assert!(overview[2].is_today);
    /// assert_eq!(overview.iter().filter(|day| day.is_today).count(), 1);
    /// ```
    pub fn week_overview(&self, today: Weekday) -> Vec<DayOverview<'_>> {
        self.table
            .iter()
            .map(|(weekday, schedule)| DayOverview {
                weekday,
                schedule,
                is_today: weekday == today,
            })
            .collect()
    }
}

/// A row of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayOverview<'a> {
    pub weekday: Weekday,
    pub schedule: &'a DaySchedule,
    pub is_today: bool,
}
