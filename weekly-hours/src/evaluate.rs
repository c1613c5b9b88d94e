//! Evaluation of a week table at a given time of the week.

use weekly_hours_syntax::{TimeOfDay, Weekday};

use crate::week_table::WeekTable;

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Status of a week table at a given time of the week.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EvaluationResult {
    /// Currently inside of an interval.
    Open { closes_at: TimeOfDay },
    /// Currently closed, opening later this week.
    ClosedWithNext {
        opens_on_day: Weekday,
        opens_at: TimeOfDay,
        minutes_until: u32,
        /// Number of midnights until the opening: 0 for later today, 1 for
        /// tomorrow, up to 7 for the same weekday next week.
        days_ahead: u8,
    },
    /// There are no hours at all in the table.
    ClosedIndefinitely,
}

impl EvaluationResult {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Check the status of a week table for given weekday and minutes from
/// midnight.
///
/// The first matching rule wins:
///  1. an interval of `today` contains `minutes_now`: it is open until the end
///     of this interval;
///  2. an interval of `today` starts later: it will open at the earliest of
///     them;
///  3. the first non-empty day of the next 7 days, wrapping over Sunday, will
///     open at its first interval;
///  4. otherwise it is closed indefinitely.
///
/// Values of `minutes_now` past the end of the day are treated as the end of
/// the day.
///
/// ```
/// use weekly_hours::{evaluate, EvaluationResult, TimeOfDay, Weekday, WeekTable};
///
/// let table = WeekTable::from_rows([("Mo", "08:00-12:00"), ("Di", "09:00-10:00")]);
///
/// assert_eq!(
///     evaluate(&table, Weekday::Mon, 600),
///     EvaluationResult::Open { closes_at: TimeOfDay::new(12, 0).unwrap() },
/// );
///
/// assert_eq!(
///     evaluate(&table, Weekday::Mon, 720),
///     EvaluationResult::ClosedWithNext {
///         opens_on_day: Weekday::Tue,
///         opens_at: TimeOfDay::new(9, 0).unwrap(),
///         minutes_until: (1440 - 720) + 540,
///         days_ahead: 1,
///     },
/// );
/// ```
pub fn evaluate(table: &WeekTable, today: Weekday, minutes_now: u16) -> EvaluationResult {
    let minutes_now = minutes_now.min(MINUTES_PER_DAY);
    let schedule = table.day(today);

    if let Some(interval) = schedule.active_at(minutes_now) {
        return EvaluationResult::Open { closes_at: interval.end() };
    }

    if let Some(interval) = schedule.next_after(minutes_now) {
        return EvaluationResult::ClosedWithNext {
            opens_on_day: today,
            opens_at: interval.start(),
            minutes_until: u32::from(interval.start().mins_from_midnight() - minutes_now),
            days_ahead: 0,
        };
    }

    let mut day = today;

    for days_ahead in 1..=7 {
        day = day.succ();

        if let Some(interval) = table.day(day).first() {
            let minutes_until = u32::from(MINUTES_PER_DAY - minutes_now)
                + u32::from(days_ahead - 1) * u32::from(MINUTES_PER_DAY)
                + u32::from(interval.start().mins_from_midnight());

            return EvaluationResult::ClosedWithNext {
                opens_on_day: day,
                opens_at: interval.start(),
                minutes_until,
                days_ahead,
            };
        }
    }

    EvaluationResult::ClosedIndefinitely
}
