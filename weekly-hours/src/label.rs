//! Wording of the widget, in German.

use std::fmt::Display;

use weekly_hours_syntax::{DaySchedule, Weekday};

use crate::evaluate::EvaluationResult;

/// Badge attached to the row of the current day.
pub const TODAY_BADGE: &str = "Heute";

/// Text displayed for a day without any hours.
pub const CLOSED_DAY: &str = "geschlossen";

/// Text displayed when there are no hours at all.
pub const BY_APPOINTMENT: &str = "Termine nach Vereinbarung";

/// Full German name of a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

/// Format a number of minutes as hours and minutes.
///
/// ```
/// use weekly_hours::label::format_duration;
///
/// assert_eq!(format_duration(45), "45 Min");
/// assert_eq!(format_duration(120), "2 Std");
/// assert_eq!(format_duration(135), "2 Std 15 Min");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);

    match (hours, minutes) {
        (0, _) => format!("{minutes} Min"),
        (_, 0) => format!("{hours} Std"),
        _ => format!("{hours} Std {minutes} Min"),
    }
}

/// Format the hours of a day the way they are listed in the widget.
///
/// ```
/// use weekly_hours::label::format_schedule;
/// use weekly_hours::parse_intervals;
///
/// let schedule = parse_intervals("14:00-16:00,08:00-12:00");
/// assert_eq!(format_schedule(&schedule), "08:00–12:00, 14:00–16:00");
/// assert_eq!(format_schedule(&parse_intervals("")), "geschlossen");
/// ```
pub fn format_schedule(schedule: &DaySchedule) -> String {
    if schedule.is_empty() {
        return CLOSED_DAY.to_string();
    }

    schedule
        .iter()
        .map(|interval| format!("{}–{}", interval.start(), interval.end()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Styling hint for a status label.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum LabelVariant {
    Open,
    Closed,
}

/// Text of the live status badge, with an optional tooltip.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct StatusLabel {
    pub variant: LabelVariant,
    pub text: String,
    pub tooltip: Option<String>,
}

impl StatusLabel {
    /// Describe an evaluation result which was computed at `minutes_now`.
    ///
    /// ```
    /// use weekly_hours::label::{LabelVariant, StatusLabel};
    /// use weekly_hours::{evaluate, Weekday, WeekTable};
    ///
    /// let table = WeekTable::from_rows([("Mo", "08:00-12:00")]);
    /// let label = StatusLabel::new(&evaluate(&table, Weekday::Mon, 590), 590);
    ///
    /// assert_eq!(label.variant, LabelVariant::Open);
    /// assert_eq!(label.text, "bis 12:00");
    /// assert_eq!(label.tooltip.as_deref(), Some("Noch 2 Std 10 Min"));
    /// ```
    pub fn new(result: &EvaluationResult, minutes_now: u16) -> Self {
        match *result {
            EvaluationResult::Open { closes_at } => {
                let remaining = closes_at.mins_from_midnight().saturating_sub(minutes_now);

                Self {
                    variant: LabelVariant::Open,
                    text: format!("bis {closes_at}"),
                    tooltip: Some(format!("Noch {}", format_duration(remaining.into()))),
                }
            }
            EvaluationResult::ClosedWithNext {
                opens_on_day,
                opens_at,
                minutes_until,
                days_ahead,
            } => {
                let day = match days_ahead {
                    0 => "heute",
                    1 => "morgen",
                    _ => day_name(opens_on_day),
                };

                Self {
                    variant: LabelVariant::Closed,
                    text: format!("öffnet {day} {opens_at}"),
                    tooltip: Some(format!("In {}", format_duration(minutes_until))),
                }
            }
            EvaluationResult::ClosedIndefinitely => Self {
                variant: LabelVariant::Closed,
                text: BY_APPOINTMENT.to_string(),
                tooltip: None,
            },
        }
    }
}

impl Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)?;

        if let Some(tooltip) = &self.tooltip {
            write!(f, " ({tooltip})")?;
        }

        Ok(())
    }
}
