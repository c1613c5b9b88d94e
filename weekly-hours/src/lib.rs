#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod clock;
pub mod evaluate;
pub mod label;
pub mod week_table;
pub mod weekly_hours;

#[cfg(feature = "tz")]
mod error;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::evaluate::{evaluate, EvaluationResult, MINUTES_PER_DAY};
pub use crate::week_table::WeekTable;
pub use crate::weekly_hours::{DayOverview, WeeklyHours};
pub use weekly_hours_syntax::{
    parse_intervals, parse_weekday, weekday_from_number, DaySchedule, Interval, TimeOfDay, Weekday,
};

#[cfg(feature = "tz")]
pub use crate::error::UnknownTimezone;

pub use weekly_hours_syntax::Error as ParserError;
