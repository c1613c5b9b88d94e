#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod schedule;
pub mod time_of_day;
pub mod weekday;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::{parse_interval, parse_intervals, parse_weekday};
pub use schedule::{DaySchedule, Interval};
pub use time_of_day::TimeOfDay;
pub use weekday::{weekday_from_number, Weekday};
