use std::fmt;

use crate::parser::Rule;
use crate::time_of_day::TimeOfDay;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    Parser(pest::error::Error<Rule>),
    Overflow { value: String, expected: String },
    EmptyInterval { start: TimeOfDay, end: TimeOfDay },
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{pest_err}"),
            Self::Overflow { value, expected } => {
                write!(f, "{value} is out of range: expected {expected}")
            }
            Self::EmptyInterval { start, end } => {
                write!(f, "interval {start}-{end} does not end after it starts")
            }
        }
    }
}

impl std::error::Error for Error {}
