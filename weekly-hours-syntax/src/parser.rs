use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::schedule::{DaySchedule, Interval};
use crate::time_of_day::TimeOfDay;
use crate::weekday::{weekday_from_number, Weekday};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct WHParser;

/// Parse the hours text of a weekday row, for example
/// `"08:00-12:00, 14:00-16:00"`.
///
/// Tokens that can't be read as an interval are left out of the result
/// rather than failing the whole row: this never fails.
///
/// ```
/// use weekly_hours_syntax::parse_intervals;
///
/// let schedule = parse_intervals("bad-token,09:00-10:00");
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule[0].start().mins_from_midnight(), 540);
/// assert_eq!(schedule[0].end().mins_from_midnight(), 600);
/// ```
pub fn parse_intervals(data: &str) -> DaySchedule {
    data.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match parse_interval(token) {
            Ok(interval) => Some(interval),
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!(token = token; "Dropping invalid interval: {_err}");
                None
            }
        })
        .collect()
}

/// Parse a single interval such as `"8:00 – 12:30"`. The first interval
/// found in the token is read, surrounding text is ignored.
///
/// ```
/// use weekly_hours_syntax::{parse_interval, Error};
///
/// assert!(parse_interval("08:00-12:00").is_ok());
/// assert_eq!(parse_interval("08:00-12:00 Uhr").unwrap().to_string(), "08:00-12:00");
/// assert!(matches!(parse_interval("8h-12h"), Err(Error::Parser(_))));
/// assert!(matches!(parse_interval("25:00-26:00"), Err(Error::Overflow { .. })));
/// assert!(matches!(parse_interval("12:00-08:00"), Err(Error::EmptyInterval { .. })));
/// ```
pub fn parse_interval(data: &str) -> Result<Interval> {
    let interval_pair = WHParser::parse(Rule::input_interval, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no interval found");

    build_interval(interval_pair)
}

/// Read a weekday token, either its number from Monday=1 to Sunday=7 or its
/// German name, complete or abbreviated to two letters. A number is read
/// from the start of the token, so `"03"` or `"3."` are also Wednesday.
///
/// ```
/// use weekly_hours_syntax::{parse_weekday, Weekday};
///
/// assert_eq!(parse_weekday("3"), Some(Weekday::Wed));
/// assert_eq!(parse_weekday("03"), Some(Weekday::Wed));
/// assert_eq!(parse_weekday("9"), None);
/// assert_eq!(parse_weekday("Do"), Some(Weekday::Thu));
/// assert_eq!(parse_weekday("SONNTAG"), Some(Weekday::Sun));
/// assert_eq!(parse_weekday("Sunday"), None);
/// ```
pub fn parse_weekday(data: &str) -> Option<Weekday> {
    let weekday_pair = WHParser::parse(Rule::input_weekday, data)
        .ok()?
        .next()
        .expect("grammar error: no weekday found");

    build_weekday(weekday_pair)
}

// ---
// --- Intervals
// ---

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_interval(pair: Pair<Rule>) -> Result<Interval> {
    assert_eq!(pair.as_rule(), Rule::interval);
    let mut pairs = pair.into_inner();
    let start = build_time(pairs.next().expect("missing interval start"))?;
    let end = build_time(pairs.next().expect("missing interval end"))?;
    Interval::new(start, end).ok_or(Error::EmptyInterval { start, end })
}

fn build_time(pair: Pair<Rule>) -> Result<TimeOfDay> {
    assert_eq!(pair.as_rule(), Rule::time);
    let mut pairs = pair.into_inner();
    let hour = build_number(pairs.next().expect("missing hour"), Rule::hour);
    let minute = build_number(pairs.next().expect("missing minute"), Rule::minute);

    TimeOfDay::new(hour, minute).ok_or_else(|| Error::Overflow {
        value: format!("{hour:02}:{minute:02}"),
        expected: "a time between 00:00 and 24:00".to_string(),
    })
}

fn build_number(pair: Pair<Rule>, rule: Rule) -> u8 {
    assert_eq!(pair.as_rule(), rule);

    pair.as_str()
        .parse()
        .expect("grammar error: invalid number of digits")
}

// ---
// --- Weekdays
// ---

fn build_weekday(pair: Pair<Rule>) -> Option<Weekday> {
    assert_eq!(pair.as_rule(), Rule::weekday);
    let pair = pair.into_inner().next().expect("empty weekday");

    let weekday = match pair.as_rule() {
        Rule::weekday_number => return build_weekday_number(pair),
        Rule::monday => Weekday::Mon,
        Rule::tuesday => Weekday::Tue,
        Rule::wednesday => Weekday::Wed,
        Rule::thursday => Weekday::Thu,
        Rule::friday => Weekday::Fri,
        Rule::saturday => Weekday::Sat,
        Rule::sunday => Weekday::Sun,
        other => unexpected_token(other, Rule::weekday),
    };

    Some(weekday)
}

fn build_weekday_number(pair: Pair<Rule>) -> Option<Weekday> {
    assert_eq!(pair.as_rule(), Rule::weekday_number);
    let text = pair.as_str();

    if text.starts_with('-') {
        return None;
    }

    // Values that don't fit in a byte are out of range anyway.
    let number = text.trim_start_matches('+').trim_start_matches('0').parse().ok()?;
    weekday_from_number(number)
}
