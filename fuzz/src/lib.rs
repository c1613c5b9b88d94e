//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;

use weekly_hours::{
    evaluate, parse_intervals, weekday_from_number, EvaluationResult, WeekTable, MINUTES_PER_DAY,
};

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub rows: Vec<(String, String)>,
    pub weekday: u8,
    pub minutes: u16,
    pub operation: Operation,
}

/// What operation to perform on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Evaluate,
    CompareStringified,
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_evaluate(data: Data) -> bool {
    let Some(today) = weekday_from_number(data.weekday) else {
        return false;
    };

    if data.minutes >= MINUTES_PER_DAY {
        return false;
    }

    let table = WeekTable::from_rows(data.rows.iter().map(|(day, hours)| (day, hours)));

    match data.operation {
        Operation::Evaluate => check_evaluation(&table, today, data.minutes),
        Operation::CompareStringified => {
            let reparsed = table.iter().fold(WeekTable::default(), |acc, (day, schedule)| {
                acc.with_day(day, parse_intervals(&schedule.to_string()))
            });

            assert_eq!(table, reparsed, "stringified table: {table}");

            assert_eq!(
                evaluate(&table, today, data.minutes),
                evaluate(&reparsed, today, data.minutes),
            );
        }
    }

    true
}

fn check_evaluation(table: &WeekTable, today: weekly_hours::Weekday, minutes: u16) {
    let result = evaluate(table, today, minutes);
    assert_eq!(result, evaluate(table, today, minutes));

    assert_eq!(
        result == EvaluationResult::ClosedIndefinitely,
        table.is_empty(),
        "{result:?} for table {table}",
    );

    match result {
        EvaluationResult::Open { closes_at } => {
            assert!(closes_at.mins_from_midnight() > minutes);
        }
        EvaluationResult::ClosedWithNext { opens_on_day, opens_at, minutes_until, days_ahead } => {
            let day_len = u32::from(MINUTES_PER_DAY);
            assert!(minutes_until > 0);
            assert!(minutes_until < 8 * day_len);

            let opening = u32::from(minutes) + minutes_until;
            assert_eq!(opening / day_len, u32::from(days_ahead));
            assert_eq!(opening % day_len, u32::from(opens_at.mins_from_midnight()));

            assert!(
                evaluate(table, opens_on_day, opens_at.mins_from_midnight()).is_open(),
                "not open at predicted opening {opens_on_day} {opens_at} for table {table}",
            );
        }
        EvaluationResult::ClosedIndefinitely => {}
    }
}
