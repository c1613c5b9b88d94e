use chrono::Weekday;

use crate::parser::parse_weekday;

use super::ex;

const EXAMPLES: &[(&str, u32, &str, Option<Weekday>)] = &[
    ex!("1", Some(Weekday::Mon)),
    ex!("2", Some(Weekday::Tue)),
    ex!("3", Some(Weekday::Wed)),
    ex!("4", Some(Weekday::Thu)),
    ex!("5", Some(Weekday::Fri)),
    ex!("6", Some(Weekday::Sat)),
    ex!("7", Some(Weekday::Sun)),
    ex!(" 3 ", Some(Weekday::Wed)),
    ex!("01", Some(Weekday::Mon)),
    ex!("007", Some(Weekday::Sun)),
    ex!("+3", Some(Weekday::Wed)),
    ex!("3.", Some(Weekday::Wed)),
    ex!("5. Tag", Some(Weekday::Fri)),
    ex!("000000000000000000000000001", Some(Weekday::Mon)),
    ex!("mo", Some(Weekday::Mon)),
    ex!("Mo", Some(Weekday::Mon)),
    ex!("MONTAG", Some(Weekday::Mon)),
    ex!("Montag", Some(Weekday::Mon)),
    ex!("di", Some(Weekday::Tue)),
    ex!("Dienstag", Some(Weekday::Tue)),
    ex!("Mi", Some(Weekday::Wed)),
    ex!("mittwoch", Some(Weekday::Wed)),
    ex!("Do", Some(Weekday::Thu)),
    ex!("Donnerstag", Some(Weekday::Thu)),
    ex!("Fr", Some(Weekday::Fri)),
    ex!("Freitag", Some(Weekday::Fri)),
    ex!("Sa", Some(Weekday::Sat)),
    ex!("Samstag", Some(Weekday::Sat)),
    ex!("So", Some(Weekday::Sun)),
    ex!("sonntag", Some(Weekday::Sun)),
    ex!("0", None),
    ex!("8", None),
    ex!("12", None),
    ex!("00", None),
    ex!("-3", None),
    ex!("+-3", None),
    ex!("99999999999999999999", None),
    ex!("", None),
    ex!("xy", None),
    ex!("Mon", None),
    ex!("Monday", None),
    ex!("Mo-Fr", None),
    ex!("Montags", None),
];

#[test]
fn parse_weekday_examples() {
    for (file, line, raw, expected) in EXAMPLES {
        assert_eq!(
            parse_weekday(raw),
            *expected,
            "error with example from {file}:{line}",
        );
    }
}

#[test]
fn weekday_number_roundtrip() {
    for number in 1..=7u32 {
        let weekday = parse_weekday(&number.to_string()).unwrap();
        assert_eq!(weekday.number_from_monday(), number);
    }
}
