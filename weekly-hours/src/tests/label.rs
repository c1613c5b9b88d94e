use chrono::Weekday;

use crate::evaluate::{evaluate, EvaluationResult};
use crate::label::{day_name, format_duration, format_schedule, LabelVariant, StatusLabel};
use crate::{time, week};

fn label(result: EvaluationResult, minutes_now: u16) -> (LabelVariant, String, Option<String>) {
    let label = StatusLabel::new(&result, minutes_now);
    (label.variant, label.text, label.tooltip)
}

#[test]
fn durations() {
    assert_eq!(format_duration(0), "0 Min");
    assert_eq!(format_duration(1), "1 Min");
    assert_eq!(format_duration(59), "59 Min");
    assert_eq!(format_duration(60), "1 Std");
    assert_eq!(format_duration(90), "1 Std 30 Min");
    assert_eq!(format_duration(7 * 1440), "168 Std");
}

#[test]
fn day_names() {
    assert_eq!(day_name(Weekday::Mon), "Montag");
    assert_eq!(day_name(Weekday::Thu), "Donnerstag");
    assert_eq!(day_name(Weekday::Sun), "Sonntag");
}

#[test]
fn schedules() {
    let table = week!("Mo" => "14:00-16:00, 08:00-12:00");
    assert_eq!(format_schedule(table.day(Weekday::Mon)), "08:00–12:00, 14:00–16:00");
    assert_eq!(format_schedule(table.day(Weekday::Tue)), "geschlossen");
}

#[test]
fn open_label() {
    assert_eq!(
        label(EvaluationResult::Open { closes_at: time!("12:00") }, 600),
        (
            LabelVariant::Open,
            "bis 12:00".to_string(),
            Some("Noch 2 Std".to_string())
        )
    );
}

#[test]
fn opens_today_label() {
    let table = week!("Mo" => "08:00-12:00,14:00-16:00");

    assert_eq!(
        label(evaluate(&table, Weekday::Mon, 750), 750),
        (
            LabelVariant::Closed,
            "öffnet heute 14:00".to_string(),
            Some("In 1 Std 30 Min".to_string())
        )
    );
}

#[test]
fn opens_tomorrow_label() {
    let table = week!("Di" => "09:00-10:00");

    assert_eq!(
        label(evaluate(&table, Weekday::Mon, 1200), 1200),
        (
            LabelVariant::Closed,
            "öffnet morgen 09:00".to_string(),
            Some("In 13 Std".to_string())
        )
    );
}

#[test]
fn opens_later_in_week_label() {
    let table = week!("Mo" => "09:00-12:00");

    assert_eq!(
        label(evaluate(&table, Weekday::Fri, 600), 600).1,
        "öffnet Montag 09:00"
    );

    // Same weekday, next week
    assert_eq!(
        label(evaluate(&table, Weekday::Mon, 720), 720).1,
        "öffnet Montag 09:00"
    );
}

#[test]
fn closed_indefinitely_label() {
    let label = StatusLabel::new(&EvaluationResult::ClosedIndefinitely, 0);
    assert_eq!(label.variant, LabelVariant::Closed);
    assert_eq!(label.text, "Termine nach Vereinbarung");
    assert_eq!(label.tooltip, None);
    assert_eq!(label.to_string(), "Termine nach Vereinbarung");
}

#[test]
fn display_label() {
    let label = StatusLabel::new(&EvaluationResult::Open { closes_at: time!("18:30") }, 1080);
    assert_eq!(label.to_string(), "bis 18:30 (Noch 30 Min)");
}
