use std::env;
use std::thread;
use std::time::Instant;

use chrono::{Datelike, NaiveDateTime};

use weekly_hours::clock::Clock;
use weekly_hours::label::{day_name, format_schedule, TODAY_BADGE};
use weekly_hours::weekly_hours::{REFRESH_LIVE_STATUS, REFRESH_TODAY_HIGHLIGHT};
use weekly_hours::WeeklyHours;

const USAGE: &str = "Usage: ./schedule [--watch] <WEEKDAY=HOURS>...";

fn print_status<C: Clock>(hours: &WeeklyHours<C>, now: NaiveDateTime) {
    println!(" - date: {now}");
    println!(" - current status: {:?}", hours.evaluate_at(now));
    println!(" - label: {}", hours.label_at(now));
}

fn print_overview<C: Clock>(hours: &WeeklyHours<C>, now: NaiveDateTime) {
    for day in hours.week_overview(now.weekday()) {
        print!("{:>10}: {}", day_name(day.weekday), format_schedule(day.schedule));

        if day.is_today {
            print!(" [{TODAY_BADGE}]");
        }

        println!()
    }
}

fn run<C: Clock>(hours: WeeklyHours<C>, watch: bool) {
    println!(" - table: {}", hours.table());
    let now = hours.clock().now();
    print_status(&hours, now);
    println!("---");
    print_overview(&hours, now);
    let mut last_overview = Instant::now();

    while watch {
        thread::sleep(REFRESH_LIVE_STATUS);
        let now = hours.clock().now();
        println!("---");
        print_status(&hours, now);

        if last_overview.elapsed() >= REFRESH_TODAY_HIGHLIGHT {
            println!("---");
            print_overview(&hours, now);
            last_overview = Instant::now();
        }
    }
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let watch = args.first().is_some_and(|arg| arg == "--watch");

    if watch {
        args.remove(0);
    }

    if args.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let rows = args.iter().filter_map(|arg| {
        let row = arg.split_once('=');

        if row.is_none() {
            eprintln!("Ignoring row without `=`: {arg}");
        }

        row
    });

    let hours = WeeklyHours::from_rows(rows);

    #[cfg(feature = "tz")]
    if let Ok(tz_name) = env::var("WEEKLY_HOURS_TZ") {
        let clock = weekly_hours::clock::TzClock::from_name(&tz_name).unwrap_or_else(|err| {
            eprintln!("{err}");
            std::process::exit(1)
        });

        println!(" - timezone: {}", clock.tz());
        return run(hours.with_clock(clock), watch);
    }

    run(hours, watch)
}
