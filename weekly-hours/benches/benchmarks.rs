use weekly_hours::{evaluate, parse_intervals, WeekTable, Weekday};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ROW_SINGLE: &str = "08:00-12:00";
const ROW_SPLIT: &str = "08:00-12:00, 14:00-16:00, 17:00–19:30";
const ROW_NOISY: &str = "bad-token, 25:00-26:00, 08:00-12:00, nach Vereinbarung";

const ROWS_WEEK: [(&str, &str); 5] = [
    ("Mo", ROW_SPLIT),
    ("Di", ROW_SINGLE),
    ("Mi", ROW_SPLIT),
    ("Do", ROW_SINGLE),
    ("Fr", "09:00-13:00"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("single", |b| {
        b.iter(|| parse_intervals(black_box(ROW_SINGLE)))
    });

    group.bench_function("split", |b| {
        b.iter(|| parse_intervals(black_box(ROW_SPLIT)))
    });

    group.bench_function("noisy", |b| {
        b.iter(|| parse_intervals(black_box(ROW_NOISY)))
    });

    group.bench_function("week", |b| {
        b.iter(|| WeekTable::from_rows(black_box(ROWS_WEEK)))
    });
}

fn bench_eval(c: &mut Criterion) {
    let tables = [
        ("empty", WeekTable::default()),
        ("week", WeekTable::from_rows(ROWS_WEEK)),
        ("sunday_only", WeekTable::from_rows([("So", ROW_SINGLE)])),
    ];

    let mut group = c.benchmark_group("evaluate");

    for (slug, table) in &tables {
        group.bench_function(*slug, |b| {
            b.iter(|| evaluate(black_box(table), black_box(Weekday::Mon), black_box(1000)))
        });
    }
}

criterion_group!(benches, bench_parse, bench_eval);
criterion_main!(benches);
