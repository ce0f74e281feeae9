//! Performance benchmarks for the elapsed work time engine.
//!
//! The engine performs one schedule lookup per calendar day spanned, so
//! the interesting axis is the span length. Run with: `cargo bench`.
//! HTML reports are generated in `target/criterion/`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, NaiveTime};

use worktime_engine::calculation::compute_elapsed_work_seconds;
use worktime_engine::models::{DaySchedule, WorkInterval};
use worktime_engine::schedule::{RosterCalendar, WeekPattern};

fn make_time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn office_calendar() -> RosterCalendar {
    let day = DaySchedule::new(vec![
        WorkInterval::new(make_time(8, 0), make_time(12, 0)).unwrap(),
        WorkInterval::new(make_time(13, 30), make_time(17, 30)).unwrap(),
    ])
    .unwrap();
    RosterCalendar::new(WeekPattern::weekdays(day))
}

/// Monday 2026-01-12.
fn base_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
}

fn bench_same_day(c: &mut Criterion) {
    let calendar = office_calendar();

    c.bench_function("same_day_window", |b| {
        b.iter(|| {
            compute_elapsed_work_seconds(
                black_box(&calendar),
                black_box("agent_001"),
                base_monday(),
                make_time(9, 0),
                Some(base_monday().and_time(make_time(16, 0))),
            )
            .unwrap()
        })
    });
}

fn bench_multi_day_spans(c: &mut Criterion) {
    let calendar = office_calendar();
    let mut group = c.benchmark_group("multi_day_span");

    for span_days in [7, 30, 180, 365] {
        group.throughput(Throughput::Elements(span_days as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(span_days),
            &span_days,
            |b, &span_days| {
                let end = (base_monday() + Duration::days(span_days)).and_time(make_time(10, 0));
                b.iter(|| {
                    compute_elapsed_work_seconds(
                        black_box(&calendar),
                        black_box("agent_001"),
                        base_monday(),
                        make_time(9, 0),
                        Some(end),
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_weekend_start_resolution(c: &mut Criterion) {
    let calendar = office_calendar();
    // Saturday 2026-01-17: resolution walks forward to Monday.
    let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 1, 19)
        .unwrap()
        .and_time(make_time(10, 0));

    c.bench_function("weekend_start_resolution", |b| {
        b.iter(|| {
            compute_elapsed_work_seconds(
                black_box(&calendar),
                black_box("agent_001"),
                saturday,
                make_time(12, 0),
                Some(end),
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_same_day,
    bench_multi_day_spans,
    bench_weekend_start_resolution
);
criterion_main!(benches);
