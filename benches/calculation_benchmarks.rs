//! Performance benchmarks for the shift earnings engine.
//!
//! The host re-evaluates the month total on every tick, so these cover:
//! - A single interval crossing every tier
//! - A single shift with an unpaid break
//! - Month totals over growing shift lists
//! - A month summary with per-shift segments
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use shift_earnings::calculation::{
    earnings_for_interval, earnings_for_shift, earnings_summary, total_earnings,
};
use shift_earnings::models::{AccountingPeriod, RateSchedule, Shift};

fn make_datetime(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S")
        .expect("Valid benchmark timestamp")
}

fn create_schedule() -> RateSchedule {
    RateSchedule::new(
        Decimal::from_str("31.50").unwrap(),
        Decimal::from_str("36.25").unwrap(),
        Decimal::from_str("42.10").unwrap(),
        Decimal::from_str("55.00").unwrap(),
    )
    .expect("Valid benchmark rates")
}

/// Creates `count` shifts, one per day from 2026-01-01, alternating day and
/// overnight shifts, each with an unpaid half hour break.
fn create_shifts(count: usize) -> Vec<Shift> {
    let first_day = NaiveDate::from_ymd_opt(2026, 1, 1).expect("Valid date");
    (0..count)
        .map(|i| {
            let day = first_day + Duration::days((i % 31) as i64);
            let start_hour = if i % 2 == 0 { 9 } else { 21 };
            let start = day.and_hms_opt(start_hour, 0, 0).expect("Valid time");
            let end = start + Duration::hours(8);
            let break_start = start + Duration::hours(4);
            Shift::new(start, end).with_break(break_start, break_start + Duration::minutes(30), false)
        })
        .collect()
}

/// Benchmark: A 24h interval crossing every weekday tier.
fn bench_single_interval(c: &mut Criterion) {
    let schedule = create_schedule();
    let start = make_datetime("2026-01-13", "05:17:23");
    let end = make_datetime("2026-01-14", "05:17:23");

    c.bench_function("single_interval_24h", |b| {
        b.iter(|| earnings_for_interval(black_box(start), black_box(end), &schedule))
    });
}

/// Benchmark: One shift evaluated mid-shift.
fn bench_single_shift(c: &mut Criterion) {
    let schedule = create_schedule();
    let shift = Shift::new(
        make_datetime("2026-01-13", "14:00:00"),
        make_datetime("2026-01-13", "23:30:00"),
    )
    .with_break(
        make_datetime("2026-01-13", "17:45:00"),
        make_datetime("2026-01-13", "18:40:00"),
        false,
    );
    let now = make_datetime("2026-01-13", "21:10:42");

    c.bench_function("single_shift_live", |b| {
        b.iter(|| earnings_for_shift(black_box(&shift), black_box(now), &schedule))
    });
}

/// Benchmark: Month totals to understand scaling with the shift list.
fn bench_month_total_scaling(c: &mut Criterion) {
    let schedule = create_schedule();
    let now = make_datetime("2026-01-31", "23:59:59");
    let period = AccountingPeriod::month_of(now);

    let mut group = c.benchmark_group("month_total");

    for shift_count in [1, 7, 31, 365].iter() {
        let shifts = create_shifts(*shift_count);

        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            &shifts,
            |b, shifts| b.iter(|| total_earnings(black_box(shifts), now, &schedule, &period)),
        );
    }

    group.finish();
}

/// Benchmark: The month breakdown including every segment.
fn bench_month_summary(c: &mut Criterion) {
    let schedule = create_schedule();
    let shifts = create_shifts(31);
    let now = make_datetime("2026-01-20", "12:00:00");

    c.bench_function("month_summary_31_shifts", |b| {
        b.iter(|| {
            earnings_summary(
                black_box(&shifts),
                now,
                &schedule,
                AccountingPeriod::month_of(now),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_single_interval,
    bench_single_shift,
    bench_month_total_scaling,
    bench_month_summary,
);
criterion_main!(benches);
