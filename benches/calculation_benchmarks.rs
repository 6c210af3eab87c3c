//! Performance benchmarks for the settlement engine.
//!
//! The fold visits every worked minute, so a fully staffed month is the
//! worst case: two shifts covering nearly the whole day on all 30 days,
//! about 43,000 per-minute iterations. The settlement is expected to stay
//! comfortably inside interactive latency.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveTime};

use recargo_engine::calculation::calculate;
use recargo_engine::calendar::HolidayCalendar;
use recargo_engine::models::{DayRecord, MonthlyContext, ShiftTimes};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid clock time")
}

/// Builds a month where every day is covered by two long shifts.
fn round_the_clock_month(day_count: u32) -> MonthlyContext {
    let days = (1..=day_count)
        .map(|d| DayRecord {
            date: NaiveDate::from_ymd_opt(2025, 9, d).expect("September day"),
            first: ShiftTimes {
                entry: Some(time(0, 0)),
                exit: Some(time(12, 0)),
            },
            second: ShiftTimes {
                entry: Some(time(12, 0)),
                exit: Some(time(23, 59)),
            },
        })
        .collect();
    MonthlyContext::new(2_054_865.0, days)
}

fn bench_monthly_settlement(c: &mut Criterion) {
    let calendar = HolidayCalendar::colombian(2025..=2025);

    let mut group = c.benchmark_group("monthly_settlement");
    for day_count in [7u32, 14, 30] {
        let ctx = round_the_clock_month(day_count);
        let minutes: i64 = ctx.days.iter().map(DayRecord::worked_minutes).sum();
        group.throughput(Throughput::Elements(minutes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(day_count), &ctx, |b, ctx| {
            b.iter(|| calculate(black_box(ctx), black_box(&calendar)).expect("valid month"));
        });
    }
    group.finish();
}

fn bench_light_month(c: &mut Criterion) {
    let calendar = HolidayCalendar::colombian(2025..=2025);

    // a realistic entry pattern: single ten-hour shifts
    let days = (1..=20u32)
        .map(|d| DayRecord {
            date: NaiveDate::from_ymd_opt(2025, 9, d).expect("September day"),
            first: ShiftTimes {
                entry: Some(time(8, 0)),
                exit: Some(time(18, 0)),
            },
            second: ShiftTimes::default(),
        })
        .collect();
    let ctx = MonthlyContext::new(2_054_865.0, days);

    c.bench_function("single_shift_month", |b| {
        b.iter(|| calculate(black_box(&ctx), black_box(&calendar)).expect("valid month"));
    });
}

criterion_group!(benches, bench_monthly_settlement, bench_light_month);
criterion_main!(benches);
