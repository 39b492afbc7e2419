//! Performance benchmarks for the hours engine.
//!
//! Measures the monthly aggregation on school years of increasing size and
//! the full HTTP path through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hours_engine::api::{AppState, USER_ID_HEADER, USER_ROLE_HEADER, create_router};
use hours_engine::calculation::compute_monthly_summaries;
use hours_engine::config::{AttendanceSnapshot, ConfigLoader, EngineConfig, UserAttendance};
use hours_engine::models::{AttendanceRecord, BreakInterval, SchoolYear};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Builds one record per weekday of the 2023-2024 school year, cycling
/// through plain days, days with a lunch break, and absences.
fn school_year_records(count: usize) -> Vec<AttendanceRecord> {
    let start = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();

    (0..)
        .map(|offset| start + Duration::days(offset))
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .take(count)
        .enumerate()
        .map(|(i, date)| {
            let mut record = AttendanceRecord::new(date, time(8, 30), time(17, 0));
            match i % 10 {
                0 => record.absence = true,
                1 => {
                    record.absence = true;
                    record.excused_absence = true;
                }
                _ => record.breaks.push(BreakInterval {
                    start_time: time(12, 0),
                    end_time: time(12, 45),
                }),
            }
            record
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let year = SchoolYear::parse("2023-2024").unwrap();
    let mut group = c.benchmark_group("monthly_aggregation");

    for count in [20, 100, 260] {
        let records = school_year_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| {
                compute_monthly_summaries(
                    black_box(records),
                    black_box(year.start_date()),
                    black_box(year.end_date()),
                )
            })
        });
    }

    group.finish();
}

fn bench_api(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let snapshot = AttendanceSnapshot {
        users: vec![UserAttendance {
            user_id: 1,
            records: school_year_records(260),
        }],
    };
    let state = AppState::new(ConfigLoader::from_parts(EngineConfig::default(), snapshot));

    c.bench_function("api_worked_hours_full_year", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(state.clone());
            async move {
                let request = Request::builder()
                    .method("GET")
                    .uri("/worked-hours?schoolYear=2023-2024")
                    .header(USER_ID_HEADER, "1")
                    .header(USER_ROLE_HEADER, "member")
                    .body(Body::empty())
                    .unwrap();
                let response = router.oneshot(request).await.unwrap();
                black_box(response)
            }
        })
    });
}

criterion_group!(benches, bench_aggregation, bench_api);
criterion_main!(benches);
