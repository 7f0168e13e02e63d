//! Performance benchmarks for the workforce engine.
//!
//! This suite tracks the hot paths:
//! - Raw punch-pair accounting (`hours_worked`)
//! - Timesheet matrix construction for a month of punches
//! - Monthly payroll reports at growing staff counts
//! - The full HTTP admission round trip
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use axum::{body::Body, http::Request};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tower::ServiceExt;

use workforce_engine::api::{AppState, create_router};
use workforce_engine::config::Settings;
use workforce_engine::engine::hours_worked;
use workforce_engine::models::{
    AttendanceRecord, Branch, DateRange, SalaryConfig, SalaryType, ShiftTemplate, Staff,
};
use workforce_engine::store::Stores;

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

/// Seeds `staff_count` staff members, each with a full month of punches and
/// an hourly salary config.
fn seeded_stores(staff_count: usize) -> Stores {
    let stores = Stores::in_memory();
    stores
        .branches
        .insert(Branch {
            id: "br_01".to_string(),
            name: "Chi nhánh Quận 1".to_string(),
            address: "12 Lê Lợi".to_string(),
            manager_id: None,
        })
        .unwrap();
    stores
        .templates
        .insert(ShiftTemplate {
            id: "tpl_morning".to_string(),
            name: "Ca sáng".to_string(),
            start: time("06:00"),
            end: time("14:00"),
            max_capacity: staff_count as u32,
        })
        .unwrap();

    for i in 0..staff_count {
        let staff_id = format!("stf_{:04}", i);
        stores
            .staff
            .insert(Staff {
                id: staff_id.clone(),
                name: format!("Nhân viên {}", i),
                role: "Phục vụ".to_string(),
                phone: None,
                status: "Đang làm".to_string(),
                avatar: None,
                branch_id: Some("br_01".to_string()),
            })
            .unwrap();
        stores
            .salary
            .upsert(SalaryConfig {
                staff_id: staff_id.clone(),
                salary_type: SalaryType::Hourly,
                amount: Decimal::new(25_000, 0),
            })
            .unwrap();
        for day in 1..=28 {
            stores
                .attendance
                .insert(AttendanceRecord {
                    staff_id: staff_id.clone(),
                    date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
                    check_in: Some("08:00".to_string()),
                    check_out: Some("17:00".to_string()),
                    status: None,
                })
                .unwrap();
        }
    }
    stores
}

fn january() -> DateRange {
    DateRange {
        start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    }
}

/// Benchmark: single punch-pair accounting, including the overnight wrap.
fn bench_hours_worked(c: &mut Criterion) {
    c.bench_function("hours_worked_day_shift", |b| {
        b.iter(|| black_box(hours_worked(black_box("08:00"), black_box("17:00"))))
    });
    c.bench_function("hours_worked_overnight", |b| {
        b.iter(|| black_box(hours_worked(black_box("22:00"), black_box("06:00"))))
    });
}

/// Benchmark: building the timesheet matrix for one month of punches.
fn bench_timesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("timesheet");
    for staff_count in [10usize, 50] {
        let stores = seeded_stores(staff_count);
        let state = AppState::new(Settings::default(), stores);
        let engine = state.time_accounting();
        let range = january();
        group.throughput(Throughput::Elements(staff_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(staff_count),
            &staff_count,
            |b, _| {
                b.iter(|| {
                    black_box(
                        engine
                            .build_timesheet(&Default::default(), &range)
                            .unwrap(),
                    )
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: monthly payroll reports at growing staff counts.
fn bench_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll");
    for staff_count in [10usize, 50, 200] {
        let stores = seeded_stores(staff_count);
        let state = AppState::new(Settings::default(), stores);
        let calculator = state.payroll_calculator();
        let period = workforce_engine::models::PayrollPeriod::new(1, 2026).unwrap();
        group.throughput(Throughput::Elements(staff_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(staff_count),
            &staff_count,
            |b, _| b.iter(|| black_box(calculator.report(&period).unwrap())),
        );
    }
    group.finish();
}

/// Benchmark: the full HTTP admission round trip.
///
/// The first pass admits 200 distinct (staff, date) pairs; later passes hit
/// the duplicate rejection, so both admission outcomes are measured.
fn bench_admission_roundtrip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let stores = seeded_stores(200);
    let state = AppState::new(Settings::default(), stores);
    let router = create_router(state);

    let bodies: Vec<String> = (0..200)
        .map(|i| {
            serde_json::json!({
                "staffId": format!("stf_{:04}", i),
                "shiftTemplateId": "tpl_morning",
                "date": format!("2026-02-{:02}", (i % 28) + 1),
                "branchId": "br_01"
            })
            .to_string()
        })
        .collect();

    let mut group = c.benchmark_group("admission");
    group.throughput(Throughput::Elements(bodies.len() as u64));
    group.bench_function("http_roundtrip_200", |b| {
        b.to_async(&rt).iter(|| async {
            for body in &bodies {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/api/roster/assignments")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response);
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hours_worked,
    bench_timesheet,
    bench_payroll,
    bench_admission_roundtrip
);
criterion_main!(benches);
