//! Server binary: wires the in-memory stores, seeds demo data and serves the
//! HTTP API.

use std::error::Error;

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use workforce_engine::api::{AppState, create_router};
use workforce_engine::config::Settings;
use workforce_engine::error::EngineResult;
use workforce_engine::models::{
    AttendanceRecord, Branch, SalaryConfig, SalaryType, ShiftTemplate, Staff,
};
use workforce_engine::store::Stores;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load_or_default("config/engine.yaml")?;
    let stores = Stores::in_memory();
    seed_demo_data(&stores, &settings)?;

    let state = AppState::new(settings.clone(), stores);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "workforce engine listening");
    axum::serve(listener, router).await?;
    Ok(())
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap_or_default()
}

/// Seeds a small demo dataset so the reports have something to show on a
/// fresh start.
fn seed_demo_data(stores: &Stores, settings: &Settings) -> EngineResult<()> {
    stores.branches.insert(Branch {
        id: "br_01".to_string(),
        name: "Chi nhánh Quận 1".to_string(),
        address: "12 Lê Lợi, Quận 1".to_string(),
        manager_id: Some("stf_001".to_string()),
    })?;

    let roster = [
        ("stf_001", "Nguyễn Văn An", "Quản lý", Some("br_01")),
        ("stf_002", "Trần Thị Bình", "Thu ngân", Some("br_01")),
        ("stf_003", "Lê Minh Châu", "Phục vụ", None),
    ];
    for (id, name, role, branch_id) in roster {
        stores.staff.insert(Staff {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            phone: None,
            status: "Đang làm".to_string(),
            avatar: None,
            branch_id: branch_id.map(str::to_string),
        })?;
    }

    for (id, name, start, end, max_capacity) in [
        ("tpl_morning", "Ca sáng", "06:00", "14:00", 3),
        ("tpl_evening", "Ca chiều", "14:00", "22:00", 3),
    ] {
        stores.templates.insert(ShiftTemplate {
            id: id.to_string(),
            name: name.to_string(),
            start: time(start),
            end: time(end),
            max_capacity,
        })?;
    }

    stores.salary.upsert(SalaryConfig {
        staff_id: "stf_001".to_string(),
        salary_type: SalaryType::Monthly,
        amount: rust_decimal::Decimal::new(8_000_000, 0),
    })?;
    stores.salary.upsert(SalaryConfig {
        staff_id: "stf_002".to_string(),
        salary_type: SalaryType::Hourly,
        amount: rust_decimal::Decimal::new(25_000, 0),
    })?;

    // A few punches in the current month, one of them late.
    let today = Utc::now().date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let punches = [
        ("stf_001", first, "08:00", "17:00", None),
        ("stf_002", first, "08:25", "17:00", Some(settings.late_label.clone())),
    ];
    for (staff_id, date, check_in, check_out, status) in punches {
        stores.attendance.insert(AttendanceRecord {
            staff_id: staff_id.to_string(),
            date,
            check_in: Some(check_in.to_string()),
            check_out: Some(check_out.to_string()),
            status,
        })?;
    }

    info!("demo data seeded");
    Ok(())
}
