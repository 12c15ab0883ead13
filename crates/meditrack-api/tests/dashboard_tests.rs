//! Admin dashboard and financials: concurrent fetches fail independently.

mod common;

use common::{client_for, session_as};
use meditrack_api::pages::{AdminDashboard, BonusReportPage, FinancialsPage};
use meditrack_core::Role;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bonus_rows(n: usize) -> Value {
    let rows: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "doctor_id": i,
                "doctor_name": format!("Dr. {i}"),
                "hospital": "Central",
                "exam_count": 2,
                "total_bonus": 100000
            })
        })
        .collect();
    json!({"period": "2026-10", "data": rows})
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api{route}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api{route}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"error": "down"})))
        .mount(server)
        .await;
}

fn revenue() -> Value {
    json!({
        "series": [
            {"label": "Mon", "total": 400000},
            {"label": "Tue", "total": 100000},
            {"label": "Wed", "total": 0}
        ],
        "total_revenue": 500000
    })
}

#[tokio::test]
async fn test_dashboard_fills_every_section() {
    let server = MockServer::start().await;
    mount_json(&server, "/exams/today", json!([{"id": "EX-1"}, {"id": "EX-2"}, {"id": "EX-3"}])).await;
    mount_json(&server, "/exams/pending", json!({"count": 1, "exams": [{"id": "EX-3"}]})).await;
    mount_json(&server, "/admin/bonus-report", bonus_rows(7)).await;
    mount_json(&server, "/admin/revenue-week", revenue()).await;

    let view = AdminDashboard::new(client_for(&server, session_as(Role::Admin)))
        .load()
        .await;

    assert_eq!(view.today_count, 3);
    assert_eq!(view.pending_count, 1);
    assert_eq!(view.top_referrers.len(), 5);
    assert_eq!(view.revenue.max, 400000.0);
    assert_eq!(view.revenue.bars[0].label, "Да");
    assert_eq!(view.revenue.bars[1].ratio, 0.25);
    assert!(view.failed.is_empty());
}

#[tokio::test]
async fn test_dashboard_isolates_failed_fetches() {
    let server = MockServer::start().await;
    mount_json(&server, "/exams/today", json!([{"id": "EX-1"}])).await;
    mount_status(&server, "/exams/pending", 500).await;
    mount_status(&server, "/admin/bonus-report", 500).await;
    mount_json(&server, "/admin/revenue-week", revenue()).await;

    let view = AdminDashboard::new(client_for(&server, session_as(Role::Admin)))
        .load()
        .await;

    assert_eq!(view.today_count, 1);
    assert_eq!(view.pending_count, 0);
    assert!(view.top_referrers.is_empty());
    assert_eq!(view.revenue.total_revenue, 500000.0);
    assert_eq!(view.failed, vec!["pending", "bonus report"]);
}

#[tokio::test]
async fn test_financials_totals_survive_revenue_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "/admin/bonus-report", bonus_rows(3)).await;
    mount_status(&server, "/admin/revenue-week", 503).await;

    let view = FinancialsPage::new(client_for(&server, session_as(Role::Admin)))
        .load()
        .await;

    assert_eq!(view.summary.total_exams, 6);
    assert_eq!(view.summary.total_bonus, 300000.0);
    assert!(view.revenue.is_empty());
    assert_eq!(view.revenue.max, 1.0);
    assert_eq!(view.failed, vec!["revenue"]);
}

#[tokio::test]
async fn test_bonus_report_page() {
    let server = MockServer::start().await;
    mount_json(&server, "/admin/bonus-report", bonus_rows(2)).await;

    let state = BonusReportPage::new(client_for(&server, session_as(Role::Admin)))
        .load()
        .await;
    let view = state.data().unwrap();
    assert_eq!(view.period, "2026-10");
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.summary.total_bonus, 200000.0);
}

#[tokio::test]
async fn test_bonus_report_failure_message() {
    let server = MockServer::start().await;
    mount_status(&server, "/admin/bonus-report", 500).await;

    let state = BonusReportPage::new(client_for(&server, session_as(Role::Admin)))
        .load()
        .await;
    assert_eq!(state.error(), Some("down"));
}
