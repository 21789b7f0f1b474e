use analytics::AnalyticsEngine;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configuration::AnalyticsSettings;
use core_types::{ToolRecord, ToolStatus};
use database::InMemoryStore;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{app, AppState};

fn inventory() -> Vec<ToolRecord> {
    vec![
        ToolRecord::new(1, "GitHub", "Engineering", dec!(100), 10)
            .with_vendor("GitHub")
            .with_category(1, "Development"),
        ToolRecord::new(2, "Jira", "Engineering", dec!(50), 5)
            .with_vendor("Atlassian")
            .with_category(2, "Project Management"),
        ToolRecord::new(3, "HubSpot", "Sales", dec!(30), 0)
            .with_vendor("HubSpot")
            .with_category(3, "CRM"),
        ToolRecord::new(4, "Sketch", "Design", dec!(99), 2)
            .with_vendor("Sketch")
            .with_category(4, "Design")
            .with_status(ToolStatus::Deprecated),
    ]
}

fn router_with(tools: Vec<ToolRecord>) -> Router {
    let state = AppState {
        store: Arc::new(InMemoryStore::new(tools)),
        engine: AnalyticsEngine::new(),
        analytics: AnalyticsSettings::default(),
    };
    app(Arc::new(state))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn department_costs_default_sort() {
    let (status, body) = get(router_with(inventory()), "/api/analytics/department-costs").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["department"], "Engineering");
    assert_eq!(data[0]["total_cost"].as_f64(), Some(150.0));
    assert_eq!(data[0]["tools_count"], 2);
    assert_eq!(data[0]["average_cost_per_tool"].as_f64(), Some(75.0));
    assert_eq!(data[0]["cost_percentage"].as_f64(), Some(83.3));
    assert_eq!(data[1]["cost_percentage"].as_f64(), Some(16.7));
    assert_eq!(body["summary"]["most_expensive_department"], "Engineering");
    assert_eq!(body["summary"]["total_company_cost"].as_f64(), Some(180.0));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn department_costs_rejects_unknown_sort_key() {
    let (status, body) =
        get(router_with(inventory()), "/api/analytics/department-costs?sort_by=vendor").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"]["sort_by"],
        "Must be one of: total_cost, department, tools_count, total_users, average_cost_per_tool, cost_percentage"
    );
}

#[tokio::test]
async fn department_costs_accepts_uppercase_order() {
    let (status, body) = get(
        router_with(inventory()),
        "/api/analytics/department-costs?sort_by=total_cost&order=ASC",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["department"], "Sales");
}

#[tokio::test]
async fn empty_inventory_adds_a_hint() {
    let (status, body) = get(router_with(Vec::new()), "/api/analytics/department-costs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["summary"]["total_company_cost"].as_f64(), Some(0.0));
    assert!(body["summary"]["most_expensive_department"].is_null());
    assert_eq!(body["message"], "No analytics data available - ensure tools data exists");

    let (_, body) = get(router_with(Vec::new()), "/api/analytics/vendor-summary").await;
    assert_eq!(body["message"], "No analytics data available - ensure tools data exists");

    let (_, body) = get(router_with(Vec::new()), "/api/analytics/tools-by-category").await;
    assert_eq!(body["message"], "No analytics data available - ensure tools data exists");
}

#[tokio::test]
async fn expensive_tools_validates_limit_and_min_cost() {
    for uri in [
        "/api/analytics/expensive-tools?limit=0",
        "/api/analytics/expensive-tools?limit=101",
        "/api/analytics/expensive-tools?limit=ten",
    ] {
        let (status, body) = get(router_with(inventory()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["details"]["limit"], "Must be positive integer between 1 and 100");
    }

    let (status, body) =
        get(router_with(inventory()), "/api/analytics/expensive-tools?min_cost=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["min_cost"], "Must be >= 0");
}

#[tokio::test]
async fn expensive_tools_keeps_zero_user_tools() {
    let (status, body) = get(
        router_with(inventory()),
        "/api/analytics/expensive-tools?limit=5&min_cost=30",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    let ids: Vec<i64> = data.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
    let hubspot = &data[2];
    assert_eq!(hubspot["cost_per_user"].as_f64(), Some(30.0));
    assert_eq!(hubspot["efficiency_rating"], "low");
    assert_eq!(body["analysis"]["total_tools_analyzed"], 3);
}

#[tokio::test]
async fn low_usage_tools_report() {
    let (status, body) =
        get(router_with(inventory()), "/api/analytics/low-usage-tools?max_users=5").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    let ids: Vec<i64> = data.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [3, 2]);
    assert_eq!(data[0]["warning_level"], "high");
    assert_eq!(data[0]["potential_action"], "Consider canceling or downgrading");
    assert_eq!(data[1]["warning_level"], "low");
    assert_eq!(body["savings_analysis"]["potential_monthly_savings"].as_f64(), Some(30.0));
    assert_eq!(body["savings_analysis"]["potential_annual_savings"].as_f64(), Some(360.0));

    let (status, body) =
        get(router_with(inventory()), "/api/analytics/low-usage-tools?max_users=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["max_users"], "Must be a non-negative integer");
}

#[tokio::test]
async fn vendor_summary_is_alphabetical() {
    let (status, body) = get(router_with(inventory()), "/api/analytics/vendor-summary").await;

    assert_eq!(status, StatusCode::OK);
    let vendors: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["vendor"].as_str().unwrap())
        .collect();
    assert_eq!(vendors, ["Atlassian", "GitHub", "HubSpot"]);
    assert_eq!(body["vendor_insights"]["single_tool_vendors"], 3);
    assert_eq!(body["vendor_insights"]["most_expensive_vendor"], "GitHub");
}

#[tokio::test]
async fn tools_by_category_report() {
    let (status, body) = get(router_with(inventory()), "/api/analytics/tools-by-category").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["insights"]["most_expensive_category"], "Development");
    assert_eq!(body["insights"]["most_efficient_category"], "Development");
}

#[tokio::test]
async fn tool_listing_includes_every_status() {
    let (status, body) =
        get(router_with(inventory()), "/api/tools?max_cost=99&sort_by=monthly_cost&sort_dir=desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["filtered"], 3);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [4, 2, 3]);
    assert_eq!(body["filters_applied"]["max_cost"], "99");
}

#[tokio::test]
async fn tool_listing_reports_default_sort() {
    let (status, body) = get(router_with(inventory()), "/api/tools?department=Sales").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filtered"], 1);
    assert_eq!(body["filters_applied"]["department"], "Sales");
    assert_eq!(body["filters_applied"]["sort_by"], "name");
    assert_eq!(body["filters_applied"]["sort_dir"], "ASC");
}

#[tokio::test]
async fn tool_detail_of_any_status() {
    let (status, body) = get(router_with(inventory()), "/api/tools/4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sketch");
    assert_eq!(body["status"], "deprecated");
    assert_eq!(body["monthly_cost"].as_f64(), Some(99.0));
    assert_eq!(body["total_monthly_cost"].as_f64(), Some(198.0));
}

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let (status, body) = get(router_with(inventory()), "/api/tools/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tool not found");
    assert_eq!(body["message"], "Tool with ID 42 does not exist");
}

#[tokio::test]
async fn health_check() {
    let router = router_with(Vec::new());
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
