use crate::{error::AppError, AppState};
use analytics::{
    CategoryBreakdownReport, DepartmentCostParams, DepartmentCostReport, ExpensiveToolsParams,
    ExpensiveToolsReport, LowUsageParams, LowUsageReport, ReportData, ToolDetail, ToolListing,
    ToolQuery, ToolQueryInput, VendorSummaryReport,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Attached to reports that came back with nothing in them.
pub const NO_DATA_MESSAGE: &str = "No analytics data available - ensure tools data exists";

/// A report body, optionally followed by a hint message.
#[derive(Debug, Serialize)]
pub struct ReportResponse<T> {
    #[serde(flatten)]
    pub report: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> ReportResponse<T> {
    fn plain(report: T) -> Json<Self> {
        Json(Self { report, message: None })
    }
}

impl<T: ReportData> ReportResponse<T> {
    fn with_empty_hint(report: T) -> Json<Self> {
        let message = report.is_empty().then_some(NO_DATA_MESSAGE);
        Json(Self { report, message })
    }
}

fn parse_integer(field: &str, raw: Option<&str>, message: &str) -> Result<Option<i64>, AppError> {
    raw.map(|v| v.trim().parse::<i64>().map_err(|_| AppError::validation(field, message)))
        .transpose()
}

#[derive(Debug, Deserialize)]
pub struct DepartmentCostsQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// # GET /api/analytics/department-costs
pub async fn department_costs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DepartmentCostsQuery>,
) -> Result<Json<ReportResponse<DepartmentCostReport>>, AppError> {
    let params = DepartmentCostParams::parse(query.sort_by.as_deref(), query.order.as_deref())?;
    let tools = state.store.fetch_active_tools().await?;
    let report = state.engine.department_costs(&tools, &params);
    Ok(ReportResponse::with_empty_hint(report))
}

#[derive(Debug, Deserialize)]
pub struct ExpensiveToolsQuery {
    pub limit: Option<String>,
    pub min_cost: Option<String>,
}

/// # GET /api/analytics/expensive-tools
pub async fn expensive_tools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExpensiveToolsQuery>,
) -> Result<Json<ReportResponse<ExpensiveToolsReport>>, AppError> {
    let limit = parse_integer(
        "limit",
        query.limit.as_deref(),
        "Must be positive integer between 1 and 100",
    )?
    .or(Some(i64::from(state.analytics.expensive_tools_limit)));
    let min_cost = query
        .min_cost
        .as_deref()
        .map(|v| v.trim().parse::<Decimal>().map_err(|_| AppError::validation("min_cost", "Must be >= 0")))
        .transpose()?;

    let params = ExpensiveToolsParams::new(limit, min_cost)?;
    let tools = state.store.fetch_active_tools().await?;
    Ok(ReportResponse::plain(state.engine.expensive_tools(&tools, &params)))
}

/// # GET /api/analytics/tools-by-category
pub async fn tools_by_category(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse<CategoryBreakdownReport>>, AppError> {
    let tools = state.store.fetch_active_tools().await?;
    Ok(ReportResponse::with_empty_hint(state.engine.tools_by_category(&tools)))
}

#[derive(Debug, Deserialize)]
pub struct LowUsageQuery {
    pub max_users: Option<String>,
}

/// # GET /api/analytics/low-usage-tools
pub async fn low_usage_tools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LowUsageQuery>,
) -> Result<Json<ReportResponse<LowUsageReport>>, AppError> {
    let max_users = parse_integer(
        "max_users",
        query.max_users.as_deref(),
        "Must be a non-negative integer",
    )?
    .or(Some(i64::from(state.analytics.low_usage_max_users)));

    let params = LowUsageParams::new(max_users)?;
    let tools = state.store.fetch_active_tools().await?;
    Ok(ReportResponse::plain(state.engine.low_usage_tools(&tools, &params)))
}

/// # GET /api/analytics/vendor-summary
pub async fn vendor_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReportResponse<VendorSummaryReport>>, AppError> {
    let tools = state.store.fetch_active_tools().await?;
    Ok(ReportResponse::with_empty_hint(state.engine.vendor_summary(&tools)))
}

/// # GET /api/tools
/// Lists the whole inventory, every status included, with optional filters.
pub async fn list_tools(
    State(state): State<Arc<AppState>>,
    Query(input): Query<ToolQueryInput>,
) -> Result<Json<ToolListing>, AppError> {
    let query = ToolQuery::parse(&input)?;
    let tools = state.store.fetch_all_tools().await?;
    Ok(Json(state.engine.list_tools(&tools, &query)))
}

/// # GET /api/tools/:id
/// A single tool of any status, with its cost across all of its users.
pub async fn tool_detail(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ToolDetail>, AppError> {
    let tool = state
        .store
        .fetch_tool(id)
        .await?
        .ok_or_else(|| AppError::tool_not_found(id))?;
    Ok(Json(state.engine.tool_detail(tool)))
}
