use crate::classify::{EfficiencyRating, VendorEfficiency, WarningLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// All Decimal fields below are already rounded: currency to 2 places,
// percentages to 1 place. Counts are never rounded.

// --- Department cost report ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCostRow {
    pub department: String,
    pub total_cost: Decimal,
    pub tools_count: u32,
    pub total_users: u64,
    pub average_cost_per_tool: Decimal,
    pub cost_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCostSummary {
    pub total_company_cost: Decimal,
    pub departments_count: usize,
    pub most_expensive_department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCostReport {
    pub data: Vec<DepartmentCostRow>,
    pub summary: DepartmentCostSummary,
}

// --- Expensive tools report ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensiveToolRow {
    pub id: i64,
    pub name: String,
    pub monthly_cost: Decimal,
    pub active_users_count: u32,
    pub cost_per_user: Decimal,
    pub department: String,
    pub vendor: Option<String>,
    pub efficiency_rating: EfficiencyRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensiveToolsAnalysis {
    /// Qualifying tools before the result limit was applied.
    pub total_tools_analyzed: usize,
    pub avg_cost_per_user_company: Decimal,
    pub potential_savings_identified: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensiveToolsReport {
    pub data: Vec<ExpensiveToolRow>,
    pub analysis: ExpensiveToolsAnalysis,
}

// --- Category breakdown report ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category_name: String,
    pub tools_count: u32,
    pub total_cost: Decimal,
    pub total_users: u64,
    pub percentage_of_budget: Decimal,
    pub average_cost_per_user: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsights {
    pub most_expensive_category: Option<String>,
    pub most_efficient_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownReport {
    pub data: Vec<CategoryRow>,
    pub insights: CategoryInsights,
}

// --- Low usage report ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowUsageToolRow {
    pub id: i64,
    pub name: String,
    pub monthly_cost: Decimal,
    pub active_users_count: u32,
    pub cost_per_user: Decimal,
    pub department: String,
    pub vendor: Option<String>,
    pub warning_level: WarningLevel,
    pub potential_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAnalysis {
    pub total_underutilized_tools: usize,
    pub potential_monthly_savings: Decimal,
    pub potential_annual_savings: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowUsageReport {
    pub data: Vec<LowUsageToolRow>,
    pub savings_analysis: SavingsAnalysis,
}

// --- Vendor summary report ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRow {
    pub vendor: String,
    pub tools_count: u32,
    pub total_monthly_cost: Decimal,
    pub total_users: u64,
    /// Sorted, de-duplicated owning departments joined with `,`.
    pub departments: String,
    pub average_cost_per_user: Decimal,
    pub vendor_efficiency: VendorEfficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorInsights {
    pub most_expensive_vendor: Option<String>,
    pub most_efficient_vendor: Option<String>,
    pub single_tool_vendors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummaryReport {
    pub data: Vec<VendorRow>,
    pub vendor_insights: VendorInsights,
}

/// Every report computed over the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub department_costs: DepartmentCostReport,
    pub expensive_tools: ExpensiveToolsReport,
    pub tools_by_category: CategoryBreakdownReport,
    pub low_usage_tools: LowUsageReport,
    pub vendor_summary: VendorSummaryReport,
}

/// Shared "nothing to report" detection, used by the serving layer to attach
/// a hint message.
pub trait ReportData {
    fn is_empty(&self) -> bool;
}

impl ReportData for DepartmentCostReport {
    fn is_empty(&self) -> bool {
        self.summary.total_company_cost.is_zero()
    }
}

impl ReportData for CategoryBreakdownReport {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ReportData for VendorSummaryReport {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
