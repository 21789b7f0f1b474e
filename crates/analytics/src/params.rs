//! Validated inputs for the reports.
//!
//! Construction is the only place parameters are checked; a built parameter
//! value is always within contract, so the reports never re-validate.

use crate::error::AnalyticsError;
use core_types::SortOrder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_EXPENSIVE_TOOLS_LIMIT: u32 = 10;
pub const MAX_EXPENSIVE_TOOLS_LIMIT: u32 = 100;
pub const DEFAULT_LOW_USAGE_MAX_USERS: u32 = 5;

/// The columns a department cost report may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentSortKey {
    #[default]
    TotalCost,
    Department,
    ToolsCount,
    TotalUsers,
    AverageCostPerTool,
    CostPercentage,
}

impl DepartmentSortKey {
    pub const ALL: [DepartmentSortKey; 6] = [
        DepartmentSortKey::TotalCost,
        DepartmentSortKey::Department,
        DepartmentSortKey::ToolsCount,
        DepartmentSortKey::TotalUsers,
        DepartmentSortKey::AverageCostPerTool,
        DepartmentSortKey::CostPercentage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentSortKey::TotalCost => "total_cost",
            DepartmentSortKey::Department => "department",
            DepartmentSortKey::ToolsCount => "tools_count",
            DepartmentSortKey::TotalUsers => "total_users",
            DepartmentSortKey::AverageCostPerTool => "average_cost_per_tool",
            DepartmentSortKey::CostPercentage => "cost_percentage",
        }
    }
}

impl FromStr for DepartmentSortKey {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepartmentSortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                AnalyticsError::invalid(
                    "sort_by",
                    "Must be one of: total_cost, department, tools_count, total_users, average_cost_per_tool, cost_percentage",
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepartmentCostParams {
    pub sort_by: DepartmentSortKey,
    pub order: SortOrder,
}

impl DepartmentCostParams {
    /// Parses raw caller strings; absent values take the defaults
    /// (`total_cost`, `desc`).
    pub fn parse(sort_by: Option<&str>, order: Option<&str>) -> Result<Self, AnalyticsError> {
        let sort_by = match sort_by.filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => DepartmentSortKey::default(),
        };
        let order = match order {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::Desc,
        };
        Ok(Self { sort_by, order })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpensiveToolsParams {
    limit: u32,
    min_cost: Option<Decimal>,
}

impl ExpensiveToolsParams {
    pub fn new(limit: Option<i64>, min_cost: Option<Decimal>) -> Result<Self, AnalyticsError> {
        let limit = limit.unwrap_or(i64::from(DEFAULT_EXPENSIVE_TOOLS_LIMIT));
        if !(1..=i64::from(MAX_EXPENSIVE_TOOLS_LIMIT)).contains(&limit) {
            return Err(AnalyticsError::invalid(
                "limit",
                "Must be positive integer between 1 and 100",
            ));
        }
        if min_cost.is_some_and(|cost| cost < Decimal::ZERO) {
            return Err(AnalyticsError::invalid("min_cost", "Must be >= 0"));
        }
        Ok(Self {
            limit: limit as u32,
            min_cost,
        })
    }

    pub fn limit(&self) -> usize {
        self.limit as usize
    }

    pub fn min_cost(&self) -> Option<Decimal> {
        self.min_cost
    }
}

impl Default for ExpensiveToolsParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_EXPENSIVE_TOOLS_LIMIT,
            min_cost: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowUsageParams {
    max_users: u32,
}

impl LowUsageParams {
    pub fn new(max_users: Option<i64>) -> Result<Self, AnalyticsError> {
        let max_users = max_users.unwrap_or(i64::from(DEFAULT_LOW_USAGE_MAX_USERS));
        if max_users < 0 {
            return Err(AnalyticsError::invalid("max_users", "Must be a non-negative integer"));
        }
        // No tool can have more than u32::MAX users, so larger thresholds are equivalent.
        let max_users = u32::try_from(max_users).unwrap_or(u32::MAX);
        Ok(Self { max_users })
    }

    pub fn max_users(&self) -> u32 {
        self.max_users
    }
}

impl Default for LowUsageParams {
    fn default() -> Self {
        Self {
            max_users: DEFAULT_LOW_USAGE_MAX_USERS,
        }
    }
}

/// Parameters for computing every report in one go.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewParams {
    pub departments: DepartmentCostParams,
    pub expensive_tools: ExpensiveToolsParams,
    pub low_usage: LowUsageParams,
}
