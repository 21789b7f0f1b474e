//! Filtering and ordering of the raw inventory for the tool list view.

use crate::error::AnalyticsError;
use crate::numeric::round_currency;
use core_types::{SortOrder, ToolRecord, ToolStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolSortKey {
    #[default]
    Name,
    MonthlyCost,
    CreatedAt,
}

impl ToolSortKey {
    /// Unknown keys fall back to sorting by name.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "monthly_cost" => ToolSortKey::MonthlyCost,
            "created_at" => ToolSortKey::CreatedAt,
            _ => ToolSortKey::Name,
        }
    }

    fn compare(&self, a: &ToolRecord, b: &ToolRecord) -> Ordering {
        match self {
            ToolSortKey::Name => a.name.cmp(&b.name),
            ToolSortKey::MonthlyCost => a.monthly_cost.cmp(&b.monthly_cost),
            ToolSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

/// The raw, caller-supplied filters, exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolQueryInput {
    pub department: Option<String>,
    pub status: Option<String>,
    pub min_cost: Option<String>,
    pub max_cost: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

const DEFAULT_SORT_BY: &str = "name";
const DEFAULT_SORT_DIR: &str = "ASC";

#[derive(Debug, Clone, PartialEq)]
enum CategoryFilter {
    Id(i64),
    Name(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolQuery {
    department: Option<String>,
    status: Option<ToolStatus>,
    min_cost: Option<Decimal>,
    max_cost: Option<Decimal>,
    category: Option<CategoryFilter>,
    sort_by: ToolSortKey,
    sort_dir: SortOrder,
    applied: BTreeMap<String, String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_cost(field: &str, raw: Option<&str>) -> Result<Option<Decimal>, AnalyticsError> {
    raw.map(|v| {
        v.parse::<Decimal>()
            .map_err(|_| AnalyticsError::invalid(field, "Must be a number"))
    })
    .transpose()
}

impl ToolQuery {
    /// Builds a query from raw input. Cost bounds and status are checked; the
    /// sort column and direction fall back to `name` / `asc` when unrecognised.
    pub fn parse(input: &ToolQueryInput) -> Result<Self, AnalyticsError> {
        let status = non_empty(&input.status)
            .map(|raw| raw.parse::<ToolStatus>())
            .transpose()
            .map_err(|_| AnalyticsError::invalid("status", "Invalid status"))?;
        let min_cost = parse_cost("min_cost", non_empty(&input.min_cost))?;
        let max_cost = parse_cost("max_cost", non_empty(&input.max_cost))?;
        let category = non_empty(&input.category).map(|raw| match raw.parse::<i64>() {
            Ok(id) => CategoryFilter::Id(id),
            Err(_) => CategoryFilter::Name(raw.to_string()),
        });
        let sort_by = non_empty(&input.sort_by)
            .map(ToolSortKey::parse_lenient)
            .unwrap_or_default();
        let sort_dir = non_empty(&input.sort_dir)
            .and_then(|raw| raw.parse::<SortOrder>().ok())
            .unwrap_or(SortOrder::Asc);

        let mut applied = BTreeMap::new();
        for (key, value) in [
            ("department", &input.department),
            ("status", &input.status),
            ("min_cost", &input.min_cost),
            ("max_cost", &input.max_cost),
            ("category", &input.category),
            ("sort_by", &input.sort_by),
            ("sort_dir", &input.sort_dir),
        ] {
            if let Some(value) = non_empty(value) {
                applied.insert(key.to_string(), value.to_string());
            }
        }
        // The sort always has a value, so it is always reported.
        applied.entry("sort_by".to_string()).or_insert_with(|| DEFAULT_SORT_BY.to_string());
        applied.entry("sort_dir".to_string()).or_insert_with(|| DEFAULT_SORT_DIR.to_string());

        Ok(Self {
            department: non_empty(&input.department).map(str::to_string),
            status,
            min_cost,
            max_cost,
            category,
            sort_by,
            sort_dir,
            applied,
        })
    }

    fn matches(&self, tool: &ToolRecord) -> bool {
        if self.department.as_ref().is_some_and(|d| &tool.owner_department != d) {
            return false;
        }
        if self.status.is_some_and(|s| tool.status != s) {
            return false;
        }
        if self.min_cost.is_some_and(|min| tool.monthly_cost < min) {
            return false;
        }
        if self.max_cost.is_some_and(|max| tool.monthly_cost > max) {
            return false;
        }
        match &self.category {
            Some(CategoryFilter::Id(id)) => tool.category_id == Some(*id),
            Some(CategoryFilter::Name(name)) => tool.category_name.as_deref() == Some(name.as_str()),
            None => true,
        }
    }
}

impl Default for ToolQuery {
    fn default() -> Self {
        let applied = BTreeMap::from([
            ("sort_by".to_string(), DEFAULT_SORT_BY.to_string()),
            ("sort_dir".to_string(), DEFAULT_SORT_DIR.to_string()),
        ]);
        Self {
            department: None,
            status: None,
            min_cost: None,
            max_cost: None,
            category: None,
            sort_by: ToolSortKey::Name,
            sort_dir: SortOrder::Asc,
            applied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolListing {
    pub data: Vec<ToolRecord>,
    /// Size of the whole inventory, before filtering.
    pub total: usize,
    pub filtered: usize,
    pub filters_applied: BTreeMap<String, String>,
}

/// One tool with its cost across all of its users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDetail {
    #[serde(flatten)]
    pub tool: ToolRecord,
    /// `monthly_cost` multiplied by `active_users_count`.
    pub total_monthly_cost: Decimal,
}

pub fn tool_detail(tool: ToolRecord) -> ToolDetail {
    let total_monthly_cost =
        round_currency(tool.monthly_cost * Decimal::from(tool.active_users_count));
    ToolDetail {
        tool,
        total_monthly_cost,
    }
}

/// Filters the full inventory (every status) and sorts the matches.
pub fn list_tools(tools: &[ToolRecord], query: &ToolQuery) -> ToolListing {
    let mut data: Vec<ToolRecord> = tools.iter().filter(|t| query.matches(t)).cloned().collect();
    data.sort_by(|a, b| query.sort_dir.apply(query.sort_by.compare(a, b)));

    ToolListing {
        total: tools.len(),
        filtered: data.len(),
        data,
        filters_applied: query.applied.clone(),
    }
}
