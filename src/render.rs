//! Terminal rendering of analytics reports.

use analytics::{
    AnalyticsOverview, CategoryBreakdownReport, DepartmentCostReport, ExpensiveToolsReport,
    LowUsageReport, VendorSummaryReport, WarningLevel,
};
use comfy_table::{Cell, Color, Table};
use serde::Serialize;

/// Renders `report` as pretty JSON or through the given table renderer.
pub fn output<T: Serialize>(report: &T, json: bool, table: fn(&T) -> String) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(table(report))
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

pub fn department_costs(report: &DepartmentCostReport) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Department", "Total Cost", "Tools", "Users", "Avg / Tool", "% of Spend"]);
    for row in &report.data {
        table.add_row(vec![
            Cell::new(&row.department),
            Cell::new(row.total_cost),
            Cell::new(row.tools_count),
            Cell::new(row.total_users),
            Cell::new(row.average_cost_per_tool),
            Cell::new(format!("{}%", row.cost_percentage)),
        ]);
    }

    let summary = &report.summary;
    format!(
        "{table}\nTotal company cost: {}  Departments: {}  Most expensive: {}",
        summary.total_company_cost,
        summary.departments_count,
        or_dash(summary.most_expensive_department.as_deref()),
    )
}

pub fn expensive_tools(report: &ExpensiveToolsReport) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Tool", "Monthly Cost", "Users", "Cost / User", "Department", "Vendor", "Rating"]);
    for row in &report.data {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.name),
            Cell::new(row.monthly_cost),
            Cell::new(row.active_users_count),
            Cell::new(row.cost_per_user),
            Cell::new(&row.department),
            Cell::new(or_dash(row.vendor.as_deref())),
            Cell::new(row.efficiency_rating),
        ]);
    }

    let analysis = &report.analysis;
    format!(
        "{table}\nAnalyzed: {}  Company avg cost / user: {}  Potential savings: {}",
        analysis.total_tools_analyzed,
        analysis.avg_cost_per_user_company,
        analysis.potential_savings_identified,
    )
}

pub fn tools_by_category(report: &CategoryBreakdownReport) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Tools", "Total Cost", "Users", "% of Budget", "Avg Cost / User"]);
    for row in &report.data {
        table.add_row(vec![
            Cell::new(&row.category_name),
            Cell::new(row.tools_count),
            Cell::new(row.total_cost),
            Cell::new(row.total_users),
            Cell::new(format!("{}%", row.percentage_of_budget)),
            Cell::new(row.average_cost_per_user),
        ]);
    }

    let insights = &report.insights;
    format!(
        "{table}\nMost expensive: {}  Most efficient: {}",
        or_dash(insights.most_expensive_category.as_deref()),
        or_dash(insights.most_efficient_category.as_deref()),
    )
}

pub fn low_usage_tools(report: &LowUsageReport) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Tool", "Monthly Cost", "Users", "Cost / User", "Department", "Warning", "Action"]);
    for row in &report.data {
        let warning = Cell::new(row.warning_level);
        let warning = match row.warning_level {
            WarningLevel::High => warning.fg(Color::Red),
            WarningLevel::Medium => warning.fg(Color::Yellow),
            WarningLevel::Low => warning.fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.name),
            Cell::new(row.monthly_cost),
            Cell::new(row.active_users_count),
            Cell::new(row.cost_per_user),
            Cell::new(&row.department),
            warning,
            Cell::new(&row.potential_action),
        ]);
    }

    let savings = &report.savings_analysis;
    format!(
        "{table}\nUnderutilized: {}  Monthly savings: {}  Annual savings: {}",
        savings.total_underutilized_tools,
        savings.potential_monthly_savings,
        savings.potential_annual_savings,
    )
}

pub fn vendor_summary(report: &VendorSummaryReport) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Vendor", "Tools", "Monthly Cost", "Users", "Departments", "Avg Cost / User", "Efficiency"]);
    for row in &report.data {
        table.add_row(vec![
            Cell::new(or_dash(Some(&row.vendor))),
            Cell::new(row.tools_count),
            Cell::new(row.total_monthly_cost),
            Cell::new(row.total_users),
            Cell::new(&row.departments),
            Cell::new(row.average_cost_per_user),
            Cell::new(row.vendor_efficiency),
        ]);
    }

    let insights = &report.vendor_insights;
    format!(
        "{table}\nMost expensive: {}  Most efficient: {}  Single-tool vendors: {}",
        or_dash(insights.most_expensive_vendor.as_deref()),
        or_dash(insights.most_efficient_vendor.as_deref()),
        insights.single_tool_vendors,
    )
}

pub fn overview(overview: &AnalyticsOverview) -> String {
    [
        ("Department Costs", department_costs(&overview.department_costs)),
        ("Expensive Tools", expensive_tools(&overview.expensive_tools)),
        ("Tools by Category", tools_by_category(&overview.tools_by_category)),
        ("Low Usage Tools", low_usage_tools(&overview.low_usage_tools)),
        ("Vendor Summary", vendor_summary(&overview.vendor_summary)),
    ]
    .into_iter()
    .map(|(title, body)| format!("== {title} ==\n{body}"))
    .collect::<Vec<_>>()
    .join("\n\n")
}
