use crate::grouping::group_active;
use crate::insights::highest_by;
use crate::numeric::{divide, percentage_of, round_currency, round_percent};
use crate::params::{DepartmentCostParams, DepartmentSortKey};
use crate::report::{DepartmentCostReport, DepartmentCostRow, DepartmentCostSummary};
use core_types::ToolRecord;
use rust_decimal::Decimal;
use std::cmp::Ordering;

#[derive(Default)]
struct DepartmentTotals {
    total_cost: Decimal,
    tools_count: u32,
    total_users: u64,
}

impl DepartmentSortKey {
    /// Ascending comparison of two report rows on this column.
    pub fn compare(&self, a: &DepartmentCostRow, b: &DepartmentCostRow) -> Ordering {
        match self {
            DepartmentSortKey::TotalCost => a.total_cost.cmp(&b.total_cost),
            DepartmentSortKey::Department => a.department.cmp(&b.department),
            DepartmentSortKey::ToolsCount => a.tools_count.cmp(&b.tools_count),
            DepartmentSortKey::TotalUsers => a.total_users.cmp(&b.total_users),
            DepartmentSortKey::AverageCostPerTool => {
                a.average_cost_per_tool.cmp(&b.average_cost_per_tool)
            }
            DepartmentSortKey::CostPercentage => a.cost_percentage.cmp(&b.cost_percentage),
        }
    }
}

/// Spend per owning department, sorted by the caller's column.
pub fn department_costs(tools: &[ToolRecord], params: &DepartmentCostParams) -> DepartmentCostReport {
    let groups = group_active(
        tools,
        |tool| tool.owner_department.clone(),
        |totals: &mut DepartmentTotals, tool| {
            totals.total_cost += tool.monthly_cost;
            totals.tools_count += 1;
            totals.total_users += u64::from(tool.active_users_count);
        },
    );

    let total_company_cost: Decimal = groups.iter().map(|(_, t)| t.total_cost).sum();

    let mut data: Vec<DepartmentCostRow> = groups
        .into_iter()
        .map(|(department, totals)| DepartmentCostRow {
            department,
            total_cost: round_currency(totals.total_cost),
            tools_count: totals.tools_count,
            total_users: totals.total_users,
            average_cost_per_tool: round_currency(divide(
                totals.total_cost,
                Decimal::from(totals.tools_count),
                Decimal::ZERO,
            )),
            cost_percentage: round_percent(percentage_of(totals.total_cost, total_company_cost)),
        })
        .collect();

    data.sort_by(|a, b| params.order.apply(params.sort_by.compare(a, b)));

    let most_expensive_department =
        highest_by(&data, |row| row.total_cost).map(|row| row.department.clone());

    DepartmentCostReport {
        summary: DepartmentCostSummary {
            total_company_cost: round_currency(total_company_cost),
            departments_count: data.len(),
            most_expensive_department,
        },
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{inventory, tool};
    use core_types::{SortOrder, ToolStatus};
    use rust_decimal_macros::dec;

    fn three_tools() -> Vec<ToolRecord> {
        vec![
            tool(1, "Engineering", dec!(100), 10),
            tool(2, "Engineering", dec!(50), 5),
            tool(3, "Sales", dec!(30), 0),
        ]
    }

    #[test]
    fn groups_by_department_with_default_sort() {
        let report = department_costs(&three_tools(), &DepartmentCostParams::default());

        assert_eq!(report.data.len(), 2);
        let eng = &report.data[0];
        assert_eq!(eng.department, "Engineering");
        assert_eq!(eng.total_cost, dec!(150));
        assert_eq!(eng.tools_count, 2);
        assert_eq!(eng.total_users, 15);
        assert_eq!(eng.average_cost_per_tool, dec!(75.0));
        assert_eq!(eng.cost_percentage, dec!(83.3));

        let sales = &report.data[1];
        assert_eq!(sales.department, "Sales");
        assert_eq!(sales.total_cost, dec!(30));
        assert_eq!(sales.cost_percentage, dec!(16.7));

        assert_eq!(report.summary.total_company_cost, dec!(180));
        assert_eq!(report.summary.departments_count, 2);
        assert_eq!(report.summary.most_expensive_department.as_deref(), Some("Engineering"));
    }

    #[test]
    fn row_totals_add_up_to_company_cost() {
        let report = department_costs(&inventory(), &DepartmentCostParams::default());
        let sum: Decimal = report.data.iter().map(|r| r.total_cost).sum();
        assert_eq!(sum, report.summary.total_company_cost);

        let pct: Decimal = report.data.iter().map(|r| r.cost_percentage).sum();
        assert!((pct - dec!(100)).abs() <= dec!(0.5), "percentages summed to {pct}");
    }

    #[test]
    fn inactive_tools_are_excluded() {
        let report = department_costs(&inventory(), &DepartmentCostParams::default());
        let sales = report.data.iter().find(|r| r.department == "Sales").unwrap();
        assert_eq!(sales.tools_count, 1);
        assert_eq!(sales.total_cost, dec!(450));
        let eng = report.data.iter().find(|r| r.department == "Engineering").unwrap();
        assert_eq!(eng.tools_count, 2);
    }

    #[test]
    fn sorts_by_requested_column_and_direction() {
        let params = DepartmentCostParams {
            sort_by: DepartmentSortKey::Department,
            order: SortOrder::Asc,
        };
        let report = department_costs(&inventory(), &params);
        let names: Vec<&str> = report.data.iter().map(|r| r.department.as_str()).collect();
        assert_eq!(names, ["Design", "Engineering", "Marketing", "Operations", "Sales"]);
    }

    #[test]
    fn equal_keys_keep_grouping_order() {
        let tools = vec![
            tool(1, "Finance", dec!(40), 1),
            tool(2, "HR", dec!(40), 1),
            tool(3, "Design", dec!(40), 1),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let params = DepartmentCostParams { sort_by: DepartmentSortKey::TotalCost, order };
            let report = department_costs(&tools, &params);
            let names: Vec<&str> = report.data.iter().map(|r| r.department.as_str()).collect();
            assert_eq!(names, ["Finance", "HR", "Design"]);
            assert_eq!(report.summary.most_expensive_department.as_deref(), Some("Finance"));
        }
    }

    #[test]
    fn empty_snapshot_yields_zeroed_summary() {
        let only_trials = vec![tool(1, "HR", dec!(10), 1).with_status(ToolStatus::Trial)];
        let report = department_costs(&only_trials, &DepartmentCostParams::default());
        assert!(report.data.is_empty());
        assert_eq!(report.summary.total_company_cost, Decimal::ZERO);
        assert_eq!(report.summary.departments_count, 0);
        assert!(report.summary.most_expensive_department.is_none());
    }

    #[test]
    fn percentages_are_zero_when_company_cost_is_zero() {
        let free = vec![tool(1, "HR", dec!(0), 3), tool(2, "Sales", dec!(0), 1)];
        let report = department_costs(&free, &DepartmentCostParams::default());
        assert!(report.data.iter().all(|r| r.cost_percentage.is_zero()));
    }
}
