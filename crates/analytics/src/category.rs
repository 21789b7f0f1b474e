use crate::grouping::group_active;
use crate::insights::{highest_by, lowest_by};
use crate::numeric::{divide, percentage_of, round_currency, round_percent};
use crate::report::{CategoryBreakdownReport, CategoryInsights, CategoryRow};
use core_types::ToolRecord;
use rust_decimal::Decimal;

/// Group name for tools that carry no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Default)]
struct CategoryTotals {
    tools_count: u32,
    total_cost: Decimal,
    total_users: u64,
}

/// Spend and usage per category, in first-seen category order.
pub fn tools_by_category(tools: &[ToolRecord]) -> CategoryBreakdownReport {
    let groups = group_active(
        tools,
        |tool| {
            tool.category_name
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string())
        },
        |totals: &mut CategoryTotals, tool| {
            totals.tools_count += 1;
            totals.total_cost += tool.monthly_cost;
            totals.total_users += u64::from(tool.active_users_count);
        },
    );

    let total_company_cost: Decimal = groups.iter().map(|(_, t)| t.total_cost).sum();

    let data: Vec<CategoryRow> = groups
        .into_iter()
        .map(|(category_name, totals)| CategoryRow {
            category_name,
            tools_count: totals.tools_count,
            total_cost: round_currency(totals.total_cost),
            total_users: totals.total_users,
            percentage_of_budget: round_percent(percentage_of(totals.total_cost, total_company_cost)),
            average_cost_per_user: round_currency(divide(
                totals.total_cost,
                Decimal::from(totals.total_users),
                Decimal::ZERO,
            )),
        })
        .collect();

    let insights = CategoryInsights {
        most_expensive_category: highest_by(&data, |row| row.total_cost)
            .map(|row| row.category_name.clone()),
        // Categories nobody uses have no meaningful per-user cost.
        most_efficient_category: lowest_by(
            &data,
            |row| row.total_users > 0,
            |row| row.average_cost_per_user,
        )
        .map(|row| row.category_name.clone()),
    };

    CategoryBreakdownReport { data, insights }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{inventory, tool};
    use rust_decimal_macros::dec;

    #[test]
    fn aggregates_per_category() {
        let report = tools_by_category(&inventory());

        let names: Vec<&str> = report.data.iter().map(|r| r.category_name.as_str()).collect();
        assert_eq!(names, ["Development", "Project Management", "Documentation", "CRM", "Design"]);

        let docs = &report.data[2];
        assert_eq!(docs.tools_count, 2);
        assert_eq!(docs.total_cost, dec!(68));
        assert_eq!(docs.total_users, 5);
        assert_eq!(docs.average_cost_per_user, dec!(13.6));
        assert_eq!(docs.percentage_of_budget, dec!(7.6));

        let crm = &report.data[3];
        assert_eq!(crm.tools_count, 1, "deprecated CRM must not count");
        assert_eq!(crm.percentage_of_budget, dec!(50.4));
    }

    #[test]
    fn insights_pick_most_expensive_and_most_efficient() {
        let report = tools_by_category(&inventory());
        assert_eq!(report.insights.most_expensive_category.as_deref(), Some("CRM"));
        // Project Management: 120 / 30 = 4.00, the trial Linear seat is ignored.
        assert_eq!(report.insights.most_efficient_category.as_deref(), Some("Project Management"));
    }

    #[test]
    fn zero_user_categories_never_win_efficiency() {
        let tools = vec![
            tool(1, "Design", dec!(0), 0).with_category(1, "Free"),
            tool(2, "Design", dec!(30), 3).with_category(2, "Paid"),
        ];
        let report = tools_by_category(&tools);
        let free = &report.data[0];
        assert_eq!(free.average_cost_per_user, Decimal::ZERO);
        assert_eq!(report.insights.most_efficient_category.as_deref(), Some("Paid"));
    }

    #[test]
    fn missing_category_is_grouped_as_uncategorized() {
        let tools = vec![tool(1, "HR", dec!(12), 2)];
        let report = tools_by_category(&tools);
        assert_eq!(report.data[0].category_name, UNCATEGORIZED);
        assert_eq!(report.data[0].percentage_of_budget, dec!(100));
    }

    #[test]
    fn empty_snapshot_has_no_insights() {
        let report = tools_by_category(&[]);
        assert!(report.data.is_empty());
        assert!(report.insights.most_expensive_category.is_none());
        assert!(report.insights.most_efficient_category.is_none());
    }
}
