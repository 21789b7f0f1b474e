use crate::classify::warning_level;
use crate::numeric::{cost_per_user, round_currency};
use crate::params::LowUsageParams;
use crate::report::{LowUsageReport, LowUsageToolRow, SavingsAnalysis};
use core_types::ToolRecord;
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: u32 = 12;

/// Active tools with at most `max_users` users, least-used first and, within
/// the same usage, most expensive first.
pub fn low_usage_tools(tools: &[ToolRecord], params: &LowUsageParams) -> LowUsageReport {
    let mut candidates: Vec<&ToolRecord> = tools
        .iter()
        .filter(|t| t.is_active() && t.active_users_count <= params.max_users())
        .collect();
    candidates.sort_by(|a, b| {
        a.active_users_count
            .cmp(&b.active_users_count)
            .then_with(|| b.monthly_cost.cmp(&a.monthly_cost))
    });

    let mut potential_monthly = Decimal::ZERO;
    let data: Vec<LowUsageToolRow> = candidates
        .into_iter()
        .map(|tool| {
            let per_user = cost_per_user(tool.monthly_cost, tool.active_users_count);
            let warning = warning_level(tool.active_users_count, per_user);
            if warning.is_actionable() {
                potential_monthly += tool.monthly_cost;
            }
            LowUsageToolRow {
                id: tool.id,
                name: tool.name.clone(),
                monthly_cost: round_currency(tool.monthly_cost),
                active_users_count: tool.active_users_count,
                cost_per_user: round_currency(per_user),
                department: tool.owner_department.clone(),
                vendor: tool.vendor.clone(),
                warning_level: warning,
                potential_action: warning.recommended_action().to_string(),
            }
        })
        .collect();

    LowUsageReport {
        savings_analysis: SavingsAnalysis {
            total_underutilized_tools: data.len(),
            potential_monthly_savings: round_currency(potential_monthly),
            potential_annual_savings: round_currency(potential_monthly * Decimal::from(MONTHS_PER_YEAR)),
        },
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::WarningLevel;
    use crate::test_support::{inventory, tool};
    use rust_decimal_macros::dec;

    #[test]
    fn filters_and_orders_by_usage_then_cost() {
        let report = low_usage_tools(&inventory(), &LowUsageParams::default());
        let ids: Vec<i64> = report.data.iter().map(|r| r.id).collect();
        // Figma (0), Notion (2), Confluence (3), Salesforce (5)
        assert_eq!(ids, [5, 6, 3, 4]);
        assert!(report.data.iter().all(|r| r.active_users_count <= 5));
    }

    #[test]
    fn warnings_and_savings() {
        let report = low_usage_tools(&inventory(), &LowUsageParams::default());

        let levels: Vec<WarningLevel> = report.data.iter().map(|r| r.warning_level).collect();
        assert_eq!(
            levels,
            [WarningLevel::High, WarningLevel::Low, WarningLevel::Medium, WarningLevel::High]
        );
        assert_eq!(report.data[0].potential_action, "Consider canceling or downgrading");
        assert_eq!(report.data[1].potential_action, "Monitor usage trends");

        // 45 + 60 + 450
        assert_eq!(report.savings_analysis.total_underutilized_tools, 4);
        assert_eq!(report.savings_analysis.potential_monthly_savings, dec!(555));
        assert_eq!(report.savings_analysis.potential_annual_savings, dec!(6660));
    }

    #[test]
    fn max_users_threshold_is_inclusive() {
        let tools = vec![tool(1, "HR", dec!(50), 3), tool(2, "HR", dec!(50), 4)];
        let params = LowUsageParams::new(Some(3)).unwrap();
        let report = low_usage_tools(&tools, &params);
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.data[0].id, 1);
    }

    #[test]
    fn same_usage_puts_expensive_tools_first() {
        let tools = vec![
            tool(1, "Ops", dec!(10), 1),
            tool(2, "Ops", dec!(90), 1),
            tool(3, "Ops", dec!(40), 0),
        ];
        let report = low_usage_tools(&tools, &LowUsageParams::default());
        let ids: Vec<i64> = report.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn empty_snapshot() {
        let report = low_usage_tools(&[], &LowUsageParams::default());
        assert!(report.data.is_empty());
        assert_eq!(report.savings_analysis.potential_monthly_savings, Decimal::ZERO);
        assert_eq!(report.savings_analysis.potential_annual_savings, Decimal::ZERO);
    }
}
