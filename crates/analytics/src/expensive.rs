use crate::classify::{EfficiencyRating, efficiency_rating};
use crate::numeric::{cost_per_user, divide, round_currency};
use crate::params::ExpensiveToolsParams;
use crate::report::{ExpensiveToolRow, ExpensiveToolsAnalysis, ExpensiveToolsReport};
use core_types::ToolRecord;
use rust_decimal::Decimal;

/// Company-wide spend per active user across every active tool.
///
/// Tools without users add their cost but no users.
pub fn company_avg_cost_per_user(tools: &[ToolRecord]) -> Decimal {
    let (total_cost, total_users) = tools
        .iter()
        .filter(|t| t.is_active())
        .fold((Decimal::ZERO, 0u64), |(cost, users), tool| {
            (cost + tool.monthly_cost, users + u64::from(tool.active_users_count))
        });
    divide(total_cost, Decimal::from(total_users), Decimal::ZERO)
}

/// Active tools ranked by monthly cost, each rated against the company baseline.
pub fn expensive_tools(tools: &[ToolRecord], params: &ExpensiveToolsParams) -> ExpensiveToolsReport {
    let baseline = company_avg_cost_per_user(tools);

    let mut qualifying: Vec<&ToolRecord> = tools
        .iter()
        .filter(|t| t.is_active())
        .filter(|t| params.min_cost().is_none_or(|min| t.monthly_cost >= min))
        .collect();
    qualifying.sort_by(|a, b| b.monthly_cost.cmp(&a.monthly_cost));

    let mut potential_savings = Decimal::ZERO;
    let mut data = Vec::with_capacity(qualifying.len());

    for tool in &qualifying {
        let per_user = cost_per_user(tool.monthly_cost, tool.active_users_count);
        let rating = efficiency_rating(per_user, baseline);
        // Savings cover every qualifying tool, including those cut by the limit.
        if rating == EfficiencyRating::Low {
            potential_savings += tool.monthly_cost;
        }
        data.push(ExpensiveToolRow {
            id: tool.id,
            name: tool.name.clone(),
            monthly_cost: round_currency(tool.monthly_cost),
            active_users_count: tool.active_users_count,
            cost_per_user: round_currency(per_user),
            department: tool.owner_department.clone(),
            vendor: tool.vendor.clone(),
            efficiency_rating: rating,
        });
    }

    let total_tools_analyzed = data.len();
    data.truncate(params.limit());

    ExpensiveToolsReport {
        data,
        analysis: ExpensiveToolsAnalysis {
            total_tools_analyzed,
            avg_cost_per_user_company: round_currency(baseline),
            potential_savings_identified: round_currency(potential_savings),
        },
    }
}
