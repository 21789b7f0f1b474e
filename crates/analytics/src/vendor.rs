use crate::classify::vendor_efficiency;
use crate::grouping::group_active;
use crate::insights::{highest_by, lowest_by};
use crate::numeric::{divide, round_currency};
use crate::report::{VendorInsights, VendorRow, VendorSummaryReport};
use core_types::ToolRecord;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

const DEPARTMENT_SEPARATOR: &str = ",";

#[derive(Default)]
struct VendorTotals<'a> {
    tools_count: u32,
    total_monthly_cost: Decimal,
    total_users: u64,
    departments: BTreeSet<&'a str>,
}

/// Spend per vendor, returned alphabetically by vendor name.
pub fn vendor_summary(tools: &[ToolRecord]) -> VendorSummaryReport {
    let groups = group_active::<VendorTotals, _, _>(
        tools,
        |tool| tool.vendor.clone().unwrap_or_default(),
        |totals, tool| {
            totals.tools_count += 1;
            totals.total_monthly_cost += tool.monthly_cost;
            totals.total_users += u64::from(tool.active_users_count);
            totals.departments.insert(tool.owner_department.as_str());
        },
    );

    let mut data: Vec<VendorRow> = groups
        .into_iter()
        .map(|(vendor, totals)| {
            let average_cost_per_user = round_currency(divide(
                totals.total_monthly_cost,
                Decimal::from(totals.total_users),
                Decimal::ZERO,
            ));
            VendorRow {
                vendor,
                tools_count: totals.tools_count,
                total_monthly_cost: round_currency(totals.total_monthly_cost),
                total_users: totals.total_users,
                departments: totals
                    .departments
                    .into_iter()
                    .collect::<Vec<_>>()
                    .join(DEPARTMENT_SEPARATOR),
                average_cost_per_user,
                vendor_efficiency: vendor_efficiency(average_cost_per_user),
            }
        })
        .collect();

    // Insights are taken in grouping order, before the alphabetical re-sort.
    let vendor_insights = VendorInsights {
        most_expensive_vendor: highest_by(&data, |row| row.total_monthly_cost)
            .map(|row| row.vendor.clone()),
        most_efficient_vendor: lowest_by(
            &data,
            |row| row.total_users > 0,
            |row| row.average_cost_per_user,
        )
        .map(|row| row.vendor.clone()),
        single_tool_vendors: data.iter().filter(|row| row.tools_count == 1).count(),
    };

    data.sort_by(|a, b| a.vendor.cmp(&b.vendor));

    VendorSummaryReport {
        data,
        vendor_insights,
    }
}
