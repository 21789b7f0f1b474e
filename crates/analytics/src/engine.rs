use crate::category::tools_by_category;
use crate::department::department_costs;
use crate::expensive::expensive_tools;
use crate::listing::{ToolDetail, ToolListing, ToolQuery, list_tools, tool_detail};
use crate::low_usage::low_usage_tools;
use crate::params::{DepartmentCostParams, ExpensiveToolsParams, LowUsageParams, OverviewParams};
use crate::report::{
    AnalyticsOverview, CategoryBreakdownReport, DepartmentCostReport, ExpensiveToolsReport,
    LowUsageReport, VendorSummaryReport,
};
use crate::vendor::vendor_summary;
use core_types::ToolRecord;

/// A stateless calculator for deriving spend and usage reports from an
/// inventory snapshot.
///
/// Every method takes the snapshot by shared reference and only considers
/// active tools, whatever the caller passes in. Calling a method twice on
/// the same snapshot gives identical results.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost breakdown per owning department.
    pub fn department_costs(
        &self,
        tools: &[ToolRecord],
        params: &DepartmentCostParams,
    ) -> DepartmentCostReport {
        let report = department_costs(tools, params);
        tracing::debug!(
            departments = report.data.len(),
            sort_by = params.sort_by.as_str(),
            order = params.order.as_str(),
            "Computed department cost report."
        );
        report
    }

    /// Most expensive active tools with their efficiency rating.
    pub fn expensive_tools(
        &self,
        tools: &[ToolRecord],
        params: &ExpensiveToolsParams,
    ) -> ExpensiveToolsReport {
        let report = expensive_tools(tools, params);
        tracing::debug!(
            analyzed = report.analysis.total_tools_analyzed,
            returned = report.data.len(),
            limit = params.limit(),
            "Computed expensive tools report."
        );
        report
    }

    pub fn tools_by_category(&self, tools: &[ToolRecord]) -> CategoryBreakdownReport {
        let report = tools_by_category(tools);
        tracing::debug!(categories = report.data.len(), "Computed category breakdown.");
        report
    }

    /// Under-used tools with a warning level and suggested action.
    pub fn low_usage_tools(&self, tools: &[ToolRecord], params: &LowUsageParams) -> LowUsageReport {
        let report = low_usage_tools(tools, params);
        tracing::debug!(
            tools = report.data.len(),
            max_users = params.max_users(),
            "Computed low usage report."
        );
        report
    }

    pub fn vendor_summary(&self, tools: &[ToolRecord]) -> VendorSummaryReport {
        let report = vendor_summary(tools);
        tracing::debug!(vendors = report.data.len(), "Computed vendor summary.");
        report
    }

    /// Computes all five reports over the same snapshot.
    ///
    /// The reports share nothing but the read-only snapshot, so they run on the
    /// rayon pool side by side.
    pub fn overview(&self, tools: &[ToolRecord], params: &OverviewParams) -> AnalyticsOverview {
        let ((department_costs, expensive_tools), (tools_by_category, (low_usage_tools, vendor_summary))) =
            rayon::join(
                || {
                    rayon::join(
                        || self.department_costs(tools, &params.departments),
                        || self.expensive_tools(tools, &params.expensive_tools),
                    )
                },
                || {
                    rayon::join(
                        || self.tools_by_category(tools),
                        || {
                            rayon::join(
                                || self.low_usage_tools(tools, &params.low_usage),
                                || self.vendor_summary(tools),
                            )
                        },
                    )
                },
            );

        AnalyticsOverview {
            department_costs,
            expensive_tools,
            tools_by_category,
            low_usage_tools,
            vendor_summary,
        }
    }

    /// Filtered, sorted view over the whole inventory, every status included.
    pub fn list_tools(&self, tools: &[ToolRecord], query: &ToolQuery) -> ToolListing {
        let listing = list_tools(tools, query);
        tracing::debug!(total = listing.total, filtered = listing.filtered, "Listed tools.");
        listing
    }

    pub fn tool_detail(&self, tool: ToolRecord) -> ToolDetail {
        tool_detail(tool)
    }
}
