//! # Toolspend Analytics Engine
//!
//! This crate turns an inventory snapshot of software tools into spend and
//! usage reports: department costs, expensive tools, category breakdown,
//! low-usage tools and vendor summary.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of databases
//!   or HTTP. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless calculator. Every
//!   report is recomputed from the snapshot it is handed; nothing is cached.
//! - **Decimal Money:** Currency values are `Decimal` throughout and rounded exactly
//!   once, when placed into a report row.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The entry point for all reports.
//! - The report structs in `report` and the validated parameter types in `params`.
//! - `AnalyticsError`: Raised only when building out-of-contract parameters.

// Declare the modules that constitute this crate.
pub mod category;
pub mod classify;
pub mod department;
pub mod engine;
pub mod error;
pub mod expensive;
mod grouping;
pub mod insights;
pub mod listing;
pub mod low_usage;
pub mod numeric;
pub mod params;
pub mod report;
pub mod vendor;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use classify::{EfficiencyRating, VendorEfficiency, WarningLevel};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use listing::{ToolDetail, ToolListing, ToolQuery, ToolQueryInput, ToolSortKey};
pub use params::{
    DepartmentCostParams, DepartmentSortKey, ExpensiveToolsParams, LowUsageParams, OverviewParams,
};
pub use report::{
    AnalyticsOverview, CategoryBreakdownReport, DepartmentCostReport, ExpensiveToolsReport,
    LowUsageReport, ReportData, VendorSummaryReport,
};
