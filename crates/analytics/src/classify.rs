//! Threshold classifiers. Each label is a pure function of its numeric inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a tool's per-user cost compares with the company-wide average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Average,
    Low,
}

impl EfficiencyRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "excellent",
            EfficiencyRating::Good => "good",
            EfficiencyRating::Average => "average",
            EfficiencyRating::Low => "low",
        }
    }
}

/// Rates `cost_per_user` against the company baseline.
///
/// With no meaningful baseline every tool is `Average`.
pub fn efficiency_rating(cost_per_user: Decimal, company_avg_cost_per_user: Decimal) -> EfficiencyRating {
    if company_avg_cost_per_user <= Decimal::ZERO {
        return EfficiencyRating::Average;
    }
    let ratio = cost_per_user
        .checked_div(company_avg_cost_per_user)
        .unwrap_or(Decimal::MAX);

    if ratio < Decimal::new(5, 1) {
        EfficiencyRating::Excellent
    } else if ratio < Decimal::new(8, 1) {
        EfficiencyRating::Good
    } else if ratio <= Decimal::new(12, 1) {
        EfficiencyRating::Average
    } else {
        EfficiencyRating::Low
    }
}

/// Urgency attached to an under-used tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Low,
    Medium,
    High,
}

impl WarningLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningLevel::Low => "low",
            WarningLevel::Medium => "medium",
            WarningLevel::High => "high",
        }
    }

    /// The fixed recommendation shown next to each warning level.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            WarningLevel::High => "Consider canceling or downgrading",
            WarningLevel::Medium => "Review usage and consider optimization",
            WarningLevel::Low => "Monitor usage trends",
        }
    }

    /// Whether the tool's spend counts towards potential savings.
    pub fn is_actionable(&self) -> bool {
        matches!(self, WarningLevel::High | WarningLevel::Medium)
    }
}

/// Nobody using a paid tool is always `High`; otherwise the per-user cost decides.
pub fn warning_level(users: u32, cost_per_user: Decimal) -> WarningLevel {
    if users == 0 {
        return WarningLevel::High;
    }
    if cost_per_user < Decimal::from(20) {
        WarningLevel::Low
    } else if cost_per_user <= Decimal::from(50) {
        WarningLevel::Medium
    } else {
        WarningLevel::High
    }
}

/// Absolute per-user cost band of a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorEfficiency {
    Excellent,
    Good,
    Average,
    Poor,
}

impl VendorEfficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorEfficiency::Excellent => "excellent",
            VendorEfficiency::Good => "good",
            VendorEfficiency::Average => "average",
            VendorEfficiency::Poor => "poor",
        }
    }
}

pub fn vendor_efficiency(average_cost_per_user: Decimal) -> VendorEfficiency {
    if average_cost_per_user < Decimal::from(5) {
        VendorEfficiency::Excellent
    } else if average_cost_per_user <= Decimal::from(15) {
        VendorEfficiency::Good
    } else if average_cost_per_user <= Decimal::from(25) {
        VendorEfficiency::Average
    } else {
        VendorEfficiency::Poor
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(EfficiencyRating, WarningLevel, VendorEfficiency);
