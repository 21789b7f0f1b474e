use crate::enums::ToolStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One software tool as held in the inventory.
///
/// Records are read-only snapshots: analytics never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// May be absent; analytics group a missing vendor under the empty string.
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Non-negative monthly spend for the whole tool.
    pub monthly_cost: Decimal,
    #[serde(default)]
    pub active_users_count: u32,
    pub owner_department: String,
    #[serde(default)]
    pub status: ToolStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ToolRecord {
    /// Creates an active record with the fields analytics care about; the rest
    /// can be filled in with the `with_*` helpers.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        owner_department: impl Into<String>,
        monthly_cost: Decimal,
        active_users_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            vendor: None,
            website_url: None,
            category_id: None,
            category_name: None,
            monthly_cost,
            active_users_count,
            owner_department: owner_department.into(),
            status: ToolStatus::Active,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        self.category_id = Some(id);
        self.category_name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: ToolStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == ToolStatus::Active
    }
}
