use crate::error::DbError;
use crate::store::InventoryStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::{ToolRecord, ToolStatus};
use rust_decimal::Decimal;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

const SELECT_TOOLS: &str = r#"
    SELECT t.id, t.name, t.description, t.vendor, t.website_url,
           t.category_id, c.name AS category_name,
           t.monthly_cost, t.active_users_count, t.owner_department,
           t.status, t.created_at, t.updated_at
    FROM tools t
    LEFT JOIN categories c ON c.id = t.category_id
"#;

/// The PostgreSQL-backed inventory store.
#[derive(Debug, Clone)]
pub struct ToolRepository {
    pool: PgPool,
}

/// A row from `tools` joined with its category name.
#[derive(Debug, Clone, FromRow)]
pub struct DbTool {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub website_url: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub monthly_cost: Decimal,
    pub active_users_count: i32,
    pub owner_department: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<DbTool> for ToolRecord {
    type Error = DbError;

    fn try_from(row: DbTool) -> Result<Self, Self::Error> {
        let active_users_count = u32::try_from(row.active_users_count).map_err(|_| DbError::InvalidRow {
            id: row.id,
            reason: format!("negative active_users_count {}", row.active_users_count),
        })?;
        let status = row.status.parse::<ToolStatus>().map_err(|e| DbError::InvalidRow {
            id: row.id,
            reason: e.to_string(),
        })?;

        Ok(ToolRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            vendor: row.vendor,
            website_url: row.website_url,
            category_id: row.category_id,
            category_name: row.category_name,
            monthly_cost: row.monthly_cost,
            active_users_count,
            owner_department: row.owner_department,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl ToolRepository {
    /// Creates a new `ToolRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, active_only: bool) -> Result<Vec<ToolRecord>, DbError> {
        let sql = if active_only {
            format!("{SELECT_TOOLS} WHERE t.status = $1 ORDER BY t.id")
        } else {
            format!("{SELECT_TOOLS} ORDER BY t.id")
        };

        let mut query = sqlx::query_as::<_, DbTool>(&sql);
        if active_only {
            query = query.bind(ToolStatus::Active.as_str());
        }
        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter().map(ToolRecord::try_from).collect()
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<ToolRecord>, DbError> {
        let sql = format!("{SELECT_TOOLS} WHERE t.id = $1");
        let row = sqlx::query_as::<_, DbTool>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ToolRecord::try_from).transpose()
    }
}

#[async_trait]
impl InventoryStore for ToolRepository {
    async fn fetch_active_tools(&self) -> Result<Vec<ToolRecord>, DbError> {
        self.fetch(true).await
    }

    async fn fetch_all_tools(&self) -> Result<Vec<ToolRecord>, DbError> {
        self.fetch(false).await
    }

    async fn fetch_tool(&self, id: i64) -> Result<Option<ToolRecord>, DbError> {
        self.fetch_by_id(id).await
    }
}
