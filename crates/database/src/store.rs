use crate::error::DbError;
use async_trait::async_trait;
use core_types::ToolRecord;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// The source of inventory snapshots consumed by the analytics layer.
///
/// Implementations must hand back an owned, consistent copy: a refresh that
/// happens while a report is being computed is never observed half-way.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Tools whose status is `active`.
    async fn fetch_active_tools(&self) -> Result<Vec<ToolRecord>, DbError>;

    /// Every tool, whatever its status.
    async fn fetch_all_tools(&self) -> Result<Vec<ToolRecord>, DbError>;

    /// A single tool by id, whatever its status. `None` when no such tool exists.
    async fn fetch_tool(&self, id: i64) -> Result<Option<ToolRecord>, DbError>;
}

/// An inventory held in memory, e.g. loaded from a JSON snapshot file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tools: RwLock<Arc<Vec<ToolRecord>>>,
}

impl InMemoryStore {
    pub fn new(tools: Vec<ToolRecord>) -> Self {
        Self {
            tools: RwLock::new(Arc::new(tools)),
        }
    }

    /// Reads a JSON array of tool records.
    pub fn from_json_file(path: &Path) -> Result<Self, DbError> {
        let raw = std::fs::read_to_string(path)?;
        let tools: Vec<ToolRecord> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), tools = tools.len(), "Loaded inventory snapshot.");
        Ok(Self::new(tools))
    }

    /// Swaps in a new snapshot. Readers holding the previous one keep it.
    pub fn replace(&self, tools: Vec<ToolRecord>) {
        *self.tools.write() = Arc::new(tools);
    }

    fn snapshot(&self) -> Arc<Vec<ToolRecord>> {
        Arc::clone(&self.tools.read())
    }
}

#[async_trait]
impl InventoryStore for InMemoryStore {
    async fn fetch_active_tools(&self) -> Result<Vec<ToolRecord>, DbError> {
        Ok(self.snapshot().iter().filter(|t| t.is_active()).cloned().collect())
    }

    async fn fetch_all_tools(&self) -> Result<Vec<ToolRecord>, DbError> {
        Ok(self.snapshot().as_ref().clone())
    }

    async fn fetch_tool(&self, id: i64) -> Result<Option<ToolRecord>, DbError> {
        Ok(self.snapshot().iter().find(|t| t.id == id).cloned())
    }
}
