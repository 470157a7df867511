//! Pool list data source abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Pool;

/// Pool 数据源 Trait
///
/// Platform implementation:
/// - TUI: `HttpPoolSource` (reqwest, `GET {api}/pools`)
/// - Tests: `MockPoolSource`
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Get the current pool list, in backend order
    async fn get_pools(&self) -> CoreResult<Vec<Pool>>;
}
