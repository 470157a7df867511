//! 路由存储
//!
//! 使用 JSON 文件保存上次访问的路由
//! 实现 swarm-sidebar-core 的 RouteStore trait

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use swarm_sidebar_core::{CoreError, CoreResult, RouteStore};
use tokio::fs;

use super::config_service::config_dir;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RouteFile {
    #[serde(rename = "prevUrl", skip_serializing_if = "Option::is_none")]
    prev_url: Option<String>,
}

/// 基于 JSON 文件的路由存储
pub struct JsonRouteStore {
    path: PathBuf,
}

impl JsonRouteStore {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("state.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonRouteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteStore for JsonRouteStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let file: RouteFile = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        Ok(file.prev_url)
    }

    async fn save(&self, route: &str) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&RouteFile {
            prev_url: Some(route.to_string()),
        })
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_has_no_route() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRouteStore::with_path(dir.path().join("state.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_in_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRouteStore::with_path(dir.path().join("nested/state.json"));
        store.save("pool/a").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("pool/a"));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonRouteStore::with_path(path).load().await.unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }
}
