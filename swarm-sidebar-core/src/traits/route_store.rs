//! Last visited route persistence abstract Trait

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// 上次访问路由的存储 Trait
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// 读取上次访问的路由
    async fn load(&self) -> CoreResult<Option<String>>;

    /// 保存当前路由
    ///
    /// # Arguments
    /// * `route` - 已识别的路由
    async fn save(&self, route: &str) -> CoreResult<()>;
}

/// 仅保存在内存中的路由存储
#[derive(Default)]
pub struct InMemoryRouteStore {
    route: RwLock<Option<String>>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(route: impl Into<String>) -> Self {
        Self {
            route: RwLock::new(Some(route.into())),
        }
    }
}

#[async_trait]
impl RouteStore for InMemoryRouteStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        Ok(self.route.read().await.clone())
    }

    async fn save(&self, route: &str) -> CoreResult<()> {
        *self.route.write().await = Some(route.to_string());
        Ok(())
    }
}
