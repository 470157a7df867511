//! 上次访问路由的恢复与记录

use std::sync::Arc;

use crate::traits::RouteStore;

/// 路由历史服务
///
/// 构造时读取上次访问的路由供界面恢复，之后每次识别到路由变化时写回。
/// 存储失败只记录日志。
pub struct RouteHistory {
    store: Arc<dyn RouteStore>,
    initial: Option<String>,
}

impl RouteHistory {
    /// 读取存储中的上次路由
    pub async fn restore(store: Arc<dyn RouteStore>) -> Self {
        let initial = match store.load().await {
            Ok(route) => route.filter(|r| !r.is_empty()),
            Err(e) => {
                log::warn!("Failed to load previous route: {e}");
                None
            }
        };
        if let Some(route) = &initial {
            log::info!("Restoring previous route {route}");
        }
        Self { store, initial }
    }

    /// 启动时应恢复的路由
    pub fn initial_route(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    /// 记录一次已识别的路由变化
    pub async fn record(&self, route: &str) {
        if let Err(e) = self.store.save(route).await {
            log::warn!("Failed to persist route {route}: {e}");
        }
    }
}
