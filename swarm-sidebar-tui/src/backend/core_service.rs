//! 核心服务
//!
//! 封装 swarm-sidebar-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;
use std::time::Duration;

use swarm_sidebar_core::types::{MenuNode, Pool};
use swarm_sidebar_core::{CoreResult, MenuListBuilder, PoolSource, RouteHistory, RouteStore};
use tokio::runtime::Handle;

use super::config_service::AppConfig;
use super::http_pool_source::HttpPoolSource;
use super::route_store::JsonRouteStore;

/// TUI 核心服务
///
/// 持有菜单构建服务与路由历史，UI 线程通过它与后台轮询交互
pub struct CoreService {
    /// 异步运行时句柄（轮询任务运行在其中）
    handle: Handle,
    /// 菜单构建服务
    menu: MenuListBuilder,
    /// 上次访问的路由
    history: RouteHistory,
}

impl CoreService {
    /// 根据配置创建核心服务实例
    pub fn new(handle: Handle, config: &AppConfig) -> CoreResult<Self> {
        // 1. 创建基础依赖
        let source = Arc::new(HttpPoolSource::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?);
        let store = Arc::new(JsonRouteStore::new());

        log::info!("Pool source: {}", source.endpoint());

        // 2. 组装服务
        Ok(Self::with_adapters(
            handle,
            source,
            store,
            Duration::from_secs(config.refresh_interval_secs),
        ))
    }

    /// 使用指定的数据源与存储创建（测试中注入内存实现）
    pub fn with_adapters(
        handle: Handle,
        source: Arc<dyn PoolSource>,
        store: Arc<dyn RouteStore>,
        interval: Duration,
    ) -> Self {
        let menu = MenuListBuilder::new(source).with_interval(interval);
        let history = handle.block_on(RouteHistory::restore(store));

        Self {
            handle,
            menu,
            history,
        }
    }

    /// 初始化：启动资源池轮询
    ///
    /// 应在应用启动时调用
    pub fn initialize(&mut self) {
        self.menu.initialize(&self.handle);
    }

    /// 停止轮询
    pub fn teardown(&mut self) {
        self.menu.teardown();
    }

    // ========== 菜单 ==========

    /// 手动刷新
    pub fn request_refresh(&self) {
        self.menu.request_refresh();
    }

    /// 处理后台到达的资源池列表，返回菜单是否重建
    pub fn poll_updates(&mut self) -> bool {
        self.menu.poll_updates()
    }

    pub fn menu_model(&self) -> &[MenuNode] {
        self.menu.model()
    }

    pub fn menu_revision(&self) -> u64 {
        self.menu.revision()
    }

    /// 最近一次拉取到的资源池
    pub fn pools(&self) -> &[Pool] {
        self.menu.snapshot().unwrap_or_default()
    }

    /// 是否已经拉取到过资源池列表
    pub fn has_loaded(&self) -> bool {
        self.menu.snapshot().is_some()
    }

    /// 直接应用一份资源池列表（测试用，不经过轮询）
    #[cfg(test)]
    pub fn apply_pools(&mut self, pools: Vec<Pool>) -> bool {
        self.menu.apply(pools)
    }

    // ========== 路由历史 ==========

    /// 启动时应恢复的路由
    pub fn initial_route(&self) -> Option<&str> {
        self.history.initial_route()
    }

    /// 记录路由变化
    pub fn record_route(&self, route: &str) {
        self.handle.block_on(self.history.record(route));
    }
}
