//! 菜单模型构建服务
//!
//! 周期性拉取资源池列表，与上一次的快照做深度比较，
//! 只有内容变化时才重建菜单树。

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::services::menu_catalog::build_menu;
use crate::services::pool_poller::PoolPoller;
use crate::traits::PoolSource;
use crate::types::{MenuNode, Pool};

/// 默认刷新间隔
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// 菜单模型构建服务
pub struct MenuListBuilder {
    source: Arc<dyn PoolSource>,
    interval: Duration,
    /// 上一次拉取到的资源池列表，仅用于比较
    snapshot: Option<Vec<Pool>>,
    model: Vec<MenuNode>,
    /// 菜单树重建次数
    revision: u64,
    poller: Option<PoolPoller>,
}

impl MenuListBuilder {
    /// 创建菜单构建服务
    #[must_use]
    pub fn new(source: Arc<dyn PoolSource>) -> Self {
        Self {
            source,
            interval: DEFAULT_REFRESH_INTERVAL,
            snapshot: None,
            model: Vec::new(),
            revision: 0,
            poller: None,
        }
    }

    /// 设置刷新间隔
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 立即刷新一次，并按间隔定时刷新，直到 [`Self::teardown`]
    ///
    /// 已经启动时不会重复启动。
    pub fn initialize(&mut self, handle: &Handle) {
        if self.poller.is_some() {
            log::debug!("Pool poller already running");
            return;
        }
        log::info!(
            "Starting pool poller (every {}s)",
            self.interval.as_secs_f32()
        );
        self.poller = Some(PoolPoller::spawn(
            handle,
            Arc::clone(&self.source),
            self.interval,
        ));
    }

    /// 停止定时刷新，未初始化时调用也是安全的
    pub fn teardown(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
            log::info!("Pool poller stopped");
        }
    }

    /// 定时刷新是否在运行
    pub fn is_running(&self) -> bool {
        self.poller.is_some()
    }

    /// 请求一次额外的刷新（未初始化时忽略）
    pub fn request_refresh(&self) {
        if let Some(poller) = &self.poller {
            poller.trigger();
        }
    }

    /// 直接拉取一次资源池列表并应用
    ///
    /// 拉取失败时保留原有菜单。返回菜单是否重建。
    pub async fn refresh(&mut self) -> bool {
        log::info!("Refreshing pool list in sidebar");
        match self.source.get_pools().await {
            Ok(pools) => self.apply(pools),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to fetch pool list: {e}");
                } else {
                    log::error!("Failed to fetch pool list: {e}");
                }
                false
            }
        }
    }

    /// 处理后台轮询已到达的结果，返回菜单是否重建
    ///
    /// 调用 [`Self::teardown`] 之后到达的结果不会再被应用。
    pub fn poll_updates(&mut self) -> bool {
        let mut fetched = Vec::new();
        if let Some(poller) = self.poller.as_mut() {
            while let Some(pools) = poller.try_next() {
                fetched.push(pools);
            }
        }

        let mut rebuilt = false;
        for pools in fetched {
            rebuilt |= self.apply(pools);
        }
        rebuilt
    }

    /// 与快照比较，内容变化时重建菜单树
    pub fn apply(&mut self, pools: Vec<Pool>) -> bool {
        if self.snapshot.as_ref() == Some(&pools) {
            return false;
        }

        log::info!("Pool list changed since the last check ({} pools)", pools.len());
        self.model = build_menu(&pools);
        self.snapshot = Some(pools);
        self.revision += 1;
        true
    }

    /// 当前菜单树
    pub fn model(&self) -> &[MenuNode] {
        &self.model
    }

    /// 最近一次拉取到的资源池列表
    pub fn snapshot(&self) -> Option<&[Pool]> {
        self.snapshot.as_deref()
    }

    /// 菜单树重建次数，界面据此判断是否需要重建激活状态
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Drop for MenuListBuilder {
    fn drop(&mut self) {
        self.teardown();
    }
}
