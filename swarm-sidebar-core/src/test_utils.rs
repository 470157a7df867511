//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::services::ItemEvent;
use crate::traits::{ActionHandler, PoolSource, RouteStore};
use crate::types::{MenuAction, MenuNode, Pool};

// ===== MockPoolSource =====

/// 按顺序返回预设结果的数据源，队列为空时返回空列表
pub struct MockPoolSource {
    responses: Mutex<VecDeque<CoreResult<Vec<Pool>>>>,
    calls: AtomicUsize,
}

impl MockPoolSource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn push_ok(&self, pools: Vec<Pool>) {
        self.responses.lock().await.push_back(Ok(pools));
    }

    pub async fn push_err(&self, err: CoreError) {
        self.responses.lock().await.push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PoolSource for MockPoolSource {
    async fn get_pools(&self) -> CoreResult<Vec<Pool>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ===== SlowPoolSource =====

/// 每次拉取耗时 `delay` 的数据源，记录同时进行中的拉取数的最大值
pub struct SlowPoolSource {
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl SlowPoolSource {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PoolSource for SlowPoolSource {
    async fn get_pools(&self) -> CoreResult<Vec<Pool>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(vec![Pool::new(format!("p{call}"), format!("Pool {call}"))])
    }
}

// ===== FailingRouteStore =====

pub struct FailingRouteStore;

#[async_trait]
impl RouteStore for FailingRouteStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError("unreadable".to_string()))
    }

    async fn save(&self, _route: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("read-only".to_string()))
    }
}

// ===== RecordingActionHandler =====

/// 记录每次调用的（动作，节点标签）
#[derive(Default)]
pub struct RecordingActionHandler {
    pub invoked: Vec<(MenuAction, String)>,
}

impl ActionHandler for RecordingActionHandler {
    fn invoke(&mut self, action: &MenuAction, node: &MenuNode, _event: &ItemEvent) {
        self.invoked.push((action.clone(), node.label.clone()));
    }
}
