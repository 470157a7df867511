//! 定时拉取资源池列表的后台任务

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::traits::PoolSource;
use crate::types::Pool;

/// 后台轮询任务句柄
///
/// 拉取在同一个任务内顺序执行，错过的 tick 直接跳过，因此两次拉取不会重叠。
/// 结果通过 channel 交给界面线程处理。
pub struct PoolPoller {
    task: JoinHandle<()>,
    trigger: Arc<Notify>,
    receiver: mpsc::UnboundedReceiver<Vec<Pool>>,
}

impl PoolPoller {
    /// 启动轮询：立即拉取一次，之后每隔 `period` 拉取一次
    pub fn spawn(handle: &Handle, source: Arc<dyn PoolSource>, period: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let trigger = Arc::new(Notify::new());
        let task = handle.spawn(poll_loop(source, period, sender, Arc::clone(&trigger)));

        Self {
            task,
            trigger,
            receiver,
        }
    }

    /// 请求一次额外的拉取，不影响定时节奏
    pub fn trigger(&self) {
        self.trigger.notify_one();
    }

    /// 取出一个已到达的结果
    pub fn try_next(&mut self) -> Option<Vec<Pool>> {
        self.receiver.try_recv().ok()
    }

    /// 停止轮询，之后到达的结果全部丢弃
    pub fn stop(mut self) {
        self.task.abort();
        self.receiver.close();
    }
}

async fn poll_loop(
    source: Arc<dyn PoolSource>,
    period: Duration,
    sender: mpsc::UnboundedSender<Vec<Pool>>,
    trigger: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            () = trigger.notified() => {
                log::debug!("Manual pool refresh requested");
            }
        }

        log::info!("Refreshing pool list in sidebar");
        match source.get_pools().await {
            Ok(pools) => {
                if sender.send(pools).is_err() {
                    log::debug!("Pool poller receiver dropped, stopping");
                    break;
                }
            }
            Err(e) if e.is_expected() => log::warn!("Failed to fetch pool list: {e}"),
            Err(e) => log::error!("Failed to fetch pool list: {e}"),
        }
    }
}
