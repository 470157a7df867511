//! 日志初始化
//!
//! 标准输出被终端界面占用，日志写入配置目录下按天滚动的文件。
//! 库代码通过 `log` 门面输出，由 tracing-subscriber 的 tracing-log 桥接收。

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "swarm-sidebar.log";

/// 初始化日志
///
/// 返回的 guard 必须保持到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    Ok(guard)
}
