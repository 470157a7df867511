//! Swarm Sidebar TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入配置目录（标准输出留给终端界面）
//!     load config             // config.toml + 环境变量
//!     tokio Runtime           // 资源池轮询任务运行在其中
//!     CoreService::new()      // 组装 Backend 层，读取上次访问的路由
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     teardown()              // 停止轮询
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{config_dir, ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（guard 需保持到程序退出）
    let _log_guard = init_logging(&config_dir().join("logs"))?;
    tracing::info!("Starting Swarm Sidebar TUI v{}", env!("CARGO_PKG_VERSION"));

    // 2. 读取配置
    let config_service = LocalConfigService::new();
    let config = config_service.load();
    tracing::info!(
        "Loaded config from {} (backend {})",
        config_service.path().display(),
        config.api_base_url
    );

    // 3. 创建异步运行时与核心服务
    let runtime = tokio::runtime::Runtime::new()?;
    let mut core = CoreService::new(runtime.handle().clone(), &config)?;
    core.initialize();

    // 4. 创建应用实例
    let mut app = model::App::new(core, &config);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 停止轮询
    app.core.teardown();
    tracing::info!("Swarm Sidebar TUI stopped");

    result
}
