//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：终端的初始化与恢复，以及日志初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志（tracing-subscriber + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端：
//!
//!         · Raw Mode（原始模式）
//!             - 每个按键立即生效，不回显
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕内容
//!         · Mouse Capture（鼠标捕获）
//!             - 侧边栏的悬停展开与点击都依赖鼠标事件
//!
//!     恢复终端：
//!
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!
//!         终端界面占用了标准输出，日志只能写文件：
//!             ~/.config/swarm-sidebar/logs/swarm-sidebar.log.YYYY-MM-DD
//!
//!         日志级别由 RUST_LOG 控制，默认 info。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
