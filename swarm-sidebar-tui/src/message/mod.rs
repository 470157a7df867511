//! src/message/mod.rs
//! Message 层：Event 层把原始输入翻译成消息，Update 层消费消息。
//!
//!     AppMessage          // 全局消息（退出、刷新、切换菜单模式、定时 tick ...）
//!     SidebarMessage      // 菜单：移动光标、点击、悬停
//!     ContentMessage      // 内容面板：列表移动、设置项切换
//!
//! ```text
//!  crossterm 事件                       tokio 运行时
//!       │                                    │
//!       ▼                                    ▼
//!  ┌─────────┐  AppMessage   ┌──────────┐   ┌────────────┐  GET /pools
//!  │  event  │ ────────────▶ │  update  │   │ PoolPoller │ ─────────────▶ 后端
//!  └─────────┘ SidebarMessage└────┬─────┘   └─────┬──────┘
//!       ▲      ContentMessage     │ 修改          │ mpsc
//!       │ AppLayout 命中检测      ▼               ▼
//!  ┌─────────┐   读取      ┌────────────┐  tick  ┌─────────────┐
//!  │  view   │ ◀────────── │ model::App │ ◀───── │ CoreService │
//!  └─────────┘             │  sidebar   │        │  菜单模型   │
//!                          │  layout    │        │  路由历史   │
//!                          │ stylesheets│        └─────────────┘
//!                          └────────────┘
//! ```

mod app;
mod content;
mod sidebar;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use sidebar::SidebarMessage;
