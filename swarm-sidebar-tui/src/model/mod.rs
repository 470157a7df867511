//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层只保存数据，不包含渲染逻辑；由 Update 层修改，由 View 层读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App：应用主状态
//!         mod focus;          // FocusPanel：焦点在侧边栏还是内容面板
//!         mod page;           // Page：当前页面，与路由一一对应
//!         mod sidebar;        // SidebarState：菜单激活状态 + 光标
//!         pub mod state;      // 各页面的状态（设置页）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、App
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit,            // 是否退出
//!         focus,                  // 焦点面板
//!         core,                   // CoreService（Backend 层）
//!         sidebar,                // 侧边栏：MenuActivation + 光标
//!         layout,                 // LayoutContext：菜单模式、设备类型、界面标志
//!         stylesheets,            // 当前布局 / 主题
//!         current_page,           // 当前页面
//!         ...
//!     }
//!
//!     layout 与 stylesheets 都来自 swarm-sidebar-core：
//!         · 菜单点击时 layout 以 &mut 传入，由菜单状态机修改界面标志
//!         · stylesheets 实现了 ActionHandler，皮肤菜单项的动作直接作用于它
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、SidebarState
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     菜单树每次重建（revision 变化）时，激活状态随之整体重建。
//!
//!     菜单显示为"可见行"列表：
//!         FAQ
//!         Pools               ← 常驻展开
//!           All ecosystem
//!           Alpha
//!         Colors              ← 点击后展开
//!
//!     光标（cursor）是可见行的下标，展开 / 收起后需要重新约束。
//!

mod app;
mod focus;
mod page;
mod sidebar;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use sidebar::SidebarState;
pub use state::{SettingItem, SettingsState};
