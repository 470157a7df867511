//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责与后端服务、本地文件打交道。
//! 通过 swarm-sidebar-core 库实现菜单构建与路由历史。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 核心服务入口
//!         mod config_service;     // 配置（config.toml）
//!         mod http_pool_source;   // 资源池数据源（HTTP）
//!         mod route_store;        // 上次访问路由（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 是 Backend 层的入口，封装了 swarm-sidebar-core 库。
//!
//!         创建流程：
//!             1. 创建 HttpPoolSource（资源池数据源）
//!             2. 创建 JsonRouteStore（路由存储）
//!             3. 创建 MenuListBuilder（菜单构建，按配置的间隔轮询）
//!             4. 通过 RouteHistory 读取上次访问的路由
//!
//!         提供的能力：
//!             - initialize() / teardown()   启动 / 停止轮询
//!             - poll_updates()              在 UI 线程上应用新数据
//!             - request_refresh()           手动刷新
//!             - record_route(route)         记录路由变化
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、资源池数据源（HttpPoolSource）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/http_pool_source.rs 中定义：
//!
//!         实现 swarm-sidebar-core 的 PoolSource trait。
//!         请求 GET {api_base_url}/pools，响应为 [{ "id", "displayName" }, ...]
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、路由存储（JsonRouteStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/route_store.rs 中定义：
//!
//!         实现 swarm-sidebar-core 的 RouteStore trait。
//!
//!         存储位置：~/.config/swarm-sidebar/state.json
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、配置（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         读取 ~/.config/swarm-sidebar/config.toml
//!         环境变量 SWARM_SIDEBAR_API_URL 覆盖后端地址
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 五、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     轮询任务定时（或按 Alt+r）请求资源池列表
//!         ↓
//!     结果经 channel 送回 UI 线程
//!         ↓
//!     主循环 tick 调用 CoreService::poll_updates()
//!         ↓
//!     列表有变化时 MenuListBuilder 重建菜单树
//!         ↓
//!     Update 层根据 revision 重建激活状态
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;
mod http_pool_source;
mod route_store;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
