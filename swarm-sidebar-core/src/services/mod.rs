//! 业务逻辑服务层

pub mod menu_catalog;
mod menu_activation;
mod menu_list_builder;
mod pool_poller;
mod route_history;
mod submenu;

pub use menu_activation::{LevelId, MenuActivation, MenuRow};
pub use menu_list_builder::{MenuListBuilder, DEFAULT_REFRESH_INTERVAL};
pub use pool_poller::PoolPoller;
pub use route_history::RouteHistory;
pub use submenu::{ClickOutcome, ItemEvent, NavigationRequest, SubmenuState, SCROLL_RESYNC_DELAY};
