//! src/update/mod.rs
//! Update 层：消费消息，修改 Model
//!
//!     update(app, msg)
//!         ├── sidebar::update     菜单点击 / 悬停 / 光标
//!         ├── content::update     内容面板
//!         └── 全局消息            退出、刷新、菜单模式、Tick ...
//!
//!     子模块：
//!         mod content;        // 内容面板：列表光标、设置项切换、焦点
//!         mod sidebar;        // 菜单：光标、点击、悬停
//!
//!     每条消息处理完之后，检查 LayoutContext 的重置标志是否变化，
//!     变化时向菜单的所有层级广播一次。
//!

mod content;
mod sidebar;

use std::time::Instant;

use chrono::Local;
use swarm_sidebar_core::types::MenuMode;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};
use crate::view::layout::AppLayout;

pub use content::focus_content;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if app.focus.is_sidebar() {
                focus_content(app);
            } else {
                app.focus = FocusPanel::Sidebar;
                app.open_menu();
            }
        }

        AppMessage::Sidebar(sidebar_msg) => {
            sidebar::update(app, sidebar_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::GoBack => {
            go_back(app);
        }

        AppMessage::Refresh => {
            app.core.request_refresh();
            app.set_status(t().status_bar.refreshing);
        }

        AppMessage::CycleMenuMode => {
            set_menu_mode(app, app.layout.menu_mode.next());
        }

        AppMessage::OpenSettings => {
            navigate(app, Page::Settings);
            focus_content(app);
        }

        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
        }

        AppMessage::Resize(width, height) => {
            app.set_viewport(width, height);
            sync_sidebar_scroll(app);
        }

        AppMessage::Tick => {
            tick(app);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    sync_reset(app);
}

/// 跳转到页面，并记录路由
pub(crate) fn navigate(app: &mut App, page: Page) {
    if app.current_page == page {
        return;
    }
    log::debug!("Navigating to {}", page.route());
    app.core.record_route(&page.route());
    app.current_page = page;
    app.pools_cursor = 0;
}

/// 切换菜单模式
pub(crate) fn set_menu_mode(app: &mut App, mode: MenuMode) {
    if app.layout.menu_mode == mode {
        return;
    }
    log::info!("Menu mode changed to {mode:?}");
    app.layout.menu_mode = mode;
    app.layout.menu_hover_active = false;
    app.close_menu();

    // 切换模式时收起所有层级（固定模式下不会收起）
    let model = app.core.menu_model();
    app.sidebar
        .activation
        .broadcast_reset(model, true, &app.layout);
    app.sidebar.clamp_cursor(model);

    app.set_status(format!(
        "{}: {}",
        t().status_bar.menu_mode_changed,
        menu_mode_name(mode)
    ));
}

pub(crate) fn menu_mode_name(mode: MenuMode) -> &'static str {
    let modes = &t().settings.modes;
    match mode {
        MenuMode::Static => modes.static_mode,
        MenuMode::Overlay => modes.overlay,
        MenuMode::Horizontal => modes.horizontal,
    }
}

fn go_back(app: &mut App) {
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.focus.is_sidebar() && (app.layout.sidebar_active || app.layout.mobile_menu_active) {
        app.close_menu();
        app.focus = FocusPanel::Content;
        return;
    }

    if app.current_page.is_detail_page() {
        navigate(app, Page::AllPools);
    } else {
        navigate(app, Page::Home);
    }
    app.clear_status();
}

/// 每轮主循环：应用后台数据、按需重建激活状态、处理延迟的滚动同步
fn tick(app: &mut App) {
    if app.core.poll_updates() {
        app.last_update = Some(Local::now());
        if app.core.menu_revision() > 1 {
            app.set_status(t().status_bar.menu_updated);
        }
    }

    let revision = app.core.menu_revision();
    if app.sidebar.revision != revision {
        app.sidebar.rebuild(app.core.menu_model(), revision);
        app.pending_scroll_resync.get_or_insert_with(Instant::now);
    }

    if let Some(deadline) = app.pending_scroll_resync {
        if Instant::now() >= deadline {
            app.pending_scroll_resync = None;
            sync_sidebar_scroll(app);
        }
    }
}

/// 让光标保持在侧边栏可见范围内
pub(crate) fn sync_sidebar_scroll(app: &mut App) {
    let height = AppLayout::for_app(app)
        .sidebar_list
        .map_or(0, |area| usize::from(area.height));
    app.sidebar.sync_scroll(app.core.menu_model(), height);
}

/// 重置标志变化时，向所有层级广播
fn sync_reset(app: &mut App) {
    let reset = app.layout.reset_menu;
    if app.sidebar.last_reset == reset {
        return;
    }
    app.sidebar.last_reset = reset;
    let model = app.core.menu_model();
    app.sidebar
        .activation
        .broadcast_reset(model, reset, &app.layout);
    app.sidebar.clamp_cursor(model);
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use swarm_sidebar_core::traits::InMemoryRouteStore;
    use swarm_sidebar_core::types::Pool;
    use swarm_sidebar_core::{CoreResult, PoolSource};
    use tokio::runtime::Runtime;

    use crate::backend::{AppConfig, CoreService};
    use crate::message::AppMessage;
    use crate::model::App;

    struct EmptyPoolSource;

    #[async_trait]
    impl PoolSource for EmptyPoolSource {
        async fn get_pools(&self) -> CoreResult<Vec<Pool>> {
            Ok(Vec::new())
        }
    }

    /// 创建一个已加载两个资源池、终端为 120x40 的应用
    pub fn test_app(config: &AppConfig) -> (Runtime, App) {
        let runtime = Runtime::new().unwrap();
        let core = CoreService::with_adapters(
            runtime.handle().clone(),
            Arc::new(EmptyPoolSource),
            Arc::new(InMemoryRouteStore::new()),
            Duration::from_secs(30),
        );
        let mut app = App::new(core, config);
        app.core
            .apply_pools(vec![Pool::new("a", "Alpha"), Pool::new("b", "Beta")]);
        super::update(&mut app, AppMessage::Resize(120, 40));
        super::update(&mut app, AppMessage::Tick);
        (runtime, app)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;
    use crate::backend::AppConfig;
    use swarm_sidebar_core::types::Pool;

    #[test]
    fn tick_rebuilds_activation_when_menu_changes() {
        let (_rt, mut app) = test_app(&AppConfig::default());
        assert_eq!(app.sidebar.revision, 1);
        assert!(app.last_update.is_none(), "applied directly, not polled");

        app.core.apply_pools(vec![Pool::new("c", "Gamma")]);
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.sidebar.revision, 2);
        assert_eq!(app.sidebar.rows(app.core.menu_model()).len(), 5);
    }

    #[test]
    fn cycling_menu_mode_wraps() {
        let (_rt, mut app) = test_app(&AppConfig::default());
        update(&mut app, AppMessage::CycleMenuMode);
        assert_eq!(app.layout.menu_mode, MenuMode::Overlay);
        update(&mut app, AppMessage::CycleMenuMode);
        update(&mut app, AppMessage::CycleMenuMode);
        assert_eq!(app.layout.menu_mode, MenuMode::Static);
    }

    #[test]
    fn go_back_from_pool_returns_to_list() {
        let (_rt, mut app) = test_app(&AppConfig::default());
        navigate(&mut app, Page::Pool { id: "a".into() });
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::AllPools);
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Home);
    }

    #[test]
    fn resize_updates_device_class() {
        let (_rt, mut app) = test_app(&AppConfig::default());
        update(&mut app, AppMessage::Resize(50, 30));
        assert!(app.layout.is_mobile());
        update(&mut app, AppMessage::Resize(80, 30));
        assert!(app.layout.is_tablet());
    }
}
