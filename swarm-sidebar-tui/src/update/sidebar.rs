//! 侧边栏消息处理
//!
//! 点击流程：
//!     1. 标记这是一次菜单内点击（reset_menu = false）
//!     2. 交给对应层级的状态机处理（展开 / 收起、执行皮肤动作）
//!     3. 根据点击结果导航、安排滚动同步、收起浮层

use std::time::Instant;

use swarm_sidebar_core::services::NavigationRequest;
use swarm_sidebar_core::types::StylesheetKind;
use swarm_sidebar_core::LevelId;

use super::{navigate, sync_sidebar_scroll};
use crate::i18n::t;
use crate::message::SidebarMessage;
use crate::model::{App, FocusPanel, Page};

pub fn update(app: &mut App, msg: SidebarMessage) {
    match msg {
        SidebarMessage::SelectPrevious => {
            app.sidebar.select_previous();
            sync_sidebar_scroll(app);
        }
        SidebarMessage::SelectNext => {
            app.sidebar.select_next(app.core.menu_model());
            sync_sidebar_scroll(app);
        }
        SidebarMessage::Activate => {
            if let Some((level, index)) = app.sidebar.selected(app.core.menu_model()) {
                click(app, level, index);
            }
        }
        SidebarMessage::Click { level, index } => {
            app.focus = FocusPanel::Sidebar;
            app.sidebar.select(app.core.menu_model(), level, index);
            click(app, level, index);
        }
        SidebarMessage::Hover { level, index } => {
            app.sidebar
                .activation
                .mouse_enter(app.core.menu_model(), level, index, &app.layout);
        }
    }
}

fn click(app: &mut App, level: LevelId, index: usize) {
    // 菜单内的点击不触发布局点击的重置
    app.layout.reset_menu = false;

    let layout_before = current_skin(app, StylesheetKind::Layout);
    let theme_before = current_skin(app, StylesheetKind::Theme);

    let model = app.core.menu_model();
    let is_leaf = app
        .sidebar
        .activation
        .items(model, level)
        .and_then(|items| items.get(index))
        .is_some_and(|node| !node.has_children());

    let outcome = app.sidebar.activation.click(
        model,
        level,
        index,
        &mut app.layout,
        &mut app.stylesheets,
    );
    app.sidebar.clamp_cursor(model);

    if !outcome.handled {
        return;
    }

    if let Some(delay) = outcome.scroll_resync {
        app.pending_scroll_resync = Some(Instant::now() + delay);
    }

    report_skin_change(app, StylesheetKind::Layout, layout_before);
    report_skin_change(app, StylesheetKind::Theme, theme_before);

    match outcome.navigation {
        Some(NavigationRequest::Route(route)) => match Page::from_route(&route) {
            Some(page) => navigate(app, page),
            None => {
                log::warn!("No page registered for route {route}");
                app.set_status(format!("{}: {route}", t().status_bar.unknown_route));
            }
        },
        Some(NavigationRequest::External { href, target }) => {
            log::info!("Opening external link {href} (target {target:?})");
            app.set_status(format!("{}: {href}", t().status_bar.external_link));
        }
        None => {}
    }

    if is_leaf && app.layout.is_overlay() {
        app.close_menu();
        app.focus = FocusPanel::Content;
    }
}

fn current_skin(app: &App, kind: StylesheetKind) -> Option<String> {
    app.stylesheets.current(kind).map(str::to_string)
}

fn report_skin_change(app: &mut App, kind: StylesheetKind, before: Option<String>) {
    let after = current_skin(app, kind);
    if after == before {
        return;
    }
    let label = match kind {
        StylesheetKind::Layout => t().status_bar.layout_changed,
        StylesheetKind::Theme => t().status_bar.theme_changed,
    };
    app.set_status(format!("{label}: {}", after.unwrap_or_default()));
}
