//! 内容面板消息处理

use crate::i18n::{self, t};
use crate::message::ContentMessage;
use crate::model::{App, FocusPanel, Page, SettingItem};

use super::{menu_mode_name, navigate, set_menu_mode};

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => handle_select_previous(app),
        ContentMessage::SelectNext => handle_select_next(app),
        ContentMessage::Confirm => handle_confirm(app),
        ContentMessage::TogglePrev => handle_toggle(app, false),
        ContentMessage::ToggleNext => handle_toggle(app, true),
        ContentMessage::Click => focus_content(app),
    }
}

/// 焦点移到内容区域（相当于点击菜单以外的布局区域）
///
/// 横向 / 浮层模式下会向菜单广播重置，收起所有层级
pub fn focus_content(app: &mut App) {
    app.focus = FocusPanel::Content;
    if app.layout.reset_collapses() {
        app.layout.reset_menu = true;
    }
    app.layout.menu_hover_active = false;
    app.close_menu();
}

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::AllPools => {
            app.pools_cursor = app.pools_cursor.saturating_sub(1);
        }
        Page::Settings => {
            app.settings.select_previous();
        }
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::AllPools => {
            if app.pools_cursor + 1 < app.core.pools().len() {
                app.pools_cursor += 1;
            }
        }
        Page::Settings => {
            app.settings.select_next();
        }
        _ => {}
    }
}

fn handle_confirm(app: &mut App) {
    match app.current_page {
        Page::AllPools => {
            if let Some(pool) = app.core.pools().get(app.pools_cursor) {
                let page = Page::Pool {
                    id: pool.id.clone(),
                };
                navigate(app, page);
            }
        }
        Page::Settings => handle_toggle(app, true),
        _ => {}
    }
}

fn handle_toggle(app: &mut App, forward: bool) {
    if app.current_page != Page::Settings {
        return;
    }
    match app.settings.current_item() {
        Some(SettingItem::MenuMode) => {
            let mode = if forward {
                app.layout.menu_mode.next()
            } else {
                app.layout.menu_mode.prev()
            };
            set_menu_mode(app, mode);
        }
        Some(SettingItem::Language) => {
            let language = if forward {
                app.settings.language.next()
            } else {
                app.settings.language.prev()
            };
            app.settings.language = language;
            i18n::set_language(language);
            log::info!("Language switched to {}", language.code());
            app.set_status(format!(
                "{}: {}",
                t().status_bar.language_changed,
                language.display_name()
            ));
        }
        None => {}
    }
}
