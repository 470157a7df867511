//! 事件处理：键盘、鼠标、终端尺寸

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, SidebarMessage};
use crate::model::{App, Page};
use crate::view::components::navigation::{covers_menu, hit_test};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

fn is_help_key(key: &KeyEvent) -> bool {
    DefaultKeymap::HELP.matches(key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助打开时只响应关闭
    if app.show_help {
        return if is_help_key(&key) || DefaultKeymap::BACK.matches(&key) {
            AppMessage::ToggleHelp
        } else {
            AppMessage::Noop
        };
    }

    if is_help_key(&key) {
        return AppMessage::ToggleHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::CYCLE_MENU_MODE.matches(&key) {
        return AppMessage::CycleMenuMode;
    }
    if DefaultKeymap::SETTINGS.matches(&key) {
        return AppMessage::OpenSettings;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_sidebar() {
        handle_sidebar_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理菜单的按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Sidebar(SidebarMessage::Activate);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Sidebar(SidebarMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Sidebar(SidebarMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Left | KeyCode::Char('h') if app.current_page == Page::Settings => {
            AppMessage::Content(ContentMessage::TogglePrev)
        }
        KeyCode::Right | KeyCode::Char('l') if app.current_page == Page::Settings => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.show_help {
        return AppMessage::Noop;
    }

    let hit = hit_test(app, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => hit.map_or(AppMessage::Noop, |hit| {
            AppMessage::Sidebar(SidebarMessage::Hover {
                level: hit.level,
                index: hit.index,
            })
        }),
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(hit) => AppMessage::Sidebar(SidebarMessage::Click {
                level: hit.level,
                index: hit.index,
            }),
            None if covers_menu(app, mouse.column, mouse.row) => AppMessage::Noop,
            None => AppMessage::Content(ContentMessage::Click),
        },
        _ => AppMessage::Noop,
    }
}
