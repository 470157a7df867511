//! 主布局
//!
//! 布局的几何计算（[`AppLayout`]）与渲染分开：
//! 鼠标命中检测和滚动同步使用同一份几何信息。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 纵向菜单的宽度
pub const SIDEBAR_WIDTH: u16 = 34;

/// 各区域的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// 标题栏
    pub title: Rect,
    /// 横向菜单栏
    pub menubar: Option<Rect>,
    /// 纵向菜单（含边框）
    pub sidebar: Option<Rect>,
    /// 纵向菜单的列表区域
    pub sidebar_list: Option<Rect>,
    /// 纵向菜单是否浮在内容之上
    pub sidebar_floating: bool,
    /// 页面内容（含边框）
    pub content: Rect,
    /// 状态栏
    pub status: Rect,
}

impl AppLayout {
    /// 按当前菜单模式计算布局
    pub fn compute(area: Rect, app: &App) -> Self {
        let menubar_height = u16::from(app.menubar_visible());

        // 标题栏 + [菜单栏] + 主内容区 + 状态栏
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(menubar_height),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let main = rows[2];
        let menubar = app.menubar_visible().then_some(rows[1]);

        let (sidebar, content, sidebar_floating) = if app.sidebar_visible() {
            let floating = app.layout.is_overlay() || app.layout.is_mobile();
            if floating {
                let width = SIDEBAR_WIDTH.min(main.width);
                (Some(Rect { width, ..main }), main, true)
            } else {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                    .split(main);
                (Some(columns[0]), columns[1], false)
            }
        } else {
            (None, main, false)
        };

        let sidebar_list = sidebar.map(|area| Block::default().borders(Borders::ALL).inner(area));

        Self {
            title: rows[0],
            menubar,
            sidebar,
            sidebar_list,
            sidebar_floating,
            content,
            status: rows[3],
        }
    }

    /// 使用记录的终端尺寸计算布局
    pub fn for_app(app: &App) -> Self {
        let (width, height) = app.viewport;
        Self::compute(Rect::new(0, 0, width, height), app)
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let layout = AppLayout::compute(frame.area(), app);
    let c = colors(&app.stylesheets);

    // 渲染标题栏
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(c.bar());
    frame.render_widget(title, layout.title);

    // 渲染页面内容
    render_page_content(app, frame, layout.content);

    // 渲染菜单（浮层菜单在内容之后绘制）
    if let Some(area) = layout.sidebar {
        if layout.sidebar_floating {
            frame.render_widget(Clear, area);
        }
        components::navigation::render_sidebar(app, frame, area);
    }
    if let Some(area) = layout.menubar {
        components::navigation::render_menubar(app, frame, area, layout.content);
    }

    // 渲染状态栏
    components::statusbar::render(app, frame, layout.status);

    // 渲染帮助（在最上层）
    if app.show_help {
        components::help::render(app, frame);
    }
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(&app.stylesheets);

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(app.focus.is_content()))
        .style(Style::default().fg(c.fg));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match &app.current_page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::AllPools => pages::pools::render_list(app, frame, inner_area),
        Page::Pool { id } => pages::pools::render_detail(app, id, frame, inner_area),
        Page::Faq => pages::faq::render(app, frame, inner_area),
        Page::Settings => pages::settings::render(app, frame, inner_area),
    }
}
