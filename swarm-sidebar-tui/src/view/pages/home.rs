//! 首页

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use swarm_sidebar_core::types::StylesheetKind;

use crate::i18n::t;
use crate::model::App;
use crate::update::menu_mode_name;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors(&app.stylesheets);

    // 首页布局：欢迎信息 + 概况
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.description),
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    // 资源池概况
    let pool_count = if app.core.has_loaded() {
        app.core.pools().len().to_string()
    } else {
        texts.common.loading.to_string()
    };
    let last_update = app.last_update.map_or_else(
        || texts.common.never.to_string(),
        |time| time.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    let pools = Paragraph::new(vec![
        Line::from(""),
        stat_line(texts.home.pool_count, pool_count, c.success),
        stat_line(texts.home.last_update, last_update, c.fg),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", texts.pools.all_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border)),
    );
    frame.render_widget(pools, columns[0]);

    // 布局概况
    let skin = |kind: StylesheetKind| {
        app.stylesheets
            .current(kind)
            .unwrap_or_default()
            .to_string()
    };
    let appearance = Paragraph::new(vec![
        Line::from(""),
        stat_line(
            texts.home.menu_mode,
            menu_mode_name(app.layout.menu_mode).to_string(),
            c.fg,
        ),
        stat_line(
            texts.home.device,
            format!("{:?}", app.layout.device),
            c.fg,
        ),
        stat_line(texts.home.layout, skin(StylesheetKind::Layout), c.menu_active),
        stat_line(texts.home.theme, skin(StylesheetKind::Theme), c.highlight),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", texts.settings.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border)),
    );
    frame.render_widget(appearance, columns[1]);
}

fn stat_line(label: &str, value: String, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {label}: ")),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}
