//! 帮助弹窗

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 计算居中区域
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// 渲染帮助弹窗
pub fn render(app: &App, frame: &mut Frame) {
    let texts = &t().help;
    let actions = &texts.actions;
    let c = colors(&app.stylesheets);

    let entries = [
        ("↑↓ / j k", actions.move_up_down),
        ("Enter", actions.open_item),
        ("Tab", actions.switch_panel),
        ("Alt+r", actions.refresh),
        ("Alt+m", actions.cycle_menu_mode),
        ("Alt+s", actions.settings),
        ("Esc", actions.back_close),
        ("Mouse", actions.mouse),
        ("Ctrl+C / Alt+q", actions.quit),
    ];

    let mut lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<16}"), Styles::hint_key()),
                Span::styled(*desc, Style::default().fg(c.fg)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", texts.close_hint),
        Style::default().fg(c.muted),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let area = centered(frame.area(), 56, height);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", texts.title))
                .title_style(c.title())
                .borders(Borders::ALL)
                .border_style(c.border_style(true))
                .style(Style::default().bg(c.bg)),
        ),
        area,
    );
}
