//! 资源池页面：全部资源池列表与单个资源池详情

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染全部资源池
pub fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors(&app.stylesheets);
    let pools = app.core.pools();

    if pools.is_empty() {
        let hint = if app.core.has_loaded() {
            texts.pools.empty
        } else {
            texts.common.loading
        };
        frame.render_widget(
            Paragraph::new(format!("  {hint}")).style(Style::default().fg(c.muted)),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        texts.pools.col_id,
        texts.pools.col_name,
        texts.pools.col_route,
    ])
    .style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = pools
        .iter()
        .map(|pool| {
            Row::new(vec![
                pool.id.clone(),
                pool.display_name.clone(),
                pool.route(),
            ])
            .style(Style::default().fg(c.fg))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .row_highlight_style(c.selected());

    let mut state = TableState::default();
    if app.focus.is_content() {
        state.select(Some(app.pools_cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// 渲染单个资源池
pub fn render_detail(app: &App, id: &str, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors(&app.stylesheets);

    let lines = match app.core.pools().iter().find(|pool| pool.id == id) {
        Some(pool) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", pool.display_name),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("  {}: {}", texts.pools.col_id, pool.id)),
            Line::from(format!("  {}: {}", texts.pools.col_route, pool.route())),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {} ({id})", texts.pools.not_found),
                Style::default().fg(c.warning),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines), area);
}
