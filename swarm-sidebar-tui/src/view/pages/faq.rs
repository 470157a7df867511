//! FAQ 页面

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(&app.stylesheets);

    let mut lines = Vec::new();
    for (question, answer) in t().faq.entries {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {question}"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {answer}"),
            Style::default().fg(c.fg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
