//! 设置页面

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, SettingItem};
use crate::update::menu_mode_name;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors(&app.stylesheets);

    let mut lines = vec![Line::from("")];
    for (i, item) in SettingItem::all().iter().enumerate() {
        let (label, value) = match item {
            SettingItem::MenuMode => (
                texts.settings.menu_mode,
                menu_mode_name(app.layout.menu_mode),
            ),
            SettingItem::Language => (
                texts.settings.language,
                app.settings.language.display_name(),
            ),
        };

        let selected = app.focus.is_content() && i == app.settings.selected_index;
        let style = if selected {
            c.selected()
        } else {
            Style::default().fg(c.fg)
        };
        let prefix = if selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(format!("{prefix}{label:<16}"), style),
            Span::styled(format!("◀ {value} ▶"), Style::default().fg(c.highlight)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
