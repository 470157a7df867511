//! 状态栏

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在最后
    let message = app
        .status_message
        .as_deref()
        .unwrap_or(t().status_bar.ready);
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Yellow)));

    let c = colors(&app.stylesheets);
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(c.menu_bg));

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints_texts = &t().hints;
    let keys = &hints_texts.keys;
    let mut hints = vec![(keys.tab, hints_texts.switch_panel)];

    match app.focus {
        FocusPanel::Sidebar => {
            hints.push((keys.up_down, hints_texts.navigate));
            hints.push((keys.enter, hints_texts.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::AllPools => {
                hints.push((keys.up_down, hints_texts.navigate));
                hints.push((keys.enter, hints_texts.open));
            }
            Page::Settings => {
                hints.push((keys.up_down, hints_texts.navigate));
                hints.push((keys.left_right, hints_texts.change));
            }
            _ => {}
        },
    }

    hints.push(("Alt+r", hints_texts.refresh));
    hints.push(("Alt+m", hints_texts.menu_mode));
    hints.push(("?", hints_texts.help));
    hints.push(("Alt+q", hints_texts.quit));
    hints
}
