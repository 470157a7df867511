//! 菜单组件
//!
//! 纵向模式渲染为带边框的列表；横向模式渲染为顶部菜单栏，
//! 展开的顶层项在菜单栏下方弹出下拉框。
//! 渲染与鼠标命中检测共用同一套几何计算。

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use swarm_sidebar_core::types::MenuNode;
use swarm_sidebar_core::{LevelId, MenuRow};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::AppLayout;
use crate::view::theme::{colors, ThemeColors};

/// 鼠标命中的菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuHit {
    pub level: LevelId,
    pub index: usize,
}

impl From<MenuRow<'_>> for MenuHit {
    fn from(row: MenuRow<'_>) -> Self {
        Self {
            level: row.level,
            index: row.index,
        }
    }
}

/// 一个下拉框：外框与每一行的位置
struct Dropdown<'a> {
    area: Rect,
    rows: Vec<(Rect, MenuRow<'a>)>,
}

// ========== 几何计算 ==========

/// 菜单项显示文本（不含徽标）
fn row_label(row: &MenuRow<'_>) -> String {
    let marker = match (row.node.has_children(), row.active) {
        (true, true) => "▾",
        (true, false) => "▸",
        (false, _) => "·",
    };
    format!("{}{marker} {}", "  ".repeat(row.depth), row.node.label)
}

/// 菜单项显示文本
fn row_text(row: &MenuRow<'_>) -> String {
    match &row.node.badge {
        Some(badge) => format!("{} [{badge}]", row_label(row)),
        None => row_label(row),
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// 纵向菜单中每一行的位置
fn sidebar_row_areas<'a>(app: &App, model: &'a [MenuNode], list: Rect) -> Vec<(Rect, MenuRow<'a>)> {
    app.sidebar
        .rows(model)
        .into_iter()
        .skip(app.sidebar.scroll_offset)
        .take(usize::from(list.height))
        .zip(0u16..)
        .map(|(row, i)| (Rect::new(list.x, list.y + i, list.width, 1), row))
        .collect()
}

/// 横向菜单栏中顶层项的位置
fn menubar_item_areas<'a>(app: &App, model: &'a [MenuNode], bar: Rect) -> Vec<(Rect, MenuRow<'a>)> {
    let mut x = bar.x + 1;
    let mut areas = Vec::new();
    for row in app.sidebar.activation.level_rows(model, LevelId::ROOT, 0) {
        let width = text_width(&row_text(&row)) + 2;
        if x >= bar.right() {
            break;
        }
        let width = width.min(bar.right() - x);
        areas.push((Rect::new(x, bar.y, width, 1), row));
        x += width + 1;
    }
    areas
}

/// 展开的顶层项对应的下拉框，限制在 `bounds` 之内
fn dropdowns<'a>(app: &App, model: &'a [MenuNode], bar: Rect, bounds: Rect) -> Vec<Dropdown<'a>> {
    let activation = &app.sidebar.activation;
    let mut result = Vec::new();

    for (item, row) in menubar_item_areas(app, model, bar) {
        if !row.active {
            continue;
        }
        let Some(child) = activation.child_level(LevelId::ROOT, row.index) else {
            continue;
        };
        let rows = activation.subtree_rows(model, child, 0);
        if rows.is_empty() || bounds.height < 3 {
            continue;
        }

        let content_width = rows
            .iter()
            .map(|row| text_width(&row_text(row)))
            .max()
            .unwrap_or(0);
        let width = (content_width + 4).min(bounds.width);
        let height = u16::try_from(rows.len() + 2)
            .unwrap_or(u16::MAX)
            .min(bounds.height);
        let x = item.x.min(bounds.right().saturating_sub(width));
        let area = Rect::new(x, bounds.y, width, height);

        let rows = rows
            .into_iter()
            .take(usize::from(height - 2))
            .zip(0u16..)
            .map(|(row, i)| (Rect::new(x + 1, bounds.y + 1 + i, width - 2, 1), row))
            .collect();
        result.push(Dropdown { area, rows });
    }

    result
}

/// 查找坐标处的菜单项
pub fn hit_test(app: &App, column: u16, row: u16) -> Option<MenuHit> {
    let layout = AppLayout::for_app(app);
    let model = app.core.menu_model();
    let pos = Position::new(column, row);

    if let Some(list) = layout.sidebar_list {
        if let Some((_, row)) = sidebar_row_areas(app, model, list)
            .into_iter()
            .find(|(area, _)| area.contains(pos))
        {
            return Some(row.into());
        }
    }

    if let Some(bar) = layout.menubar {
        // 后绘制的下拉框在上层
        for dropdown in dropdowns(app, model, bar, layout.content).iter().rev() {
            if let Some((_, row)) = dropdown.rows.iter().find(|(area, _)| area.contains(pos)) {
                return Some((*row).into());
            }
        }
        if let Some((_, row)) = menubar_item_areas(app, model, bar)
            .into_iter()
            .find(|(area, _)| area.contains(pos))
        {
            return Some(row.into());
        }
    }

    None
}

/// 坐标是否落在菜单区域内（包括边框和下拉框）
pub fn covers_menu(app: &App, column: u16, row: u16) -> bool {
    let layout = AppLayout::for_app(app);
    let pos = Position::new(column, row);

    if layout.sidebar.is_some_and(|area| area.contains(pos)) {
        return true;
    }
    layout.menubar.is_some_and(|bar| {
        bar.contains(pos)
            || dropdowns(app, app.core.menu_model(), bar, layout.content)
                .iter()
                .any(|dropdown| dropdown.area.contains(pos))
    })
}

// ========== 渲染 ==========

fn row_style(app: &App, c: &ThemeColors, row: &MenuRow<'_>, cursor: Option<MenuHit>) -> Style {
    let is_cursor = app.focus.is_sidebar() && cursor == Some(MenuHit::from(*row));
    let is_current = row
        .node
        .route_path()
        .is_some_and(|route| route == app.current_page.route());

    if is_cursor {
        c.selected()
    } else if row.node.disabled {
        Style::default().fg(c.muted)
    } else if is_current {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else if row.active && row.node.has_children() {
        Style::default()
            .fg(c.menu_fg)
            .bg(c.menu_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.menu_fg)
    }
}

fn row_line(app: &App, c: &ThemeColors, row: &MenuRow<'_>, cursor: Option<MenuHit>) -> Line<'static> {
    let style = row_style(app, c, row, cursor);
    let mut spans = vec![Span::styled(row_label(row), style)];
    if let Some(badge) = &row.node.badge {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{badge}]"),
            Style::default().bg(c.badge_bg).fg(c.badge_fg),
        ));
    }
    Line::from(spans)
}

fn cursor_hit(app: &App) -> Option<MenuHit> {
    app.sidebar
        .selected(app.core.menu_model())
        .map(|(level, index)| MenuHit { level, index })
}

/// 渲染纵向菜单
pub fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors(&app.stylesheets);
    let model = app.core.menu_model();

    let block = Block::default()
        .title(format!(" {} ", texts.sidebar.title))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(app.focus.is_sidebar()))
        .style(Style::default().bg(c.menu_bg));
    let list = block.inner(area);
    frame.render_widget(block, area);

    if model.is_empty() {
        let hint = if app.core.has_loaded() {
            texts.sidebar.empty
        } else {
            texts.sidebar.loading
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(c.muted)),
            list,
        );
        return;
    }

    let cursor = cursor_hit(app);
    for (row_area, row) in sidebar_row_areas(app, model, list) {
        frame.render_widget(Paragraph::new(row_line(app, &c, &row, cursor)), row_area);
    }
}

/// 渲染横向菜单栏及其下拉框
pub fn render_menubar(app: &App, frame: &mut Frame, bar: Rect, bounds: Rect) {
    let c = colors(&app.stylesheets);
    let model = app.core.menu_model();
    let cursor = cursor_hit(app);

    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(c.menu_bg)),
        bar,
    );

    if model.is_empty() {
        frame.render_widget(
            Paragraph::new(format!(" {}", t().sidebar.loading))
                .style(Style::default().bg(c.menu_bg).fg(c.muted)),
            bar,
        );
        return;
    }

    for (item_area, row) in menubar_item_areas(app, model, bar) {
        let mut line = row_line(app, &c, &row, cursor);
        line.spans.insert(0, Span::raw(" "));
        frame.render_widget(Paragraph::new(line), item_area);
    }

    for dropdown in dropdowns(app, model, bar, bounds) {
        frame.render_widget(Clear, dropdown.area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(c.border_style(app.focus.is_sidebar()))
                .style(Style::default().bg(c.menu_bg)),
            dropdown.area,
        );
        for (row_area, row) in &dropdown.rows {
            frame.render_widget(Paragraph::new(row_line(app, &c, row, cursor)), *row_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use swarm_sidebar_core::types::MenuMode;

    use super::*;
    use crate::backend::AppConfig;
    use crate::message::{AppMessage, SidebarMessage};
    use crate::update::test_support::test_app;
    use crate::update::update;

    #[test]
    fn sidebar_rows_are_hit_below_the_border() {
        let (_rt, app) = test_app(&AppConfig::default());
        // 标题栏占第 0 行，边框占第 1 行，第一项在第 2 行
        let hit = hit_test(&app, 3, 2).unwrap();
        assert_eq!(hit, MenuHit { level: LevelId::ROOT, index: 0 });

        let hit = hit_test(&app, 3, 3).unwrap();
        assert_eq!(hit.index, 1, "Pools");
        assert!(hit_test(&app, 60, 3).is_none(), "content area");
        assert!(covers_menu(&app, 0, 3), "left border");
    }

    #[test]
    fn menubar_items_are_laid_out_left_to_right() {
        let config = AppConfig {
            menu_mode: MenuMode::Horizontal,
            ..AppConfig::default()
        };
        let (_rt, app) = test_app(&config);
        let model = app.core.menu_model();
        let bar = AppLayout::for_app(&app).menubar.unwrap();
        let items = menubar_item_areas(&app, model, bar);

        let labels: Vec<&str> = items.iter().map(|(_, row)| row.node.label.as_str()).collect();
        assert_eq!(labels, ["FAQ", "Pools", "Colors"]);
        assert!(items.windows(2).all(|pair| pair[0].0.right() < pair[1].0.x));
    }

    #[test]
    fn clicking_menubar_opens_a_dropdown_that_can_be_hit() {
        let config = AppConfig {
            menu_mode: MenuMode::Horizontal,
            ..AppConfig::default()
        };
        let (_rt, mut app) = test_app(&config);
        let bar = AppLayout::for_app(&app).menubar.unwrap();
        let colors_item = menubar_item_areas(&app, app.core.menu_model(), bar)[2].0;

        let hit = hit_test(&app, colors_item.x + 1, bar.y).unwrap();
        update(
            &mut app,
            AppMessage::Sidebar(SidebarMessage::Click {
                level: hit.level,
                index: hit.index,
            }),
        );

        let layout = AppLayout::for_app(&app);
        let boxes = dropdowns(&app, app.core.menu_model(), bar, layout.content);
        let colors_box = boxes.last().unwrap();
        let (first_area, first_row) = colors_box.rows[0];
        assert_eq!(first_row.node.label, "Layout Palette");

        let hit = hit_test(&app, first_area.x + 1, first_area.y).unwrap();
        assert_eq!(hit, MenuHit::from(first_row));
        assert!(covers_menu(&app, colors_box.area.x, colors_box.area.y));
    }
}
