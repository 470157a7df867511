//! 主题和样式定义
//!
//! 终端没有样式表，`theme-css` / `layout-css` 当前指向的皮肤名称
//! 决定配色：主题决定强调色，布局决定菜单的底色。

use ratatui::style::{Color, Modifier, Style};
use swarm_sidebar_core::types::{StylesheetKind, StylesheetLinks};

/// Material 调色板中各皮肤的主色
const PALETTE: &[(&str, (u8, u8, u8))] = &[
    ("bluegrey", (96, 125, 139)),
    ("indigo", (63, 81, 181)),
    ("pink", (233, 30, 99)),
    ("purple", (156, 39, 176)),
    ("deeppurple", (103, 58, 183)),
    ("blue", (33, 150, 243)),
    ("lightblue", (3, 169, 244)),
    ("cyan", (0, 188, 212)),
    ("teal", (0, 150, 136)),
    ("green", (76, 175, 80)),
    ("lightgreen", (139, 195, 74)),
    ("lime", (205, 220, 57)),
    ("yellow", (255, 235, 59)),
    ("amber", (255, 193, 7)),
    ("orange", (255, 152, 0)),
    ("deeporange", (255, 87, 34)),
    ("brown", (121, 85, 72)),
    ("grey", (158, 158, 158)),
    // Special 布局
    ("reflection", (44, 62, 80)),
    ("moody", (72, 52, 80)),
    ("cityscape", (38, 50, 56)),
    ("cloudy", (84, 110, 122)),
    ("storm", (33, 37, 41)),
    ("palm", (27, 94, 32)),
    ("flatiron", (62, 39, 35)),
];

/// 未知皮肤时使用的颜色
const FALLBACK: (u8, u8, u8) = (96, 125, 139);

fn skin_rgb(name: Option<&str>) -> (u8, u8, u8) {
    name.and_then(|name| {
        PALETTE
            .iter()
            .find(|(skin, _)| *skin == name)
            .map(|(_, rgb)| *rgb)
    })
    .unwrap_or(FALLBACK)
}

/// 把颜色压暗，用作大面积底色
fn darken((r, g, b): (u8, u8, u8), percent: u16) -> Color {
    let scale = |v: u8| u8::try_from(u16::from(v) * percent / 100).unwrap_or(u8::MAX);
    Color::Rgb(scale(r), scale(g), scale(b))
}

/// 亮色背景上用黑字，暗色背景上用白字
fn contrast((r, g, b): (u8, u8, u8)) -> Color {
    let luma = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    if luma > 150_000 {
        Color::Black
    } else {
        Color::White
    }
}

/// 获取当前皮肤的颜色方案
pub fn colors(links: &StylesheetLinks) -> ThemeColors {
    ThemeColors::from_links(links)
}

/// 主题颜色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub highlight_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    /// 菜单底色
    pub menu_bg: Color,
    pub menu_fg: Color,
    /// 展开中的菜单项
    pub menu_active: Color,
    /// 徽标
    pub badge_bg: Color,
    pub badge_fg: Color,
}

impl ThemeColors {
    /// 根据样式链接生成配色
    pub fn from_links(links: &StylesheetLinks) -> Self {
        let theme = skin_rgb(links.current(StylesheetKind::Theme));
        let layout = skin_rgb(links.current(StylesheetKind::Layout));
        let (r, g, b) = theme;

        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(r, g, b),
            highlight: Color::Rgb(r, g, b),
            highlight_fg: contrast(theme),
            selected_bg: darken(theme, 60),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            menu_bg: darken(layout, 35),
            menu_fg: Color::Rgb(230, 230, 230),
            menu_active: {
                let (r, g, b) = layout;
                Color::Rgb(r, g, b)
            },
            badge_bg: Color::Rgb(r, g, b),
            badge_fg: contrast(theme),
        }
    }

    /// 边框样式
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// 标题栏 / 状态栏样式
    pub fn bar(&self) -> Style {
        Style::default().bg(self.highlight).fg(self.highlight_fg)
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_sidebar_core::types::MenuAction;

    #[test]
    fn theme_action_changes_accent_color() {
        let mut links = StylesheetLinks::default();
        let before = ThemeColors::from_links(&links);

        links.apply(&MenuAction::ChangeTheme("teal".into()));
        let after = ThemeColors::from_links(&links);

        assert_eq!(after.highlight, Color::Rgb(0, 150, 136));
        assert_ne!(before.highlight, after.highlight);
        assert_eq!(before.menu_bg, after.menu_bg, "layout untouched");
    }

    #[test]
    fn special_layout_changes_menu_background() {
        let mut links = StylesheetLinks::default();
        links.apply(&MenuAction::ChangeLayout("storm".into()));
        assert_eq!(ThemeColors::from_links(&links).menu_active, Color::Rgb(33, 37, 41));
    }

    #[test]
    fn unknown_skin_falls_back_to_default_palette() {
        let mut links = StylesheetLinks::default();
        links.apply(&MenuAction::ChangeTheme("no-such-theme".into()));
        assert_eq!(
            ThemeColors::from_links(&links),
            ThemeColors::from_links(&StylesheetLinks::default())
        );
    }

    #[test]
    fn light_accents_use_dark_text() {
        assert_eq!(contrast((255, 235, 59)), Color::Black);
        assert_eq!(contrast((63, 81, 181)), Color::White);
    }
}
