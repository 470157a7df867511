//! 菜单目录：固定菜单项与皮肤清单

use crate::types::{MenuAction, MenuNode, Pool};

/// "Flat" 布局皮肤：（显示名称，样式名）
pub const FLAT_LAYOUTS: &[(&str, &str)] = &[
    ("Blue Grey - Green", "bluegrey"),
    ("Indigo - Pink", "indigo"),
    ("Pink - Amber", "pink"),
    ("Deep Purple - Orange", "deeppurple"),
    ("Blue - Amber", "blue"),
    ("Light Blue - Blue Grey", "lightblue"),
    ("Cyan - Amber", "cyan"),
    ("Teal - Red", "teal"),
    ("Green - Brown", "green"),
    ("Light Green - Purple", "lightgreen"),
    ("Lime - Blue Grey", "lime"),
    ("Yellow - Teal", "yellow"),
    ("Amber - Pink", "amber"),
    ("Orange - Indigo", "orange"),
    ("Deep Orange - Cyan", "deeporange"),
    ("Brown - Cyan", "brown"),
    ("Grey - Indigo", "grey"),
];

/// "Special" 布局皮肤
pub const SPECIAL_LAYOUTS: &[(&str, &str)] = &[
    ("Reflection", "reflection"),
    ("Moody", "moody"),
    ("Cityscape", "cityscape"),
    ("Cloudy", "cloudy"),
    ("Storm", "storm"),
    ("Palm", "palm"),
    ("Flatiron", "flatiron"),
];

/// 主题
pub const THEMES: &[(&str, &str)] = &[
    ("Blue Grey - Green", "bluegrey"),
    ("Indigo - Pink", "indigo"),
    ("Pink - Amber", "pink"),
    ("Purple - Pink", "purple"),
    ("Deep Purple - Orange", "deeppurple"),
    ("Blue - Amber", "blue"),
    ("Light Blue - Blue Grey", "lightblue"),
    ("Cyan - Amber", "cyan"),
    ("Teal - Red", "teal"),
    ("Green - Brown", "green"),
    ("Light Green - Purple", "lightgreen"),
    ("Lime - Blue Grey", "lime"),
    ("Yellow - Teal", "yellow"),
    ("Amber - Pink", "amber"),
    ("Orange - Indigo", "orange"),
    ("Deep Orange - Cyan", "deeporange"),
    ("Brown - Cyan", "brown"),
    ("Grey - Indigo", "grey"),
];

pub const ALL_POOLS_ROUTE: &str = "/pool/all";
pub const FAQ_ROUTE: &str = "/faq";

pub const LABEL_FAQ: &str = "FAQ";
pub const LABEL_POOLS: &str = "Pools";
pub const LABEL_ALL_ECOSYSTEM: &str = "All ecosystem";
pub const LABEL_COLORS: &str = "Colors";
pub const LABEL_LAYOUT_PALETTE: &str = "Layout Palette";
pub const LABEL_THEMES: &str = "Themes";

/// 根据资源池列表构建完整菜单树
///
/// 顶层顺序：FAQ、Pools（常驻展开）、Colors。
pub fn build_menu(pools: &[Pool]) -> Vec<MenuNode> {
    vec![
        MenuNode::route(LABEL_FAQ, "fa-info", FAQ_ROUTE),
        MenuNode::submenu(LABEL_POOLS, "menu", pool_entries(pools)).with_expanded(true),
        MenuNode::submenu(
            LABEL_COLORS,
            "palette",
            vec![
                MenuNode::submenu(
                    LABEL_LAYOUT_PALETTE,
                    "palette",
                    vec![
                        MenuNode::submenu(
                            "Flat",
                            "format_paint",
                            skin_entries(FLAT_LAYOUTS, MenuAction::ChangeLayout),
                        ),
                        MenuNode::submenu(
                            "Special",
                            "format_paint",
                            skin_entries(SPECIAL_LAYOUTS, MenuAction::ChangeLayout),
                        ),
                    ],
                ),
                MenuNode::submenu(
                    LABEL_THEMES,
                    "brush",
                    skin_entries(THEMES, MenuAction::ChangeTheme),
                )
                .with_badge("5"),
            ],
        ),
    ]
}

/// "All ecosystem" 加上每个资源池一项，保持后端顺序
fn pool_entries(pools: &[Pool]) -> Vec<MenuNode> {
    std::iter::once(MenuNode::route(LABEL_ALL_ECOSYSTEM, "subject", ALL_POOLS_ROUTE))
        .chain(
            pools
                .iter()
                .map(|pool| MenuNode::route(&pool.display_name, "subject", pool.route())),
        )
        .collect()
}

fn skin_entries(skins: &[(&str, &str)], action: fn(String) -> MenuAction) -> Vec<MenuNode> {
    skins
        .iter()
        .map(|(label, name)| MenuNode::action(*label, "brush", action((*name).to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_order_is_faq_pools_colors() {
        let menu = build_menu(&[]);
        let labels: Vec<_> = menu.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec![LABEL_FAQ, LABEL_POOLS, LABEL_COLORS]);
        assert!(menu[1].expanded);
    }

    #[test]
    fn pools_section_follows_backend_order() {
        let pools = vec![Pool::new("b", "Beta"), Pool::new("a", "Alpha")];
        let menu = build_menu(&pools);
        let section = &menu[1];
        let routes: Vec<_> = section.children.iter().map(|n| n.route_path()).collect();
        assert_eq!(
            routes,
            vec![Some("/pool/all"), Some("pool/b"), Some("pool/a")]
        );
        assert_eq!(section.children[1].label, "Beta");
    }

    #[test]
    fn colors_catalog_has_every_skin() {
        let menu = build_menu(&[]);
        let colors = &menu[2];
        let palette = colors.child(LABEL_LAYOUT_PALETTE).unwrap();
        assert_eq!(palette.child("Flat").unwrap().children.len(), FLAT_LAYOUTS.len());
        assert_eq!(palette.child("Special").unwrap().children.len(), SPECIAL_LAYOUTS.len());

        let themes = colors.child(LABEL_THEMES).unwrap();
        assert_eq!(themes.badge.as_deref(), Some("5"));
        assert_eq!(themes.children.len(), THEMES.len());
        assert!(themes
            .children
            .iter()
            .all(|n| matches!(n.menu_action(), Some(MenuAction::ChangeTheme(_)))));
    }
}
