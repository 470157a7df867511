//! 侧边栏状态
//!
//! 激活状态（展开 / 收起）由 core 的 MenuActivation 管理，
//! 这里只额外记录键盘光标与滚动位置。

use swarm_sidebar_core::types::MenuNode;
use swarm_sidebar_core::{LevelId, MenuActivation, MenuRow};

/// 侧边栏状态
#[derive(Debug, Clone)]
pub struct SidebarState {
    /// 菜单树的激活状态
    pub activation: MenuActivation,
    /// 激活状态对应的菜单树版本
    pub revision: u64,
    /// 光标所在的可见行
    pub cursor: usize,
    /// 第一条显示的可见行
    pub scroll_offset: usize,
    /// 上一次向各层级广播的重置标志
    pub last_reset: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            activation: MenuActivation::build(&[]),
            revision: 0,
            cursor: 0,
            scroll_offset: 0,
            last_reset: false,
        }
    }

    /// 菜单树重建后，重新建立激活状态（顶层展开项保留）
    pub fn rebuild(&mut self, model: &[MenuNode], revision: u64) {
        self.activation = self.activation.rebuild(model);
        self.revision = revision;
        self.last_reset = false;
        self.clamp_cursor(model);
    }

    /// 当前可见的菜单行
    pub fn rows<'a>(&self, model: &'a [MenuNode]) -> Vec<MenuRow<'a>> {
        self.activation.visible_rows(model)
    }

    /// 光标所在行的（层级，索引）
    pub fn selected(&self, model: &[MenuNode]) -> Option<(LevelId, usize)> {
        self.rows(model)
            .get(self.cursor)
            .map(|row| (row.level, row.index))
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, model: &[MenuNode]) {
        let count = self.rows(model).len();
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// 把光标移到指定菜单项（不可见时不移动）
    pub fn select(&mut self, model: &[MenuNode], level: LevelId, index: usize) {
        if let Some(pos) = self
            .rows(model)
            .iter()
            .position(|row| row.level == level && row.index == index)
        {
            self.cursor = pos;
        }
    }

    /// 展开 / 收起后可见行数会变化，保证光标仍然有效
    pub fn clamp_cursor(&mut self, model: &[MenuNode]) {
        let count = self.rows(model).len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    /// 同步滚动位置，使光标落在高度为 `height` 的窗口内
    pub fn sync_scroll(&mut self, model: &[MenuNode], height: usize) {
        let count = self.rows(model).len();
        if height == 0 {
            self.scroll_offset = 0;
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(count.saturating_sub(height));
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_sidebar_core::services::menu_catalog::build_menu;
    use swarm_sidebar_core::types::{LayoutContext, Pool, StylesheetLinks};

    fn model() -> Vec<MenuNode> {
        build_menu(&[Pool::new("a", "Alpha"), Pool::new("b", "Beta")])
    }

    #[test]
    fn pools_are_visible_from_the_start() {
        let model = model();
        let mut sidebar = SidebarState::new();
        sidebar.rebuild(&model, 1);

        let labels: Vec<&str> = sidebar
            .rows(&model)
            .iter()
            .map(|row| row.node.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["FAQ", "Pools", "All ecosystem", "Alpha", "Beta", "Colors"]
        );
    }

    #[test]
    fn cursor_stays_inside_visible_rows() {
        let model = model();
        let mut sidebar = SidebarState::new();
        sidebar.rebuild(&model, 1);

        for _ in 0..20 {
            sidebar.select_next(&model);
        }
        assert_eq!(sidebar.cursor, 5);
        assert_eq!(
            sidebar.selected(&model).map(|(_, i)| i),
            Some(2),
            "Colors is the third root item"
        );

        sidebar.rebuild(&build_menu(&[]), 2);
        sidebar.select_previous();
        assert!(sidebar.cursor < sidebar.rows(&build_menu(&[])).len());
    }

    #[test]
    fn open_colors_branch_survives_a_pool_list_change() {
        let model = model();
        let mut sidebar = SidebarState::new();
        sidebar.rebuild(&model, 1);

        let mut ctx = LayoutContext::default();
        let mut handler = StylesheetLinks::default();
        sidebar
            .activation
            .click(&model, LevelId::ROOT, 2, &mut ctx, &mut handler);

        let changed = build_menu(&[Pool::new("c", "Gamma")]);
        sidebar.rebuild(&changed, 2);
        let labels: Vec<&str> = sidebar
            .rows(&changed)
            .iter()
            .map(|row| row.node.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["FAQ", "Pools", "All ecosystem", "Gamma", "Colors", "Layout Palette", "Themes"]
        );
    }

    #[test]
    fn scroll_follows_cursor() {
        let model = model();
        let mut sidebar = SidebarState::new();
        sidebar.rebuild(&model, 1);
        sidebar.cursor = 5;
        sidebar.sync_scroll(&model, 3);
        assert_eq!(sidebar.scroll_offset, 3);

        sidebar.cursor = 0;
        sidebar.sync_scroll(&model, 3);
        assert_eq!(sidebar.scroll_offset, 0);
    }
}
