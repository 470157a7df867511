//! 整棵菜单树的激活状态
//!
//! 与菜单树平行的一组 [`SubmenuState`]，以索引存放在一个 arena 中：
//! 每个层级记录自己在菜单树中的路径和子层级的 [`LevelId`]，
//! 不保存指向父级的引用。菜单树整体重建时，激活状态也随之重建。

use crate::services::submenu::{ClickOutcome, ItemEvent, SubmenuState};
use crate::traits::ActionHandler;
use crate::types::{LayoutContext, MenuNode};

/// 层级索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelId(usize);

impl LevelId {
    /// 顶层列表
    pub const ROOT: LevelId = LevelId(0);
}

#[derive(Debug, Clone)]
struct Level {
    state: SubmenuState,
    /// 从顶层到该层级所属节点的索引路径，顶层为空
    path: Vec<usize>,
    /// 与该层级子项一一对应，有子节点的项才有子层级
    children: Vec<Option<LevelId>>,
}

/// 渲染用的一行菜单项
#[derive(Debug, Clone, Copy)]
pub struct MenuRow<'a> {
    /// 所在层级
    pub level: LevelId,
    /// 在所在层级中的索引
    pub index: usize,
    /// 嵌套深度，顶层为 0
    pub depth: usize,
    /// 是否激活
    pub active: bool,
    pub node: &'a MenuNode,
}

/// 菜单树激活状态
#[derive(Debug, Clone)]
pub struct MenuActivation {
    levels: Vec<Level>,
}

impl MenuActivation {
    /// 为菜单树建立激活状态，所有层级初始为收起
    pub fn build(model: &[MenuNode]) -> Self {
        let mut activation = Self { levels: Vec::new() };
        activation.push_level(model, Vec::new(), true);
        activation.refresh_visibility(model);
        activation
    }

    /// 菜单树替换后重建激活状态
    ///
    /// 顶层列表项数不变时沿用顶层的激活项，子层级全部重新开始。
    #[must_use]
    pub fn rebuild(&self, model: &[MenuNode]) -> Self {
        let mut next = Self::build(model);
        if let (Some(previous), Some(root)) = (self.levels.first(), next.levels.first_mut()) {
            if previous.children.len() == root.children.len() {
                root.state.carry_active_from(&previous.state);
            }
        }
        next.refresh_visibility(model);
        next
    }

    fn push_level(&mut self, items: &[MenuNode], path: Vec<usize>, root: bool) -> LevelId {
        let id = LevelId(self.levels.len());
        self.levels.push(Level {
            state: SubmenuState::new(root, root),
            path: path.clone(),
            children: vec![None; items.len()],
        });

        for (i, node) in items.iter().enumerate() {
            if node.has_children() {
                let mut child_path = path.clone();
                child_path.push(i);
                let child = self.push_level(&node.children, child_path, false);
                self.levels[id.0].children[i] = Some(child);
            }
        }

        id
    }

    /// 层级数量
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, id: LevelId) -> Option<&SubmenuState> {
        self.levels.get(id.0).map(|level| &level.state)
    }

    /// 子项 `index` 展开后的子层级
    pub fn child_level(&self, id: LevelId, index: usize) -> Option<LevelId> {
        self.levels.get(id.0)?.children.get(index).copied().flatten()
    }

    /// 层级对应的子项列表
    pub fn items<'a>(&self, model: &'a [MenuNode], id: LevelId) -> Option<&'a [MenuNode]> {
        let level = self.levels.get(id.0)?;
        let mut items = model;
        for &i in &level.path {
            items = &items.get(i)?.children;
        }
        Some(items)
    }

    pub fn is_active(&self, model: &[MenuNode], id: LevelId, index: usize) -> bool {
        match (self.level(id), self.items(model, id)) {
            (Some(state), Some(items)) => state.is_active(items, index),
            _ => false,
        }
    }

    /// 点击某层级的子项
    ///
    /// 索引越界时不做任何处理。
    pub fn click(
        &mut self,
        model: &[MenuNode],
        id: LevelId,
        index: usize,
        ctx: &mut LayoutContext,
        handler: &mut dyn ActionHandler,
    ) -> ClickOutcome {
        let Some(node) = self.items(model, id).and_then(|items| items.get(index)) else {
            log::debug!("Ignoring click on missing menu item {index} of level {id:?}");
            return ClickOutcome::default();
        };

        let mut event = ItemEvent::new();
        let outcome = self.levels[id.0]
            .state
            .on_item_click(index, node, &mut event, ctx, handler);
        self.refresh_visibility(model);
        outcome
    }

    /// 鼠标进入某层级的子项
    pub fn mouse_enter(&mut self, model: &[MenuNode], id: LevelId, index: usize, ctx: &LayoutContext) {
        if let Some(level) = self.levels.get_mut(id.0) {
            level.state.on_mouse_enter(index, ctx);
            self.refresh_visibility(model);
        }
    }

    /// 向所有层级广播重置信号，每个层级独立处理
    pub fn broadcast_reset(&mut self, model: &[MenuNode], reset: bool, ctx: &LayoutContext) {
        for level in &mut self.levels {
            level.state.set_reset(reset, ctx);
        }
        self.refresh_visibility(model);
    }

    /// 重新计算每个层级的可见性：父级可见且父级中对应子项激活
    fn refresh_visibility(&mut self, model: &[MenuNode]) {
        if self.levels.is_empty() {
            return;
        }
        let mut stack = vec![(LevelId::ROOT, true)];
        while let Some((id, visible)) = stack.pop() {
            self.levels[id.0].state.set_visible(visible);
            let Some(items) = self.items(model, id) else {
                continue;
            };
            let state = &self.levels[id.0].state;
            for (i, child) in self.levels[id.0].children.iter().enumerate() {
                if let Some(child) = child {
                    stack.push((*child, visible && state.is_active(items, i)));
                }
            }
        }
    }

    /// 按显示顺序展开所有可见的菜单项
    pub fn visible_rows<'a>(&self, model: &'a [MenuNode]) -> Vec<MenuRow<'a>> {
        let mut rows = Vec::new();
        if !self.levels.is_empty() {
            self.collect_rows(model, LevelId::ROOT, 0, &mut rows);
        }
        rows
    }

    /// 指定层级自身可见的菜单项，不包含展开的子层级
    pub fn level_rows<'a>(&self, model: &'a [MenuNode], id: LevelId, depth: usize) -> Vec<MenuRow<'a>> {
        let (Some(level), Some(items)) = (self.levels.get(id.0), self.items(model, id)) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .map(|(index, node)| MenuRow {
                level: id,
                index,
                depth,
                active: level.state.is_active(items, index),
                node,
            })
            .collect()
    }

    fn collect_rows<'a>(
        &self,
        model: &'a [MenuNode],
        id: LevelId,
        depth: usize,
        rows: &mut Vec<MenuRow<'a>>,
    ) {
        for row in self.level_rows(model, id, depth) {
            rows.push(row);
            if row.active {
                if let Some(child) = self.child_level(id, row.index) {
                    self.collect_rows(model, child, depth + 1, rows);
                }
            }
        }
    }

    /// 子层级的有效深度展开（横向菜单的下拉部分）
    pub fn subtree_rows<'a>(&self, model: &'a [MenuNode], id: LevelId, depth: usize) -> Vec<MenuRow<'a>> {
        let mut rows = Vec::new();
        self.collect_rows(model, id, depth, &mut rows);
        rows
    }
}
