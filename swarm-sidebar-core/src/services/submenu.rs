//! 单个菜单层级的展开 / 收起状态机
//!
//! 每个层级只记录一个激活的子项索引，展开一个子项即隐式收起同级的其他子项。
//! 激活来源有两种：节点自身的 `expanded` 标志（常驻），以及用户点击切换。

use std::time::Duration;

use crate::traits::ActionHandler;
use crate::types::{LayoutContext, MenuNode, MenuTarget};

/// 子菜单高度动画结束后再同步滚动条
pub const SCROLL_RESYNC_DELAY: Duration = Duration::from_millis(450);

/// 触发点击的原始事件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEvent {
    default_prevented: bool,
}

impl ItemEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// 阻止默认导航
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// 点击后请求的导航
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// 内部路由跳转
    Route(String),
    /// 打开外部链接
    External {
        href: String,
        target: Option<String>,
    },
}

/// 点击处理结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// 节点被禁用时为 `false`
    pub handled: bool,
    /// 是否阻止了默认导航
    pub default_prevented: bool,
    /// 需要执行的导航
    pub navigation: Option<NavigationRequest>,
    /// 延迟多久后同步滚动视图
    pub scroll_resync: Option<Duration>,
}

/// 单个菜单层级的状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmenuState {
    root: bool,
    visible: bool,
    reset: bool,
    active_index: Option<usize>,
}

impl SubmenuState {
    /// 创建层级状态
    ///
    /// # Arguments
    /// * `root` - 是否为顶层列表
    /// * `visible` - 当前是否显示
    pub fn new(root: bool, visible: bool) -> Self {
        Self {
            root,
            visible,
            reset: false,
            active_index: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// 沿用另一个实例的激活项
    pub(crate) fn carry_active_from(&mut self, other: &SubmenuState) {
        self.active_index = other.active_index;
    }

    pub fn reset(&self) -> bool {
        self.reset
    }

    /// 子项 `index` 是否处于激活（展开）状态
    pub fn is_active(&self, items: &[MenuNode], index: usize) -> bool {
        self.active_index == Some(index) || items.get(index).is_some_and(|node| node.expanded)
    }

    /// 处理子项点击
    pub fn on_item_click(
        &mut self,
        index: usize,
        node: &MenuNode,
        event: &mut ItemEvent,
        ctx: &mut LayoutContext,
        handler: &mut dyn ActionHandler,
    ) -> ClickOutcome {
        if self.root {
            ctx.menu_hover_active = !ctx.menu_hover_active;
            event.prevent_default();
        }

        // 禁用项不做任何处理
        if node.disabled {
            event.prevent_default();
            return ClickOutcome {
                handled: false,
                default_prevented: true,
                ..ClickOutcome::default()
            };
        }

        // 激活当前项，同时让同级已激活的项失活
        if node.target.is_some() || node.has_children() {
            self.active_index = if self.active_index == Some(index) {
                None
            } else {
                Some(index)
            };
        }

        if let Some(action) = node.menu_action() {
            handler.invoke(action, node, event);
        }

        let mut scroll_resync = None;
        if node.has_children() || (node.url().is_none() && node.route_path().is_none()) {
            scroll_resync = Some(SCROLL_RESYNC_DELAY);
            event.prevent_default();
        }

        // 叶子节点：收起菜单
        if !node.has_children() {
            if ctx.is_mobile() {
                ctx.sidebar_active = false;
                ctx.mobile_menu_active = false;
            }
            ctx.reset_menu = ctx.is_horizontal();
            ctx.menu_hover_active = !ctx.menu_hover_active;
        }

        ClickOutcome {
            handled: true,
            default_prevented: event.is_default_prevented(),
            navigation: navigation_for(node, event),
            scroll_resync,
        }
    }

    /// 鼠标进入子项：仅桌面横向菜单的顶层在悬停模式下展开
    pub fn on_mouse_enter(&mut self, index: usize, ctx: &LayoutContext) {
        if self.root
            && ctx.menu_hover_active
            && ctx.is_horizontal()
            && !ctx.is_mobile()
            && !ctx.is_tablet()
        {
            self.active_index = Some(index);
        }
    }

    /// 接收父级传下的重置信号
    pub fn set_reset(&mut self, reset: bool, ctx: &LayoutContext) {
        self.reset = reset;

        if self.reset && ctx.reset_collapses() {
            self.active_index = None;
        }
    }
}

/// 路由链接总会跳转，外部链接受默认行为控制
fn navigation_for(node: &MenuNode, event: &ItemEvent) -> Option<NavigationRequest> {
    match &node.target {
        Some(MenuTarget::Route(route)) => Some(NavigationRequest::Route(route.clone())),
        Some(MenuTarget::Url { href, target }) if !event.is_default_prevented() => {
            Some(NavigationRequest::External {
                href: href.clone(),
                target: target.clone(),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingActionHandler;
    use crate::types::{DeviceClass, MenuAction, MenuMode};

    fn items() -> Vec<MenuNode> {
        vec![
            MenuNode::route("FAQ", "fa-info", "/faq"),
            MenuNode::submenu("Pools", "menu", vec![MenuNode::route("All", "subject", "/pool/all")]),
            MenuNode::action("Teal", "brush", MenuAction::ChangeTheme("teal".into())),
            MenuNode::route("Locked", "lock", "/locked").with_disabled(true),
            MenuNode::new("Label", "label"),
            MenuNode::new("Docs", "link").with_target(MenuTarget::Url {
                href: "https://example.org".into(),
                target: None,
            }),
            MenuNode::action("Locked Teal", "brush", MenuAction::ChangeTheme("teal".into()))
                .with_disabled(true),
        ]
    }

    fn click(
        state: &mut SubmenuState,
        items: &[MenuNode],
        index: usize,
        ctx: &mut LayoutContext,
        handler: &mut RecordingActionHandler,
    ) -> ClickOutcome {
        let mut event = ItemEvent::new();
        state.on_item_click(index, &items[index], &mut event, ctx, handler)
    }

    #[test]
    fn click_toggles_active_index() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        click(&mut state, &items, 1, &mut ctx, &mut handler);
        assert_eq!(state.active_index(), Some(1));
        assert!(state.is_active(&items, 1));

        click(&mut state, &items, 1, &mut ctx, &mut handler);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn clicking_a_sibling_moves_the_single_active_index() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        click(&mut state, &items, 1, &mut ctx, &mut handler);
        click(&mut state, &items, 0, &mut ctx, &mut handler);
        assert_eq!(state.active_index(), Some(0));
        assert!(!state.is_active(&items, 1));
    }

    #[test]
    fn expanded_node_is_always_active() {
        let mut items = items();
        items[1].expanded = true;
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        assert!(state.is_active(&items, 1));
        click(&mut state, &items, 1, &mut ctx, &mut handler);
        click(&mut state, &items, 1, &mut ctx, &mut handler);
        assert_eq!(state.active_index(), None);
        assert!(state.is_active(&items, 1));
        assert!(!state.is_active(&items, 99));
    }

    #[test]
    fn disabled_node_changes_nothing() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        click(&mut state, &items, 0, &mut ctx, &mut handler);
        let before = ctx.clone();
        let outcome = click(&mut state, &items, 3, &mut ctx, &mut handler);

        assert!(!outcome.handled);
        assert!(outcome.default_prevented);
        assert!(outcome.navigation.is_none());
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(ctx, before);
        assert!(handler.invoked.is_empty());
    }

    #[test]
    fn disabled_action_is_never_invoked() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        click(&mut state, &items, 1, &mut ctx, &mut handler);
        let before = ctx.clone();
        let outcome = click(&mut state, &items, 6, &mut ctx, &mut handler);

        assert!(!outcome.handled);
        assert!(outcome.scroll_resync.is_none());
        assert!(handler.invoked.is_empty());
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(ctx, before);
    }

    #[test]
    fn disabled_root_item_only_toggles_hover() {
        let items = items();
        let mut root = SubmenuState::new(true, true);
        let mut ctx = LayoutContext::new(MenuMode::Horizontal, DeviceClass::Desktop);
        let mut handler = RecordingActionHandler::default();

        let outcome = click(&mut root, &items, 6, &mut ctx, &mut handler);
        assert!(!outcome.handled);
        assert!(outcome.default_prevented);
        assert!(ctx.menu_hover_active);
        assert!(!ctx.reset_menu);
        assert_eq!(root.active_index(), None);
        assert!(handler.invoked.is_empty());

        click(&mut root, &items, 3, &mut ctx, &mut handler);
        assert!(!ctx.menu_hover_active);
        assert_eq!(root.active_index(), None);
    }

    #[test]
    fn action_is_invoked_synchronously() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        let outcome = click(&mut state, &items, 2, &mut ctx, &mut handler);
        assert_eq!(handler.invoked, vec![(MenuAction::ChangeTheme("teal".into()), "Teal".to_string())]);
        assert!(outcome.default_prevented);
        assert_eq!(outcome.scroll_resync, Some(SCROLL_RESYNC_DELAY));
        assert!(outcome.navigation.is_none());
    }

    #[test]
    fn plain_label_does_not_activate_but_prevents_navigation() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut ctx = LayoutContext::default();
        let mut handler = RecordingActionHandler::default();

        let outcome = click(&mut state, &items, 4, &mut ctx, &mut handler);
        assert_eq!(state.active_index(), None);
        assert!(outcome.default_prevented);
    }

    #[test]
    fn route_leaf_navigates_and_sets_reset_by_orientation() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut handler = RecordingActionHandler::default();

        let mut ctx = LayoutContext::new(MenuMode::Horizontal, DeviceClass::Desktop);
        let outcome = click(&mut state, &items, 0, &mut ctx, &mut handler);
        assert_eq!(outcome.navigation, Some(NavigationRequest::Route("/faq".into())));
        assert!(outcome.scroll_resync.is_none());
        assert!(ctx.reset_menu);
        assert!(ctx.menu_hover_active);

        let mut ctx = LayoutContext::new(MenuMode::Static, DeviceClass::Desktop);
        ctx.reset_menu = true;
        click(&mut state, &items, 0, &mut ctx, &mut handler);
        assert!(!ctx.reset_menu);
    }

    #[test]
    fn leaf_click_closes_mobile_sidebar() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut handler = RecordingActionHandler::default();
        let mut ctx = LayoutContext::new(MenuMode::Static, DeviceClass::Mobile);
        ctx.sidebar_active = true;
        ctx.mobile_menu_active = true;

        click(&mut state, &items, 0, &mut ctx, &mut handler);
        assert!(!ctx.sidebar_active);
        assert!(!ctx.mobile_menu_active);
    }

    #[test]
    fn submenu_click_keeps_sidebar_open() {
        let items = items();
        let mut state = SubmenuState::new(false, true);
        let mut handler = RecordingActionHandler::default();
        let mut ctx = LayoutContext::new(MenuMode::Static, DeviceClass::Mobile);
        ctx.sidebar_active = true;

        let outcome = click(&mut state, &items, 1, &mut ctx, &mut handler);
        assert!(ctx.sidebar_active);
        assert_eq!(outcome.scroll_resync, Some(SCROLL_RESYNC_DELAY));
    }

    #[test]
    fn root_click_toggles_hover_and_blocks_external_links() {
        let items = items();
        let mut root = SubmenuState::new(true, true);
        let mut handler = RecordingActionHandler::default();
        let mut ctx = LayoutContext::new(MenuMode::Static, DeviceClass::Desktop);

        // 子菜单：根层级翻转一次
        click(&mut root, &items, 1, &mut ctx, &mut handler);
        assert!(ctx.menu_hover_active);

        // 叶子：根层级与叶子各翻转一次
        let outcome = click(&mut root, &items, 5, &mut ctx, &mut handler);
        assert!(ctx.menu_hover_active);
        assert!(outcome.navigation.is_none());

        let mut nested = SubmenuState::new(false, true);
        let outcome = click(&mut nested, &items, 5, &mut ctx, &mut handler);
        assert!(matches!(outcome.navigation, Some(NavigationRequest::External { .. })));
    }

    #[test]
    fn mouse_enter_only_expands_desktop_horizontal_root() {
        let mut ctx = LayoutContext::new(MenuMode::Horizontal, DeviceClass::Desktop);
        ctx.menu_hover_active = true;

        let mut root = SubmenuState::new(true, true);
        root.on_mouse_enter(2, &ctx);
        assert_eq!(root.active_index(), Some(2));

        let mut nested = SubmenuState::new(false, true);
        nested.on_mouse_enter(2, &ctx);
        assert_eq!(nested.active_index(), None);

        let mut root = SubmenuState::new(true, true);
        ctx.device = DeviceClass::Tablet;
        root.on_mouse_enter(1, &ctx);
        assert_eq!(root.active_index(), None);

        ctx.device = DeviceClass::Desktop;
        ctx.menu_hover_active = false;
        root.on_mouse_enter(1, &ctx);
        assert_eq!(root.active_index(), None);

        ctx.menu_hover_active = true;
        ctx.menu_mode = MenuMode::Static;
        root.on_mouse_enter(1, &ctx);
        assert_eq!(root.active_index(), None);
    }

    #[test]
    fn reset_collapses_in_horizontal_and_overlay_only() {
        let items = items();
        let mut handler = RecordingActionHandler::default();

        for (mode, collapses) in [
            (MenuMode::Horizontal, true),
            (MenuMode::Overlay, true),
            (MenuMode::Static, false),
        ] {
            let mut ctx = LayoutContext::new(mode, DeviceClass::Desktop);
            let mut state = SubmenuState::new(false, true);
            click(&mut state, &items, 1, &mut ctx, &mut handler);

            state.set_reset(true, &ctx);
            assert!(state.reset());
            assert_eq!(state.active_index().is_none(), collapses, "{mode:?}");
        }
    }

    #[test]
    fn reset_false_keeps_active_index() {
        let items = items();
        let mut handler = RecordingActionHandler::default();
        let mut ctx = LayoutContext::new(MenuMode::Horizontal, DeviceClass::Desktop);
        let mut state = SubmenuState::new(false, true);
        click(&mut state, &items, 1, &mut ctx, &mut handler);

        state.set_reset(false, &ctx);
        assert_eq!(state.active_index(), Some(1));
    }
}
