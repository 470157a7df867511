//! 菜单树类型定义

use serde::{Deserialize, Serialize};

use super::StylesheetKind;

/// 叶子节点携带的动作
///
/// 以数据形式保存，由 [`crate::ActionHandler`] 执行，菜单树因此可以 `Clone` 与比较。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum MenuAction {
    /// 切换布局样式表
    ChangeLayout(String),
    /// 切换主题样式表
    ChangeTheme(String),
}

impl MenuAction {
    /// 动作作用的样式表类型
    #[must_use]
    pub fn stylesheet_kind(&self) -> StylesheetKind {
        match self {
            Self::ChangeLayout(_) => StylesheetKind::Layout,
            Self::ChangeTheme(_) => StylesheetKind::Theme,
        }
    }

    /// 皮肤名称
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ChangeLayout(name) | Self::ChangeTheme(name) => name,
        }
    }
}

/// 菜单节点的目标
///
/// 外部 URL、内部路由与动作三者互斥，由枚举保证。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MenuTarget {
    /// 内部路由
    Route(String),
    /// 外部链接
    Url {
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
    /// 点击时执行的动作
    Action(MenuAction),
}

/// 菜单节点
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// 显示文本
    pub label: String,
    /// 图标名称
    pub icon: String,
    /// 路由 / URL / 动作（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<MenuTarget>,
    /// 子节点，可与动作共存
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
    /// 徽标文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// 是否禁用
    #[serde(default)]
    pub disabled: bool,
    /// 是否常驻展开
    #[serde(default)]
    pub expanded: bool,
}

impl MenuNode {
    /// 创建一个没有目标的节点
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            ..Self::default()
        }
    }

    /// 创建一个指向内部路由的节点
    pub fn route(label: impl Into<String>, icon: impl Into<String>, route: impl Into<String>) -> Self {
        Self::new(label, icon).with_target(MenuTarget::Route(route.into()))
    }

    /// 创建一个执行动作的叶子节点
    pub fn action(label: impl Into<String>, icon: impl Into<String>, action: MenuAction) -> Self {
        Self::new(label, icon).with_target(MenuTarget::Action(action))
    }

    /// 创建一个子菜单节点
    pub fn submenu(
        label: impl Into<String>,
        icon: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            children,
            ..Self::new(label, icon)
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: MenuTarget) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 是否有子节点
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn route_path(&self) -> Option<&str> {
        match &self.target {
            Some(MenuTarget::Route(route)) => Some(route),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.target {
            Some(MenuTarget::Url { href, .. }) => Some(href),
            _ => None,
        }
    }

    pub fn menu_action(&self) -> Option<&MenuAction> {
        match &self.target {
            Some(MenuTarget::Action(action)) => Some(action),
            _ => None,
        }
    }

    /// 按标签查找直接子节点
    pub fn child(&self, label: &str) -> Option<&MenuNode> {
        self.children.iter().find(|c| c.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_accessors_are_exclusive() {
        let node = MenuNode::action("Teal", "brush", MenuAction::ChangeTheme("teal".into()));
        assert!(node.menu_action().is_some());
        assert!(node.route_path().is_none());
        assert!(node.url().is_none());

        let node = MenuNode::route("FAQ", "fa-info", "/faq");
        assert_eq!(node.route_path(), Some("/faq"));
        assert!(node.menu_action().is_none());
    }

    #[test]
    fn submenu_may_carry_an_action() {
        let node = MenuNode::submenu("Colors", "palette", vec![MenuNode::new("x", "y")])
            .with_target(MenuTarget::Action(MenuAction::ChangeLayout("moody".into())));
        assert!(node.has_children());
        assert_eq!(node.menu_action().map(MenuAction::name), Some("moody"));
    }
}
