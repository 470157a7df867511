//! 样式表链接

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::MenuAction;

/// 样式表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetKind {
    Layout,
    Theme,
}

impl StylesheetKind {
    /// 对应的链接元素 ID
    #[must_use]
    pub fn link_id(self) -> &'static str {
        match self {
            Self::Layout => "layout-css",
            Self::Theme => "theme-css",
        }
    }

    /// 皮肤名称对应的样式表路径，不做名称校验
    #[must_use]
    pub fn href(self, name: &str) -> String {
        match self {
            Self::Layout => format!("assets/layout/css/layout-{name}.css"),
            Self::Theme => format!("assets/theme/theme-{name}.css"),
        }
    }

    /// 从样式表路径中取回皮肤名称
    #[must_use]
    pub fn name_from_href(self, href: &str) -> Option<&str> {
        let prefix = match self {
            Self::Layout => "assets/layout/css/layout-",
            Self::Theme => "assets/theme/theme-",
        };
        href.strip_prefix(prefix)?.strip_suffix(".css")
    }
}

impl fmt::Display for StylesheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => write!(f, "layout"),
            Self::Theme => write!(f, "theme"),
        }
    }
}

/// 文档中具名的样式表链接（`theme-css`、`layout-css`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetLinks {
    links: BTreeMap<String, String>,
}

impl StylesheetLinks {
    /// 默认皮肤
    pub const DEFAULT_LAYOUT: &'static str = "bluegrey";
    pub const DEFAULT_THEME: &'static str = "bluegrey";

    pub fn new(layout: &str, theme: &str) -> Self {
        let mut links = BTreeMap::new();
        links.insert(
            StylesheetKind::Layout.link_id().to_string(),
            StylesheetKind::Layout.href(layout),
        );
        links.insert(
            StylesheetKind::Theme.link_id().to_string(),
            StylesheetKind::Theme.href(theme),
        );
        Self { links }
    }

    /// 读取链接当前指向的路径
    pub fn href(&self, link_id: &str) -> Option<&str> {
        self.links.get(link_id).map(String::as_str)
    }

    /// 改写链接的目标路径，重复调用结果相同
    pub fn set_href(&mut self, link_id: &str, href: String) {
        self.links.insert(link_id.to_string(), href);
    }

    /// 执行菜单动作
    pub fn apply(&mut self, action: &MenuAction) {
        let kind = action.stylesheet_kind();
        self.set_href(kind.link_id(), kind.href(action.name()));
    }

    /// 当前使用的皮肤名称
    pub fn current(&self, kind: StylesheetKind) -> Option<&str> {
        self.href(kind.link_id())
            .and_then(|href| kind.name_from_href(href))
    }
}

impl Default for StylesheetLinks {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LAYOUT, Self::DEFAULT_THEME)
    }
}
