//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 侧边栏菜单（横向模式下为顶部菜单栏）
    #[default]
    Sidebar,
    /// 内容面板
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Sidebar => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Sidebar,
        }
    }

    pub fn is_sidebar(self) -> bool {
        matches!(self, FocusPanel::Sidebar)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
