//! 侧边栏消息

use swarm_sidebar_core::LevelId;

/// 侧边栏消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 点击光标所在项
    Activate,
    /// 鼠标点击菜单项
    Click { level: LevelId, index: usize },
    /// 鼠标进入菜单项
    Hover { level: LevelId, index: usize },
}
