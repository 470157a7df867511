//! 应用主消息

use super::{ContentMessage, SidebarMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 侧边栏相关消息
    Sidebar(SidebarMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 返回上一页 / 关闭菜单
    GoBack,

    /// 立即刷新资源池列表
    Refresh,

    /// 切换到下一个菜单模式
    CycleMenuMode,

    /// 打开设置页
    OpenSettings,

    /// 显示 / 隐藏帮助
    ToggleHelp,

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 主循环每轮触发一次
    Tick,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
