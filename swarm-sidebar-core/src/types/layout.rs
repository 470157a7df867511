//! 布局模式与界面标志

use serde::{Deserialize, Serialize};

/// 菜单的呈现方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    /// 固定在左侧的纵向菜单
    #[default]
    Static,
    /// 浮层菜单，按需弹出
    Overlay,
    /// 顶部横向菜单，悬停展开
    Horizontal,
}

impl MenuMode {
    pub fn all() -> &'static [MenuMode] {
        &[MenuMode::Static, MenuMode::Overlay, MenuMode::Horizontal]
    }

    /// 循环切换到下一个模式
    #[must_use]
    pub fn next(self) -> MenuMode {
        match self {
            MenuMode::Static => MenuMode::Overlay,
            MenuMode::Overlay => MenuMode::Horizontal,
            MenuMode::Horizontal => MenuMode::Static,
        }
    }

    #[must_use]
    pub fn prev(self) -> MenuMode {
        match self {
            MenuMode::Static => MenuMode::Horizontal,
            MenuMode::Overlay => MenuMode::Static,
            MenuMode::Horizontal => MenuMode::Overlay,
        }
    }
}

/// 设备尺寸分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceClass {
    /// 手机宽度上限（列）
    pub const MOBILE_MAX_WIDTH: u16 = 59;
    /// 平板宽度上限（列）
    pub const TABLET_MAX_WIDTH: u16 = 99;

    /// 根据终端宽度判断设备类型
    #[must_use]
    pub fn from_width(width: u16) -> DeviceClass {
        if width <= Self::MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if width <= Self::TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// 菜单递归渲染时显式传递的布局上下文
///
/// 只读部分（模式、设备）描述当前布局，其余标志由菜单点击修改，
/// 由外层界面读取后决定侧边栏是否收起、是否广播重置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutContext {
    /// 菜单模式
    pub menu_mode: MenuMode,
    /// 设备类型
    pub device: DeviceClass,
    /// 横向菜单是否处于悬停展开状态
    pub menu_hover_active: bool,
    /// 侧边栏是否打开（浮层模式 / 手机）
    pub sidebar_active: bool,
    /// 手机菜单是否打开
    pub mobile_menu_active: bool,
    /// 向下广播的重置信号
    pub reset_menu: bool,
}

impl LayoutContext {
    pub fn new(menu_mode: MenuMode, device: DeviceClass) -> Self {
        Self {
            menu_mode,
            device,
            ..Self::default()
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.menu_mode == MenuMode::Horizontal
    }

    pub fn is_overlay(&self) -> bool {
        self.menu_mode == MenuMode::Overlay
    }

    pub fn is_mobile(&self) -> bool {
        self.device == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device == DeviceClass::Tablet
    }

    /// 重置信号是否会收起菜单层级
    pub fn reset_collapses(&self) -> bool {
        self.is_horizontal() || self.is_overlay()
    }
}
