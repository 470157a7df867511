//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `home.*`, `settings.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 菜单项本身（FAQ、Pools、皮肤名称等）来自菜单模型，不在此翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 侧边栏文本
    pub sidebar: SidebarTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 资源池页面文本
    pub pools: PoolsTexts,
    /// FAQ 页面文本
    pub faq: FaqTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub never: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作词
    pub navigate: &'static str,
    pub open: &'static str,
    pub switch_panel: &'static str,
    pub refresh: &'static str,
    pub menu_mode: &'static str,
    pub change: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub tab: &'static str,
    pub esc: &'static str,
    pub up_down: &'static str,
    pub left_right: &'static str,
}

// ============================================================================
// 侧边栏
// ============================================================================

pub struct SidebarTexts {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub title: &'static str,
    pub welcome: &'static str,
    pub description: &'static str,
    pub pool_count: &'static str,
    pub last_update: &'static str,
    pub menu_mode: &'static str,
    pub device: &'static str,
    pub layout: &'static str,
    pub theme: &'static str,
}

/// 资源池页面文本
pub struct PoolsTexts {
    pub all_title: &'static str,
    pub detail_title: &'static str,
    pub col_id: &'static str,
    pub col_name: &'static str,
    pub col_route: &'static str,
    pub empty: &'static str,
    pub not_found: &'static str,
}

/// FAQ 页面文本
pub struct FaqTexts {
    pub title: &'static str,
    /// （问题，回答）
    pub entries: &'static [(&'static str, &'static str)],
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub menu_mode: &'static str,
    pub language: &'static str,
    pub modes: MenuModeTexts,
}

/// 菜单模式名称
pub struct MenuModeTexts {
    pub static_mode: &'static str,
    pub overlay: &'static str,
    pub horizontal: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub ready: &'static str,
    pub refreshing: &'static str,
    pub menu_updated: &'static str,
    pub menu_mode_changed: &'static str,
    pub language_changed: &'static str,
    pub layout_changed: &'static str,
    pub theme_changed: &'static str,
    pub external_link: &'static str,
    pub unknown_route: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助弹窗快捷键动作描述
pub struct HelpActionTexts {
    pub move_up_down: &'static str,
    pub open_item: &'static str,
    pub switch_panel: &'static str,
    pub refresh: &'static str,
    pub cycle_menu_mode: &'static str,
    pub settings: &'static str,
    pub back_close: &'static str,
    pub mouse: &'static str,
    pub quit: &'static str,
}
