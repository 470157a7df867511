//! 应用主状态结构

use std::time::Instant;

use chrono::{DateTime, Local};
use swarm_sidebar_core::types::{DeviceClass, LayoutContext, StylesheetLinks};

use super::{FocusPanel, Page, SettingsState, SidebarState};
use crate::backend::{AppConfig, CoreService};
use crate::i18n::{self, Language};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 核心服务（菜单模型、路由历史）
    pub core: CoreService,

    /// 侧边栏状态
    pub sidebar: SidebarState,

    /// 布局模式与界面标志，点击时整体传给菜单
    pub layout: LayoutContext,

    /// 当前生效的布局 / 主题样式链接
    pub stylesheets: StylesheetLinks,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 资源池列表页的选中行
    pub pools_cursor: usize,

    /// 设置页面状态
    pub settings: SettingsState,

    /// 是否显示帮助
    pub show_help: bool,

    /// 到期后同步侧边栏滚动位置
    pub pending_scroll_resync: Option<Instant>,

    /// 菜单最近一次重建的时间
    pub last_update: Option<DateTime<Local>>,

    /// 终端尺寸（宽，高）
    pub viewport: (u16, u16),
}

impl App {
    /// 创建新的应用实例
    pub fn new(core: CoreService, config: &AppConfig) -> Self {
        let language = Language::from_code(&config.language).unwrap_or_default();
        i18n::set_language(language);

        let current_page = core
            .initial_route()
            .and_then(Page::from_route)
            .unwrap_or_default();

        Self {
            should_quit: false,
            focus: FocusPanel::Sidebar,
            core,
            sidebar: SidebarState::new(),
            layout: LayoutContext::new(config.menu_mode, DeviceClass::Desktop),
            stylesheets: StylesheetLinks::new(&config.layout, &config.theme),
            current_page,
            status_message: None,
            pools_cursor: 0,
            settings: SettingsState::new(language),
            show_help: false,
            pending_scroll_resync: None,
            last_update: None,
            viewport: (0, 0),
        }
    }

    /// 终端尺寸变化，重新判断设备类型
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        let device = DeviceClass::from_width(width);
        if device != self.layout.device {
            log::debug!("Device class changed to {device:?} ({width} columns)");
            self.layout.device = device;
        }
    }

    /// 侧边栏是否以纵向列表显示
    pub fn sidebar_visible(&self) -> bool {
        let ctx = &self.layout;
        if ctx.is_horizontal() && !ctx.is_mobile() {
            return false;
        }
        if ctx.is_overlay() {
            return ctx.sidebar_active;
        }
        if ctx.is_mobile() {
            return ctx.mobile_menu_active;
        }
        true
    }

    /// 是否以顶部菜单栏显示
    pub fn menubar_visible(&self) -> bool {
        self.layout.is_horizontal() && !self.layout.is_mobile()
    }

    /// 打开菜单（浮层 / 手机模式下需要手动打开）
    pub fn open_menu(&mut self) {
        if self.layout.is_overlay() {
            self.layout.sidebar_active = true;
        } else if self.layout.is_mobile() {
            self.layout.mobile_menu_active = true;
        }
    }

    /// 关闭浮层 / 手机菜单
    pub fn close_menu(&mut self) {
        self.layout.sidebar_active = false;
        self.layout.mobile_menu_active = false;
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
