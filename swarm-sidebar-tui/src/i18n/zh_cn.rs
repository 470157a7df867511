//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, FaqTexts, HelpActionTexts, HelpTexts, HintTexts, HomeTexts, KeyNames,
    MenuModeTexts, PoolsTexts, SettingsTexts, SidebarTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Swarm 管理器",
        loading: "加载中...",
        no_data: "暂无数据",
        never: "从未",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            tab: "Tab",
            esc: "Esc",
            up_down: "↑↓",
            left_right: "←→",
        },
        navigate: "导航",
        open: "打开",
        switch_panel: "切换面板",
        refresh: "刷新",
        menu_mode: "菜单模式",
        change: "修改",
        help: "帮助",
        quit: "退出",
    },

    // ========================================================================
    // 侧边栏
    // ========================================================================
    sidebar: SidebarTexts {
        title: "菜单",
        loading: "正在等待资源池列表...",
        empty: "没有菜单项",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    home: HomeTexts {
        title: "主页",
        welcome: "欢迎使用 Swarm 管理器",
        description: "从侧边栏选择资源池，或在 Colors 下切换布局和主题。",
        pool_count: "资源池",
        last_update: "上次更新",
        menu_mode: "菜单模式",
        device: "设备",
        layout: "布局",
        theme: "主题",
    },
    pools: PoolsTexts {
        all_title: "全部生态",
        detail_title: "资源池",
        col_id: "ID",
        col_name: "名称",
        col_route: "路由",
        empty: "后端没有返回任何资源池",
        not_found: "最新的资源池列表中没有该资源池",
    },
    faq: FaqTexts {
        title: "常见问题",
        entries: &[
            (
                "资源池列表从哪里来？",
                "每个刷新间隔（默认 30 秒）从后端拉取一次，按 Alt+r 可立即刷新。",
            ),
            (
                "为什么刷新后菜单没有变化？",
                "只有资源池列表与上一次不同时才会重建菜单。",
            ),
            (
                "如何修改外观？",
                "在侧边栏打开 Colors，在 Layout Palette 下选择布局，或在 Themes 下选择主题。",
            ),
            (
                "菜单模式有哪些？",
                "Static 固定在左侧，Overlay 按需弹出，Horizontal 显示在顶部。",
            ),
        ],
    },
    settings: SettingsTexts {
        title: "设置",
        menu_mode: "菜单模式",
        language: "语言",
        modes: MenuModeTexts {
            static_mode: "固定",
            overlay: "浮层",
            horizontal: "横向",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "就绪",
        refreshing: "正在刷新资源池列表...",
        menu_updated: "资源池列表已更新",
        menu_mode_changed: "菜单模式",
        language_changed: "语言",
        layout_changed: "布局",
        theme_changed: "主题",
        external_link: "外部链接",
        unknown_route: "未知路由",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        close_hint: "按 Esc 或 ? 关闭",
        actions: HelpActionTexts {
            move_up_down: "移动选择",
            open_item: "打开 / 展开菜单项",
            switch_panel: "在菜单和内容之间切换",
            refresh: "刷新资源池列表",
            cycle_menu_mode: "切换菜单模式",
            settings: "打开设置",
            back_close: "返回 / 关闭菜单",
            mouse: "悬停或点击菜单项",
            quit: "退出",
        },
    },
};
