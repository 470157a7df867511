//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, FaqTexts, HelpActionTexts, HelpTexts, HintTexts, HomeTexts, KeyNames,
    MenuModeTexts, PoolsTexts, SettingsTexts, SidebarTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Swarm Manager",
        loading: "Loading...",
        no_data: "No data",
        never: "never",
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
        navigate: "Navigate",
        open: "Open",
        switch_panel: "Switch panel",
        refresh: "Refresh",
        menu_mode: "Menu mode",
        change: "Change",
        help: "Help",
        quit: "Quit",
    },

    // ========================================================================
    // 侧边栏
    // ========================================================================
    sidebar: SidebarTexts {
        title: "Menu",
        loading: "Waiting for the pool list...",
        empty: "No menu items",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    home: HomeTexts {
        title: "Home",
        welcome: "Welcome to Swarm Manager",
        description: "Pick a pool from the sidebar, or switch layout and theme under Colors.",
        pool_count: "Pools",
        last_update: "Last update",
        menu_mode: "Menu mode",
        device: "Device",
        layout: "Layout",
        theme: "Theme",
    },
    pools: PoolsTexts {
        all_title: "All ecosystem",
        detail_title: "Pool",
        col_id: "ID",
        col_name: "Name",
        col_route: "Route",
        empty: "No pools reported by the backend",
        not_found: "This pool is not in the latest pool list",
    },
    faq: FaqTexts {
        title: "FAQ",
        entries: &[
            (
                "Where does the pool list come from?",
                "It is fetched from the backend every refresh interval (30 seconds by default). Press Alt+r to refresh now.",
            ),
            (
                "Why didn't the menu change after a refresh?",
                "The menu is only rebuilt when the pool list differs from the previous one.",
            ),
            (
                "How do I change the look?",
                "Open Colors in the sidebar, then pick a skin under Layout Palette or a theme under Themes.",
            ),
            (
                "What are the menu modes?",
                "Static keeps the menu on the left, Overlay shows it on demand and Horizontal moves it to the top bar.",
            ),
        ],
    },
    settings: SettingsTexts {
        title: "Settings",
        menu_mode: "Menu mode",
        language: "Language",
        modes: MenuModeTexts {
            static_mode: "Static",
            overlay: "Overlay",
            horizontal: "Horizontal",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        refreshing: "Refreshing pool list...",
        menu_updated: "Pool list updated",
        menu_mode_changed: "Menu mode",
        language_changed: "Language",
        layout_changed: "Layout",
        theme_changed: "Theme",
        external_link: "External link",
        unknown_route: "Unknown route",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        close_hint: "Press Esc or ? to close",
        actions: HelpActionTexts {
            move_up_down: "Move selection",
            open_item: "Open / expand menu item",
            switch_panel: "Switch between menu and content",
            refresh: "Refresh pool list",
            cycle_menu_mode: "Cycle menu mode",
            settings: "Open settings",
            back_close: "Back / close menu",
            mouse: "Hover and click menu items",
            quit: "Quit",
        },
    },
};
