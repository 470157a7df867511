//! 页面状态定义
//!
//! 页面与菜单路由一一对应，路由字符串是页面的唯一标识（也是持久化的内容）。

use swarm_sidebar_core::services::menu_catalog::{ALL_POOLS_ROUTE, FAQ_ROUTE};

use crate::i18n::t;

/// 设置页路由
pub const SETTINGS_ROUTE: &str = "/settings";
/// 主页路由
pub const HOME_ROUTE: &str = "/";

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 全部资源池
    AllPools,
    /// 单个资源池
    Pool { id: String },
    /// 常见问题
    Faq,
    /// 设置
    Settings,
}

impl Page {
    /// 从路由解析页面，前导 `/` 可有可无
    pub fn from_route(route: &str) -> Option<Page> {
        let path = route.trim().trim_start_matches('/');
        match path {
            "" | "home" => Some(Page::Home),
            "faq" => Some(Page::Faq),
            "settings" => Some(Page::Settings),
            "pool/all" => Some(Page::AllPools),
            _ => {
                let id = path.strip_prefix("pool/")?;
                if id.is_empty() || id.contains('/') {
                    None
                } else {
                    Some(Page::Pool { id: id.to_string() })
                }
            }
        }
    }

    /// 页面对应的路由
    pub fn route(&self) -> String {
        match self {
            Page::Home => HOME_ROUTE.to_string(),
            Page::AllPools => ALL_POOLS_ROUTE.to_string(),
            Page::Pool { id } => format!("pool/{id}"),
            Page::Faq => FAQ_ROUTE.to_string(),
            Page::Settings => SETTINGS_ROUTE.to_string(),
        }
    }

    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        let texts = t();
        match self {
            Page::Home => texts.home.title,
            Page::AllPools => texts.pools.all_title,
            Page::Pool { .. } => texts.pools.detail_title,
            Page::Faq => texts.faq.title,
            Page::Settings => texts.settings.title,
        }
    }

    /// 是否是详情页面（Esc 返回列表）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::Pool { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_routes_map_to_pages() {
        assert_eq!(Page::from_route("/pool/all"), Some(Page::AllPools));
        assert_eq!(Page::from_route("/faq"), Some(Page::Faq));
        assert_eq!(
            Page::from_route("pool/a"),
            Some(Page::Pool { id: "a".to_string() })
        );
        assert_eq!(Page::from_route("/"), Some(Page::Home));
    }

    #[test]
    fn unknown_routes_are_rejected() {
        assert_eq!(Page::from_route("pool/"), None);
        assert_eq!(Page::from_route("pool/a/b"), None);
        assert_eq!(Page::from_route("/dashboard"), None);
    }

    #[test]
    fn route_round_trips() {
        for page in [
            Page::Home,
            Page::AllPools,
            Page::Pool { id: "x1".to_string() },
            Page::Faq,
            Page::Settings,
        ] {
            assert_eq!(Page::from_route(&page.route()), Some(page));
        }
    }
}
