//! 界面文本（en-US / zh-CN）
//!
//! 菜单项标签来自数据（资源池名称、皮肤名称），不做翻译；
//! 这里只覆盖标题栏、页面、状态栏和帮助窗口的文本。

use std::sync::atomic::{AtomicU8, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::ZhCn]
    }

    /// 以该语言自身书写的名称，用于设置页
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }

    /// BCP 47 语言代码，与 config.toml 中的 `language` 对应
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 解析语言代码，也接受 `en` / `zh` 简写
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        match self {
            Language::EnUs => 0,
            Language::ZhCn => 1,
        }
    }

    #[must_use]
    pub fn next(self) -> Language {
        let all = Self::all();
        all[(usize::from(self.index()) + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(self) -> Language {
        let all = Self::all();
        all[(usize::from(self.index()) + all.len() - 1) % all.len()]
    }
}

/// 界面语言，只在 UI 线程切换
static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(0);

/// 当前语言的文本表，如 `t().sidebar.title`
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}
