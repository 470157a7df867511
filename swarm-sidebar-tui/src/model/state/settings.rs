//! 设置页面状态

use crate::i18n::Language;

/// 设置页的可调项，顺序即显示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    MenuMode,
    Language,
}

impl SettingItem {
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::MenuMode, SettingItem::Language]
    }

    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }
}

/// 设置页面状态
///
/// 菜单模式保存在 `App::layout` 中，这里不重复保存
#[derive(Debug, Default)]
pub struct SettingsState {
    pub selected_index: usize,
    /// 当前语言
    pub language: Language,
}

impl SettingsState {
    pub fn new(language: Language) -> Self {
        Self {
            selected_index: 0,
            language,
        }
    }

    pub fn select_previous(&mut self) {
        let count = SettingItem::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingItem::all().len();
    }

    /// 光标所在的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_around() {
        let mut settings = SettingsState::new(Language::EnUs);
        settings.select_previous();
        assert_eq!(settings.current_item(), Some(SettingItem::Language));
        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::MenuMode));
    }
}
