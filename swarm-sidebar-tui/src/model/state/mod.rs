//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod settings;

pub use settings::{SettingItem, SettingsState};
