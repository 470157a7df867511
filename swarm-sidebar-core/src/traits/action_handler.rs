//! 菜单动作执行者

use crate::services::ItemEvent;
use crate::types::{MenuAction, MenuNode, StylesheetLinks};

/// 执行叶子节点上的动作
///
/// 点击时同步调用，参数为动作、所属节点与原始事件。
pub trait ActionHandler {
    fn invoke(&mut self, action: &MenuAction, node: &MenuNode, event: &ItemEvent);
}

impl ActionHandler for StylesheetLinks {
    fn invoke(&mut self, action: &MenuAction, node: &MenuNode, _event: &ItemEvent) {
        log::debug!(
            "Applying {} '{}' from menu item '{}'",
            action.stylesheet_kind(),
            action.name(),
            node.label
        );
        self.apply(action);
    }
}
